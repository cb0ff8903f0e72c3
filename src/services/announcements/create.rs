use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnnouncementService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    announcements::requests::CreateAnnouncementRequest,
    realtime::entities::{ChangeAction, ChangeCollection, ChangeEvent},
};
use crate::services::{internal_error, unauthorized, websocket::publish};
use crate::utils::validate::{ANNOUNCEMENT_MAX_LENGTH, validate_required_text};

pub async fn post_announcement(
    service: &AnnouncementService,
    request: &HttpRequest,
    course_id: i64,
    data: CreateAnnouncementRequest,
) -> ActixResult<HttpResponse> {
    let Some(author_id) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };

    if let Err(msg) = validate_required_text(&data.text, ANNOUNCEMENT_MAX_LENGTH, "Text") {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::AnnouncementInvalid, msg)));
    }

    let storage = service.get_storage(request)?;
    match storage
        .create_announcement(course_id, author_id, data.text)
        .await
    {
        Ok(announcement) => {
            publish::publish_to_course(
                request,
                &storage,
                course_id,
                author_id,
                ChangeEvent::new(ChangeCollection::Announcements, ChangeAction::Created)
                    .course(course_id),
            )
            .await;
            Ok(HttpResponse::Created().json(ApiResponse::success(
                announcement,
                "Announcement posted",
            )))
        }
        Err(e) => Ok(internal_error("Failed to post announcement", e)),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnnouncementService;
use crate::middlewares::RequireCourseAccess;
use crate::models::{
    ApiResponse, ErrorCode,
    realtime::entities::{ChangeAction, ChangeCollection, ChangeEvent},
};
use crate::services::{internal_error, websocket::publish};

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::AnnouncementNotFound,
        "Announcement not found",
    ))
}

pub async fn delete_announcement(
    service: &AnnouncementService,
    request: &HttpRequest,
    course_id: i64,
    announcement_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 公告必须属于路径中的课程
    match storage.get_announcement_by_id(announcement_id).await {
        Ok(Some(announcement)) if announcement.course_id == course_id => {}
        Ok(_) => return Ok(not_found()),
        Err(e) => return Ok(internal_error("Failed to load announcement", e)),
    }

    match storage.delete_announcement(announcement_id).await {
        Ok(true) => {
            if let Some(access) = RequireCourseAccess::extract_access(request) {
                publish::publish_to_course(
                    request,
                    &storage,
                    course_id,
                    access.course.teacher_id,
                    ChangeEvent::new(ChangeCollection::Announcements, ChangeAction::Deleted)
                        .course(course_id),
                )
                .await;
            }
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("Announcement deleted")))
        }
        Ok(false) => Ok(not_found()),
        Err(e) => Ok(internal_error("Failed to delete announcement", e)),
    }
}

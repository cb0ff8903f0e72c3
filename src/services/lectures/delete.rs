use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{LectureService, load_owned_lecture};
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    realtime::entities::{ChangeAction, ChangeCollection, ChangeEvent},
};
use crate::services::{internal_error, unauthorized, websocket::publish};

/// 删除课时，考勤记录一并删除
pub async fn delete_lecture(
    service: &LectureService,
    request: &HttpRequest,
    lecture_id: i64,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };
    let storage = service.get_storage(request)?;

    let lecture = match load_owned_lecture(&storage, lecture_id, user_id).await {
        Ok(lecture) => lecture,
        Err(response) => return Ok(response),
    };

    match storage.delete_lecture(lecture.id).await {
        Ok(true) => {
            publish::publish_to_course(
                request,
                &storage,
                lecture.course_id,
                lecture.teacher_id,
                ChangeEvent::new(ChangeCollection::Lectures, ChangeAction::Deleted)
                    .course(lecture.course_id)
                    .lecture(lecture.id),
            )
            .await;
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("Lecture deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LectureNotFound,
            "Lecture not found",
        ))),
        Err(e) => Ok(internal_error("Failed to delete lecture", e)),
    }
}

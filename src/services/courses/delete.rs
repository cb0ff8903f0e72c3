use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::{
    ApiResponse, ErrorCode,
    realtime::entities::{ChangeAction, ChangeCollection, ChangeEvent},
};
use crate::services::websocket::publish;

/// 删除课程，课时、考勤、选课与公告一并删除
pub async fn delete_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_course(course_id).await {
        Ok(true) => {
            tracing::info!("Course {} deleted", course_id);
            publish::publish_to_all(
                request,
                ChangeEvent::new(ChangeCollection::Courses, ChangeAction::Deleted)
                    .course(course_id),
            );
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("Course deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => {
            tracing::error!("Failed to delete course {}: {}", course_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CourseDeleteFailed,
                    "Something went wrong.",
                )),
            )
        }
    }
}

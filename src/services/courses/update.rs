use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CourseService, validate_course_fields};
use crate::models::{
    ApiResponse, ErrorCode,
    courses::requests::UpdateCourseRequest,
    realtime::entities::{ChangeAction, ChangeCollection, ChangeEvent},
};
use crate::services::websocket::publish;

/// 授课教师更新课程，权限由 RequireCourseAccess::owner 校验
pub async fn update_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
    update_data: UpdateCourseRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_course_fields(
        update_data.title.as_deref(),
        update_data.description.as_deref(),
        update_data.category.as_deref(),
    ) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::CourseDataInvalid, msg)));
    }

    let storage = service.get_storage(request)?;
    match storage.update_course(course_id, update_data).await {
        Ok(Some(course)) => {
            publish::publish_to_all(
                request,
                ChangeEvent::new(ChangeCollection::Courses, ChangeAction::Updated)
                    .course(course.id),
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(course, "Course updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => {
            tracing::error!("Failed to update course {}: {}", course_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CourseUpdateFailed,
                    "Something went wrong.",
                )),
            )
        }
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CourseService, validate_course_fields};
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    courses::requests::CreateCourseRequest,
    realtime::entities::{ChangeAction, ChangeCollection, ChangeEvent},
};
use crate::services::{unauthorized, websocket::publish};

pub async fn create_course(
    service: &CourseService,
    request: &HttpRequest,
    course_data: CreateCourseRequest,
) -> ActixResult<HttpResponse> {
    let Some(teacher_id) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };

    if let Err(msg) = validate_course_fields(
        Some(&course_data.title),
        Some(&course_data.description),
        Some(&course_data.category),
    ) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::CourseDataInvalid, msg)));
    }

    let storage = service.get_storage(request)?;
    match storage.create_course(teacher_id, course_data).await {
        Ok(course) => {
            tracing::info!("Teacher {} created course {}", teacher_id, course.id);
            publish::publish_to_all(
                request,
                ChangeEvent::new(ChangeCollection::Courses, ChangeAction::Created)
                    .course(course.id)
                    .user(teacher_id),
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(course, "Course created")))
        }
        Err(e) => {
            tracing::error!("Failed to create course: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CourseCreationFailed,
                    "Something went wrong.",
                )),
            )
        }
    }
}

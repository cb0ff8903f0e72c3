use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    enrollments::entities::EnrollOutcome,
    realtime::entities::{ChangeAction, ChangeCollection, ChangeEvent},
};
use crate::services::{internal_error, unauthorized, websocket::publish};

fn course_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::CourseNotFound,
        "Course not found",
    ))
}

/// 选课是幂等的：重复选课返回 409 和已有记录，选课人数不变
pub async fn enroll(
    service: &EnrollmentService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let Some(student_id) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };
    let storage = service.get_storage(request)?;

    let course = match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => return Ok(course_not_found()),
        Err(e) => return Ok(internal_error("Failed to load course for enroll", e)),
    };

    match storage.enroll(student_id, course_id).await {
        Ok(EnrollOutcome::Created(enrollment)) => {
            tracing::info!("Student {} enrolled in course {}", student_id, course_id);
            publish::publish_to_users(
                request,
                &[student_id, course.teacher_id],
                ChangeEvent::new(ChangeCollection::Enrollments, ChangeAction::Created)
                    .course(course_id)
                    .user(student_id),
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(enrollment, "Enrolled")))
        }
        Ok(EnrollOutcome::Existing(enrollment)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error(
                ErrorCode::AlreadyEnrolled,
                enrollment,
                "Already enrolled in this course",
            ),
        )),
        Err(e) => {
            tracing::error!(
                "Failed to enroll student {} in course {}: {}",
                student_id,
                course_id,
                e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::EnrollFailed,
                    "Something went wrong.",
                )),
            )
        }
    }
}

pub async fn unenroll(
    service: &EnrollmentService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let Some(student_id) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };
    let storage = service.get_storage(request)?;

    let course = match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => return Ok(course_not_found()),
        Err(e) => return Ok(internal_error("Failed to load course for unenroll", e)),
    };

    match storage.unenroll(student_id, course_id).await {
        Ok(true) => {
            publish::publish_to_users(
                request,
                &[student_id, course.teacher_id],
                ChangeEvent::new(ChangeCollection::Enrollments, ChangeAction::Deleted)
                    .course(course_id)
                    .user(student_id),
            );
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("Unenrolled")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EnrollmentNotFound,
            "Not enrolled in this course",
        ))),
        Err(e) => Ok(internal_error("Failed to unenroll", e)),
    }
}

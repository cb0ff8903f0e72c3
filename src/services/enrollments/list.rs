use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse,
    enrollments::responses::{CourseEnrollmentsResponse, MyEnrollmentsResponse},
};
use crate::services::{internal_error, unauthorized};

/// 权限由 RequireCourseAccess::owner 校验
pub async fn list_course_enrollments(
    service: &EnrollmentService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_course_enrollments(course_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CourseEnrollmentsResponse { course_id, items },
            "Enrollments retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to list course enrollments", e)),
    }
}

pub async fn list_my_enrollments(
    service: &EnrollmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };
    let storage = service.get_storage(request)?;

    match storage.list_user_enrollments(user_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            MyEnrollmentsResponse { items },
            "Enrollments retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to list my enrollments", e)),
    }
}

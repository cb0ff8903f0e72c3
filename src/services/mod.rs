pub mod announcements;
pub mod attendance;
pub mod auth;
pub mod courses;
pub mod dashboards;
pub mod enrollments;
pub mod lectures;
pub mod system;
pub mod users;
pub mod websocket;

pub use announcements::AnnouncementService;
pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use courses::CourseService;
pub use dashboards::DashboardService;
pub use enrollments::EnrollmentService;
pub use lectures::LectureService;
pub use system::SystemService;
pub use users::UserService;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode, web};
use std::sync::Arc;

use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 从 app_data 取存储后端
pub(crate) fn storage_from_request(request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("Storage not configured"))
}

pub(crate) fn unauthorized() -> HttpResponse {
    ApiResponse::error_empty(ErrorCode::Unauthorized, "Unauthorized access, please login")
        .into_response(StatusCode::UNAUTHORIZED)
}

/// 未预期的存储错误：记录日志，对外只返回通用提示
pub(crate) fn internal_error(context: &str, err: impl std::fmt::Display) -> HttpResponse {
    tracing::error!("{}: {}", context, err);
    ApiResponse::error_empty(ErrorCode::InternalServerError, "Something went wrong.")
        .into_response(StatusCode::INTERNAL_SERVER_ERROR)
}

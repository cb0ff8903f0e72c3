use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnnouncementService;
use crate::models::{ApiResponse, announcements::responses::AnnouncementListResponse};
use crate::services::internal_error;

/// 最新的在前
pub async fn list_announcements(
    service: &AnnouncementService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_announcements_by_courses(&[course_id]).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AnnouncementListResponse { items },
            "Announcements retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to list announcements", e)),
    }
}

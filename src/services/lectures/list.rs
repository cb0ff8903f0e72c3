use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LectureService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, lectures::responses::LectureListResponse};
use crate::services::{dashboards::views, internal_error, unauthorized};

/// 当前教师的课时，按上课时间排序并附带课程名
pub async fn list_teacher_lectures(
    service: &LectureService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(teacher_id) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };
    let storage = service.get_storage(request)?;

    let lectures = match storage.list_lectures_by_teacher(teacher_id).await {
        Ok(lectures) => lectures,
        Err(e) => return Ok(internal_error("Failed to list lectures", e)),
    };
    let courses = match storage.list_courses_by_teacher(teacher_id).await {
        Ok(courses) => courses,
        Err(e) => return Ok(internal_error("Failed to list teacher courses", e)),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        LectureListResponse {
            items: views::lectures_with_titles(lectures, &courses),
        },
        "Lectures retrieved successfully",
    )))
}

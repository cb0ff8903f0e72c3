use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, dashboards::responses::TeacherCoursesResponse};
use crate::services::{dashboards::views, internal_error, unauthorized};

/// 当前教师的课程及选课人数
pub async fn list_teaching_courses(
    service: &CourseService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(teacher_id) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };
    let storage = service.get_storage(request)?;

    let courses = match storage.list_courses_by_teacher(teacher_id).await {
        Ok(courses) => courses,
        Err(e) => return Ok(internal_error("Failed to list teaching courses", e)),
    };

    let course_ids: Vec<i64> = courses.iter().map(|c| c.id).collect();
    let counts = match storage.count_enrollments_by_courses(&course_ids).await {
        Ok(counts) => counts,
        Err(e) => return Ok(internal_error("Failed to count enrollments", e)),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        TeacherCoursesResponse {
            items: views::teacher_courses(courses, &counts),
        },
        "Teaching courses retrieved successfully",
    )))
}

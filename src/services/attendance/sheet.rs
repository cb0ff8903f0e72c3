use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::services::{
    dashboards::views, internal_error, lectures::load_owned_lecture, unauthorized,
};

/// 单个课时的考勤表：全部选课学生及是否出勤
pub async fn get_attendance_sheet(
    service: &AttendanceService,
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

    let course_title = match storage.get_course_by_id(lecture.course_id).await {
        Ok(course) => course.map_or_else(|| views::UNKNOWN_COURSE.to_string(), |c| c.title),
        Err(e) => return Ok(internal_error("Failed to load course", e)),
    };

    let students = match storage.list_course_enrollments(lecture.course_id).await {
        Ok(students) => students,
        Err(e) => return Ok(internal_error("Failed to load course roster", e)),
    };

    let attendance = match storage.get_attendance_by_lecture(lecture.id).await {
        Ok(attendance) => attendance,
        Err(e) => return Ok(internal_error("Failed to load attendance", e)),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        views::attendance_sheet(lecture, course_title, &students, attendance.as_ref()),
        "Attendance sheet retrieved successfully",
    )))
}

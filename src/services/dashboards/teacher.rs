use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{DashboardService, views};
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse,
    dashboards::responses::{
        TeacherAttendanceResponse, TeacherCoursesResponse, TeacherLecturesResponse,
    },
};
use crate::services::{internal_error, unauthorized};

pub async fn courses(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(teacher_id) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };
    let storage = service.get_storage(request)?;

    let courses = match storage.list_courses_by_teacher(teacher_id).await {
        Ok(courses) => courses,
        Err(e) => return Ok(internal_error("Failed to load teacher courses", e)),
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
        "Courses retrieved successfully",
    )))
}

pub async fn lectures(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(teacher_id) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };
    let storage = service.get_storage(request)?;

    let lectures = match storage.list_lectures_by_teacher(teacher_id).await {
        Ok(lectures) => lectures,
        Err(e) => return Ok(internal_error("Failed to load teacher lectures", e)),
    };
    let courses = match storage.list_courses_by_teacher(teacher_id).await {
        Ok(courses) => courses,
        Err(e) => return Ok(internal_error("Failed to load teacher courses", e)),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        TeacherLecturesResponse {
            items: views::lectures_with_titles(lectures, &courses),
        },
        "Lectures retrieved successfully",
    )))
}

/// 每个课时一张考勤表
pub async fn attendance(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(teacher_id) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };
    let storage = service.get_storage(request)?;

    let lectures = match storage.list_lectures_by_teacher(teacher_id).await {
        Ok(lectures) => lectures,
        Err(e) => return Ok(internal_error("Failed to load teacher lectures", e)),
    };

    let mut course_ids: Vec<i64> = lectures.iter().map(|l| l.course_id).collect();
    course_ids.sort_unstable();
    course_ids.dedup();

    let courses = match storage.list_courses_by_ids(&course_ids).await {
        Ok(courses) => courses,
        Err(e) => return Ok(internal_error("Failed to load courses", e)),
    };

    let mut students_by_course = HashMap::with_capacity(courses.len());
    for course in &courses {
        match storage.list_course_enrollments(course.id).await {
            Ok(students) => {
                students_by_course.insert(course.id, students);
            }
            Err(e) => return Ok(internal_error("Failed to load course roster", e)),
        }
    }

    let lecture_ids: Vec<i64> = lectures.iter().map(|l| l.id).collect();
    let attendance = match storage.list_attendance_by_lectures(&lecture_ids).await {
        Ok(attendance) => attendance,
        Err(e) => return Ok(internal_error("Failed to load attendance", e)),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        TeacherAttendanceResponse {
            items: views::attendance_sheets(lectures, &courses, &students_by_course, &attendance),
        },
        "Attendance retrieved successfully",
    )))
}

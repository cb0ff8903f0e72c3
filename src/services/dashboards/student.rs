use std::collections::HashSet;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{DashboardService, views};
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse,
    courses::requests::{CourseListQuery, CourseQueryParams},
    dashboards::responses::{StudentCatalogResponse, StudentCoursesResponse},
};
use crate::services::{internal_error, unauthorized};

/// 课程目录，标记当前学生已选的课程
pub async fn catalog(
    service: &DashboardService,
    request: &HttpRequest,
    query: CourseQueryParams,
) -> ActixResult<HttpResponse> {
    let Some(student_id) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };
    let storage = service.get_storage(request)?;

    let list_query = CourseListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        teacher_id: None,
        category: query.category,
        search: query.search,
    };

    let page = match storage.list_courses_with_pagination(list_query).await {
        Ok(page) => page,
        Err(e) => return Ok(internal_error("Failed to load course catalog", e)),
    };

    let enrolled: HashSet<i64> = match storage.list_user_enrollments(student_id).await {
        Ok(enrollments) => enrollments.into_iter().map(|e| e.course_id).collect(),
        Err(e) => return Ok(internal_error("Failed to load enrollments", e)),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        StudentCatalogResponse {
            pagination: page.pagination,
            items: views::catalog_entries(page.items, &enrolled),
        },
        "Catalog retrieved successfully",
    )))
}

/// 已选课程，每门课附带课时（含本人出勤）与公告
pub async fn courses(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(student_id) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };
    let storage = service.get_storage(request)?;

    let course_ids: Vec<i64> = match storage.list_user_enrollments(student_id).await {
        Ok(enrollments) => enrollments.into_iter().map(|e| e.course_id).collect(),
        Err(e) => return Ok(internal_error("Failed to load enrollments", e)),
    };

    let courses = match storage.list_courses_by_ids(&course_ids).await {
        Ok(courses) => courses,
        Err(e) => return Ok(internal_error("Failed to load enrolled courses", e)),
    };

    let lectures = match storage.list_lectures_by_courses(&course_ids).await {
        Ok(lectures) => lectures,
        Err(e) => return Ok(internal_error("Failed to load lectures", e)),
    };

    let lecture_ids: Vec<i64> = lectures.iter().map(|l| l.id).collect();
    let attendance = match storage.list_attendance_by_lectures(&lecture_ids).await {
        Ok(attendance) => attendance,
        Err(e) => return Ok(internal_error("Failed to load attendance", e)),
    };

    let announcements = match storage.list_announcements_by_courses(&course_ids).await {
        Ok(announcements) => announcements,
        Err(e) => return Ok(internal_error("Failed to load announcements", e)),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        StudentCoursesResponse {
            items: views::student_courses(
                student_id,
                courses,
                lectures,
                &attendance,
                announcements,
            ),
        },
        "Courses retrieved successfully",
    )))
}

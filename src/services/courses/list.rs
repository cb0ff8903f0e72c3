use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::{
    ApiResponse,
    courses::requests::{CourseListQuery, CourseQueryParams},
};
use crate::services::internal_error;

/// 课程目录，任何已登录用户可见
pub async fn list_courses(
    service: &CourseService,
    request: &HttpRequest,
    query: CourseQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let list_query = CourseListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        teacher_id: None,
        category: query.category,
        search: query.search,
    };

    match storage.list_courses_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Course list retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to retrieve course list", e)),
    }
}

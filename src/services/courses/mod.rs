pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod teaching;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::courses::requests::{
    CourseQueryParams, CreateCourseRequest, UpdateCourseRequest,
};
use crate::storage::Storage;
use crate::utils::validate::{
    CATEGORY_MAX_LENGTH, DESCRIPTION_MAX_LENGTH, TITLE_MAX_LENGTH, validate_required_text,
};

pub struct CourseService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 课程目录
    pub async fn list_courses(
        &self,
        request: &HttpRequest,
        query: CourseQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_courses(self, request, query).await
    }

    pub async fn create_course(
        &self,
        request: &HttpRequest,
        course_data: CreateCourseRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_course(self, request, course_data).await
    }

    // 当前教师自己的课程
    pub async fn list_teaching_courses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        teaching::list_teaching_courses(self, request).await
    }

    pub async fn get_course(&self, request: &HttpRequest, course_id: i64) -> ActixResult<HttpResponse> {
        get::get_course(self, request, course_id).await
    }

    pub async fn update_course(
        &self,
        request: &HttpRequest,
        course_id: i64,
        update_data: UpdateCourseRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_course(self, request, course_id, update_data).await
    }

    pub async fn delete_course(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_course(self, request, course_id).await
    }
}

/// 校验课程字段，`None` 表示该字段不更新
fn validate_course_fields(
    title: Option<&str>,
    description: Option<&str>,
    category: Option<&str>,
) -> Result<(), String> {
    if let Some(title) = title {
        validate_required_text(title, TITLE_MAX_LENGTH, "Title")?;
    }
    if let Some(category) = category {
        validate_required_text(category, CATEGORY_MAX_LENGTH, "Category")?;
    }
    // 描述可以为空
    if let Some(description) = description
        && description.trim().chars().count() > DESCRIPTION_MAX_LENGTH
    {
        return Err(format!(
            "Description must be at most {DESCRIPTION_MAX_LENGTH} characters"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_course_fields() {
        assert!(validate_course_fields(Some("Rust"), Some(""), Some("Programming")).is_ok());
        assert!(validate_course_fields(Some("   "), None, None).is_err());
        assert!(validate_course_fields(None, None, Some("")).is_err());
        assert!(validate_course_fields(None, None, None).is_ok());

        let long = "x".repeat(DESCRIPTION_MAX_LENGTH + 1);
        assert!(validate_course_fields(None, Some(&long), None).is_err());
    }
}

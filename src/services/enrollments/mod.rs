pub mod enroll;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct EnrollmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl EnrollmentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 学生选课
    pub async fn enroll(&self, request: &HttpRequest, course_id: i64) -> ActixResult<HttpResponse> {
        enroll::enroll(self, request, course_id).await
    }

    // 学生退课
    pub async fn unenroll(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        enroll::unenroll(self, request, course_id).await
    }

    // 授课教师查看选课学生
    pub async fn list_course_enrollments(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_course_enrollments(self, request, course_id).await
    }

    pub async fn list_my_enrollments(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_my_enrollments(self, request).await
    }
}

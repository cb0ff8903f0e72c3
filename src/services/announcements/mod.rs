pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::announcements::requests::CreateAnnouncementRequest;
use crate::storage::Storage;

/// 课程公告，课程权限由路由上的 RequireCourseAccess 校验
pub struct AnnouncementService {
    storage: Option<Arc<dyn Storage>>,
}

impl AnnouncementService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn post_announcement(
        &self,
        request: &HttpRequest,
        course_id: i64,
        data: CreateAnnouncementRequest,
    ) -> ActixResult<HttpResponse> {
        create::post_announcement(self, request, course_id, data).await
    }

    pub async fn list_announcements(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_announcements(self, request, course_id).await
    }

    pub async fn delete_announcement(
        &self,
        request: &HttpRequest,
        course_id: i64,
        announcement_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_announcement(self, request, course_id, announcement_id).await
    }
}

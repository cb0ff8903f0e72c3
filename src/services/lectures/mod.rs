pub mod delete;
pub mod list;
pub mod schedule;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{
    ApiResponse, ErrorCode,
    lectures::{entities::Lecture, requests::ScheduleLectureRequest},
};
use crate::storage::Storage;

pub struct LectureService {
    storage: Option<Arc<dyn Storage>>,
}

impl LectureService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 排课
    pub async fn schedule_lecture(
        &self,
        request: &HttpRequest,
        lecture_data: ScheduleLectureRequest,
    ) -> ActixResult<HttpResponse> {
        schedule::schedule_lecture(self, request, lecture_data).await
    }

    // 当前教师的课时
    pub async fn list_teacher_lectures(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_teacher_lectures(self, request).await
    }

    pub async fn delete_lecture(
        &self,
        request: &HttpRequest,
        lecture_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_lecture(self, request, lecture_id).await
    }
}

/// 加载课时并确认当前用户是授课教师
///
/// 失败时返回可直接响应的 HttpResponse。
pub(crate) async fn load_owned_lecture(
    storage: &Arc<dyn Storage>,
    lecture_id: i64,
    user_id: i64,
) -> Result<Lecture, HttpResponse> {
    let lecture = match storage.get_lecture_by_id(lecture_id).await {
        Ok(Some(lecture)) => lecture,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::LectureNotFound,
                "Lecture not found",
            )));
        }
        Err(e) => return Err(super::internal_error("Failed to load lecture", e)),
    };

    if lecture.teacher_id != user_id {
        tracing::info!(
            "User {} is not the teacher of lecture {}",
            user_id,
            lecture_id
        );
        return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::CoursePermissionDenied,
            "Only the course teacher can manage this lecture",
        )));
    }

    Ok(lecture)
}

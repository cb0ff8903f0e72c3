pub mod mark;
pub mod sheet;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn mark_present(
        &self,
        request: &HttpRequest,
        lecture_id: i64,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        mark::mark_attendance(self, request, lecture_id, student_id, true).await
    }

    pub async fn mark_absent(
        &self,
        request: &HttpRequest,
        lecture_id: i64,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        mark::mark_attendance(self, request, lecture_id, student_id, false).await
    }

    pub async fn get_sheet(
        &self,
        request: &HttpRequest,
        lecture_id: i64,
    ) -> ActixResult<HttpResponse> {
        sheet::get_attendance_sheet(self, request, lecture_id).await
    }
}

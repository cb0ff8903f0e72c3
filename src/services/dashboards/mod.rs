//! 学生与教师控制台
//!
//! 每个视图都是一次性读取，客户端收到实时变更事件后重新拉取。

pub mod student;
pub mod teacher;
pub mod views;

#[cfg(test)]
mod tests;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, courses::requests::CourseQueryParams, dashboards::responses::LandingResponse,
};
use crate::storage::Storage;

pub struct DashboardService {
    storage: Option<Arc<dyn Storage>>,
}

impl DashboardService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    /// 登录后的落地页：按角色决定进入哪个控制台
    pub async fn landing(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let Some(user) = RequireJWT::extract_user_claims(request) else {
            return Ok(super::unauthorized());
        };
        let dashboard = user.role.dashboard().to_string();
        Ok(HttpResponse::Ok().json(ApiResponse::success(
            LandingResponse { user, dashboard },
            "Landing resolved",
        )))
    }

    pub async fn student_catalog(
        &self,
        request: &HttpRequest,
        query: CourseQueryParams,
    ) -> ActixResult<HttpResponse> {
        student::catalog(self, request, query).await
    }

    pub async fn student_courses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        student::courses(self, request).await
    }

    pub async fn teacher_courses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        teacher::courses(self, request).await
    }

    pub async fn teacher_lectures(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        teacher::lectures(self, request).await
    }

    pub async fn teacher_attendance(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        teacher::attendance(self, request).await
    }
}

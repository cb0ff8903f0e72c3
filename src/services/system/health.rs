use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use super::SystemService;
use crate::models::{ApiResponse, AppStartTime, system::responses::HealthResponse};
use crate::services::websocket::ConnectionManager;

/// 运行时长与在线连接数，不需要登录
pub async fn health(service: &SystemService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let config = service.get_config();
    let now = chrono::Utc::now();

    let started_at = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|t| t.start_datetime)
        .unwrap_or(now);

    let online_users = request
        .app_data::<web::Data<Arc<ConnectionManager>>>()
        .map(|m| m.online_count())
        .unwrap_or(0);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        HealthResponse {
            status: "ok".to_string(),
            system_name: config.app.system_name.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: config.app.environment.clone(),
            started_at,
            uptime_seconds: (now - started_at).num_seconds(),
            online_users,
        },
        "Service is healthy",
    )))
}

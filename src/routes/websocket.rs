use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use serde::Deserialize;
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::middlewares::require_jwt::authenticate_token;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::websocket::{ConnectionManager, WebSocketService};
use crate::storage::Storage;

#[derive(Debug, Deserialize)]
pub struct WsQuery {
    pub token: String,
}

/// 浏览器的 WebSocket API 不能设置请求头，令牌通过查询参数传入
pub async fn connect(
    req: HttpRequest,
    body: web::Payload,
    query: web::Query<WsQuery>,
    storage: web::Data<Arc<dyn Storage>>,
    manager: web::Data<Arc<ConnectionManager>>,
) -> ActixResult<HttpResponse> {
    let cache = req
        .app_data::<web::Data<Arc<dyn ObjectCache>>>()
        .map(|data| data.get_ref().clone());

    let user = match authenticate_token(&query.token, storage.get_ref(), cache.as_ref()).await {
        Ok(user) => user,
        Err(err) => {
            tracing::info!("WebSocket authentication failed: {}", err);
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                format!("Unauthorized: {err}"),
            )));
        }
    };

    let (response, session, stream) = actix_ws::handle(&req, body)?;
    actix_web::rt::spawn(WebSocketService::handle_connection(
        manager.get_ref().clone(),
        user.id,
        session,
        stream,
    ));

    Ok(response)
}

pub fn configure_websocket_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/v1/ws", web::get().to(connect));
}

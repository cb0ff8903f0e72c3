use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::auth::responses::{RefreshTokenResponse, TokenVerificationResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::internal_error;
use crate::utils::jwt::JwtUtils;

use super::AuthService;

fn expired_session() -> HttpResponse {
    // 清除无效的 refresh token cookie
    HttpResponse::Unauthorized()
        .cookie(JwtUtils::create_empty_refresh_token_cookie())
        .json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Login expired or invalid, please login again",
        ))
}

/// 用 cookie 中的 refresh token 换取新的 access token
///
/// 角色以数据库为准，注册后改过的信息会体现在新令牌里。
pub async fn handle_refresh_token(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(refresh_token) = JwtUtils::extract_refresh_token_from_cookie(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    let user_id = match JwtUtils::verify_refresh_token(&refresh_token).and_then(|c| c.user_id()) {
        Ok(user_id) => user_id,
        Err(e) => {
            tracing::info!("Refresh token rejected: {}", e);
            return Ok(expired_session());
        }
    };

    let storage = service.get_storage(request)?;
    let user = match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => return Ok(expired_session()),
        Err(e) => return Ok(internal_error("Refresh token user lookup failed", e)),
    };

    match JwtUtils::generate_access_token(user.id, user.role) {
        Ok(access_token) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            RefreshTokenResponse {
                access_token,
                expires_in: JwtUtils::access_token_ttl().num_seconds(),
            },
            "Token refreshed successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to generate access token", e)),
    }
}

/// 能走到这里说明 RequireJWT 已通过
pub async fn handle_verify_token(
    _service: &AuthService,
    _request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        TokenVerificationResponse { is_valid: true },
        "Token is valid",
    )))
}

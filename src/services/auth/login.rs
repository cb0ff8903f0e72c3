use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{requests::LoginRequest, responses::LoginResponse},
};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

use super::AuthService;
use crate::services::internal_error;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 1. 按邮箱查找用户
    let user = match storage.get_user_by_email(&login_request.email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "No user found with this email.",
            )));
        }
        Err(e) => return Ok(internal_error("Login lookup failed", e)),
    };

    // 2. 校验密码
    if !verify_password(&login_request.password, &user.password_hash) {
        tracing::info!("Wrong password for user {}", user.id);
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::UserPasswordInvalid,
            "Wrong password. Try again.",
        )));
    }

    // 3. 更新最后登录时间，失败不影响登录
    if let Err(e) = storage.update_last_login(user.id).await {
        tracing::warn!("Failed to update last login for user {}: {}", user.id, e);
    }

    // 4. 生成令牌对
    let token_pair = match user.generate_token_pair(login_request.remember_me) {
        Ok(pair) => pair,
        Err(e) => return Ok(internal_error("Failed to generate JWT token", e)),
    };

    tracing::info!("User {} logged in successfully", user.id);

    let refresh_cookie =
        JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token, login_request.remember_me);

    let response = LoginResponse {
        access_token: token_pair.access_token,
        expires_in: JwtUtils::access_token_ttl().num_seconds(),
        user,
        created_at: chrono::Utc::now(),
    };

    Ok(HttpResponse::Ok()
        .cookie(refresh_cookie)
        .json(ApiResponse::success(response, "Login successful")))
}

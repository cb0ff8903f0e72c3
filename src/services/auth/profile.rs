use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::cache::user_cache_key;
use crate::middlewares::RequireJWT;
use crate::models::auth::responses::UserInfoResponse;
use crate::models::users::requests::{UpdateProfileRequest, UserUpdate};
use crate::models::users::responses::UserResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, unauthorized};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_display_name, validate_password};

use super::AuthService;

pub async fn handle_get_profile(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_user_claims(request) {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserInfoResponse { user },
            "User information retrieved successfully",
        ))),
        None => Ok(unauthorized()),
    }
}

pub async fn handle_update_profile(
    service: &AuthService,
    update_data: UpdateProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(unauthorized());
    };
    let storage = service.get_storage(request)?;

    let mut update = UserUpdate::default();

    if let Some(name) = update_data.name {
        if let Err(msg) = validate_display_name(&name) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
        }
        update.name = Some(name);
    }

    if let Some(password) = update_data.password {
        if let Err(msg) = validate_password(&password) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::UserPasswordWeak, msg)));
        }
        match hash_password(&password) {
            Ok(hash) => update.password_hash = Some(hash),
            Err(e) => return Ok(internal_error("Password hashing failed", e)),
        }
    }

    match storage.update_user(current_user.id, update).await {
        Ok(Some(user)) => {
            // 令 RequireJWT 重新加载
            if let Some(cache) = service.get_cache(request) {
                cache.remove(&user_cache_key(user.id)).await;
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                UserResponse { user },
                "Profile updated",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => {
            tracing::error!("Failed to update user {}: {}", current_user.id, e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::UserUpdateFailed,
                "Something went wrong.",
            )))
        }
    }
}

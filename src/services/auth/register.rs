use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::CourseDeskError;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::requests::{NewUser, RegisterRequest},
    users::responses::UserResponse,
};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_display_name, validate_email, validate_password};

use super::AuthService;
use crate::services::internal_error;

const EMAIL_IN_USE: &str = "This email is already in use.";

pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 1. 校验输入
    if let Err(msg) = validate_display_name(&register_request.name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }
    if let Err(msg) = validate_email(&register_request.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }
    if let Err(msg) = validate_password(&register_request.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserPasswordWeak, msg)));
    }

    // 2. 邮箱唯一
    match storage.get_user_by_email(&register_request.email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UserEmailAlreadyExists,
                EMAIL_IN_USE,
            )));
        }
        Ok(None) => {}
        Err(e) => return Ok(internal_error("Register lookup failed", e)),
    }

    // 3. 哈希密码
    let password_hash = match hash_password(&register_request.password) {
        Ok(hash) => hash,
        Err(e) => return Ok(internal_error("Password hashing failed", e)),
    };

    // 4. 创建用户，并发注册同一邮箱时由唯一索引兜底
    let new_user = NewUser {
        name: register_request.name,
        email: register_request.email,
        password_hash,
        role: register_request.role,
    };

    match storage.create_user(new_user).await {
        Ok(user) => {
            tracing::info!("Registered user {} as {}", user.id, user.role);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                UserResponse { user },
                "Registration successful",
            )))
        }
        Err(CourseDeskError::Conflict(_)) => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UserEmailAlreadyExists,
                EMAIL_IN_USE,
            )))
        }
        Err(e) => {
            tracing::error!("Register failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    "Something went wrong.",
                )),
            )
        }
    }
}

use crate::config::AppConfig;
use crate::models::users::entities::UserRole;
use actix_web::cookie::{Cookie, SameSite};
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

/// Token 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,           // Subject (user ID)
    pub role: UserRole,        // 用户角色
    pub token_type: TokenType, // access 或 refresh
    pub remember_me: bool,     // 刷新时沿用的 cookie 有效期
    pub exp: usize,            // Expiration time (时间戳)
    pub iat: usize,            // Issued at (签发时间)
}

impl Claims {
    pub fn user_id(&self) -> Result<i64, JwtError> {
        self.sub
            .parse::<i64>()
            .map_err(|_| JwtError::from(ErrorKind::InvalidToken))
    }
}

// Token 响应结构体
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct JwtUtils;

impl JwtUtils {
    fn encoding_key() -> EncodingKey {
        EncodingKey::from_secret(AppConfig::get().jwt.secret.as_bytes())
    }

    fn decoding_key() -> DecodingKey {
        DecodingKey::from_secret(AppConfig::get().jwt.secret.as_bytes())
    }

    /// Access Token 有效期（分钟）
    pub fn access_token_ttl() -> chrono::Duration {
        chrono::Duration::minutes(AppConfig::get().jwt.access_token_expiry)
    }

    /// Refresh Token 有效期（天）
    pub fn refresh_token_ttl(remember_me: bool) -> chrono::Duration {
        let jwt = &AppConfig::get().jwt;
        if remember_me {
            chrono::Duration::days(jwt.refresh_token_remember_me_expiry)
        } else {
            chrono::Duration::days(jwt.refresh_token_expiry)
        }
    }

    fn generate_token(
        user_id: i64,
        role: UserRole,
        token_type: TokenType,
        remember_me: bool,
        expiry: chrono::Duration,
    ) -> Result<String, JwtError> {
        let now = chrono::Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            role,
            token_type,
            remember_me,
            exp: (now + expiry).timestamp() as usize,
            iat: now.timestamp() as usize,
        };
        encode(&Header::default(), &claims, &Self::encoding_key())
    }

    pub fn generate_access_token(user_id: i64, role: UserRole) -> Result<String, JwtError> {
        Self::generate_token(
            user_id,
            role,
            TokenType::Access,
            false,
            Self::access_token_ttl(),
        )
    }

    pub fn generate_token_pair(
        user_id: i64,
        role: UserRole,
        remember_me: bool,
    ) -> Result<TokenPair, JwtError> {
        Ok(TokenPair {
            access_token: Self::generate_access_token(user_id, role)?,
            refresh_token: Self::generate_token(
                user_id,
                role,
                TokenType::Refresh,
                remember_me,
                Self::refresh_token_ttl(remember_me),
            )?,
        })
    }

    fn verify_token_type(token: &str, expected: TokenType) -> Result<Claims, JwtError> {
        let claims = decode::<Claims>(token, &Self::decoding_key(), &Validation::default())?.claims;
        if claims.token_type != expected {
            return Err(JwtError::from(ErrorKind::InvalidToken));
        }
        Ok(claims)
    }

    pub fn verify_access_token(token: &str) -> Result<Claims, JwtError> {
        Self::verify_token_type(token, TokenType::Access)
    }

    pub fn verify_refresh_token(token: &str) -> Result<Claims, JwtError> {
        Self::verify_token_type(token, TokenType::Refresh)
    }

    /// 创建 Refresh Token Cookie
    pub fn create_refresh_token_cookie(refresh_token: &str, remember_me: bool) -> Cookie<'static> {
        let config = AppConfig::get();
        let ttl = Self::refresh_token_ttl(remember_me);
        Cookie::build(REFRESH_TOKEN_COOKIE, refresh_token.to_string())
            .path("/")
            .max_age(actix_web::cookie::time::Duration::seconds(ttl.num_seconds()))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(config.is_production()) // 生产环境下使用 HTTPS
            .finish()
    }

    /// 创建空的 Refresh Token Cookie（用于注销）
    pub fn create_empty_refresh_token_cookie() -> Cookie<'static> {
        let config = AppConfig::get();
        Cookie::build(REFRESH_TOKEN_COOKIE, "")
            .path("/")
            .max_age(actix_web::cookie::time::Duration::seconds(0))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(config.is_production())
            .finish()
    }

    /// 从请求中提取 Refresh Token
    pub fn extract_refresh_token_from_cookie(req: &actix_web::HttpRequest) -> Option<String> {
        req.cookie(REFRESH_TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string())
    }

    /// 从 Authorization 头中提取 Bearer Token
    pub fn extract_bearer_token(req: &actix_web::HttpRequest) -> Option<String> {
        req.headers()
            .get(actix_web::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_round_trip() {
        let token = JwtUtils::generate_access_token(42, UserRole::Teacher).unwrap();
        let claims = JwtUtils::verify_access_token(&token).unwrap();
        assert_eq!(claims.user_id().unwrap(), 42);
        assert_eq!(claims.role, UserRole::Teacher);
    }

    #[test]
    fn test_refresh_token_rejected_as_access() {
        let pair = JwtUtils::generate_token_pair(7, UserRole::Student, true).unwrap();
        assert!(JwtUtils::verify_access_token(&pair.refresh_token).is_err());
        let claims = JwtUtils::verify_refresh_token(&pair.refresh_token).unwrap();
        assert!(claims.remember_me);
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(JwtUtils::verify_access_token("not-a-token").is_err());
    }
}

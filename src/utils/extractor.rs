//! 路径参数提取器
//!
//! 直接从 match_info 读取并解析为 i64，解析失败返回 400 + 统一响应体，
//! 避免 `web::Path` 默认的纯文本错误。

use actix_web::{
    FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError,
    http::header::CONTENT_TYPE,
};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn bad_path_param(name: &str) -> actix_web::Error {
    let response = HttpResponse::BadRequest()
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .json(ApiResponse::<()>::error_empty(
            ErrorCode::BadRequest,
            format!("Invalid path parameter: {name}"),
        ));
    InternalError::from_response(format!("invalid path parameter {name}"), response).into()
}

fn parse_path_i64(req: &HttpRequest, name: &str) -> Result<i64, actix_web::Error> {
    req.match_info()
        .get(name)
        .and_then(|raw| raw.parse::<i64>().ok())
        .filter(|id| *id > 0)
        .ok_or_else(|| bad_path_param(name))
}

macro_rules! define_safe_i64_extractor {
    ($(#[$meta:meta])* $name:ident, $param:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                ready(parse_path_i64(req, $param).map($name))
            }
        }
    };
}

define_safe_i64_extractor!(
    /// `{id}`
    SafeIDI64,
    "id"
);
define_safe_i64_extractor!(SafeCourseIdI64, "course_id");
define_safe_i64_extractor!(SafeLectureIdI64, "lecture_id");
define_safe_i64_extractor!(SafeStudentIdI64, "student_id");
define_safe_i64_extractor!(SafeAnnouncementIdI64, "announcement_id");

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_valid_id_extracted() {
        let req = TestRequest::default()
            .param("course_id", "42")
            .to_http_request();
        let id = SafeCourseIdI64::extract(&req).await.unwrap();
        assert_eq!(id.0, 42);
    }

    #[actix_web::test]
    async fn test_invalid_id_rejected() {
        for raw in ["abc", "-1", "0", ""] {
            let req = TestRequest::default()
                .param("lecture_id", raw)
                .to_http_request();
            let err = SafeLectureIdI64::extract(&req).await.unwrap_err();
            assert_eq!(
                err.as_response_error().status_code(),
                actix_web::http::StatusCode::BAD_REQUEST
            );
        }
    }
}

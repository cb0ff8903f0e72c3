pub mod announcements;
pub mod attendance;
pub mod auth;
pub mod common;
pub mod courses;
pub mod dashboards;
pub mod enrollments;
pub mod lectures;
pub mod realtime;
pub mod system;
pub mod users;

pub use common::{ApiResponse, PaginationInfo, PaginationQuery};

/// 进程启动时间，用于健康检查计算运行时长
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 响应体中的业务错误码
///
/// 0 表示成功；1xxx 通用；2xxx 认证与用户；3xxx 课程；4xxx 选课；
/// 5xxx 课时；6xxx 考勤；7xxx 公告。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1002,
    NotFound = 1003,
    InternalServerError = 1004,
    RateLimitExceeded = 1005,

    // 认证与用户
    AuthFailed = 2000,
    UserNotFound = 2001,
    UserPasswordInvalid = 2002,
    UserEmailAlreadyExists = 2003,
    UserPasswordWeak = 2004,
    UserEmailInvalid = 2005,
    UserNameInvalid = 2006,
    RegisterFailed = 2007,
    UserUpdateFailed = 2008,

    // 课程
    CourseNotFound = 3000,
    CourseCreationFailed = 3001,
    CourseUpdateFailed = 3002,
    CourseDeleteFailed = 3003,
    CoursePermissionDenied = 3004,
    CourseDataInvalid = 3005,

    // 选课
    AlreadyEnrolled = 4000,
    EnrollmentNotFound = 4001,
    EnrollFailed = 4002,

    // 课时
    LectureNotFound = 5000,
    LectureTimeInvalid = 5001,
    LectureDataInvalid = 5002,
    LectureScheduleFailed = 5003,

    // 考勤
    StudentNotEnrolled = 6000,
    AttendanceUpdateFailed = 6001,

    // 公告
    AnnouncementNotFound = 7000,
    AnnouncementInvalid = 7001,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::Unauthorized as i32, 1001);
        assert_eq!(ErrorCode::AlreadyEnrolled as i32, 4000);
    }

    #[test]
    fn test_response_envelope_shape() {
        let body = serde_json::to_value(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))
        .unwrap();
        assert_eq!(body["code"], 3000);
        assert_eq!(body["message"], "Course not found");
        assert!(body.get("data").is_none());
        assert!(body.get("timestamp").is_some());
    }
}

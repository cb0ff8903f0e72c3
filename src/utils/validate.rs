use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

static MEETING_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("Invalid link regex"));

pub const PASSWORD_MIN_LENGTH: usize = 6;
pub const WEAK_PASSWORD_MESSAGE: &str = "Password should be at least 6 characters.";

pub const NAME_MAX_LENGTH: usize = 64;
pub const TITLE_MAX_LENGTH: usize = 128;
pub const CATEGORY_MAX_LENGTH: usize = 64;
pub const TOPIC_MAX_LENGTH: usize = 128;
pub const DESCRIPTION_MAX_LENGTH: usize = 4000;
pub const ANNOUNCEMENT_MAX_LENGTH: usize = 4000;

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_display_name(name: &str) -> Result<(), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name must not be empty");
    }
    if name.chars().count() > NAME_MAX_LENGTH {
        return Err("Name must be at most 64 characters");
    }
    Ok(())
}

/// 验证密码是否符合策略
///
/// 只要求最小长度，再拒绝少量常见弱密码。
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        return Err(WEAK_PASSWORD_MESSAGE);
    }

    let weak_passwords = [
        "123456",
        "1234567",
        "12345678",
        "123456789",
        "password",
        "qwerty",
        "abc123",
        "111111",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        return Err("Password is too common, please choose a stronger password");
    }

    Ok(())
}

/// 校验必填文本字段：去除首尾空白后非空且不超过上限
pub fn validate_required_text(
    value: &str,
    max_chars: usize,
    field: &'static str,
) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    if trimmed.chars().count() > max_chars {
        return Err(format!("{field} must be at most {max_chars} characters"));
    }
    Ok(())
}

pub fn validate_meeting_link(link: &str) -> Result<(), &'static str> {
    if !MEETING_LINK_RE.is_match(link.trim()) {
        return Err("Meeting link must be an http(s) URL");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("alice@example").is_err());
        assert!(validate_email("not-an-email").is_err());
    }

    #[test]
    fn test_short_password() {
        assert_eq!(validate_password("abc12"), Err(WEAK_PASSWORD_MESSAGE));
        assert!(validate_password("abc123x").is_ok());
    }

    #[test]
    fn test_password_counts_characters_not_bytes() {
        // 5 个汉字占 15 字节，但仍然不足 6 个字符
        assert!(validate_password("密码太短了").is_err());
        assert!(validate_password("密码足够长了").is_ok());
    }

    #[test]
    fn test_common_password() {
        assert!(validate_password("Password").is_err());
        assert!(validate_password("123456").is_err());
    }

    #[test]
    fn test_display_name() {
        assert!(validate_display_name("  ").is_err());
        assert!(validate_display_name("Ada Lovelace").is_ok());
        assert!(validate_display_name(&"x".repeat(65)).is_err());
    }

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Rust 101", TITLE_MAX_LENGTH, "title").is_ok());
        let err = validate_required_text("   ", TITLE_MAX_LENGTH, "title").unwrap_err();
        assert_eq!(err, "title must not be empty");
    }

    #[test]
    fn test_meeting_link() {
        assert!(validate_meeting_link("https://meet.example.com/abc").is_ok());
        assert!(validate_meeting_link("meet.example.com").is_err());
        assert!(validate_meeting_link("ftp://x.y").is_err());
    }
}

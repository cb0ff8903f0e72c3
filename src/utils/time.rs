use chrono::{DateTime, NaiveDateTime, Utc};

use crate::errors::{CourseDeskError, Result};

/// 解析课时时间
///
/// 接受 RFC 3339（`2025-03-01T09:30:00Z`、`2025-03-01T09:30:00+08:00`），
/// 以及浏览器 `datetime-local` 输入产生的 `YYYY-MM-DDTHH:MM[:SS]`，后者按 UTC 处理。
pub fn parse_schedule_time(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CourseDeskError::date_parse("scheduled_at must not be empty"));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(naive.and_utc());
        }
    }

    Err(CourseDeskError::date_parse(format!(
        "Invalid date/time: {input}"
    )))
}

/// Unix 秒转 UTC 时间，越界时退回纪元
pub fn from_timestamp(ts: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_rfc3339_with_offset() {
        let dt = parse_schedule_time("2025-03-01T09:30:00+08:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 3, 1, 1, 30, 0).unwrap());
    }

    #[test]
    fn test_datetime_local_is_utc() {
        let dt = parse_schedule_time("2025-03-01T09:30").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap());
    }

    #[test]
    fn test_datetime_local_with_seconds() {
        let dt = parse_schedule_time("2025-03-01T09:30:15").unwrap();
        assert_eq!(dt.timestamp() % 60, 15);
    }

    #[test]
    fn test_invalid_input() {
        let err = parse_schedule_time("next tuesday").unwrap_err();
        assert_eq!(err.code(), "E011");
        assert!(parse_schedule_time("").is_err());
    }

    #[test]
    fn test_from_timestamp() {
        assert_eq!(from_timestamp(0).timestamp(), 0);
        assert_eq!(from_timestamp(1_700_000_000).timestamp(), 1_700_000_000);
    }
}

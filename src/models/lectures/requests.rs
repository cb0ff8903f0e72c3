use serde::Deserialize;
use ts_rs::TS;

// 排课请求
//
// scheduled_at 接受 RFC 3339 或 `YYYY-MM-DDTHH:MM`（按 UTC 处理）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lecture.ts")]
pub struct ScheduleLectureRequest {
    pub course_id: i64,
    pub topic: String,
    pub scheduled_at: String,
    pub meeting_link: String,
}

// 新课时（用于存储层）
#[derive(Debug, Clone)]
pub struct NewLecture {
    pub course_id: i64,
    pub teacher_id: i64,
    pub topic: String,
    pub scheduled_at: chrono::DateTime<chrono::Utc>,
    pub meeting_link: String,
}

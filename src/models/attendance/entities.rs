use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 每个课时一条考勤记录，attendees 为出勤学生 ID 集合（升序、无重复）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct Attendance {
    pub id: i64,
    pub lecture_id: i64,
    pub attendees: Vec<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Attendance {
    pub fn is_present(&self, user_id: i64) -> bool {
        self.attendees.binary_search(&user_id).is_ok()
    }
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lecture.ts")]
pub struct Lecture {
    pub id: i64,
    pub course_id: i64,
    pub teacher_id: i64,
    pub topic: String,
    pub scheduled_at: chrono::DateTime<chrono::Utc>,
    pub meeting_link: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

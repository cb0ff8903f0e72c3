use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct Announcement {
    pub id: i64,
    pub course_id: i64,
    pub author_id: i64,
    pub text: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

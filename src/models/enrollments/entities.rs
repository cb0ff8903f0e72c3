use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct Enrollment {
    pub id: i64,
    pub user_id: i64,
    pub course_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// 选课写入结果：新建或已存在
#[derive(Debug, Clone)]
pub enum EnrollOutcome {
    Created(Enrollment),
    Existing(Enrollment),
}

impl EnrollOutcome {
    pub fn enrollment(&self) -> &Enrollment {
        match self {
            EnrollOutcome::Created(e) | EnrollOutcome::Existing(e) => e,
        }
    }
}

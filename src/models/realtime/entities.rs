use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 发生变化的数据集合
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/realtime.ts")]
pub enum ChangeCollection {
    Courses,
    Enrollments,
    Lectures,
    Attendance,
    Announcements,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/realtime.ts")]
pub enum ChangeAction {
    Created,
    Updated,
    Deleted,
}

/// 变更事件，客户端收到后重新拉取对应视图
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/realtime.ts")]
pub struct ChangeEvent {
    pub collection: ChangeCollection,
    pub action: ChangeAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lecture_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub occurred_at: chrono::DateTime<chrono::Utc>,
}

impl ChangeEvent {
    pub fn new(collection: ChangeCollection, action: ChangeAction) -> Self {
        Self {
            collection,
            action,
            course_id: None,
            lecture_id: None,
            user_id: None,
            occurred_at: chrono::Utc::now(),
        }
    }

    pub fn course(mut self, course_id: i64) -> Self {
        self.course_id = Some(course_id);
        self
    }

    pub fn lecture(mut self, lecture_id: i64) -> Self {
        self.lecture_id = Some(lecture_id);
        self
    }

    pub fn user(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Course {
    // 课程ID
    pub id: i64,
    // 课程名称
    pub title: String,
    // 课程描述
    pub description: String,
    // 分类
    pub category: String,
    // 授课教师ID
    pub teacher_id: i64,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

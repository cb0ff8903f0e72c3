use super::entities::Enrollment;
use serde::Serialize;
use ts_rs::TS;

// 课程的选课学生
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrolledStudent {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct CourseEnrollmentsResponse {
    pub course_id: i64,
    pub items: Vec<EnrolledStudent>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct MyEnrollmentsResponse {
    pub items: Vec<Enrollment>,
}

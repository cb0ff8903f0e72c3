use super::entities::Lecture;
use crate::models::attendance::entities::Attendance;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lecture.ts")]
pub struct ScheduledLectureResponse {
    pub lecture: Lecture,
    pub attendance: Attendance,
}

// 带课程名的课时
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lecture.ts")]
pub struct LectureWithCourse {
    #[serde(flatten)]
    #[ts(flatten)]
    pub lecture: Lecture,
    pub course_title: String,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lecture.ts")]
pub struct LectureListResponse {
    pub items: Vec<LectureWithCourse>,
}

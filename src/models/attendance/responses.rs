use super::entities::Attendance;
use crate::models::lectures::entities::Lecture;
use serde::Serialize;
use ts_rs::TS;

// 考勤表中的一名学生
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceSheetRow {
    pub user_id: i64,
    pub name: String,
    pub present: bool,
}

// 某个课时的考勤表
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceSheet {
    pub lecture: Lecture,
    pub course_title: String,
    pub students: Vec<AttendanceSheetRow>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceResponse {
    pub attendance: Attendance,
}

use serde::Serialize;
use ts_rs::TS;

use crate::models::announcements::entities::Announcement;
use crate::models::attendance::responses::AttendanceSheet;
use crate::models::common::PaginationInfo;
use crate::models::courses::entities::Course;
use crate::models::lectures::entities::Lecture;
use crate::models::lectures::responses::LectureWithCourse;
use crate::models::users::entities::User;

// 登录后的落地信息：当前用户 + 应展示的控制台
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct LandingResponse {
    pub user: User,
    pub dashboard: String,
}

// 课程目录中的一项
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct CatalogEntry {
    #[serde(flatten)]
    #[ts(flatten)]
    pub course: Course,
    pub enrolled: bool,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct StudentCatalogResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct StudentLectureView {
    #[serde(flatten)]
    #[ts(flatten)]
    pub lecture: Lecture,
    pub attended: bool,
}

// 学生"我的课程"中的一门课
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct StudentCourseView {
    pub course: Course,
    pub lectures: Vec<StudentLectureView>,
    pub announcements: Vec<Announcement>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct StudentCoursesResponse {
    pub items: Vec<StudentCourseView>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct TeacherCourseView {
    #[serde(flatten)]
    #[ts(flatten)]
    pub course: Course,
    pub enrollment_count: i64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct TeacherCoursesResponse {
    pub items: Vec<TeacherCourseView>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct TeacherLecturesResponse {
    pub items: Vec<LectureWithCourse>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct TeacherAttendanceResponse {
    pub items: Vec<AttendanceSheet>,
}

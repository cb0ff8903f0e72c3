use std::collections::HashMap;

use crate::models::{
    announcements::entities::Announcement,
    attendance::entities::Attendance,
    auth::requests::NewUser,
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    enrollments::{
        entities::{EnrollOutcome, Enrollment},
        responses::EnrolledStudent,
    },
    lectures::{entities::Lecture, requests::NewLecture},
    users::{entities::User, requests::UserUpdate},
};

use crate::errors::Result;

pub mod sea_orm_storage;

pub use sea_orm_storage::SeaOrmStorage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: NewUser) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UserUpdate) -> Result<Option<User>>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;

    /// 课程管理方法
    async fn create_course(&self, teacher_id: i64, course: CreateCourseRequest) -> Result<Course>;
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    // 某位教师的全部课程
    async fn list_courses_by_teacher(&self, teacher_id: i64) -> Result<Vec<Course>>;
    async fn list_courses_by_ids(&self, course_ids: &[i64]) -> Result<Vec<Course>>;
    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>>;
    // 删除课程，课时、选课、公告、考勤级联删除
    async fn delete_course(&self, course_id: i64) -> Result<bool>;

    /// 选课方法
    // 幂等：重复选课返回已有记录
    async fn enroll(&self, user_id: i64, course_id: i64) -> Result<EnrollOutcome>;
    async fn unenroll(&self, user_id: i64, course_id: i64) -> Result<bool>;
    async fn get_enrollment(&self, user_id: i64, course_id: i64) -> Result<Option<Enrollment>>;
    async fn list_user_enrollments(&self, user_id: i64) -> Result<Vec<Enrollment>>;
    async fn list_course_enrollments(&self, course_id: i64) -> Result<Vec<EnrolledStudent>>;
    async fn count_enrollments_by_courses(&self, course_ids: &[i64])
    -> Result<HashMap<i64, i64>>;

    /// 课时方法
    // 在同一事务中创建课时和空考勤记录
    async fn schedule_lecture(&self, lecture: NewLecture) -> Result<(Lecture, Attendance)>;
    async fn get_lecture_by_id(&self, lecture_id: i64) -> Result<Option<Lecture>>;
    async fn list_lectures_by_teacher(&self, teacher_id: i64) -> Result<Vec<Lecture>>;
    async fn list_lectures_by_courses(&self, course_ids: &[i64]) -> Result<Vec<Lecture>>;
    async fn delete_lecture(&self, lecture_id: i64) -> Result<bool>;

    /// 考勤方法
    // 记录缺失时返回 None，调用方按空集合处理
    async fn get_attendance_by_lecture(&self, lecture_id: i64) -> Result<Option<Attendance>>;
    async fn list_attendance_by_lectures(&self, lecture_ids: &[i64]) -> Result<Vec<Attendance>>;
    // 集合插入，记录缺失时先补建
    async fn mark_present(&self, lecture_id: i64, user_id: i64) -> Result<Attendance>;
    // 集合删除
    async fn mark_absent(&self, lecture_id: i64, user_id: i64) -> Result<Attendance>;

    /// 公告方法
    async fn create_announcement(
        &self,
        course_id: i64,
        author_id: i64,
        text: String,
    ) -> Result<Announcement>;
    async fn get_announcement_by_id(&self, announcement_id: i64) -> Result<Option<Announcement>>;
    // 按发布时间倒序
    async fn list_announcements_by_courses(&self, course_ids: &[i64])
    -> Result<Vec<Announcement>>;
    async fn delete_announcement(&self, announcement_id: i64) -> Result<bool>;
}

/// 按配置创建存储后端并执行迁移
pub async fn create_storage() -> Result<std::sync::Arc<dyn Storage>> {
    let storage = SeaOrmStorage::new_async().await?;
    Ok(std::sync::Arc::new(storage))
}

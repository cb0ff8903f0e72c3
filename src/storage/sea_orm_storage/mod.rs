//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod announcements;
mod attendance;
mod courses;
mod enrollments;
mod lectures;
mod users;

#[cfg(test)]
mod tests;

use crate::config::AppConfig;
use crate::errors::{CourseDeskError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, SqlErr};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        let storage = Self { db };
        storage.migrate().await?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(storage)
    }

    /// 内存 SQLite，仅保留一个连接，连接关闭即丢失数据
    pub async fn open_in_memory() -> Result<Self> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| CourseDeskError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opt)
            .await
            .map_err(|e| CourseDeskError::database_connection(format!("SQLite 连接失败: {e}")))?;

        let storage = Self {
            db: SqlxSqliteConnector::from_sqlx_sqlite_pool(pool),
        };
        storage.migrate().await?;
        Ok(storage)
    }

    async fn migrate(&self) -> Result<()> {
        Migrator::up(&self.db, None)
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("数据库迁移失败: {e}")))
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| CourseDeskError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| CourseDeskError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| CourseDeskError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(CourseDeskError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

/// 是否为唯一约束冲突
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: NewUser) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }


    async fn update_user(&self, id: i64, update: UserUpdate) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    // 课程模块
    async fn create_course(&self, teacher_id: i64, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(teacher_id, course).await
    }

    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(course_id).await
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        self.list_courses_with_pagination_impl(query).await
    }

    async fn list_courses_by_teacher(&self, teacher_id: i64) -> Result<Vec<Course>> {
        self.list_courses_by_teacher_impl(teacher_id).await
    }

    async fn list_courses_by_ids(&self, course_ids: &[i64]) -> Result<Vec<Course>> {
        self.list_courses_by_ids_impl(course_ids).await
    }

    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        self.update_course_impl(course_id, update).await
    }

    async fn delete_course(&self, course_id: i64) -> Result<bool> {
        self.delete_course_impl(course_id).await
    }

    // 选课模块
    async fn enroll(&self, user_id: i64, course_id: i64) -> Result<EnrollOutcome> {
        self.enroll_impl(user_id, course_id).await
    }

    async fn unenroll(&self, user_id: i64, course_id: i64) -> Result<bool> {
        self.unenroll_impl(user_id, course_id).await
    }

    async fn get_enrollment(&self, user_id: i64, course_id: i64) -> Result<Option<Enrollment>> {
        self.get_enrollment_impl(user_id, course_id).await
    }

    async fn list_user_enrollments(&self, user_id: i64) -> Result<Vec<Enrollment>> {
        self.list_user_enrollments_impl(user_id).await
    }

    async fn list_course_enrollments(&self, course_id: i64) -> Result<Vec<EnrolledStudent>> {
        self.list_course_enrollments_impl(course_id).await
    }

    async fn count_enrollments_by_courses(
        &self,
        course_ids: &[i64],
    ) -> Result<HashMap<i64, i64>> {
        self.count_enrollments_by_courses_impl(course_ids).await
    }

    // 课时模块
    async fn schedule_lecture(&self, lecture: NewLecture) -> Result<(Lecture, Attendance)> {
        self.schedule_lecture_impl(lecture).await
    }

    async fn get_lecture_by_id(&self, lecture_id: i64) -> Result<Option<Lecture>> {
        self.get_lecture_by_id_impl(lecture_id).await
    }

    async fn list_lectures_by_teacher(&self, teacher_id: i64) -> Result<Vec<Lecture>> {
        self.list_lectures_by_teacher_impl(teacher_id).await
    }

    async fn list_lectures_by_courses(&self, course_ids: &[i64]) -> Result<Vec<Lecture>> {
        self.list_lectures_by_courses_impl(course_ids).await
    }

    async fn delete_lecture(&self, lecture_id: i64) -> Result<bool> {
        self.delete_lecture_impl(lecture_id).await
    }

    // 考勤模块
    async fn get_attendance_by_lecture(&self, lecture_id: i64) -> Result<Option<Attendance>> {
        self.get_attendance_by_lecture_impl(lecture_id).await
    }

    async fn list_attendance_by_lectures(&self, lecture_ids: &[i64]) -> Result<Vec<Attendance>> {
        self.list_attendance_by_lectures_impl(lecture_ids).await
    }

    async fn mark_present(&self, lecture_id: i64, user_id: i64) -> Result<Attendance> {
        self.mark_present_impl(lecture_id, user_id).await
    }

    async fn mark_absent(&self, lecture_id: i64, user_id: i64) -> Result<Attendance> {
        self.mark_absent_impl(lecture_id, user_id).await
    }

    // 公告模块
    async fn create_announcement(
        &self,
        course_id: i64,
        author_id: i64,
        text: String,
    ) -> Result<Announcement> {
        self.create_announcement_impl(course_id, author_id, text)
            .await
    }

    async fn get_announcement_by_id(&self, announcement_id: i64) -> Result<Option<Announcement>> {
        self.get_announcement_by_id_impl(announcement_id).await
    }

    async fn list_announcements_by_courses(
        &self,
        course_ids: &[i64],
    ) -> Result<Vec<Announcement>> {
        self.list_announcements_by_courses_impl(course_ids).await
    }

    async fn delete_announcement(&self, announcement_id: i64) -> Result<bool> {
        self.delete_announcement_impl(announcement_id).await
    }
}

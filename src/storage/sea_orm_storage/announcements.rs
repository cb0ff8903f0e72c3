//! 公告存储操作

use super::SeaOrmStorage;
use crate::entity::announcements::{ActiveModel, Column, Entity as Announcements};
use crate::errors::{CourseDeskError, Result};
use crate::models::announcements::entities::Announcement;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_announcement_impl(
        &self,
        course_id: i64,
        author_id: i64,
        text: String,
    ) -> Result<Announcement> {
        let model = ActiveModel {
            course_id: Set(course_id),
            author_id: Set(author_id),
            text: Set(text.trim().to_string()),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("发布公告失败: {e}")))?;

        Ok(result.into_announcement())
    }

    pub async fn get_announcement_by_id_impl(
        &self,
        announcement_id: i64,
    ) -> Result<Option<Announcement>> {
        let result = Announcements::find_by_id(announcement_id)
            .one(&self.db)
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("查询公告失败: {e}")))?;

        Ok(result.map(|m| m.into_announcement()))
    }

    /// 若干课程的公告，最新的在前
    pub async fn list_announcements_by_courses_impl(
        &self,
        course_ids: &[i64],
    ) -> Result<Vec<Announcement>> {
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = Announcements::find()
            .filter(Column::CourseId.is_in(course_ids.iter().copied()))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("查询公告列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_announcement()).collect())
    }

    pub async fn delete_announcement_impl(&self, announcement_id: i64) -> Result<bool> {
        let result = Announcements::delete_by_id(announcement_id)
            .exec(&self.db)
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("删除公告失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

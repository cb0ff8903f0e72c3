//! 课时存储操作

use super::SeaOrmStorage;
use crate::entity::attendance::ActiveModel as AttendanceActiveModel;
use crate::entity::lectures::{ActiveModel, Column, Entity as Lectures};
use crate::errors::{CourseDeskError, Result};
use crate::models::{
    attendance::entities::Attendance,
    lectures::{entities::Lecture, requests::NewLecture},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 排课：课时与空考勤记录在同一事务中写入
    pub async fn schedule_lecture_impl(&self, req: NewLecture) -> Result<(Lecture, Attendance)> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("开启事务失败: {e}")))?;

        let lecture = ActiveModel {
            course_id: Set(req.course_id),
            teacher_id: Set(req.teacher_id),
            topic: Set(req.topic.trim().to_string()),
            scheduled_at: Set(req.scheduled_at.timestamp()),
            meeting_link: Set(req.meeting_link.trim().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| CourseDeskError::database_operation(format!("创建课时失败: {e}")))?;

        let attendance = AttendanceActiveModel {
            lecture_id: Set(lecture.id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| CourseDeskError::database_operation(format!("创建考勤记录失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("提交事务失败: {e}")))?;

        Ok((lecture.into_lecture(), attendance.into_attendance(Vec::new())))
    }

    pub async fn get_lecture_by_id_impl(&self, lecture_id: i64) -> Result<Option<Lecture>> {
        let result = Lectures::find_by_id(lecture_id)
            .one(&self.db)
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("查询课时失败: {e}")))?;

        Ok(result.map(|m| m.into_lecture()))
    }

    /// 教师的全部课时，按上课时间升序
    pub async fn list_lectures_by_teacher_impl(&self, teacher_id: i64) -> Result<Vec<Lecture>> {
        let result = Lectures::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_asc(Column::ScheduledAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("查询教师课时失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_lecture()).collect())
    }

    /// 若干课程下的课时，按上课时间升序
    pub async fn list_lectures_by_courses_impl(&self, course_ids: &[i64]) -> Result<Vec<Lecture>> {
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = Lectures::find()
            .filter(Column::CourseId.is_in(course_ids.iter().copied()))
            .order_by_asc(Column::ScheduledAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("查询课程课时失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_lecture()).collect())
    }

    /// 删除课时，考勤记录级联删除
    pub async fn delete_lecture_impl(&self, lecture_id: i64) -> Result<bool> {
        let result = Lectures::delete_by_id(lecture_id)
            .exec(&self.db)
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("删除课时失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

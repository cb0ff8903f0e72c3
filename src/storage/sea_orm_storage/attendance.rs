//! 考勤存储操作
//!
//! 出勤学生集合保存在 attendance_marks 中，(attendance_id, user_id) 唯一。
//! 标记出勤/缺勤只插入或删除单行，不会覆盖其他学生的标记。

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::attendance::{
    ActiveModel, Column, Entity as AttendanceRecords, Model as AttendanceModel,
};
use crate::entity::attendance_marks::{
    ActiveModel as MarkActiveModel, Column as MarkColumn, Entity as AttendanceMarks,
};
use crate::errors::{CourseDeskError, Result};
use crate::models::attendance::entities::Attendance;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    async fn find_attendance_record(&self, lecture_id: i64) -> Result<Option<AttendanceModel>> {
        AttendanceRecords::find()
            .filter(Column::LectureId.eq(lecture_id))
            .one(&self.db)
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("查询考勤记录失败: {e}")))
    }

    async fn load_attendees(&self, attendance_id: i64) -> Result<Vec<i64>> {
        AttendanceMarks::find()
            .select_only()
            .column(MarkColumn::UserId)
            .filter(MarkColumn::AttendanceId.eq(attendance_id))
            .order_by_asc(MarkColumn::UserId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("查询出勤名单失败: {e}")))
    }

    /// 取得课时的考勤记录，不存在则补建
    async fn ensure_attendance_record(&self, lecture_id: i64) -> Result<AttendanceModel> {
        if let Some(record) = self.find_attendance_record(lecture_id).await? {
            return Ok(record);
        }

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            lecture_id: Set(lecture_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        match model.insert(&self.db).await {
            Ok(record) => {
                tracing::debug!("Created missing attendance record for lecture {}", lecture_id);
                Ok(record)
            }
            // 并发补建时另一方已写入
            Err(e) if super::is_unique_violation(&e) => self
                .find_attendance_record(lecture_id)
                .await?
                .ok_or_else(|| {
                    CourseDeskError::database_operation(format!("创建考勤记录失败: {e}"))
                }),
            Err(e) => Err(CourseDeskError::database_operation(format!(
                "创建考勤记录失败: {e}"
            ))),
        }
    }

    async fn touch_attendance(&self, record: AttendanceModel) -> Result<Attendance> {
        let attendance_id = record.id;
        let mut active: ActiveModel = record.into();
        active.updated_at = Set(chrono::Utc::now().timestamp());
        let record = active
            .update(&self.db)
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("更新考勤记录失败: {e}")))?;

        let attendees = self.load_attendees(attendance_id).await?;
        Ok(record.into_attendance(attendees))
    }

    pub async fn get_attendance_by_lecture_impl(
        &self,
        lecture_id: i64,
    ) -> Result<Option<Attendance>> {
        let Some(record) = self.find_attendance_record(lecture_id).await? else {
            return Ok(None);
        };
        let attendees = self.load_attendees(record.id).await?;
        Ok(Some(record.into_attendance(attendees)))
    }

    pub async fn list_attendance_by_lectures_impl(
        &self,
        lecture_ids: &[i64],
    ) -> Result<Vec<Attendance>> {
        if lecture_ids.is_empty() {
            return Ok(Vec::new());
        }

        let records = AttendanceRecords::find()
            .filter(Column::LectureId.is_in(lecture_ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("查询考勤记录失败: {e}")))?;

        if records.is_empty() {
            return Ok(Vec::new());
        }

        let marks: Vec<(i64, i64)> = AttendanceMarks::find()
            .select_only()
            .column(MarkColumn::AttendanceId)
            .column(MarkColumn::UserId)
            .filter(MarkColumn::AttendanceId.is_in(records.iter().map(|r| r.id)))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("查询出勤名单失败: {e}")))?;

        let mut by_record: HashMap<i64, Vec<i64>> = HashMap::new();
        for (attendance_id, user_id) in marks {
            by_record.entry(attendance_id).or_default().push(user_id);
        }

        Ok(records
            .into_iter()
            .map(|r| {
                let attendees = by_record.remove(&r.id).unwrap_or_default();
                r.into_attendance(attendees)
            })
            .collect())
    }

    /// 标记出勤：集合插入，重复标记无副作用
    pub async fn mark_present_impl(&self, lecture_id: i64, user_id: i64) -> Result<Attendance> {
        let record = self.ensure_attendance_record(lecture_id).await?;

        let already_marked = AttendanceMarks::find()
            .filter(MarkColumn::AttendanceId.eq(record.id))
            .filter(MarkColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("查询出勤标记失败: {e}")))?
            .is_some();

        if !already_marked {
            let mark = MarkActiveModel {
                attendance_id: Set(record.id),
                user_id: Set(user_id),
                marked_at: Set(chrono::Utc::now().timestamp()),
                ..Default::default()
            };
            match mark.insert(&self.db).await {
                Ok(_) => {}
                Err(e) if super::is_unique_violation(&e) => {}
                Err(e) => {
                    return Err(CourseDeskError::database_operation(format!(
                        "标记出勤失败: {e}"
                    )));
                }
            }
        }

        self.touch_attendance(record).await
    }

    /// 标记缺勤：集合删除，不在集合中时无副作用
    pub async fn mark_absent_impl(&self, lecture_id: i64, user_id: i64) -> Result<Attendance> {
        let record = self.ensure_attendance_record(lecture_id).await?;

        AttendanceMarks::delete_many()
            .filter(MarkColumn::AttendanceId.eq(record.id))
            .filter(MarkColumn::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("标记缺勤失败: {e}")))?;

        self.touch_attendance(record).await
    }
}

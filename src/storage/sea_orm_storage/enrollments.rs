//! 选课存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::entity::users::Entity as Users;
use crate::errors::{CourseDeskError, Result};
use crate::models::enrollments::{
    entities::{EnrollOutcome, Enrollment},
    responses::EnrolledStudent,
};
use crate::utils::time::from_timestamp;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Set,
};

impl SeaOrmStorage {
    /// 选课
    ///
    /// 已存在时返回原记录；并发重复插入撞上唯一索引时同样按已存在处理。
    pub async fn enroll_impl(&self, user_id: i64, course_id: i64) -> Result<EnrollOutcome> {
        if let Some(existing) = self.get_enrollment_impl(user_id, course_id).await? {
            return Ok(EnrollOutcome::Existing(existing));
        }

        let model = ActiveModel {
            user_id: Set(user_id),
            course_id: Set(course_id),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        match model.insert(&self.db).await {
            Ok(created) => Ok(EnrollOutcome::Created(created.into_enrollment())),
            Err(e) if super::is_unique_violation(&e) => self
                .get_enrollment_impl(user_id, course_id)
                .await?
                .map(EnrollOutcome::Existing)
                .ok_or_else(|| CourseDeskError::database_operation(format!("选课失败: {e}"))),
            Err(e) => Err(CourseDeskError::database_operation(format!("选课失败: {e}"))),
        }
    }

    /// 退课
    pub async fn unenroll_impl(&self, user_id: i64, course_id: i64) -> Result<bool> {
        let result = Enrollments::delete_many()
            .filter(
                Condition::all()
                    .add(Column::UserId.eq(user_id))
                    .add(Column::CourseId.eq(course_id)),
            )
            .exec(&self.db)
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("退课失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn get_enrollment_impl(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Option<Enrollment>> {
        let result = Enrollments::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CourseId.eq(course_id))
            .one(&self.db)
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 学生的全部选课记录
    pub async fn list_user_enrollments_impl(&self, user_id: i64) -> Result<Vec<Enrollment>> {
        let result = Enrollments::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("查询选课列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_enrollment()).collect())
    }

    /// 课程的选课学生（含姓名与邮箱），按姓名排序
    pub async fn list_course_enrollments_impl(
        &self,
        course_id: i64,
    ) -> Result<Vec<EnrolledStudent>> {
        let rows = Enrollments::find()
            .filter(Column::CourseId.eq(course_id))
            .find_also_related(Users)
            .all(&self.db)
            .await
            .map_err(|e| {
                CourseDeskError::database_operation(format!("查询课程选课学生失败: {e}"))
            })?;

        let mut students: Vec<EnrolledStudent> = rows
            .into_iter()
            .filter_map(|(enrollment, user)| {
                user.map(|u| EnrolledStudent {
                    user_id: u.id,
                    name: u.name,
                    email: u.email,
                    enrolled_at: from_timestamp(enrollment.created_at),
                })
            })
            .collect();
        students.sort_by(|a, b| a.name.cmp(&b.name).then(a.user_id.cmp(&b.user_id)));

        Ok(students)
    }

    /// 按课程统计选课人数，没有学生的课程不出现在结果中
    pub async fn count_enrollments_by_courses_impl(
        &self,
        course_ids: &[i64],
    ) -> Result<HashMap<i64, i64>> {
        if course_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i64, i64)> = Enrollments::find()
            .select_only()
            .column(Column::CourseId)
            .column_as(Expr::from(Func::count(Expr::col(Column::Id))), "count")
            .filter(Column::CourseId.is_in(course_ids.iter().copied()))
            .group_by(Column::CourseId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("统计选课人数失败: {e}")))?;

        Ok(rows.into_iter().collect())
    }
}

//! 课程存储操作

use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::errors::{CourseDeskError, Result};
use crate::models::{
    PaginationInfo, PaginationQuery,
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
};
use crate::utils::sql::contains_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(
        &self,
        teacher_id: i64,
        req: CreateCourseRequest,
    ) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            teacher_id: Set(teacher_id),
            title: Set(req.title.trim().to_string()),
            description: Set(req.description.trim().to_string()),
            category: Set(req.category.trim().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, course_id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 分页列出课程
    pub async fn list_courses_with_pagination_impl(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        let (page, size) = PaginationQuery::new(query.page, query.size).normalized();

        let mut select = Courses::find();

        // 教师筛选
        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        // 分类筛选
        if let Some(ref category) = query.category
            && !category.trim().is_empty()
        {
            select = select.filter(Column::Category.eq(category.trim()));
        }

        // 搜索标题和描述
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            select = select.filter(
                Condition::any()
                    .add(Column::Title.like(contains_pattern(search.trim())))
                    .add(Column::Description.like(contains_pattern(search.trim()))),
            );
        }

        // 排序
        select = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("查询课程总数失败: {e}")))?;

        let courses = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(CourseListResponse {
            items: courses.into_iter().map(|m| m.into_course()).collect(),
            pagination: PaginationInfo::new(page as i64, size as i64, total as i64),
        })
    }

    /// 某位教师的全部课程
    pub async fn list_courses_by_teacher_impl(&self, teacher_id: i64) -> Result<Vec<Course>> {
        let result = Courses::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("查询教师课程失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_course()).collect())
    }

    /// 批量获取课程
    pub async fn list_courses_by_ids_impl(&self, course_ids: &[i64]) -> Result<Vec<Course>> {
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = Courses::find()
            .filter(Column::Id.is_in(course_ids.iter().copied()))
            .order_by_asc(Column::Title)
            .all(&self.db)
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("批量查询课程失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_course()).collect())
    }

    /// 更新课程信息
    pub async fn update_course_impl(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        // 先检查课程是否存在
        let existing = self.get_course_by_id_impl(course_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(course_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title.trim().to_string());
        }

        if let Some(description) = update.description {
            model.description = Set(description.trim().to_string());
        }

        if let Some(category) = update.category {
            model.category = Set(category.trim().to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("更新课程失败: {e}")))?;

        self.get_course_by_id_impl(course_id).await
    }

    /// 删除课程
    pub async fn delete_course_impl(&self, course_id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(course_id)
            .exec(&self.db)
            .await
            .map_err(|e| CourseDeskError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

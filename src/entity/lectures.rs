//! 课时实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lectures")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub teacher_id: i64,
    pub topic: String,
    pub scheduled_at: i64,
    pub meeting_link: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(has_one = "super::attendance::Entity")]
    Attendance,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_lecture(self) -> crate::models::lectures::entities::Lecture {
        use crate::models::lectures::entities::Lecture;
        use crate::utils::time::from_timestamp;

        Lecture {
            id: self.id,
            course_id: self.course_id,
            teacher_id: self.teacher_id,
            topic: self.topic,
            scheduled_at: from_timestamp(self.scheduled_at),
            meeting_link: self.meeting_link,
            created_at: from_timestamp(self.created_at),
            updated_at: from_timestamp(self.updated_at),
        }
    }
}

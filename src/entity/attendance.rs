//! 考勤记录实体，每个课时一条

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub lecture_id: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lectures::Entity",
        from = "Column::LectureId",
        to = "super::lectures::Column::Id"
    )]
    Lecture,
    #[sea_orm(has_many = "super::attendance_marks::Entity")]
    Marks,
}

impl Related<super::lectures::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lecture.def()
    }
}

impl Related<super::attendance_marks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Marks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// attendees 由调用方从 attendance_marks 查出
    pub fn into_attendance(
        self,
        mut attendees: Vec<i64>,
    ) -> crate::models::attendance::entities::Attendance {
        use crate::utils::time::from_timestamp;

        attendees.sort_unstable();
        attendees.dedup();
        crate::models::attendance::entities::Attendance {
            id: self.id,
            lecture_id: self.lecture_id,
            attendees,
            created_at: from_timestamp(self.created_at),
            updated_at: from_timestamp(self.updated_at),
        }
    }
}

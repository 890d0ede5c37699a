use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "course")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Either "common" or "specific".
    #[sea_orm(column_name = "type")]
    pub course_type: String,
    /// Opaque reference to the uploaded course material.
    #[sea_orm(nullable)]
    pub file_path: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::training_course::Entity")]
    TrainingCourse,
}

impl Related<super::training_course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainingCourse.def()
    }
}

impl Related<super::training::Entity> for Entity {
    fn to() -> RelationDef {
        super::training_course::Relation::Training.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::training_course::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "exam")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub training_id: i32,
    pub name: String,
    /// Either "Théorique" or "Pratique".
    #[sea_orm(column_name = "type")]
    pub exam_type: String,
    #[sea_orm(nullable)]
    pub date: Option<Date>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::training::Entity",
        from = "Column::TrainingId",
        to = "super::training::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Training,
    #[sea_orm(has_many = "super::exam_result::Entity")]
    ExamResult,
}

impl Related<super::training::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Training.def()
    }
}

impl Related<super::exam_result::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExamResult.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

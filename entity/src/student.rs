use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(nullable)]
    pub phone: Option<String>,
    /// One of "pending", "validated" or "rejected".
    pub status: String,
    #[sea_orm(nullable)]
    pub training_id: Option<i32>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::training::Entity",
        from = "Column::TrainingId",
        to = "super::training::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
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

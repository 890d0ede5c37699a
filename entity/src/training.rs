use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "training")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub start_date: Date,
    pub registration_end_date: Date,
    pub duration_weeks: i32,
    pub price: f64,
    pub category_id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub schedule: Option<String>,
    #[sea_orm(nullable)]
    pub covering: Option<String>,
    pub is_finished: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Category,
    #[sea_orm(has_many = "super::exam::Entity")]
    Exam,
    #[sea_orm(has_many = "super::student::Entity")]
    Student,
    #[sea_orm(has_many = "super::training_notification::Entity")]
    TrainingNotification,
    #[sea_orm(has_many = "super::training_course::Entity")]
    TrainingCourse,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::exam::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exam.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::training_notification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainingNotification.def()
    }
}

impl Related<super::training_course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainingCourse.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        super::training_course::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::training_course::Relation::Training.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

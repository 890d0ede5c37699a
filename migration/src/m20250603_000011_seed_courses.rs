use sea_orm_migration::prelude::*;

use super::m20250603_000008_create_course_table::Course;

/// Course catalogue every training can draw from.
const COURSES: &[(&str, &str)] = &[
    ("Code de la route", "common"),
    ("Conduite en ville", "common"),
    ("Conduite sur autoroute", "specific"),
    ("Gestion des ronds-points", "common"),
    ("Conduite de nuit", "specific"),
    ("Conduite sous la pluie", "specific"),
    ("Préparation à l'examen pratique", "common"),
    ("Perfectionnement moto", "specific"),
    ("Éco-conduite", "common"),
    ("Gestion des situations d'urgence", "specific"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert()
            .into_table(Course::Table)
            .columns([Course::Name, Course::Type])
            .to_owned();

        for (name, course_type) in COURSES {
            insert.values_panic([(*name).into(), (*course_type).into()]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let names: Vec<&str> = COURSES.iter().map(|(name, _)| *name).collect();

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Course::Table)
                    .and_where(Expr::col(Course::Name).is_in(names))
                    .to_owned(),
            )
            .await
    }
}

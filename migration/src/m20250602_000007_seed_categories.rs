use sea_orm_migration::prelude::*;

use super::m20250601_000001_create_category_table::Category;

/// Licence categories offered by the school.
const CATEGORIES: &[(&str, &str)] = &[
    ("Permis A1", "Motocyclettes légères (125 cm³, 11 kW max)"),
    ("Permis A", "Toutes motocyclettes sans limitation"),
    ("Permis A2", "Moto intermédiaire (puissance limitée)"),
    ("Permis B", "Voitures légères (PTAC ≤ 3,5 tonnes)"),
    ("Permis C", "Poids lourds (PTAC > 3,5 tonnes)"),
    ("Permis D", "Transport en commun (> 8 places)"),
    ("Permis BE", "Voiture avec remorque lourde"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert()
            .into_table(Category::Table)
            .columns([Category::Name, Category::Description])
            .to_owned();

        for (name, description) in CATEGORIES {
            insert.values_panic([(*name).into(), (*description).into()]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let names: Vec<&str> = CATEGORIES.iter().map(|(name, _)| *name).collect();

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Category::Table)
                    .and_where(Expr::col(Category::Name).is_in(names))
                    .to_owned(),
            )
            .await
    }
}

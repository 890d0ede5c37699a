use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use crate::server::model::category::Category;

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all categories ordered by name
    pub async fn get_all(&self) -> Result<Vec<Category>, DbErr> {
        let categories = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await?;

        Ok(categories.into_iter().map(Category::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Category>, DbErr> {
        let category = entity::prelude::Category::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(category.map(Category::from_entity))
    }

    /// Checks whether a category with the given ID exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Category::find()
            .filter(entity::category::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

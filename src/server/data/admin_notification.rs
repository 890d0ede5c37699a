use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::admin_notification::{AdminNotification, CreateAdminNotificationParams};

pub struct AdminNotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AdminNotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds an unread entry to the feed
    pub async fn create(
        &self,
        params: CreateAdminNotificationParams,
    ) -> Result<AdminNotification, DbErr> {
        let entity = entity::admin_notification::ActiveModel {
            training_id: ActiveValue::Set(params.training_id),
            title: ActiveValue::Set(params.title),
            message: ActiveValue::Set(params.message),
            is_read: ActiveValue::Set(false),
            sent_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(AdminNotification::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<AdminNotification>, DbErr> {
        Ok(entity::prelude::AdminNotification::find_by_id(id)
            .one(self.db)
            .await?
            .map(AdminNotification::from_entity))
    }

    /// Gets the whole feed, newest first
    pub async fn get_all(&self) -> Result<Vec<AdminNotification>, DbErr> {
        Ok(entity::prelude::AdminNotification::find()
            .order_by_desc(entity::admin_notification::Column::SentAt)
            .order_by_desc(entity::admin_notification::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(AdminNotification::from_entity)
            .collect())
    }

    /// Marks an entry as read
    ///
    /// # Returns
    /// - `Ok(true)` - Entry updated, or already read
    /// - `Ok(false)` - No entry with that ID
    pub async fn mark_read(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::AdminNotification::update_many()
            .col_expr(entity::admin_notification::Column::IsRead, Expr::value(true))
            .filter(entity::admin_notification::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::AdminNotification::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Empties the feed, returning how many entries were removed
    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::AdminNotification::delete_many()
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

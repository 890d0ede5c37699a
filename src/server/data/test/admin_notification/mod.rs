use crate::server::{
    data::admin_notification::AdminNotificationRepository,
    model::admin_notification::CreateAdminNotificationParams,
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;

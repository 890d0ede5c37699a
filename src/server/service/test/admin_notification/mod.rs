use crate::server::{error::AppError, service::admin_notification::AdminNotificationService};
use test_utils::{builder::TestBuilder, factory};

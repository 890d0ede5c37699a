use crate::server::{
    error::AppError, model::result::SaveResultParams, service::result::ResultService,
};
use test_utils::{builder::TestBuilder, factory};

mod save;

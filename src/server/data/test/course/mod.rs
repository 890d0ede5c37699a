use crate::{
    model::course::CourseType,
    server::{data::course::CourseRepository, model::course::CourseParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod update;

use crate::server::{data::exam_result::ExamResultRepository, model::result::SaveResultParams};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::exam::ExamType,
    server::{
        data::exam::ExamRepository,
        model::exam::{CreateExamParams, UpdateExamParams},
    },
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

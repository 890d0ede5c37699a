//! Exam domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{
    model::exam::{CreateExamDto, ExamDto, ExamType, UpdateExamDto},
    server::model::result::ExamResult,
};

impl ExamType {
    /// Value stored in the `type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExamType::Theory => "Théorique",
            ExamType::Practical => "Pratique",
        }
    }

    /// Parses the stored column value.
    pub fn from_db(value: &str) -> Result<Self, DbErr> {
        match value {
            "Théorique" => Ok(ExamType::Theory),
            "Pratique" => Ok(ExamType::Practical),
            other => Err(DbErr::Custom(format!("Unknown exam type '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exam {
    pub id: i32,
    pub training_id: i32,
    pub name: String,
    pub exam_type: ExamType,
    /// Undated exams are allowed; they rank after every dated exam.
    pub date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Exam {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Exam)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - The stored exam type is not a known value
    pub fn from_entity(entity: entity::exam::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            training_id: entity.training_id,
            name: entity.name,
            exam_type: ExamType::from_db(&entity.exam_type)?,
            date: entity.date,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> ExamDto {
        ExamDto {
            id: self.id,
            training_id: self.training_id,
            name: self.name,
            exam_type: self.exam_type,
            date: self.date,
            created_at: self.created_at,
        }
    }
}

/// An exam together with every result recorded for it.
#[derive(Debug, Clone)]
pub struct ExamWithResults {
    pub exam: Exam,
    pub results: Vec<ExamResult>,
}

#[derive(Debug, Clone)]
pub struct CreateExamParams {
    pub training_id: i32,
    pub name: String,
    pub exam_type: ExamType,
    pub date: Option<NaiveDate>,
}

impl CreateExamParams {
    pub fn from_dto(dto: CreateExamDto) -> Self {
        Self {
            training_id: dto.training_id,
            name: dto.name,
            exam_type: dto.exam_type,
            date: dto.date,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateExamParams {
    pub id: i32,
    pub name: String,
    pub exam_type: ExamType,
    pub date: Option<NaiveDate>,
}

impl UpdateExamParams {
    pub fn from_dto(id: i32, dto: UpdateExamDto) -> Self {
        Self {
            id,
            name: dto.name,
            exam_type: dto.exam_type,
            date: dto.date,
        }
    }
}

//! Student domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::student::{RegisterStudentDto, StudentDto, StudentStatus, UpdateStudentDto};

impl StudentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudentStatus::Pending => "pending",
            StudentStatus::Validated => "validated",
            StudentStatus::Rejected => "rejected",
        }
    }

    pub fn from_db(value: &str) -> Result<Self, DbErr> {
        match value {
            "pending" => Ok(StudentStatus::Pending),
            "validated" => Ok(StudentStatus::Validated),
            "rejected" => Ok(StudentStatus::Rejected),
            other => Err(DbErr::Custom(format!("Unknown student status '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: StudentStatus,
    /// Training the student registered for, if any.
    pub training_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Student {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Student)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - The stored status is not a known value
    pub fn from_entity(entity: entity::student::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            status: StudentStatus::from_db(&entity.status)?,
            training_id: entity.training_id,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            status: self.status,
            training_id: self.training_id,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterStudentParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub training_id: Option<i32>,
}

impl RegisterStudentParams {
    pub fn from_dto(dto: RegisterStudentDto) -> Self {
        Self {
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
            email: dto.email.trim().to_lowercase(),
            phone: dto.phone.filter(|p| !p.trim().is_empty()),
            training_id: dto.training_id,
        }
    }
}

/// Replacement values for a student's editable fields. The status is only changed
/// through approval or rejection.
#[derive(Debug, Clone)]
pub struct UpdateStudentParams {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub training_id: Option<i32>,
}

impl UpdateStudentParams {
    pub fn from_dto(id: i32, dto: UpdateStudentDto) -> Self {
        Self {
            id,
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
            email: dto.email.trim().to_lowercase(),
            phone: dto.phone.filter(|p| !p.trim().is_empty()),
            training_id: dto.training_id,
        }
    }
}

//! Course domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::course::{CourseDto, CourseFormDto, CourseType};

impl CourseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseType::Common => "common",
            CourseType::Specific => "specific",
        }
    }

    pub fn from_db(value: &str) -> Result<Self, DbErr> {
        match value {
            "common" => Ok(CourseType::Common),
            "specific" => Ok(CourseType::Specific),
            other => Err(DbErr::Custom(format!("Unknown course type '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub course_type: CourseType,
    pub file_path: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Course {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Course)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - The stored course type is not a known value
    pub fn from_entity(entity: entity::course::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            course_type: CourseType::from_db(&entity.course_type)?,
            file_path: entity.file_path,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            name: self.name,
            course_type: self.course_type,
            file_path: self.file_path,
            created_at: self.created_at,
        }
    }
}

/// Fields of a course, used both to create and to replace one.
#[derive(Debug, Clone)]
pub struct CourseParams {
    pub name: String,
    pub course_type: CourseType,
    pub file_path: Option<String>,
}

impl CourseParams {
    pub fn from_dto(dto: CourseFormDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            course_type: dto.course_type,
            file_path: dto.file_path.filter(|p| !p.trim().is_empty()),
        }
    }
}

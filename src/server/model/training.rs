//! Training domain models and parameters.
//!
//! A training is a course run for a cohort of students. It owns a set of exams and
//! moves from unfinished to finished exactly once, when the completion evaluator
//! accepts it.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::training::{TrainingDto, TrainingFormDto},
    server::model::category::Category,
};

/// Training with its category, if loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Training {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub registration_end_date: NaiveDate,
    pub duration_weeks: i32,
    pub price: f64,
    pub category_id: i32,
    pub category: Option<Category>,
    /// Free form schedule as entered by the administrator.
    pub schedule: Option<String>,
    /// Opaque reference to the cover image.
    pub covering: Option<String>,
    pub is_finished: bool,
    pub created_at: DateTime<Utc>,
}

impl Training {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The training entity from the database
    /// - `category` - The related category when it was loaded alongside
    pub fn from_entity(
        entity: entity::training::Model,
        category: Option<entity::category::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            start_date: entity.start_date,
            registration_end_date: entity.registration_end_date,
            duration_weeks: entity.duration_weeks,
            price: entity.price,
            category_id: entity.category_id,
            category: category.map(Category::from_entity),
            schedule: entity.schedule,
            covering: entity.covering,
            is_finished: entity.is_finished,
            created_at: entity.created_at,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> TrainingDto {
        TrainingDto {
            id: self.id,
            title: self.title,
            description: self.description,
            start_date: self.start_date,
            registration_end_date: self.registration_end_date,
            duration_weeks: self.duration_weeks,
            price: self.price,
            category_id: self.category_id,
            category: self.category.map(Category::into_dto),
            schedule: self.schedule,
            covering: self.covering,
            is_finished: self.is_finished,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a training.
#[derive(Debug, Clone)]
pub struct CreateTrainingParams {
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub registration_end_date: NaiveDate,
    pub duration_weeks: i32,
    pub price: f64,
    pub category_id: i32,
    pub schedule: Option<String>,
    pub covering: Option<String>,
}

impl CreateTrainingParams {
    pub fn from_dto(dto: TrainingFormDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            start_date: dto.start_date,
            registration_end_date: dto.registration_end_date,
            duration_weeks: dto.duration_weeks,
            price: dto.price,
            category_id: dto.category_id,
            schedule: dto.schedule,
            covering: dto.covering,
        }
    }
}

/// Parameters for updating a training. All editable fields are replaced.
#[derive(Debug, Clone)]
pub struct UpdateTrainingParams {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub registration_end_date: NaiveDate,
    pub duration_weeks: i32,
    pub price: f64,
    pub category_id: i32,
    pub schedule: Option<String>,
    pub covering: Option<String>,
}

impl UpdateTrainingParams {
    pub fn from_dto(id: i32, dto: TrainingFormDto) -> Self {
        Self {
            id,
            title: dto.title,
            description: dto.description,
            start_date: dto.start_date,
            registration_end_date: dto.registration_end_date,
            duration_weeks: dto.duration_weeks,
            price: dto.price,
            category_id: dto.category_id,
            schedule: dto.schedule,
            covering: dto.covering,
        }
    }
}

//! Course catalogue and the courses taught in each training.

use sea_orm::DatabaseConnection;

use crate::{
    model::course::CourseType,
    server::{
        data::{
            course::CourseRepository, training::TrainingRepository,
            training_course::TrainingCourseRepository,
        },
        error::{validation::ValidationError, AppError},
        model::course::{Course, CourseParams},
    },
};

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Course>, AppError> {
        Ok(CourseRepository::new(self.db).get_all(None).await?)
    }

    /// Gets the courses that are only taught in some trainings
    pub async fn get_specific(&self) -> Result<Vec<Course>, AppError> {
        Ok(CourseRepository::new(self.db)
            .get_all(Some(CourseType::Specific))
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Course, AppError> {
        CourseRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, params: CourseParams) -> Result<Course, AppError> {
        Ok(CourseRepository::new(self.db).create(params).await?)
    }

    pub async fn update(&self, id: i32, params: CourseParams) -> Result<Course, AppError> {
        self.get_by_id(id).await?;

        Ok(CourseRepository::new(self.db).update(id, params).await?)
    }

    /// Deletes a course, removing it from every training that taught it
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CourseRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    /// Gets the courses of a training ordered by ID
    pub async fn get_by_training_id(&self, training_id: i32) -> Result<Vec<Course>, AppError> {
        self.ensure_training(training_id).await?;

        Ok(CourseRepository::new(self.db)
            .get_by_training_id(training_id)
            .await?)
    }

    /// Adds a course to a training
    ///
    /// # Returns
    /// - `Ok(Course)` - The linked course
    /// - `Err(AppError::NotFound)` - No training with that ID
    /// - `Err(AppError::ValidationErr)` - No course with that ID
    /// - `Err(AppError::BadRequest)` - The course is already part of the training
    pub async fn attach_to_training(
        &self,
        training_id: i32,
        course_id: i32,
    ) -> Result<Course, AppError> {
        self.ensure_training(training_id).await?;

        let course = CourseRepository::new(self.db)
            .get_by_id(course_id)
            .await?
            .ok_or_else(|| {
                ValidationError::field("course_id", "Le cours sélectionné est invalide.")
            })?;

        let links = TrainingCourseRepository::new(self.db);
        if links.is_attached(training_id, course_id).await? {
            return Err(AppError::BadRequest(
                "Ce cours est déjà associé à la formation.".to_string(),
            ));
        }
        links.attach(training_id, course_id).await?;

        Ok(course)
    }

    /// Removes a course from a training
    pub async fn detach_from_training(
        &self,
        training_id: i32,
        course_id: i32,
    ) -> Result<(), AppError> {
        if !TrainingCourseRepository::new(self.db)
            .detach(training_id, course_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Le cours #{} n'est pas associé à la formation #{}.",
                course_id, training_id
            )));
        }

        Ok(())
    }

    async fn ensure_training(&self, training_id: i32) -> Result<(), AppError> {
        TrainingRepository::new(self.db)
            .get_by_id(training_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Formation #{} introuvable.", training_id)))?;

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Cours #{} introuvable.", id))
}

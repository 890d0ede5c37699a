use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::student::StudentStatus,
    server::{
        data::{
            admin_notification::AdminNotificationRepository, student::StudentRepository,
            training::TrainingRepository,
        },
        error::{validation::ValidationError, AppError},
        model::{
            admin_notification::CreateAdminNotificationParams,
            student::{RegisterStudentParams, Student, UpdateStudentParams},
            training::Training,
        },
    },
};

pub const REGISTRATION_TITLE: &str = "Nouvelle inscription";

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a pending student and tells the administrators about it
    ///
    /// The student and the feed entry are written in one transaction.
    ///
    /// # Returns
    /// - `Ok(Student)` - The registered student
    /// - `Err(AppError::ValidationErr)` - Email already used or unknown training
    pub async fn register(&self, params: RegisterStudentParams) -> Result<Student, AppError> {
        let mut errors = ValidationError::default();
        if StudentRepository::new(self.db)
            .email_exists(&params.email)
            .await?
        {
            errors = errors.with_field("email", "Cette adresse email est déjà utilisée.");
        }
        let (training, errors) = self.check_training(params.training_id, errors).await?;
        errors.into_result()?;

        let txn = self.db.begin().await?;

        let student = StudentRepository::new(&txn).create(params).await?;
        AdminNotificationRepository::new(&txn)
            .create(CreateAdminNotificationParams {
                training_id: student.training_id,
                title: REGISTRATION_TITLE.to_string(),
                message: registration_message(&student, training.as_ref()),
            })
            .await?;

        txn.commit().await?;

        Ok(student)
    }

    pub async fn get_all(&self, status: Option<StudentStatus>) -> Result<Vec<Student>, AppError> {
        Ok(StudentRepository::new(self.db).get_all(status).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Student, AppError> {
        StudentRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Updates a student's contact details and requested training
    ///
    /// # Returns
    /// - `Ok(Student)` - The updated student
    /// - `Err(AppError::NotFound)` - No student with that ID
    /// - `Err(AppError::ValidationErr)` - Email used by another student or unknown training
    pub async fn update(&self, params: UpdateStudentParams) -> Result<Student, AppError> {
        self.get_by_id(params.id).await?;

        let repo = StudentRepository::new(self.db);

        let mut errors = ValidationError::default();
        if repo.email_used_by_other(&params.email, params.id).await? {
            errors = errors.with_field("email", "Cette adresse email est déjà utilisée.");
        }
        let (_, errors) = self.check_training(params.training_id, errors).await?;
        errors.into_result()?;

        Ok(repo.update(params).await?)
    }

    /// Deletes a student with their results and queued notifications
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !StudentRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    /// Accepts a student into the training they registered for
    pub async fn approve(&self, id: i32) -> Result<Student, AppError> {
        self.set_status(id, StudentStatus::Validated).await
    }

    pub async fn reject(&self, id: i32) -> Result<Student, AppError> {
        self.set_status(id, StudentStatus::Rejected).await
    }

    async fn set_status(&self, id: i32, status: StudentStatus) -> Result<Student, AppError> {
        if !StudentRepository::new(self.db).set_status(id, status).await? {
            return Err(not_found(id));
        }

        self.get_by_id(id).await
    }

    /// Loads the requested training, adding a `training_id` error when it does not exist
    async fn check_training(
        &self,
        training_id: Option<i32>,
        errors: ValidationError,
    ) -> Result<(Option<Training>, ValidationError), AppError> {
        let Some(training_id) = training_id else {
            return Ok((None, errors));
        };

        match TrainingRepository::new(self.db).get_by_id(training_id).await? {
            Some(training) => Ok((Some(training), errors)),
            None => Ok((
                None,
                errors.with_field("training_id", "La formation sélectionnée est invalide."),
            )),
        }
    }
}

fn registration_message(student: &Student, training: Option<&Training>) -> String {
    match training {
        Some(training) => format!(
            "{} {} demande à rejoindre la formation « {} ».",
            student.first_name, student.last_name, training.title
        ),
        None => format!(
            "{} {} s'est inscrit sans choisir de formation.",
            student.first_name, student.last_name
        ),
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Étudiant #{} introuvable.", id))
}

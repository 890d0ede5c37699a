use sea_orm::DatabaseConnection;

use crate::server::{
    data::{exam::ExamRepository, exam_result::ExamResultRepository, student::StudentRepository},
    error::{validation::ValidationError, AppError},
    model::result::{is_valid_score, ExamResult, ExamResultWithStudent, SaveResultParams},
};

pub struct ResultService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResultService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records or replaces the score of a student for an exam.
    ///
    /// At most one result exists per (exam, student); saving again overwrites the score
    /// and recomputes `passed`.
    ///
    /// # Returns
    /// - `Ok(ExamResult)` - The stored result
    /// - `Err(AppError::ValidationErr)` - Score outside 0-20 or unknown student
    /// - `Err(AppError::NotFound)` - Unknown exam
    pub async fn save(&self, params: SaveResultParams) -> Result<ExamResult, AppError> {
        if !is_valid_score(params.score) {
            return Err(ValidationError::field(
                "score",
                "La note doit être comprise entre 0 et 20.",
            )
            .into());
        }

        if ExamRepository::new(self.db)
            .get_by_id(params.exam_id)
            .await?
            .is_none()
        {
            return Err(exam_not_found(params.exam_id));
        }

        if !StudentRepository::new(self.db)
            .exists(params.student_id)
            .await?
        {
            return Err(ValidationError::field(
                "student_id",
                "L'étudiant sélectionné est invalide.",
            )
            .into());
        }

        Ok(ExamResultRepository::new(self.db).upsert(params).await?)
    }

    /// Gets the results of an exam with their students
    pub async fn get_by_exam_id(&self, exam_id: i32) -> Result<Vec<ExamResultWithStudent>, AppError> {
        if ExamRepository::new(self.db)
            .get_by_id(exam_id)
            .await?
            .is_none()
        {
            return Err(exam_not_found(exam_id));
        }

        Ok(ExamResultRepository::new(self.db)
            .get_by_exam_id_with_students(exam_id)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<ExamResult, AppError> {
        ExamResultRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ExamResultRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Résultat #{} introuvable.", id))
}

fn exam_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Examen #{} introuvable.", id))
}

//! Global results report over every finished training.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        exam::ExamRepository, exam_result::ExamResultRepository, student::StudentRepository,
        training::TrainingRepository,
    },
    error::AppError,
    model::{completion::TrainingGlobalResultRow, exam::Exam, result::ExamResult},
    service::verdict,
};

pub struct GlobalResultsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GlobalResultsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds one row per (finished training, enrolled student).
    ///
    /// Trainings are ordered by ID and students by ID within a training. Every student
    /// enrolled in the training is listed whatever their registration status. Each row
    /// holds the student's results for that training's exams, ordered by exam ID, and the
    /// final verdict computed from the two most recent exams. The report is read only and
    /// reflects results as they are stored now.
    pub async fn compute(&self) -> Result<Vec<TrainingGlobalResultRow>, AppError> {
        let trainings = TrainingRepository::new(self.db).get_finished().await?;
        if trainings.is_empty() {
            return Ok(Vec::new());
        }

        let training_ids: Vec<i32> = trainings.iter().map(|t| t.id).collect();

        let exams = ExamRepository::new(self.db)
            .get_by_training_ids(&training_ids)
            .await?;
        let exam_ids: Vec<i32> = exams.iter().map(|e| e.id).collect();
        let results = ExamResultRepository::new(self.db)
            .get_by_exam_ids(&exam_ids)
            .await?;
        let students = StudentRepository::new(self.db)
            .get_by_training_ids(&training_ids)
            .await?;

        let exam_training: HashMap<i32, i32> =
            exams.iter().map(|e| (e.id, e.training_id)).collect();

        let mut exams_by_training: HashMap<i32, Vec<Exam>> = HashMap::new();
        for exam in exams {
            exams_by_training
                .entry(exam.training_id)
                .or_default()
                .push(exam);
        }

        let mut results_by_training: HashMap<i32, Vec<ExamResult>> = HashMap::new();
        for result in results {
            if let Some(training_id) = exam_training.get(&result.exam_id) {
                results_by_training
                    .entry(*training_id)
                    .or_default()
                    .push(result);
            }
        }

        let mut rows = Vec::new();
        for training in trainings {
            let training_exams = exams_by_training
                .get(&training.id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            let training_results = results_by_training
                .get(&training.id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            let last_two = verdict::last_two_exam_ids(training_exams);

            for student in students
                .iter()
                .filter(|s| s.training_id == Some(training.id))
            {
                let student_results = verdict::results_for_student(student.id, training_results);
                rows.push(TrainingGlobalResultRow {
                    training_id: training.id,
                    training_title: training.title.clone(),
                    student_id: student.id,
                    first_name: student.first_name.clone(),
                    last_name: student.last_name.clone(),
                    email: student.email.clone(),
                    status: student.status,
                    final_result: verdict::final_verdict(&last_two, &student_results),
                    results: student_results,
                });
            }
        }

        Ok(rows)
    }
}

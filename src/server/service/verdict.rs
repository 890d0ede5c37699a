//! Final verdict rules.
//!
//! A student passes a training when they passed both of its two most recent exams.
//! Exams are ranked by date, newest first; undated exams rank after every dated exam
//! and ties are broken by the higher exam ID. A training with fewer than two exams
//! therefore never yields a pass.

use std::cmp::Ordering;

use crate::{
    model::result::FinalVerdict,
    server::model::{completion::StudentExamResult, exam::Exam, result::ExamResult},
};

/// IDs of the (at most) two most recent exams, most recent first.
pub fn last_two_exam_ids(exams: &[Exam]) -> Vec<i32> {
    let mut ranked: Vec<&Exam> = exams.iter().collect();
    ranked.sort_by(|a, b| match (a.date, b.date) {
        (Some(a_date), Some(b_date)) => b_date.cmp(&a_date).then(b.id.cmp(&a.id)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.id.cmp(&a.id),
    });

    ranked.into_iter().take(2).map(|exam| exam.id).collect()
}

/// Verdict for one student given the two most recent exam IDs and the student's results.
pub fn final_verdict(last_two: &[i32], results: &[StudentExamResult]) -> FinalVerdict {
    let relevant: Vec<&StudentExamResult> = results
        .iter()
        .filter(|result| last_two.contains(&result.exam_id))
        .collect();

    if last_two.len() == 2 && relevant.len() == 2 && relevant.iter().all(|r| r.passed) {
        FinalVerdict::Passed
    } else {
        FinalVerdict::Failed
    }
}

/// One student's results taken from `results`, ordered by exam ID.
///
/// `results` is expected to hold only results for the exams of a single training.
pub fn results_for_student(student_id: i32, results: &[ExamResult]) -> Vec<StudentExamResult> {
    let mut student_results: Vec<StudentExamResult> = results
        .iter()
        .filter(|result| result.student_id == student_id)
        .map(|result| StudentExamResult {
            exam_id: result.exam_id,
            score: result.score,
            passed: result.passed,
        })
        .collect();
    student_results.sort_by_key(|result| result.exam_id);

    student_results
}

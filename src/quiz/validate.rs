//! Structural validation of a loaded quiz set.
//!
//! A quiz set that fails any of these checks is never installed into the
//! session; the error message becomes the session's load error.

use thiserror::Error;

use super::model::{Question, QuizSet};

/// Minimum number of options per question.
pub const MIN_OPTIONS: usize = 2;

/// Structural defects of a quiz payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizSetError {
    #[error("Quiz contains no questions")]
    NoQuestions,

    #[error("Question {question_id} has {count} option(s); at least 2 are required")]
    TooFewOptions { question_id: u32, count: usize },

    #[error("Question {question_id}: correct answer '{answer}' is not one of its options")]
    AnswerNotAnOption { question_id: u32, answer: String },

    #[error("Question {question_id}: correct answer '{answer}' matches {matches} options")]
    AmbiguousAnswer {
        question_id: u32,
        answer: String,
        matches: usize,
    },

    #[error("Question {question_id} has no point value")]
    ZeroMark { question_id: u32 },

    #[error("Quiz declares {declared} questions but contains {actual}")]
    QuestionCountMismatch { declared: u32, actual: usize },

    #[error("Quiz declares {declared} total marks but its questions sum to {actual}")]
    TotalMarksMismatch { declared: u32, actual: u32 },

    #[error("Quiz has no time budget")]
    NoTimeBudget,
}

impl QuizSet {
    /// Validates every structural invariant of the quiz set.
    ///
    /// Checks run in order and the first violation is returned:
    /// - at least one question
    /// - every question is well formed (see [`validate_question`])
    /// - declared question count and total marks agree with the questions
    /// - a non-zero time budget
    pub fn validate(&self) -> Result<(), QuizSetError> {
        if self.questions.is_empty() {
            return Err(QuizSetError::NoQuestions);
        }

        for question in &self.questions {
            validate_question(question)?;
        }

        if self.total_questions as usize != self.questions.len() {
            return Err(QuizSetError::QuestionCountMismatch {
                declared: self.total_questions,
                actual: self.questions.len(),
            });
        }

        let actual = self.marks_sum();
        if self.total_marks != actual {
            return Err(QuizSetError::TotalMarksMismatch {
                declared: self.total_marks,
                actual,
            });
        }

        if self.time_in_minutes == 0 {
            return Err(QuizSetError::NoTimeBudget);
        }

        Ok(())
    }
}

/// A question needs two or more options, a correct answer that equals
/// exactly one of them, and a positive mark.
pub fn validate_question(question: &Question) -> Result<(), QuizSetError> {
    if question.options.len() < MIN_OPTIONS {
        return Err(QuizSetError::TooFewOptions {
            question_id: question.id,
            count: question.options.len(),
        });
    }

    let matches = question
        .options
        .iter()
        .filter(|option| **option == question.answer)
        .count();
    match matches {
        1 => {}
        0 => {
            return Err(QuizSetError::AnswerNotAnOption {
                question_id: question.id,
                answer: question.answer.clone(),
            })
        }
        matches => {
            return Err(QuizSetError::AmbiguousAnswer {
                question_id: question.id,
                answer: question.answer.clone(),
                matches,
            })
        }
    }

    if question.mark == 0 {
        return Err(QuizSetError::ZeroMark {
            question_id: question.id,
        });
    }

    Ok(())
}

//! Quiz content: questions, quiz sets, validation and result reports.

mod model;
mod report;
mod validate;

pub use model::{Question, QuizSet};
pub use report::{Grade, QuestionOutcome, QuizReport, NO_ANSWER};
pub use validate::{validate_question, QuizSetError, MIN_OPTIONS};

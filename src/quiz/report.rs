//! Post-quiz summary: percentage, grade tier and per-question review.

use super::model::{Question, QuizSet};

/// Shown in place of an answer for unanswered questions.
pub const NO_ANSWER: &str = "No answer";

/// Performance tier derived from the score percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Excellent,
    VeryGood,
    Good,
    Acceptable,
    NeedsReview,
}

impl Grade {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => Grade::Excellent,
            80..=89 => Grade::VeryGood,
            70..=79 => Grade::Good,
            60..=69 => Grade::Acceptable,
            _ => Grade::NeedsReview,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent! Outstanding performance",
            Grade::VeryGood => "Very Good! Well done",
            Grade::Good => "Good! You can improve more",
            Grade::Acceptable => "Acceptable, try again",
            Grade::NeedsReview => "Need to review",
        }
    }
}

/// Review line for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOutcome<'a> {
    pub index: usize,
    pub question: &'a Question,
    pub given: Option<&'a str>,
    pub is_correct: bool,
}

impl QuestionOutcome<'_> {
    /// The user's answer, or [`NO_ANSWER`].
    pub fn given_or_placeholder(&self) -> &str {
        self.given.unwrap_or(NO_ANSWER)
    }
}

/// Summary of a finished quiz.
#[derive(Debug, Clone, Copy)]
pub struct QuizReport<'a> {
    quiz: &'a QuizSet,
    answers: &'a [Option<String>],
    score: u32,
}

impl<'a> QuizReport<'a> {
    pub fn new(quiz: &'a QuizSet, answers: &'a [Option<String>], score: u32) -> Self {
        Self {
            quiz,
            answers,
            score,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total_marks(&self) -> u32 {
        self.quiz.total_marks
    }

    /// Score as a rounded percentage of the total marks.
    pub fn percentage(&self) -> u32 {
        if self.quiz.total_marks == 0 {
            return 0;
        }
        let ratio = f64::from(self.score) / f64::from(self.quiz.total_marks);
        (ratio * 100.0).round() as u32
    }

    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage())
    }

    pub fn outcomes(&self) -> impl Iterator<Item = QuestionOutcome<'a>> + 'a {
        let answers = self.answers;
        let quiz = self.quiz;
        quiz.questions
            .iter()
            .enumerate()
            .map(move |(index, question)| {
                let given = answers.get(index).and_then(|slot| slot.as_deref());
                QuestionOutcome {
                    index,
                    question,
                    given,
                    is_correct: question.is_correct(given),
                }
            })
    }

    pub fn correct_count(&self) -> usize {
        self.outcomes().filter(|outcome| outcome.is_correct).count()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|slot| slot.is_some()).count()
    }
}

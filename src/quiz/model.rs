use serde::{Deserialize, Serialize};

/// A single multiple-choice question.
///
/// Options are identified by position: "the Nth option", not by their text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    /// Prompt text shown to the user.
    pub question: String,
    pub options: Vec<String>,
    /// Correct option text. Must equal exactly one entry of `options`.
    pub answer: String,
    /// Optional image reference (usually a URL).
    #[serde(default)]
    pub image: Option<String>,
    /// Point value awarded for a correct answer.
    pub mark: u32,
}

impl Question {
    /// True when `given` is exactly the correct option text.
    ///
    /// An absent answer never matches.
    pub fn is_correct(&self, given: Option<&str>) -> bool {
        given.is_some_and(|given| given == self.answer)
    }

    /// Position of `text` among the options, if present.
    pub fn option_index(&self, text: &str) -> Option<usize> {
        self.options.iter().position(|option| option == text)
    }
}

/// The full ordered collection of questions for one quiz instance.
///
/// Field names follow the camelCase wire payload of the quiz service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSet {
    pub id: String,
    pub title: String,
    pub total_marks: u32,
    pub total_questions: u32,
    pub time_in_minutes: u32,
    pub questions: Vec<Question>,
}

impl QuizSet {
    /// Number of questions actually present.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Countdown budget in seconds.
    pub fn time_budget_secs(&self) -> u32 {
        self.time_in_minutes.saturating_mul(60)
    }

    /// Sum of the marks of every question.
    pub fn marks_sum(&self) -> u32 {
        self.questions.iter().map(|question| question.mark).sum()
    }

    /// Score for an index-aligned answer sheet.
    ///
    /// Unanswered and wrong questions contribute nothing; slots beyond the
    /// question list are ignored.
    pub fn score(&self, answers: &[Option<String>]) -> u32 {
        self.questions
            .iter()
            .zip(answers)
            .filter(|(question, given)| question.is_correct(given.as_deref()))
            .map(|(question, _)| question.mark)
            .sum()
    }
}

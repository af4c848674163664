//! State for the quiz session.

use std::sync::Arc;

use crate::mvi::ModelState;
use crate::quiz::QuizSet;

/// Identity of one fetch request.
///
/// A fetch result is only accepted while the session is still `Loading`
/// with the same ticket; anything else is a stale response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(pub u64);

/// Coarse lifecycle stage of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    InProgress,
    Finished,
}

/// Per-attempt answering progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    /// Always a valid index into the quiz's questions.
    pub current_index: usize,
    /// One slot per question, index-aligned with the quiz.
    pub answers: Vec<Option<String>>,
    pub time_remaining_secs: u32,
}

impl Progress {
    /// Empty answer sheet and full time budget for `quiz`.
    pub fn fresh(quiz: &QuizSet) -> Self {
        Self {
            current_index: 0,
            answers: vec![None; quiz.len()],
            time_remaining_secs: quiz.time_budget_secs(),
        }
    }

    pub fn current_answer(&self) -> Option<&str> {
        self.answers
            .get(self.current_index)
            .and_then(|slot| slot.as_deref())
    }
}

/// Quiz session state machine.
///
/// Idle → Loading → InProgress → Finished. A failed load returns to Idle
/// with `load_error` set. A quiz is held exactly in `InProgress` and
/// `Finished`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Idle {
        load_error: Option<String>,
    },

    Loading {
        ticket: LoadTicket,
    },

    InProgress {
        quiz: Arc<QuizSet>,
        progress: Progress,
    },

    Finished {
        quiz: Arc<QuizSet>,
        progress: Progress,
        score: u32,
    },
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::Idle { load_error: None }
    }
}

impl ModelState for SessionState {}

impl SessionState {
    pub fn phase(&self) -> Phase {
        match self {
            Self::Idle { .. } => Phase::Idle,
            Self::Loading { .. } => Phase::Loading,
            Self::InProgress { .. } => Phase::InProgress,
            Self::Finished { .. } => Phase::Finished,
        }
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::InProgress { .. })
    }

    pub fn quiz_set(&self) -> Option<&Arc<QuizSet>> {
        match self {
            Self::InProgress { quiz, .. } | Self::Finished { quiz, .. } => Some(quiz),
            Self::Idle { .. } | Self::Loading { .. } => None,
        }
    }

    pub fn progress(&self) -> Option<&Progress> {
        match self {
            Self::InProgress { progress, .. } | Self::Finished { progress, .. } => Some(progress),
            Self::Idle { .. } | Self::Loading { .. } => None,
        }
    }

    pub fn current_index(&self) -> usize {
        self.progress().map_or(0, |progress| progress.current_index)
    }

    /// Answer slots; empty before a quiz is loaded.
    pub fn answers(&self) -> &[Option<String>] {
        self.progress().map_or(&[], |progress| &progress.answers)
    }

    /// Final score; 0 unless the session is finished.
    pub fn score(&self) -> u32 {
        match self {
            Self::Finished { score, .. } => *score,
            _ => 0,
        }
    }

    pub fn load_error(&self) -> Option<&str> {
        match self {
            Self::Idle { load_error } => load_error.as_deref(),
            _ => None,
        }
    }

    pub fn time_remaining_secs(&self) -> u32 {
        self.progress()
            .map_or(0, |progress| progress.time_remaining_secs)
    }

    pub fn pending_ticket(&self) -> Option<LoadTicket> {
        match self {
            Self::Loading { ticket } => Some(*ticket),
            _ => None,
        }
    }
}

//! Intents for the quiz session.

use crate::mvi::Intent;
use crate::quiz::QuizSet;

use super::state::LoadTicket;

/// Intents that can be dispatched to the session reducer.
#[derive(Debug, Clone)]
pub enum SessionIntent {
    /// A fetch has been requested under `ticket`.
    BeginLoad { ticket: LoadTicket },

    /// The fetch for `ticket` returned a payload (not yet validated).
    LoadSucceeded { ticket: LoadTicket, quiz: QuizSet },

    /// The fetch for `ticket` failed.
    LoadFailed { ticket: LoadTicket, message: String },

    /// Record `option` as the answer to the current question.
    SelectAnswer { option: String },

    /// Move to the next question, finishing on the last one.
    Advance,

    /// Move to the previous question.
    Retreat,

    /// Stop answering and compute the score.
    Finish,

    /// Retake the held quiz, or return to Idle when none is held.
    Reset,

    /// One second of the countdown has elapsed.
    Tick,
}

impl SessionIntent {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            SessionIntent::BeginLoad { .. } => "begin_load",
            SessionIntent::LoadSucceeded { .. } => "load_succeeded",
            SessionIntent::LoadFailed { .. } => "load_failed",
            SessionIntent::SelectAnswer { .. } => "select_answer",
            SessionIntent::Advance => "advance",
            SessionIntent::Retreat => "retreat",
            SessionIntent::Finish => "finish",
            SessionIntent::Reset => "reset",
            SessionIntent::Tick => "tick",
        }
    }
}

impl Intent for SessionIntent {}

//! Reducer for the quiz session.

use std::sync::Arc;

use crate::mvi::Reducer;
use crate::quiz::QuizSet;

use super::intent::SessionIntent;
use super::state::{LoadTicket, Progress, SessionState};

/// Reducer for session state transitions.
///
/// Intents that do not apply to the current phase return the state
/// unchanged.
pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::BeginLoad { ticket } => match state {
                SessionState::Idle { .. } => SessionState::Loading { ticket },
                other => other,
            },

            SessionIntent::LoadSucceeded { ticket, quiz } => match state {
                SessionState::Loading { ticket: pending } if pending == ticket => install(quiz),
                other => other,
            },

            SessionIntent::LoadFailed { ticket, message } => match state {
                SessionState::Loading { ticket: pending } if pending == ticket => {
                    SessionState::Idle {
                        load_error: Some(message),
                    }
                }
                other => other,
            },

            SessionIntent::SelectAnswer { option } => match state {
                SessionState::InProgress { quiz, mut progress } => {
                    if let Some(slot) = progress.answers.get_mut(progress.current_index) {
                        *slot = Some(option);
                    }
                    SessionState::InProgress { quiz, progress }
                }
                other => other,
            },

            SessionIntent::Advance => match state {
                SessionState::InProgress { quiz, mut progress } => {
                    if progress.current_index + 1 >= quiz.len() {
                        finish(quiz, progress)
                    } else {
                        progress.current_index += 1;
                        SessionState::InProgress { quiz, progress }
                    }
                }
                other => other,
            },

            SessionIntent::Retreat => match state {
                SessionState::InProgress { quiz, mut progress } => {
                    progress.current_index = progress.current_index.saturating_sub(1);
                    SessionState::InProgress { quiz, progress }
                }
                other => other,
            },

            SessionIntent::Finish => match state {
                SessionState::InProgress { quiz, progress } => finish(quiz, progress),
                other => other,
            },

            SessionIntent::Reset => match state {
                SessionState::InProgress { quiz, .. } | SessionState::Finished { quiz, .. } => {
                    let progress = Progress::fresh(&quiz);
                    SessionState::InProgress { quiz, progress }
                }
                SessionState::Idle { .. } | SessionState::Loading { .. } => {
                    SessionState::Idle { load_error: None }
                }
            },

            SessionIntent::Tick => match state {
                SessionState::InProgress { quiz, mut progress } => {
                    progress.time_remaining_secs = progress.time_remaining_secs.saturating_sub(1);
                    if progress.time_remaining_secs == 0 {
                        finish(quiz, progress)
                    } else {
                        SessionState::InProgress { quiz, progress }
                    }
                }
                other => other,
            },
        }
    }
}

/// Validated quiz becomes a fresh attempt; a defective one becomes a load
/// error with nothing retained.
fn install(quiz: QuizSet) -> SessionState {
    match quiz.validate() {
        Ok(()) => {
            let progress = Progress::fresh(&quiz);
            SessionState::InProgress {
                quiz: Arc::new(quiz),
                progress,
            }
        }
        Err(err) => SessionState::Idle {
            load_error: Some(err.to_string()),
        },
    }
}

fn finish(quiz: Arc<QuizSet>, progress: Progress) -> SessionState {
    let score = quiz.score(&progress.answers);
    SessionState::Finished {
        quiz,
        progress,
        score,
    }
}

/// Whether a fetch result carrying `ticket` would be applied to `state`.
pub fn accepts(state: &SessionState, ticket: LoadTicket) -> bool {
    state.pending_ticket() == Some(ticket)
}

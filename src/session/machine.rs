//! Session machine: the reducer plus the resources tied to its phases.

use crate::mvi::Reducer;
use crate::quiz::QuizSet;

use super::countdown::{TickSource, TickerGuard};
use super::intent::SessionIntent;
use super::reducer::{accepts, SessionReducer};
use super::state::{LoadTicket, Phase, SessionState};

/// Apply an intent to a state field through its reducer.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Owns the session state and its countdown.
///
/// A countdown runs exactly while the state is `InProgress`. Each fetch is
/// issued under a fresh [`LoadTicket`] and each countdown under a fresh
/// generation, so late fetch results and late ticks are dropped.
pub struct SessionMachine {
    state: SessionState,
    ticks: Box<dyn TickSource>,
    countdown: Option<TickerGuard>,
    next_ticket: u64,
    next_generation: u64,
}

impl SessionMachine {
    pub fn new(ticks: Box<dyn TickSource>) -> Self {
        Self {
            state: SessionState::default(),
            ticks,
            countdown: None,
            next_ticket: 1,
            next_generation: 1,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Enter `Loading` and return the ticket the fetch must report back
    /// with. `None` when a load cannot start from the current phase.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.state.phase() != Phase::Idle {
            tracing::debug!(phase = ?self.state.phase(), "begin_load ignored");
            return None;
        }
        let ticket = LoadTicket(self.next_ticket);
        self.next_ticket += 1;
        self.dispatch(SessionIntent::BeginLoad { ticket });
        Some(ticket)
    }

    pub fn load_succeeded(&mut self, ticket: LoadTicket, quiz: QuizSet) {
        if !accepts(&self.state, ticket) {
            tracing::debug!(ticket = ticket.0, "Discarding stale quiz response");
            return;
        }
        let title = quiz.title.clone();
        self.dispatch(SessionIntent::LoadSucceeded { ticket, quiz });
        match self.state.load_error() {
            Some(error) => tracing::warn!(ticket = ticket.0, %error, "Rejected quiz payload"),
            None => tracing::info!(
                ticket = ticket.0,
                title = %title,
                questions = self.state.answers().len(),
                "Quiz loaded"
            ),
        }
    }

    pub fn load_failed(&mut self, ticket: LoadTicket, message: impl Into<String>) {
        if !accepts(&self.state, ticket) {
            tracing::debug!(ticket = ticket.0, "Discarding stale load failure");
            return;
        }
        let message = message.into();
        tracing::warn!(ticket = ticket.0, error = %message, "Quiz load failed");
        self.dispatch(SessionIntent::LoadFailed { ticket, message });
    }

    pub fn select_answer(&mut self, option: impl Into<String>) {
        self.dispatch(SessionIntent::SelectAnswer {
            option: option.into(),
        });
    }

    pub fn advance(&mut self) {
        self.dispatch(SessionIntent::Advance);
    }

    pub fn retreat(&mut self) {
        self.dispatch(SessionIntent::Retreat);
    }

    pub fn finish(&mut self) {
        self.dispatch(SessionIntent::Finish);
    }

    pub fn reset(&mut self) {
        self.dispatch(SessionIntent::Reset);
    }

    /// One second elapsed.
    pub fn tick(&mut self) {
        self.dispatch(SessionIntent::Tick);
    }

    /// Tick delivered by a ticker. Ticks from a stopped ticker are ignored.
    pub fn on_countdown_tick(&mut self, generation: u64) {
        if self.countdown_generation() != Some(generation) {
            tracing::trace!(generation, "Ignoring stale countdown tick");
            return;
        }
        self.tick();
    }

    /// Generation of the running countdown, if any.
    pub fn countdown_generation(&self) -> Option<u64> {
        self.countdown.as_ref().map(TickerGuard::generation)
    }

    pub fn is_countdown_running(&self) -> bool {
        self.countdown.is_some()
    }

    fn dispatch(&mut self, intent: SessionIntent) {
        let name = intent.name();
        let restarts_attempt = matches!(intent, SessionIntent::Reset);
        let before = self.state.clone();

        dispatch_mvi!(self, state, SessionReducer, intent);

        let from = before.phase();
        let to = self.state.phase();
        // A reset restarts the attempt even when the fresh state equals the old one.
        let restarted = restarts_attempt && to == Phase::InProgress;
        if self.state == before && !restarted {
            tracing::debug!(intent = name, phase = ?from, "intent left session unchanged");
            return;
        }

        if to != Phase::InProgress {
            self.stop_countdown();
        } else if from != Phase::InProgress || restarted {
            self.start_countdown();
        }

        if from != to {
            tracing::info!(intent = name, from = ?from, to = ?to, "Session phase changed");
        }
    }

    fn start_countdown(&mut self) {
        // Old ticker must be gone before the new one starts.
        self.stop_countdown();
        let generation = self.next_generation;
        self.next_generation += 1;
        self.countdown = Some(self.ticks.start(generation));
    }

    fn stop_countdown(&mut self) {
        self.countdown = None;
    }
}

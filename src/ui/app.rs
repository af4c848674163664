use tokio::sync::mpsc;

use crate::quiz::{Question, QuizSet};
use crate::session::{LoadTicket, Phase, SessionMachine, SessionState};

/// Requests from the UI thread to the async side.
#[derive(Debug)]
pub enum UiCommand {
    FetchQuiz { ticket: LoadTicket },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

pub struct App {
    should_quit: bool,
    /// Session state and its countdown.
    session: SessionMachine,
    command_sender: Option<UiCommandSender>,
    /// Where quizzes are loaded from, for display.
    source_label: String,
    /// Highlighted option on the question screen.
    option_cursor: usize,
    /// First visible line of the result review.
    review_scroll: u16,
    animation_tick: u8,
}

impl App {
    pub fn new(session: SessionMachine, source_label: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            session,
            command_sender: None,
            source_label: source_label.into(),
            option_cursor: 0,
            review_scroll: 0,
            animation_tick: 0,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn session(&self) -> &SessionState {
        self.session.state()
    }

    pub fn machine(&self) -> &SessionMachine {
        &self.session
    }

    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    pub fn option_cursor(&self) -> usize {
        self.option_cursor
    }

    pub fn review_scroll(&self) -> u16 {
        self.review_scroll
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn on_tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
    }

    /// Question currently on screen, while a quiz is in progress.
    pub fn current_question(&self) -> Option<&Question> {
        let state = self.session.state();
        if state.phase() != Phase::InProgress {
            return None;
        }
        state
            .quiz_set()
            .and_then(|quiz| quiz.questions.get(state.current_index()))
    }

    /// Whether the current question has an answer. Gates moving forward.
    pub fn current_answered(&self) -> bool {
        self.session
            .state()
            .progress()
            .and_then(|progress| progress.current_answer())
            .is_some()
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// Start loading a quiz. Returns false when a load cannot start.
    pub fn start_quiz(&mut self) -> bool {
        let Some(ticket) = self.session.begin_load() else {
            return false;
        };
        if let Err(message) = self.send_command(UiCommand::FetchQuiz { ticket }) {
            self.session.load_failed(ticket, message);
            return false;
        }
        true
    }

    /// Abandon an in-flight load. Its result will be discarded.
    pub fn cancel_load(&mut self) {
        if self.session.state().phase() == Phase::Loading {
            self.session.reset();
        }
    }

    pub fn on_quiz_fetched(&mut self, ticket: LoadTicket, result: Result<QuizSet, String>) {
        match result {
            Ok(quiz) => self.session.load_succeeded(ticket, quiz),
            Err(message) => self.session.load_failed(ticket, message),
        }
        self.sync_cursor();
    }

    pub fn on_countdown_tick(&mut self, generation: u64) {
        self.session.on_countdown_tick(generation);
        if self.session.state().phase() == Phase::Finished {
            self.review_scroll = 0;
        }
    }

    // ========================================================================
    // Answering
    // ========================================================================

    pub fn move_cursor(&mut self, delta: isize) {
        let Some(count) = self.current_question().map(|question| question.options.len()) else {
            return;
        };
        if count == 0 {
            return;
        }
        let next = self.option_cursor as isize + delta;
        self.option_cursor = next.clamp(0, count as isize - 1) as usize;
    }

    pub fn choose_at_cursor(&mut self) -> bool {
        self.choose_option(self.option_cursor)
    }

    /// Answer the current question with its option at `index`.
    pub fn choose_option(&mut self, index: usize) -> bool {
        let Some(option) = self
            .current_question()
            .and_then(|question| question.options.get(index))
            .cloned()
        else {
            return false;
        };
        self.session.select_answer(option);
        self.option_cursor = index;
        true
    }

    /// Move forward, finishing on the last question. Ignored while the
    /// current question is unanswered.
    pub fn next_question(&mut self) -> bool {
        if self.current_question().is_none() || !self.current_answered() {
            return false;
        }
        self.session.advance();
        self.after_navigation();
        true
    }

    pub fn previous_question(&mut self) -> bool {
        if self.current_question().is_none() || self.session.state().current_index() == 0 {
            return false;
        }
        self.session.retreat();
        self.after_navigation();
        true
    }

    pub fn finish_quiz(&mut self) {
        self.session.finish();
        self.after_navigation();
    }

    /// Retake the held quiz, or clear back to the start screen.
    pub fn restart(&mut self) {
        self.session.reset();
        self.after_navigation();
    }

    pub fn scroll_review(&mut self, delta: i16) {
        self.review_scroll = self.review_scroll.saturating_add_signed(delta);
    }

    fn after_navigation(&mut self) {
        self.review_scroll = 0;
        self.sync_cursor();
    }

    /// Put the cursor on the stored answer of the current question.
    fn sync_cursor(&mut self) {
        let answered = self
            .session
            .state()
            .progress()
            .and_then(|progress| progress.current_answer())
            .map(str::to_owned);
        self.option_cursor = match (self.current_question(), answered) {
            (Some(question), Some(answer)) => question.option_index(&answer).unwrap_or(0),
            _ => 0,
        };
    }

    fn send_command(&mut self, command: UiCommand) -> Result<(), String> {
        let Some(sender) = &self.command_sender else {
            return Err("Quiz source is not connected".to_string());
        };
        sender
            .try_send(command)
            .map_err(|err| format!("Failed to request questions: {}", err))
    }
}

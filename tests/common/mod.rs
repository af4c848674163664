//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use parking_lot::Mutex;
use quizterm::quiz::{Question, QuizSet};
use quizterm::session::{SessionMachine, TickSource, TickerGuard};
use std::sync::Arc;

/// Ticker that never fires on its own. Records every start and stop so
/// tests can assert on the countdown lifecycle and deliver ticks by hand.
#[derive(Clone, Default)]
pub struct ManualTicks {
    log: Arc<Mutex<TickLog>>,
}

#[derive(Debug, Default)]
pub struct TickLog {
    pub started: Vec<u64>,
    pub stopped: Vec<u64>,
}

impl ManualTicks {
    pub fn started(&self) -> Vec<u64> {
        self.log.lock().started.clone()
    }

    pub fn stopped(&self) -> Vec<u64> {
        self.log.lock().stopped.clone()
    }

    /// Number of tickers started and not yet stopped.
    pub fn live(&self) -> usize {
        let log = self.log.lock();
        log.started.len() - log.stopped.len()
    }
}

impl TickSource for ManualTicks {
    fn start(&self, generation: u64) -> TickerGuard {
        self.log.lock().started.push(generation);
        let log = Arc::clone(&self.log);
        TickerGuard::new(generation, move || log.lock().stopped.push(generation))
    }
}

/// Machine backed by [`ManualTicks`], plus a handle on the ticks.
pub fn manual_machine() -> (SessionMachine, ManualTicks) {
    let ticks = ManualTicks::default();
    (SessionMachine::new(Box::new(ticks.clone())), ticks)
}

pub fn question(id: u32, options: &[&str], answer: &str, mark: u32) -> Question {
    Question {
        id,
        question: format!("Question {id}"),
        options: options.iter().map(|option| option.to_string()).collect(),
        answer: answer.to_string(),
        image: None,
        mark,
    }
}

/// Consistent quiz set built from `questions`.
pub fn quiz_from(questions: Vec<Question>, time_in_minutes: u32) -> QuizSet {
    QuizSet {
        id: "fixture".to_string(),
        title: "Fixture Quiz".to_string(),
        total_marks: questions.iter().map(|question| question.mark).sum(),
        total_questions: questions.len() as u32,
        time_in_minutes,
        questions,
    }
}

/// Two questions, marks [5, 6], correct answers ["A", "B"].
pub fn two_question_quiz() -> QuizSet {
    quiz_from(
        vec![
            question(1, &["A", "B", "C"], "A", 5),
            question(2, &["A", "B", "C"], "B", 6),
        ],
        1,
    )
}

/// Three questions, one minute.
pub fn three_question_quiz() -> QuizSet {
    quiz_from(
        vec![
            question(1, &["red", "green"], "red", 1),
            question(2, &["cat", "dog", "cow"], "dog", 2),
            question(3, &["north", "south"], "south", 3),
        ],
        1,
    )
}

/// Machine with `quiz` loaded and in progress.
pub fn started(quiz: QuizSet) -> (SessionMachine, ManualTicks) {
    let (mut machine, ticks) = manual_machine();
    let ticket = machine.begin_load().expect("idle machine accepts begin_load");
    machine.load_succeeded(ticket, quiz);
    (machine, ticks)
}

pub const QUIZ_JSON: &str = r#"{
    "id": "geo",
    "title": "Geography",
    "totalMarks": 5,
    "totalQuestions": 2,
    "timeInMinutes": 3,
    "questions": [
        {"id": 1, "question": "Capital of France?", "options": ["Paris", "Rome", "Madrid"], "answer": "Paris", "image": null, "mark": 2},
        {"id": 2, "question": "Longest river?", "options": ["Nile", "Danube"], "answer": "Nile", "image": "https://example.com/river.png", "mark": 3}
    ]
}"#;

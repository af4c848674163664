mod common;

use std::sync::Arc;

use quizterm::mvi::Reducer;
use quizterm::session::{LoadTicket, Phase, SessionIntent, SessionReducer, SessionState};

use common::{question, quiz_from, three_question_quiz, two_question_quiz};

fn reduce_all(state: SessionState, intents: Vec<SessionIntent>) -> SessionState {
    intents.into_iter().fold(state, SessionReducer::reduce)
}

fn in_progress(quiz: quizterm::quiz::QuizSet) -> SessionState {
    reduce_all(
        SessionState::default(),
        vec![
            SessionIntent::BeginLoad {
                ticket: LoadTicket(1),
            },
            SessionIntent::LoadSucceeded {
                ticket: LoadTicket(1),
                quiz,
            },
        ],
    )
}

fn select(option: &str) -> SessionIntent {
    SessionIntent::SelectAnswer {
        option: option.to_string(),
    }
}

#[test]
fn loaded_quiz_has_one_empty_slot_per_question() {
    for count in 1..=5u32 {
        let questions = (1..=count)
            .map(|id| question(id, &["x", "y"], "x", 1))
            .collect();
        let state = in_progress(quiz_from(questions, 2));
        assert_eq!(state.answers().len(), count as usize);
        assert!(state.answers().iter().all(Option::is_none));
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.time_remaining_secs(), 120);
    }
}

#[test]
fn select_answer_only_touches_current_slot() {
    let state = reduce_all(
        in_progress(three_question_quiz()),
        vec![SessionIntent::Advance, select("dog")],
    );
    assert_eq!(
        state.answers(),
        &[None, Some("dog".to_string()), None]
    );

    let state = SessionReducer::reduce(state, select("cow"));
    assert_eq!(
        state.answers(),
        &[None, Some("cow".to_string()), None]
    );
}

#[test]
fn scores_exact_matches_only() {
    let state = reduce_all(
        in_progress(two_question_quiz()),
        vec![select("A"), SessionIntent::Advance, select("C"), SessionIntent::Finish],
    );
    assert_eq!(state.phase(), Phase::Finished);
    assert_eq!(state.score(), 5);
}

#[test]
fn unanswered_questions_score_nothing() {
    let state = reduce_all(
        in_progress(three_question_quiz()),
        vec![SessionIntent::Advance, SessionIntent::Advance, select("south"), SessionIntent::Finish],
    );
    assert_eq!(state.score(), 3);
}

#[test]
fn answers_are_case_sensitive() {
    let state = reduce_all(
        in_progress(three_question_quiz()),
        vec![select("Red"), SessionIntent::Finish],
    );
    assert_eq!(state.score(), 0);
}

#[test]
fn advance_without_answer_is_permitted() {
    let state = SessionReducer::reduce(in_progress(three_question_quiz()), SessionIntent::Advance);
    assert_eq!(state.current_index(), 1);
    assert_eq!(state.answers()[0], None);
}

#[test]
fn advance_past_last_question_finishes() {
    let state = reduce_all(
        in_progress(three_question_quiz()),
        vec![SessionIntent::Advance, SessionIntent::Advance],
    );
    assert_eq!(state.current_index(), 2);
    assert!(state.is_in_progress());

    let state = SessionReducer::reduce(state, SessionIntent::Advance);
    assert_eq!(state.phase(), Phase::Finished);
    assert_eq!(state.current_index(), 2);
}

#[test]
fn retreat_stops_at_first_question() {
    let state = reduce_all(
        in_progress(three_question_quiz()),
        vec![SessionIntent::Advance, SessionIntent::Retreat, SessionIntent::Retreat],
    );
    assert_eq!(state.current_index(), 0);
    assert!(state.is_in_progress());
}

#[test]
fn full_time_budget_of_ticks_finishes_at_zero() {
    let quiz = three_question_quiz();
    let budget = quiz.time_in_minutes * 60;
    let mut state = SessionReducer::reduce(in_progress(quiz), select("red"));

    for _ in 0..budget - 1 {
        state = SessionReducer::reduce(state, SessionIntent::Tick);
    }
    assert!(state.is_in_progress());
    assert_eq!(state.time_remaining_secs(), 1);

    state = SessionReducer::reduce(state, SessionIntent::Tick);
    assert_eq!(state.phase(), Phase::Finished);
    assert_eq!(state.time_remaining_secs(), 0);
    assert_eq!(state.score(), 1);

    // Further ticks are no-ops once finished.
    let after = SessionReducer::reduce(state.clone(), SessionIntent::Tick);
    assert_eq!(after, state);
}

#[test]
fn reset_after_finish_restarts_attempt() {
    let finished = reduce_all(
        in_progress(three_question_quiz()),
        vec![select("red"), SessionIntent::Advance, SessionIntent::Tick, SessionIntent::Finish],
    );
    let quiz = Arc::clone(finished.quiz_set().unwrap());

    let state = SessionReducer::reduce(finished, SessionIntent::Reset);
    assert!(state.is_in_progress());
    assert_eq!(state.current_index(), 0);
    assert!(state.answers().iter().all(Option::is_none));
    assert_eq!(state.time_remaining_secs(), quiz.time_in_minutes * 60);
    assert!(Arc::ptr_eq(state.quiz_set().unwrap(), &quiz));
}

#[test]
fn reset_without_quiz_clears_error() {
    let state = SessionReducer::reduce(
        SessionState::Idle {
            load_error: Some("boom".to_string()),
        },
        SessionIntent::Reset,
    );
    assert_eq!(state, SessionState::default());
}

#[test]
fn load_failure_returns_to_idle_with_message() {
    let state = reduce_all(
        SessionState::default(),
        vec![
            SessionIntent::BeginLoad {
                ticket: LoadTicket(1),
            },
            SessionIntent::LoadFailed {
                ticket: LoadTicket(1),
                message: "network error".to_string(),
            },
        ],
    );
    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(state.load_error(), Some("network error"));
    assert!(state.quiz_set().is_none());
}

#[test]
fn load_results_outside_loading_are_ignored() {
    let idle = SessionState::default();
    let state = SessionReducer::reduce(
        idle.clone(),
        SessionIntent::LoadSucceeded {
            ticket: LoadTicket(1),
            quiz: two_question_quiz(),
        },
    );
    assert_eq!(state, idle);

    let running = in_progress(three_question_quiz());
    let state = SessionReducer::reduce(
        running.clone(),
        SessionIntent::LoadFailed {
            ticket: LoadTicket(1),
            message: "late".to_string(),
        },
    );
    assert_eq!(state, running);
}

#[test]
fn answering_intents_outside_progress_are_ignored() {
    for intent in [
        select("A"),
        SessionIntent::Advance,
        SessionIntent::Retreat,
        SessionIntent::Finish,
        SessionIntent::Tick,
    ] {
        let idle = SessionState::default();
        assert_eq!(SessionReducer::reduce(idle.clone(), intent.clone()), idle);

        let loading = SessionState::Loading {
            ticket: LoadTicket(4),
        };
        assert_eq!(SessionReducer::reduce(loading.clone(), intent), loading);
    }
}

#[test]
fn defective_payloads_are_rejected_at_load() {
    let mut no_questions = two_question_quiz();
    no_questions.questions.clear();
    no_questions.total_questions = 0;
    no_questions.total_marks = 0;

    let mut one_option = two_question_quiz();
    one_option.questions[0].options = vec!["A".to_string()];

    let mut answer_missing = two_question_quiz();
    answer_missing.questions[1].answer = "Z".to_string();

    let mut wrong_total = two_question_quiz();
    wrong_total.total_marks = 99;

    let mut wrong_count = two_question_quiz();
    wrong_count.total_questions = 7;

    let mut no_time = two_question_quiz();
    no_time.time_in_minutes = 0;

    for (quiz, expected) in [
        (no_questions, "no questions"),
        (one_option, "at least 2"),
        (answer_missing, "not one of its options"),
        (wrong_total, "total marks"),
        (wrong_count, "declares 7 questions"),
        (no_time, "no time budget"),
    ] {
        let state = in_progress(quiz);
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.quiz_set().is_none());
        let error = state.load_error().expect("load error set");
        assert!(error.contains(expected), "{error:?} should mention {expected:?}");
    }
}

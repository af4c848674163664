mod common;

use quizterm::session::{LoadTicket, Phase};

use common::{manual_machine, started, three_question_quiz, two_question_quiz};

#[test]
fn begin_load_issues_fresh_tickets() {
    let (mut machine, _ticks) = manual_machine();
    let first = machine.begin_load().unwrap();
    assert_eq!(machine.state().phase(), Phase::Loading);

    // Only one load at a time.
    assert_eq!(machine.begin_load(), None);

    machine.load_failed(first, "network error");
    assert_eq!(machine.state().load_error(), Some("network error"));

    let second = machine.begin_load().unwrap();
    assert_ne!(first, second);
    assert!(machine.state().load_error().is_none());
}

#[test]
fn begin_load_is_refused_once_quiz_is_held() {
    let (mut machine, _ticks) = started(two_question_quiz());
    assert_eq!(machine.begin_load(), None);
    machine.finish();
    assert_eq!(machine.begin_load(), None);
}

#[test]
fn entering_progress_starts_exactly_one_countdown() {
    let (machine, ticks) = started(two_question_quiz());
    assert!(machine.is_countdown_running());
    assert_eq!(ticks.started().len(), 1);
    assert_eq!(ticks.live(), 1);
}

#[test]
fn answering_does_not_restart_countdown() {
    let (mut machine, ticks) = started(three_question_quiz());
    machine.select_answer("red");
    machine.advance();
    machine.retreat();
    machine.tick();
    assert_eq!(ticks.started().len(), 1);
    assert_eq!(ticks.live(), 1);
}

#[test]
fn finish_stops_countdown() {
    let (mut machine, ticks) = started(two_question_quiz());
    machine.finish();
    assert!(!machine.is_countdown_running());
    assert_eq!(ticks.live(), 0);
    assert_eq!(ticks.stopped(), ticks.started());
}

#[test]
fn reset_restarts_countdown_under_new_generation() {
    let (mut machine, ticks) = started(two_question_quiz());
    machine.tick();
    let first = machine.countdown_generation().unwrap();

    machine.reset();
    let second = machine.countdown_generation().unwrap();
    assert_ne!(first, second);
    assert_eq!(ticks.started(), vec![first, second]);
    assert_eq!(ticks.stopped(), vec![first]);
    assert_eq!(ticks.live(), 1);
    assert_eq!(machine.state().time_remaining_secs(), 60);
}

#[test]
fn reset_before_first_tick_restarts_countdown() {
    let (mut machine, ticks) = started(two_question_quiz());
    let first = machine.countdown_generation().unwrap();

    machine.reset();
    let second = machine.countdown_generation().unwrap();
    assert_ne!(first, second);
    assert_eq!(ticks.started(), vec![first, second]);
    assert_eq!(ticks.stopped(), vec![first]);
    assert_eq!(ticks.live(), 1);

    machine.on_countdown_tick(first);
    assert_eq!(machine.state().time_remaining_secs(), 60);
}

#[test]
fn retake_after_finish_starts_new_countdown() {
    let (mut machine, ticks) = started(two_question_quiz());
    machine.finish();
    machine.reset();
    assert_eq!(machine.state().phase(), Phase::InProgress);
    assert_eq!(ticks.started().len(), 2);
    assert_eq!(ticks.live(), 1);
}

#[test]
fn dropping_machine_stops_countdown() {
    let (machine, ticks) = started(two_question_quiz());
    drop(machine);
    assert_eq!(ticks.live(), 0);
}

#[test]
fn stale_generation_ticks_are_ignored() {
    let (mut machine, _ticks) = started(two_question_quiz());
    let old = machine.countdown_generation().unwrap();
    machine.tick();
    machine.reset();

    machine.on_countdown_tick(old);
    assert_eq!(machine.state().time_remaining_secs(), 60);

    let current = machine.countdown_generation().unwrap();
    machine.on_countdown_tick(current);
    assert_eq!(machine.state().time_remaining_secs(), 59);
}

#[test]
fn ticks_after_finish_are_ignored() {
    let (mut machine, _ticks) = started(two_question_quiz());
    let generation = machine.countdown_generation().unwrap();
    machine.finish();
    let before = machine.state().clone();

    machine.on_countdown_tick(generation);
    machine.tick();
    assert_eq!(machine.state(), &before);
}

#[test]
fn countdown_expiry_finishes_and_releases_timer() {
    let (mut machine, ticks) = started(two_question_quiz());
    machine.select_answer("A");
    let generation = machine.countdown_generation().unwrap();

    for _ in 0..60 {
        machine.on_countdown_tick(generation);
    }
    assert_eq!(machine.state().phase(), Phase::Finished);
    assert_eq!(machine.state().time_remaining_secs(), 0);
    assert_eq!(machine.state().score(), 5);
    assert_eq!(ticks.live(), 0);
}

#[test]
fn response_after_reset_is_stale() {
    let (mut machine, ticks) = manual_machine();
    let ticket = machine.begin_load().unwrap();
    machine.reset();
    assert_eq!(machine.state().phase(), Phase::Idle);

    machine.load_succeeded(ticket, two_question_quiz());
    assert_eq!(machine.state().phase(), Phase::Idle);
    assert!(machine.state().quiz_set().is_none());
    assert!(ticks.started().is_empty());
}

#[test]
fn response_for_superseded_ticket_is_stale() {
    let (mut machine, _ticks) = manual_machine();
    let old = machine.begin_load().unwrap();
    machine.reset();
    let current = machine.begin_load().unwrap();

    machine.load_failed(old, "timed out");
    assert_eq!(machine.state().phase(), Phase::Loading);

    machine.load_succeeded(current, three_question_quiz());
    assert_eq!(machine.state().phase(), Phase::InProgress);
}

#[test]
fn unknown_ticket_is_ignored() {
    let (mut machine, _ticks) = manual_machine();
    let ticket = machine.begin_load().unwrap();
    machine.load_succeeded(LoadTicket(ticket.0 + 100), two_question_quiz());
    assert_eq!(machine.state().phase(), Phase::Loading);
}

#[test]
fn rejected_payload_starts_no_countdown() {
    let (mut machine, ticks) = manual_machine();
    let ticket = machine.begin_load().unwrap();
    let mut quiz = two_question_quiz();
    quiz.questions[0].mark = 0;
    quiz.total_marks = 6;

    machine.load_succeeded(ticket, quiz);
    assert_eq!(machine.state().phase(), Phase::Idle);
    assert!(machine.state().load_error().unwrap().contains("no point value"));
    assert!(ticks.started().is_empty());

    // Recoverable by loading again.
    assert!(machine.begin_load().is_some());
}

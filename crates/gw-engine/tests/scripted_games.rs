//! Whole games against the bundled sample catalog.

use gw_core::{Catalog, Person};
use gw_engine::{Answer, ExhaustReason, GameConfig, GameSession, Question, SessionStatus};

/// The answer a truthful player gives about `target`.
fn truthful(question: &Question, target: &Person) -> String {
    match question {
        Question::Gender => target.gender().letter().to_string(),
        q if q.keeps(Answer::Yes, target) => "Y".to_string(),
        _ => "N".to_string(),
    }
}

fn find(catalog: &Catalog, name: &str) -> Person {
    catalog
        .iter()
        .find(|p| p.name() == name)
        .cloned()
        .unwrap_or_else(|| panic!("{name} not in sample catalog"))
}

/// Play until the session ends, returning it.
fn play_as(name: &str) -> GameSession {
    let catalog = Catalog::sample();
    let target = find(&catalog, name);
    let mut session = GameSession::start(&catalog, GameConfig::default()).unwrap();
    while let Some(q) = session.next_question() {
        let raw = truthful(q, &target);
        session.answer(&raw).unwrap();
    }
    session
}

fn answers(session: &GameSession) -> Vec<&str> {
    session
        .transcript()
        .entries()
        .iter()
        .map(|e| e.answer.as_str())
        .collect()
}

fn names(session: &GameSession) -> Vec<&str> {
    session.candidates().iter().map(Person::name).collect()
}

#[test]
fn simone_biles_in_four() {
    let s = play_as("Simone Biles");
    assert_eq!(s.status(), SessionStatus::Solved);
    assert_eq!(s.solution().map(Person::name), Some("Simone Biles"));
    assert_eq!(s.questions_asked(), 4);
    assert_eq!(answers(&s), ["F", "Y", "Y", "N"]);
}

#[test]
fn ed_sheeran_via_nationality() {
    let s = play_as("Ed Sheeran");
    assert_eq!(s.solution().map(Person::name), Some("Ed Sheeran"));
    let prompts: Vec<&str> = s
        .transcript()
        .entries()
        .iter()
        .map(|e| e.prompt.as_str())
        .collect();
    assert_eq!(
        prompts,
        [
            "Is the person male or female?",
            "Is the person in an entertainment industry?",
            "Does the person play sports?",
            "Is the person from USA?",
        ]
    );
}

#[test]
fn remaining_counts_follow_the_answers() {
    let s = play_as("Martin Luther King Jr");
    let remaining: Vec<usize> = s.transcript().entries().iter().map(|e| e.remaining).collect();
    assert_eq!(remaining, [35, 15, 5, 1]);
}

#[test]
fn williams_sisters_cannot_be_told_apart() {
    let s = play_as("Serena Williams");
    assert_eq!(
        s.status(),
        SessionStatus::Exhausted(ExhaustReason::NoQuestionLeft)
    );
    assert_eq!(names(&s), ["Serena Williams", "Venus Williams"]);
    assert!(s.solution().is_none());
}

#[test]
fn every_sample_person_survives_truthful_play() {
    let catalog = Catalog::sample();
    for target in catalog.iter() {
        let s = play_as(target.name());
        assert!(s.status().is_terminal(), "{target}");
        assert!(s.questions_asked() <= 7, "{target}: {}", s.questions_asked());
        assert!(
            s.candidates().iter().any(|p| p.id() == target.id()),
            "{target} was filtered out"
        );
    }
}

#[test]
fn raw_answers_tolerate_case_and_whitespace() {
    let catalog = Catalog::sample();
    let mut s = GameSession::start(&catalog, GameConfig::default()).unwrap();
    for raw in [" f", "n ", "N", "n"] {
        assert!(s.next_question().is_some());
        s.answer(raw).unwrap();
    }
    assert_eq!(s.solution().map(Person::name), Some("Malala Yousafzai"));
}

#[test]
fn invalid_answers_are_retried() {
    let catalog = Catalog::sample();
    let mut s = GameSession::start(&catalog, GameConfig::default()).unwrap();
    s.next_question();
    assert!(s.answer("yes").is_err());
    assert!(s.answer("Y").is_err());
    s.answer("F").unwrap();
    assert_eq!(s.questions_asked(), 1);
    assert_eq!(s.next_question(), Some(&Question::Entertainment));
}

#[test]
fn small_budget_ends_early() {
    let catalog = Catalog::sample();
    let mut s = GameSession::start(&catalog, GameConfig::default().with_budget(2)).unwrap();
    for raw in ["M", "N"] {
        s.next_question();
        s.answer(raw).unwrap();
    }
    assert_eq!(s.next_question(), None);
    assert_eq!(
        s.status(),
        SessionStatus::Exhausted(ExhaustReason::BudgetSpent)
    );
    assert_eq!(s.candidates().len(), 15);
}

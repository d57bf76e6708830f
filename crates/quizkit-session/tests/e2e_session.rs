//! End-to-end flow: in-memory records → loader → catalog → session.

use quizkit_catalog::Catalog;
use quizkit_core::error::QuizError;
use quizkit_core::model::SessionState;
use quizkit_loader::{Loader, MemorySource};
use quizkit_session::start_session;

const TWO_QUESTION_QUIZ: &str = r##"
[quiz]
id = "rust-ownership"
title = "Ownership & Borrowing"
description = "Can you spot the borrow checker errors?"
category = "rust"
icon = "shield"

[quiz.theme]
primary_color = "#f74c00"
gradient_from = "#1a1a2e"
gradient_to = "#16213e"

[quiz.metadata]
estimated_time = "10 min"

[[questions]]
id = "q1"
title = "Move semantics"
situation = "Which option is correct?"
options = ["first", "second", "third"]
correct_answer = 2
explanation = "The third option is correct."
hint = "Not the first two."
difficulty = "beginner"
points = 10

[[questions]]
id = "q2"
title = "Borrow rules"
situation = "Which option is correct this time?"
options = ["first", "second", "third"]
correct_answer = 0
explanation = "The first option is correct."
difficulty = "intermediate"
points = 15
"##;

fn catalog() -> Catalog {
    let loader = Loader::new(MemorySource::from_toml(&[(
        "rust-ownership.toml",
        TWO_QUESTION_QUIZ,
    )]));
    Catalog::load(&loader).unwrap()
}

#[test]
fn two_question_walkthrough() {
    let catalog = catalog();

    // 1. Start: InProgress, index 0, score 0.
    let mut session = start_session(&catalog, "rust-ownership").unwrap();
    assert_eq!(session.state(), SessionState::InProgress);
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.score(), 0);

    // 2. Q1: correct answer scores 10.
    session.select_answer(2).unwrap();
    let reveal = session.reveal().unwrap();
    assert!(reveal.correct);
    assert_eq!(session.score(), 10);

    // 3. Advance to Q2.
    assert_eq!(session.advance().unwrap(), SessionState::InProgress);
    assert_eq!(session.current_index(), 1);

    // 4. Q2: wrong answer, score unchanged.
    session.select_answer(1).unwrap();
    let reveal = session.reveal().unwrap();
    assert!(!reveal.correct);
    assert_eq!(reveal.correct_answer, 0);
    assert_eq!(session.score(), 10);

    // 5. Advance off the last question: Completed, 10 of 25.
    assert_eq!(session.advance().unwrap(), SessionState::Completed);
    assert_eq!(session.score(), 10);
    assert_eq!(session.quiz().total_points, 25);
}

#[test]
fn start_unknown_quiz_is_not_found() {
    let catalog = catalog();
    let err = start_session(&catalog, "no-such-quiz").unwrap_err();
    assert!(matches!(err, QuizError::NotFound(id) if id == "no-such-quiz"));
}

#[test]
fn sessions_share_one_definition() {
    let catalog = catalog();
    let a = start_session(&catalog, "rust-ownership").unwrap();
    let mut b = start_session(&catalog, "rust-ownership").unwrap();

    // Progress in one session never leaks into another.
    b.select_answer(2).unwrap();
    b.reveal().unwrap();
    assert_eq!(b.score(), 10);
    assert_eq!(a.score(), 0);
    assert_eq!(a.current_index(), 0);
    assert_ne!(a.id(), b.id());
}

#[test]
fn catalog_metadata_feeds_a_listing_page() {
    let catalog = catalog();
    let summaries = catalog.metadata();
    assert_eq!(summaries.len(), 1);
    let summary = &summaries[0];
    assert_eq!(summary.id, "rust-ownership");
    assert_eq!(summary.category, "rust");
    assert_eq!(summary.total_points, 25);
    assert_eq!(summary.question_count, 2);
    assert_eq!(summary.theme.primary_color, "#f74c00");
}

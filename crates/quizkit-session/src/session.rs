//! The quiz session state machine.
//!
//! Transitions happen synchronously in direct response to discrete user
//! actions; no concurrent mutation of one session is supported. The
//! presentation layer invokes exactly `start`, `select_answer`, `reveal`,
//! `advance`, and `restart`, and renders the views — it never computes
//! scoring itself.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use quizkit_core::error::QuizError;
use quizkit_core::model::{Question, QuizDefinition, SessionState};

/// One user's attempt at one quiz.
///
/// The score is monotonically non-decreasing for the lifetime of the
/// attempt: a question's answer is locked the moment it is settled, so a
/// recorded correct answer can never later be changed to a wrong one.
#[derive(Debug)]
pub struct QuizSession {
    id: Uuid,
    quiz: Arc<QuizDefinition>,
    state: SessionState,
    current: usize,
    /// Question id → selected option index. Overwritten freely until the
    /// question settles; last selection wins.
    answers: HashMap<String, usize>,
    /// Questions whose scoring is final and whose answers are locked.
    settled: HashSet<String>,
    score: u32,
}

/// What `reveal` exposes for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal<'a> {
    /// Whether the selected option is the correct one.
    pub correct: bool,
    /// Index of the correct option.
    pub correct_answer: usize,
    /// The option the user selected.
    pub selected: usize,
    /// Explanation text for the question.
    pub explanation: &'a str,
    /// Optional hint text.
    pub hint: Option<&'a str>,
    /// Points this question contributed to the score (zero if wrong).
    pub points_awarded: u32,
}

/// Serializable snapshot of session progress for the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub quiz_id: String,
    pub state: SessionState,
    pub current_index: usize,
    pub question_count: usize,
    pub answered: usize,
    pub score: u32,
    pub total_points: u32,
}

impl QuizSession {
    /// Create a session over a definition, in `NotStarted`.
    pub fn new(quiz: Arc<QuizDefinition>) -> Self {
        Self {
            id: Uuid::new_v4(),
            quiz,
            state: SessionState::NotStarted,
            current: 0,
            answers: HashMap::new(),
            settled: HashSet::new(),
            score: 0,
        }
    }

    /// `NotStarted → InProgress`: index 0, score 0, no answers.
    pub fn start(&mut self) -> Result<(), QuizError> {
        if self.state != SessionState::NotStarted {
            return Err(QuizError::InvalidTransition {
                action: "start",
                state: self.state,
            });
        }
        if self.quiz.questions.is_empty() {
            return Err(QuizError::EmptyQuiz(self.quiz.id.clone()));
        }
        self.state = SessionState::InProgress;
        self.current = 0;
        self.score = 0;
        self.answers.clear();
        self.settled.clear();
        tracing::debug!(session = %self.id, quiz = %self.quiz.id, "session started");
        Ok(())
    }

    /// Record (or overwrite) the answer for the current question.
    ///
    /// Valid only in `InProgress` and only before the question settles;
    /// after `reveal` the answer is locked.
    pub fn select_answer(&mut self, option_index: usize) -> Result<(), QuizError> {
        self.require_in_progress("select an answer")?;
        let question = self.current_question_ref();
        if self.settled.contains(&question.id) {
            return Err(QuizError::InvalidTransition {
                action: "change a revealed answer",
                state: self.state,
            });
        }
        if option_index >= question.options.len() {
            return Err(QuizError::OptionOutOfRange {
                question: question.id.clone(),
                index: option_index,
                options: question.options.len(),
            });
        }
        let id = question.id.clone();
        self.answers.insert(id, option_index);
        Ok(())
    }

    /// Settle the current question and expose the explanation.
    ///
    /// Awards the question's points exactly once on a correct answer;
    /// calling again before `advance` returns the same view without
    /// re-scoring. Requires a selected answer.
    pub fn reveal(&mut self) -> Result<Reveal<'_>, QuizError> {
        self.require_in_progress("reveal")?;
        let question_id = self.current_question_ref().id.clone();
        let Some(&selected) = self.answers.get(&question_id) else {
            return Err(QuizError::AnswerNotSelected {
                question: question_id,
            });
        };
        self.settle_current();

        let question = self.current_question_ref();
        let correct = selected == question.correct_answer;
        Ok(Reveal {
            correct,
            correct_answer: question.correct_answer,
            selected,
            explanation: &question.explanation,
            hint: question.hint.as_deref(),
            points_awarded: if correct { question.points } else { 0 },
        })
    }

    /// Move to the next question, or complete the quiz on the last one.
    ///
    /// Settles the current question first if `reveal` has not, so a
    /// correct recorded answer still scores.
    pub fn advance(&mut self) -> Result<SessionState, QuizError> {
        self.require_in_progress("advance")?;
        self.settle_current();

        if self.current + 1 < self.quiz.questions.len() {
            self.current += 1;
        } else {
            self.state = SessionState::Completed;
            tracing::debug!(
                session = %self.id,
                quiz = %self.quiz.id,
                score = self.score,
                total = self.quiz.total_points,
                "session completed"
            );
        }
        Ok(self.state)
    }

    /// Back to `NotStarted` from any state, discarding all progress.
    pub fn restart(&mut self) {
        self.state = SessionState::NotStarted;
        self.current = 0;
        self.score = 0;
        self.answers.clear();
        self.settled.clear();
        tracing::debug!(session = %self.id, quiz = %self.quiz.id, "session restarted");
    }

    /// Apply scoring for the current question exactly once and lock its
    /// answer. An unanswered question settles as wrong.
    fn settle_current(&mut self) {
        let question = &self.quiz.questions[self.current];
        if !self.settled.insert(question.id.clone()) {
            return;
        }
        if self.answers.get(&question.id) == Some(&question.correct_answer) {
            self.score += question.points;
        }
    }

    fn require_in_progress(&self, action: &'static str) -> Result<(), QuizError> {
        if self.state != SessionState::InProgress {
            return Err(QuizError::InvalidTransition {
                action,
                state: self.state,
            });
        }
        Ok(())
    }

    fn current_question_ref(&self) -> &Question {
        &self.quiz.questions[self.current]
    }

    // --- Views ---

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn quiz(&self) -> &QuizDefinition {
        &self.quiz
    }

    /// Index of the current question. Stays within
    /// `[0, question_count)`; after completion it remains on the last
    /// question.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The current question, while a run is in progress.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            SessionState::InProgress => self.quiz.questions.get(self.current),
            _ => None,
        }
    }

    /// The recorded answer for the current question, if any.
    pub fn selected_answer(&self) -> Option<usize> {
        self.quiz
            .questions
            .get(self.current)
            .and_then(|q| self.answers.get(&q.id).copied())
    }

    /// Snapshot for rendering progress and score.
    pub fn view(&self) -> SessionView {
        SessionView {
            session_id: self.id,
            quiz_id: self.quiz.id.clone(),
            state: self.state,
            current_index: self.current,
            question_count: self.quiz.questions.len(),
            answered: self.answers.len(),
            score: self.score,
            total_points: self.quiz.total_points,
        }
    }
}

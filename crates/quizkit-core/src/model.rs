//! Core data model types for quizkit.
//!
//! These are the fundamental types the entire quizkit system uses to
//! represent quiz definitions, questions, and session state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A complete, validated quiz definition.
///
/// Immutable once loaded: the catalog owns definitions behind `Arc` and
/// they are only discarded on reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDefinition {
    /// Unique identifier; doubles as a routing slug.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Short description shown on listing pages.
    #[serde(default)]
    pub description: String,
    /// Grouping category (e.g. "rust", "databases").
    pub category: String,
    /// Symbolic icon name from a fixed set.
    pub icon: Icon,
    /// Opaque presentation hints; the engine never branches on these.
    #[serde(default)]
    pub theme: Theme,
    /// Estimated time and difficulty tallies.
    pub metadata: QuizMetadata,
    /// Effective total points. Normalized at load time: a declared zero
    /// is replaced by the sum of question points.
    pub total_points: u32,
    /// The ordered questions.
    pub questions: Vec<Question>,
}

impl QuizDefinition {
    /// Listing view of this definition, without the question bodies.
    pub fn summary(&self) -> QuizSummary {
        QuizSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            icon: self.icon,
            theme: self.theme.clone(),
            estimated_time: self.metadata.estimated_time.clone(),
            total_points: self.total_points,
            question_count: self.questions.len(),
        }
    }
}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Identifier, unique within its quiz.
    pub id: String,
    /// Short title.
    pub title: String,
    /// The situation or prompt text presented to the user.
    pub situation: String,
    /// Optional code snippet displayed with the question.
    #[serde(default)]
    pub code_example: Option<String>,
    /// The answer options, in display order. Always at least two.
    pub options: Vec<String>,
    /// Index into `options` of the single correct answer.
    pub correct_answer: usize,
    /// Explanation shown after the answer is revealed.
    pub explanation: String,
    /// Optional hint shown on request.
    #[serde(default)]
    pub hint: Option<String>,
    /// Difficulty level.
    pub difficulty: Difficulty,
    /// Points awarded for a correct answer.
    pub points: u32,
}

/// Opaque cosmetic strings consumed by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub primary_color: String,
    #[serde(default)]
    pub gradient_from: String,
    #[serde(default)]
    pub gradient_to: String,
}

/// Quiz-level metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizMetadata {
    /// Free-form estimated completion time (e.g. "10 min").
    pub estimated_time: String,
    /// Question counts per difficulty level.
    #[serde(default)]
    pub difficulty_levels: DifficultyLevels,
}

/// Question counts by difficulty level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyLevels {
    #[serde(default)]
    pub beginner: u32,
    #[serde(default)]
    pub intermediate: u32,
    #[serde(default)]
    pub advanced: u32,
}

impl DifficultyLevels {
    /// Tally the difficulty distribution of a question list.
    pub fn tally(questions: &[Question]) -> Self {
        let mut levels = Self::default();
        for q in questions {
            match q.difficulty {
                Difficulty::Beginner => levels.beginner += 1,
                Difficulty::Intermediate => levels.intermediate += 1,
                Difficulty::Advanced => levels.advanced += 1,
            }
        }
        levels
    }

    /// True if no count has been declared.
    pub fn is_empty(&self) -> bool {
        self.beginner == 0 && self.intermediate == 0 && self.advanced == 0
    }
}

/// Question difficulty levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "beginner"),
            Difficulty::Intermediate => write!(f, "intermediate"),
            Difficulty::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// The fixed set of symbolic icon names a quiz may declare.
///
/// Purely a presentation concern; validated at load time and never
/// interpreted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Code,
    Database,
    Globe,
    Shield,
    Terminal,
    Zap,
    Book,
    Cpu,
}

impl Icon {
    /// Every known icon name, for error messages.
    pub const ALL: [Icon; 8] = [
        Icon::Code,
        Icon::Database,
        Icon::Globe,
        Icon::Shield,
        Icon::Terminal,
        Icon::Zap,
        Icon::Book,
        Icon::Cpu,
    ];
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Icon::Code => "code",
            Icon::Database => "database",
            Icon::Globe => "globe",
            Icon::Shield => "shield",
            Icon::Terminal => "terminal",
            Icon::Zap => "zap",
            Icon::Book => "book",
            Icon::Cpu => "cpu",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Icon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "code" => Ok(Icon::Code),
            "database" => Ok(Icon::Database),
            "globe" => Ok(Icon::Globe),
            "shield" => Ok(Icon::Shield),
            "terminal" => Ok(Icon::Terminal),
            "zap" => Ok(Icon::Zap),
            "book" => Ok(Icon::Book),
            "cpu" => Ok(Icon::Cpu),
            other => {
                let known = Icon::ALL.map(|i| i.to_string()).join(", ");
                Err(format!("unknown icon: {other} (expected one of {known})"))
            }
        }
    }
}

/// Listing summary of a quiz definition (without the questions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub icon: Icon,
    pub theme: Theme,
    pub estimated_time: String,
    pub total_points: u32,
    pub question_count: usize,
}

/// Lifecycle tag for a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    NotStarted,
    InProgress,
    Completed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::NotStarted => write!(f, "not started"),
            SessionState::InProgress => write!(f, "in progress"),
            SessionState::Completed => write!(f, "completed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str, difficulty: Difficulty, points: u32) -> Question {
        Question {
            id: id.into(),
            title: format!("Question {id}"),
            situation: "What happens here?".into(),
            code_example: None,
            options: vec!["a".into(), "b".into()],
            correct_answer: 0,
            explanation: "Because.".into(),
            hint: None,
            difficulty,
            points,
        }
    }

    #[test]
    fn difficulty_display_and_parse() {
        assert_eq!(Difficulty::Beginner.to_string(), "beginner");
        assert_eq!(
            "Intermediate".parse::<Difficulty>().unwrap(),
            Difficulty::Intermediate
        );
        assert_eq!("advanced".parse::<Difficulty>().unwrap(), Difficulty::Advanced);
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn icon_display_and_parse() {
        for icon in Icon::ALL {
            assert_eq!(icon.to_string().parse::<Icon>().unwrap(), icon);
        }
        let err = "sparkles".parse::<Icon>().unwrap_err();
        assert!(err.contains("unknown icon"));
        assert!(err.contains("shield"));
    }

    #[test]
    fn difficulty_levels_tally() {
        let questions = vec![
            question("q1", Difficulty::Beginner, 5),
            question("q2", Difficulty::Beginner, 5),
            question("q3", Difficulty::Advanced, 20),
        ];
        let levels = DifficultyLevels::tally(&questions);
        assert_eq!(levels.beginner, 2);
        assert_eq!(levels.intermediate, 0);
        assert_eq!(levels.advanced, 1);
        assert!(!levels.is_empty());
        assert!(DifficultyLevels::default().is_empty());
    }

    #[test]
    fn summary_reflects_definition() {
        let def = QuizDefinition {
            id: "sample".into(),
            title: "Sample".into(),
            description: "A sample quiz".into(),
            category: "rust".into(),
            icon: Icon::Code,
            theme: Theme::default(),
            metadata: QuizMetadata {
                estimated_time: "5 min".into(),
                difficulty_levels: DifficultyLevels::default(),
            },
            total_points: 25,
            questions: vec![
                question("q1", Difficulty::Beginner, 10),
                question("q2", Difficulty::Intermediate, 15),
            ],
        };
        let summary = def.summary();
        assert_eq!(summary.id, "sample");
        assert_eq!(summary.total_points, 25);
        assert_eq!(summary.question_count, 2);
    }

    #[test]
    fn question_serde_roundtrip() {
        let q = question("q1", Difficulty::Beginner, 10);
        let json = serde_json::to_string(&q).unwrap();
        let back: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }
}

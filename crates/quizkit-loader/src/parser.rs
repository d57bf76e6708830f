//! Quiz definition parser.
//!
//! Parses raw TOML/JSON records into candidate `QuizDefinition` values and
//! applies the one normalization step (derive total points and difficulty
//! tallies) right after parsing, so nothing downstream re-checks them.

use anyhow::{Context, Result};
use serde::Deserialize;

use quizkit_core::model::{
    Difficulty, DifficultyLevels, Icon, Question, QuizDefinition, QuizMetadata, Theme,
};

use crate::source::{RawRecord, RecordFormat};

/// Intermediate structure for parsing quiz definition records.
#[derive(Debug, Deserialize)]
struct RawQuizFile {
    quiz: RawQuizHeader,
    #[serde(default)]
    questions: Vec<RawQuestion>,
}

#[derive(Debug, Deserialize)]
struct RawQuizHeader {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    category: String,
    icon: String,
    #[serde(default)]
    total_points: u32,
    #[serde(default)]
    theme: Option<RawTheme>,
    metadata: RawMetadata,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    #[serde(default)]
    primary_color: String,
    #[serde(default)]
    gradient_from: String,
    #[serde(default)]
    gradient_to: String,
}

#[derive(Debug, Deserialize)]
struct RawMetadata {
    estimated_time: String,
    #[serde(default)]
    difficulty_levels: Option<RawDifficultyLevels>,
}

#[derive(Debug, Deserialize)]
struct RawDifficultyLevels {
    #[serde(default)]
    beginner: u32,
    #[serde(default)]
    intermediate: u32,
    #[serde(default)]
    advanced: u32,
}

#[derive(Debug, Deserialize)]
struct RawQuestion {
    id: String,
    title: String,
    situation: String,
    #[serde(default)]
    code_example: Option<String>,
    options: Vec<String>,
    correct_answer: usize,
    explanation: String,
    #[serde(default)]
    hint: Option<String>,
    difficulty: String,
    points: u32,
}

/// Parse one raw record into a candidate `QuizDefinition`.
pub fn parse_definition(record: &RawRecord) -> Result<QuizDefinition> {
    parse_definition_str(&record.contents, record.format, &record.name)
}

/// Parse a TOML or JSON string into a candidate `QuizDefinition`
/// (useful for testing).
pub fn parse_definition_str(
    contents: &str,
    format: RecordFormat,
    source_name: &str,
) -> Result<QuizDefinition> {
    let parsed: RawQuizFile = match format {
        RecordFormat::Toml => toml::from_str(contents)
            .with_context(|| format!("failed to parse TOML: {source_name}"))?,
        RecordFormat::Json => serde_json::from_str(contents)
            .with_context(|| format!("failed to parse JSON: {source_name}"))?,
    };

    let icon: Icon = parsed
        .quiz
        .icon
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{source_name}: {e}"))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let difficulty: Difficulty = q
                .difficulty
                .parse()
                .map_err(|e: String| anyhow::anyhow!("{source_name}, question '{}': {e}", q.id))?;
            Ok(Question {
                id: q.id,
                title: q.title,
                situation: q.situation,
                code_example: q.code_example,
                options: q.options,
                correct_answer: q.correct_answer,
                explanation: q.explanation,
                hint: q.hint,
                difficulty,
                points: q.points,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let theme = match parsed.quiz.theme {
        Some(t) => Theme {
            primary_color: t.primary_color,
            gradient_from: t.gradient_from,
            gradient_to: t.gradient_to,
        },
        None => Theme::default(),
    };

    let difficulty_levels = match parsed.quiz.metadata.difficulty_levels {
        Some(levels) => DifficultyLevels {
            beginner: levels.beginner,
            intermediate: levels.intermediate,
            advanced: levels.advanced,
        },
        None => DifficultyLevels::default(),
    };

    let mut definition = QuizDefinition {
        id: parsed.quiz.id,
        title: parsed.quiz.title,
        description: parsed.quiz.description,
        category: parsed.quiz.category,
        icon,
        theme,
        metadata: QuizMetadata {
            estimated_time: parsed.quiz.metadata.estimated_time,
            difficulty_levels,
        },
        total_points: parsed.quiz.total_points,
        questions,
    };
    normalize(&mut definition);
    Ok(definition)
}

/// The single post-parse normalization step.
///
/// A declared `total_points` of zero means "derive from questions"; an
/// empty difficulty tally is likewise derived. Declared non-zero values
/// are left alone and checked by the validator instead.
fn normalize(definition: &mut QuizDefinition) {
    if definition.total_points == 0 {
        definition.total_points = definition.questions.iter().map(|q| q.points).sum();
    }
    if definition.metadata.difficulty_levels.is_empty() {
        definition.metadata.difficulty_levels = DifficultyLevels::tally(&definition.questions);
    }
}

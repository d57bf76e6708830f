//! Definition validation.
//!
//! Runs after parsing and normalization. Every issue is collected, not
//! just the first, so authors see the full picture in one pass. Any issue
//! excludes the quiz from the catalog; valid quizzes still load.

use quizkit_core::model::{DifficultyLevels, QuizDefinition};

/// Validate a candidate definition, returning every issue found.
pub fn validate_definition(definition: &QuizDefinition) -> Vec<String> {
    let mut issues = Vec::new();

    if definition.id.trim().is_empty() {
        issues.push("quiz id is empty".to_string());
    }
    if definition.title.trim().is_empty() {
        issues.push("quiz title is empty".to_string());
    }
    if definition.questions.is_empty() {
        issues.push("quiz has no questions".to_string());
    }

    let mut seen_ids = std::collections::HashSet::new();
    for question in &definition.questions {
        if !seen_ids.insert(question.id.as_str()) {
            issues.push(format!("duplicate question id: {}", question.id));
        }
        if question.options.len() < 2 {
            issues.push(format!(
                "question '{}' has {} option(s), need at least 2",
                question.id,
                question.options.len()
            ));
        }
        if question.correct_answer >= question.options.len() {
            issues.push(format!(
                "question '{}' correct_answer {} is out of range for {} options",
                question.id,
                question.correct_answer,
                question.options.len()
            ));
        }
        if question.explanation.trim().is_empty() {
            issues.push(format!("question '{}' has an empty explanation", question.id));
        }
    }

    // Declared tallies must agree with the questions; absent tallies were
    // already derived during normalization.
    let tallied = DifficultyLevels::tally(&definition.questions);
    if definition.metadata.difficulty_levels != tallied {
        issues.push(format!(
            "declared difficulty levels ({}/{}/{}) do not match questions ({}/{}/{})",
            definition.metadata.difficulty_levels.beginner,
            definition.metadata.difficulty_levels.intermediate,
            definition.metadata.difficulty_levels.advanced,
            tallied.beginner,
            tallied.intermediate,
            tallied.advanced
        ));
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizkit_core::model::{Difficulty, Icon, Question, QuizMetadata, Theme};

    fn question(id: &str) -> Question {
        Question {
            id: id.into(),
            title: "Title".into(),
            situation: "Situation".into(),
            code_example: None,
            options: vec!["a".into(), "b".into(), "c".into()],
            correct_answer: 2,
            explanation: "Because.".into(),
            hint: None,
            difficulty: Difficulty::Beginner,
            points: 10,
        }
    }

    fn definition(questions: Vec<Question>) -> QuizDefinition {
        let difficulty_levels = DifficultyLevels::tally(&questions);
        QuizDefinition {
            id: "sample".into(),
            title: "Sample".into(),
            description: String::new(),
            category: "rust".into(),
            icon: Icon::Code,
            theme: Theme::default(),
            metadata: QuizMetadata {
                estimated_time: "5 min".into(),
                difficulty_levels,
            },
            total_points: 10,
            questions,
        }
    }

    #[test]
    fn valid_definition_has_no_issues() {
        let def = definition(vec![question("q1"), question("q2")]);
        assert!(validate_definition(&def).is_empty());
    }

    #[test]
    fn duplicate_question_ids() {
        let def = definition(vec![question("q1"), question("q1")]);
        let issues = validate_definition(&def);
        assert!(issues.iter().any(|i| i.contains("duplicate question id: q1")));
    }

    #[test]
    fn correct_answer_out_of_range() {
        let mut q = question("q1");
        q.correct_answer = 3;
        let issues = validate_definition(&definition(vec![q]));
        assert!(issues.iter().any(|i| i.contains("out of range")));
    }

    #[test]
    fn too_few_options() {
        let mut q = question("q1");
        q.options = vec!["only one".into()];
        q.correct_answer = 0;
        let issues = validate_definition(&definition(vec![q]));
        assert!(issues.iter().any(|i| i.contains("need at least 2")));
    }

    #[test]
    fn empty_quiz_rejected() {
        let issues = validate_definition(&definition(vec![]));
        assert!(issues.iter().any(|i| i.contains("no questions")));
    }

    #[test]
    fn declared_difficulty_mismatch() {
        let mut def = definition(vec![question("q1")]);
        def.metadata.difficulty_levels.advanced = 3;
        let issues = validate_definition(&def);
        assert!(issues.iter().any(|i| i.contains("do not match")));
    }

    #[test]
    fn all_issues_collected_at_once() {
        let mut bad = question("q1");
        bad.options = vec!["one".into()];
        bad.correct_answer = 5;
        bad.explanation = "  ".into();
        let issues = validate_definition(&definition(vec![bad, question("q1")]));
        assert!(issues.len() >= 4, "expected every issue reported, got {issues:?}");
    }
}

use serde::Serialize;

use crate::models::domain::QuizSpec;

pub const CHOICES_DELIMITER: &str = " | ";

/// A question flattened for display in a results table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableRow {
    #[serde(rename = "MCQ")]
    pub mcq: String,
    #[serde(rename = "Choices")]
    pub choices: String,
    #[serde(rename = "Correct")]
    pub correct: String,
}

impl From<&QuizSpec> for TableRow {
    fn from(spec: &QuizSpec) -> Self {
        let choices = spec
            .options
            .iter()
            .map(|(label, text)| format!("{}: {}", label, text))
            .collect::<Vec<_>>()
            .join(CHOICES_DELIMITER);

        TableRow {
            mcq: spec.question_text.clone(),
            choices,
            correct: spec.correct_label.clone(),
        }
    }
}

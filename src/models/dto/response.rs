use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{models::domain::TableRow, services::quiz_pipeline::QuizOutcome};

pub const TABLE_DATA_ERROR: &str = "Error in the table data";

#[derive(Debug, Clone, Serialize)]
pub struct GenerateQuizResponse {
    pub rows: Vec<TableRow>,
    pub review: String,
    pub raw_quiz: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl From<QuizOutcome> for GenerateQuizResponse {
    fn from(outcome: QuizOutcome) -> Self {
        let (rows, table_error) = match outcome.table() {
            Ok(rows) => (rows, None),
            Err(e) => (Vec::new(), Some(format!("{}: {}", TABLE_DATA_ERROR, e))),
        };

        GenerateQuizResponse {
            rows,
            review: outcome.review,
            raw_quiz: outcome.raw_quiz,
            table_error,
            warnings: outcome.warnings,
            generated_at: Utc::now(),
        }
    }
}

use crate::{
    errors::AppResult,
    models::domain::{Quiz, TableRow},
};

/// Turns quiz text from the model into display rows, one per question, in order.
///
/// Fails with `AppError::ParseError` if the text is not the expected JSON shape
/// or any question lacks a field; no partial table is returned.
pub fn build_table(quiz_text: &str) -> AppResult<Vec<TableRow>> {
    Quiz::parse(quiz_text).map(|quiz| rows_from_quiz(&quiz))
}

pub fn rows_from_quiz(quiz: &Quiz) -> Vec<TableRow> {
    quiz.iter().map(|(_, spec)| TableRow::from(spec)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[test]
    fn build_table_formats_single_question() {
        let text = r#"{"1": {"mcq": "2+2=?", "options": {"a":"3","b":"4","c":"5","d":"6"}, "correct":"b"}}"#;

        let rows = build_table(text).unwrap();
        assert_eq!(
            rows,
            vec![TableRow {
                mcq: "2+2=?".to_string(),
                choices: "a: 3 | b: 4 | c: 5 | d: 6".to_string(),
                correct: "b".to_string(),
            }]
        );
    }

    #[test]
    fn build_table_keeps_question_and_option_order() {
        let text = r#"{
            "1": {"mcq": "first", "options": {"d": "w", "a": "x"}, "correct": "d"},
            "2": {"mcq": "second", "options": {"a": "y", "b": "z"}, "correct": "a"},
            "3": {"mcq": "third", "options": {"b": "u", "a": "v"}, "correct": "b"}
        }"#;

        let rows = build_table(text).unwrap();
        let questions: Vec<&str> = rows.iter().map(|r| r.mcq.as_str()).collect();
        assert_eq!(questions, vec!["first", "second", "third"]);
        assert_eq!(rows[0].choices, "d: w | a: x");
        assert_eq!(rows[2].choices, "b: u | a: v");
    }

    #[test]
    fn build_table_copies_correct_label_verbatim() {
        let text = r#"{"1": {"mcq": "q", "options": {"A": "x", "B": "y"}, "correct": " B"}}"#;

        let rows = build_table(text).unwrap();
        assert_eq!(rows[0].correct, " B");
    }

    #[test]
    fn build_table_rejects_malformed_text() {
        assert!(matches!(build_table("not json"), Err(AppError::ParseError(_))));
    }

    #[test]
    fn build_table_fails_whole_quiz_on_one_bad_question() {
        let text = r#"{
            "1": {"mcq": "ok", "options": {"a": "x"}, "correct": "a"},
            "2": {"options": {"a": "x"}, "correct": "a"}
        }"#;

        assert!(matches!(build_table(text), Err(AppError::ParseError(_))));
    }
}

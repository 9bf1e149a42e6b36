use crate::models::dto::request::GenerateQuizRequest;

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Creates a request for `number` questions on biology in a simple tone
    pub fn quiz_request(number: u32) -> GenerateQuizRequest {
        GenerateQuizRequest::new(number, "biology", "simple")
    }

    /// Builds a well-formed model reply with `count` four-option questions.
    /// Every question marks option "b" as correct.
    pub fn quiz_reply(count: usize) -> String {
        let questions: Vec<String> = (1..=count)
            .map(|i| {
                let spec = serde_json::json!({
                    "mcq": format!("Question {}?", i),
                    "options": {
                        "a": format!("wrong {}", i),
                        "b": format!("right {}", i),
                        "c": "maybe",
                        "d": "never"
                    },
                    "correct": "b"
                });
                format!("\"{}\": {}", i, spec)
            })
            .collect();

        format!("{{{}}}", questions.join(", "))
    }

    /// Builds a one-page PDF that draws `text` in Helvetica, with a valid xref table.
    pub fn minimal_pdf(text: &str) -> Vec<u8> {
        let content = format!("BT /F1 24 Tf 72 720 Td ({}) Tj ET", text);
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
                .to_string(),
            format!("<< /Length {} >>\nstream\n{}\nendstream", content.len(), content),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        ];

        let mut pdf = String::from("%PDF-1.4\n");
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, object) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, object));
        }

        let xref_start = pdf.len();
        pdf.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
        for offset in offsets {
            pdf.push_str(&format!("{:010} 00000 n \n", offset));
        }
        pdf.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_start
        ));
        pdf.into_bytes()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::table_builder::build_table;

    #[test]
    fn test_fixtures_quiz_reply_parses() {
        let rows = build_table(&quiz_reply(12)).unwrap();
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[1].mcq, "Question 2?");
        assert_eq!(rows[11].mcq, "Question 12?");
    }

    #[test]
    fn test_fixtures_minimal_pdf_has_xref_trailer() {
        let pdf = String::from_utf8(minimal_pdf("Hi")).unwrap();
        assert!(pdf.starts_with("%PDF-1.4\n"));
        assert!(pdf.contains("xref\n0 6\n"));
        assert!(pdf.trim_end().ends_with("%%EOF"));
    }

    #[test]
    fn test_fixtures_quiz_request() {
        let request = quiz_request(7);
        assert_eq!(request.number, 7);
        assert_eq!(request.subject, "biology");
    }
}

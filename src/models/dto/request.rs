use serde::{Deserialize, Serialize};
use validator::Validate;

pub const MIN_QUESTION_COUNT: u32 = 3;
pub const MAX_QUESTION_COUNT: u32 = 50;
pub const MAX_FIELD_CHARS: u64 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(range(
        min = MIN_QUESTION_COUNT,
        max = MAX_QUESTION_COUNT,
        message = "Number of questions must be between 3 and 50"
    ))]
    pub number: u32,

    #[validate(length(
        min = 1,
        max = MAX_FIELD_CHARS,
        message = "Subject must be 1 to 20 characters"
    ))]
    pub subject: String,

    #[validate(length(
        min = 1,
        max = MAX_FIELD_CHARS,
        message = "Tone must be 1 to 20 characters"
    ))]
    pub tone: String,
}

impl GenerateQuizRequest {
    pub fn new(number: u32, subject: &str, tone: &str) -> Self {
        Self {
            number,
            subject: subject.trim().to_string(),
            tone: tone.trim().to_string(),
        }
    }
}

/// A file received from the upload form, before any text extraction.
#[derive(Debug, Clone, Default)]
pub struct UploadedDocument {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_within_bounds_is_valid() {
        assert!(GenerateQuizRequest::new(3, "Biology", "Simple").validate().is_ok());
        assert!(GenerateQuizRequest::new(50, "Biology", "Simple").validate().is_ok());
    }

    #[test]
    fn request_bounds_follow_shared_limits() {
        let longest = "x".repeat(MAX_FIELD_CHARS as usize);
        let too_long = "x".repeat(MAX_FIELD_CHARS as usize + 1);

        assert!(GenerateQuizRequest::new(MIN_QUESTION_COUNT, &longest, &longest)
            .validate()
            .is_ok());
        assert!(GenerateQuizRequest::new(MAX_QUESTION_COUNT + 1, "Biology", "Simple")
            .validate()
            .is_err());
        assert!(GenerateQuizRequest::new(MIN_QUESTION_COUNT, "Biology", &too_long)
            .validate()
            .is_err());
    }

    #[test]
    fn request_rejects_question_count_out_of_range() {
        let too_few = GenerateQuizRequest::new(2, "Biology", "Simple").validate();
        let too_many = GenerateQuizRequest::new(51, "Biology", "Simple").validate();

        assert!(too_few.is_err());
        assert!(too_many.unwrap_err().to_string().contains("between 3 and 50"));
    }

    #[test]
    fn request_counts_characters_not_bytes() {
        // 20 two-byte characters
        let subject = "é".repeat(20);
        assert!(GenerateQuizRequest::new(5, &subject, "Simple").validate().is_ok());

        let long = "x".repeat(21);
        assert!(GenerateQuizRequest::new(5, &long, "Simple").validate().is_err());
    }

    #[test]
    fn request_trims_and_rejects_blank_fields() {
        let request = GenerateQuizRequest::new(5, "   ", " Simple ");

        assert_eq!(request.tone, "Simple");
        assert!(request.validate().is_err());
    }
}

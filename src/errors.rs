use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("File read error: {0}")]
    FileReadError(String),

    #[error("LLM request error: {0}")]
    LlmRequestError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::FileReadError(_) => "FILE_READ_ERROR",
            AppError::LlmRequestError(_) => "LLM_REQUEST_ERROR",
            AppError::ParseError(_) => "PARSE_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to send to the client. Upstream and internal details stay in the log.
    pub fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(_) | AppError::FileReadError(_) => self.to_string(),
            AppError::LlmRequestError(_) => "The language model request failed".to_string(),
            AppError::ParseError(_) => "The language model reply could not be read".to_string(),
            AppError::InternalError(_) => "Internal server error".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub kind: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::FileReadError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::LlmRequestError(_) => StatusCode::BAD_GATEWAY,
            AppError::ParseError(_) => StatusCode::BAD_GATEWAY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.public_message(),
            code: self.status_code().as_u16(),
            kind: self.error_code(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ParseError(err.to_string())
    }
}
impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::LlmRequestError(err.to_string())
    }
}
impl From<tokio::time::error::Elapsed> for AppError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        AppError::LlmRequestError("model did not respond before the timeout".to_string())
    }
}
impl From<actix_multipart::MultipartError> for AppError {
    fn from(err: actix_multipart::MultipartError) -> Self {
        AppError::ValidationError(format!("Malformed form upload: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

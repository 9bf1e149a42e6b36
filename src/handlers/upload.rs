use std::collections::HashMap;

use actix_multipart::Multipart;
use futures::TryStreamExt;

use crate::{
    errors::{AppError, AppResult},
    models::dto::request::{GenerateQuizRequest, UploadedDocument},
};

const FILE_FIELD: &str = "file";
const TEXT_FIELDS: &[&str] = &["number", "subject", "tone"];

/// One submission of the quiz form.
#[derive(Debug, Clone)]
pub struct QuizSubmission {
    pub document: UploadedDocument,
    pub request: GenerateQuizRequest,
}

/// Drains a multipart form into the uploaded file and the quiz parameters.
pub async fn read_submission(mut payload: Multipart, max_bytes: usize) -> AppResult<QuizSubmission> {
    let mut document: Option<UploadedDocument> = None;
    let mut fields: HashMap<String, String> = HashMap::new();

    while let Some(mut field) = payload.try_next().await? {
        let disposition = field.content_disposition();
        let name = disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();
        let file_name = disposition
            .and_then(|cd| cd.get_filename())
            .filter(|f| !f.is_empty())
            .map(str::to_string);
        let content_type = field.content_type().map(|m| m.essence_str().to_string());

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            if bytes.len() + chunk.len() > max_bytes {
                return Err(AppError::FileReadError(format!(
                    "field `{}` exceeds the {} byte upload limit",
                    name, max_bytes
                )));
            }
            bytes.extend_from_slice(&chunk);
        }

        if name == FILE_FIELD {
            document = Some(UploadedDocument {
                file_name,
                content_type,
                bytes,
            });
        } else if TEXT_FIELDS.contains(&name.as_str()) {
            let value = String::from_utf8(bytes).map_err(|_| {
                AppError::ValidationError(format!("field `{}` is not valid UTF-8", name))
            })?;
            fields.insert(name, value);
        } else {
            log::debug!("Ignoring unexpected form field `{}`", name);
        }
    }

    // Browsers send an empty file part when nothing was chosen
    let document = document
        .filter(|d| !d.bytes.is_empty() || d.file_name.is_some())
        .ok_or_else(|| AppError::ValidationError("a PDF or text file is required".to_string()))?;

    let field = |name: &str| {
        fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::ValidationError(format!("field `{}` is required", name)))
    };

    let number = field("number")?.parse::<u32>().map_err(|_| {
        AppError::ValidationError("Number of questions must be a whole number".to_string())
    })?;
    let request = GenerateQuizRequest::new(number, field("subject")?, field("tone")?);

    Ok(QuizSubmission { document, request })
}

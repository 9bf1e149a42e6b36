use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::{
    constants::prompts::{
        DEFAULT_RESPONSE_JSON, QUIZ_GENERATION_TEMPLATE, QUIZ_GENERATION_VARIABLES,
        QUIZ_REVIEW_TEMPLATE, QUIZ_REVIEW_VARIABLES,
    },
    errors::{AppError, AppResult},
};

static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}")
        .expect("PLACEHOLDER_REGEX is a valid regex pattern")
});

/// A fixed prompt with `{name}` placeholders for its declared input variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    template: &'static str,
    input_variables: &'static [&'static str],
}

impl PromptTemplate {
    pub const fn new(template: &'static str, input_variables: &'static [&'static str]) -> Self {
        Self {
            template,
            input_variables,
        }
    }

    pub const fn quiz_generation() -> Self {
        Self::new(QUIZ_GENERATION_TEMPLATE, QUIZ_GENERATION_VARIABLES)
    }

    pub const fn quiz_review() -> Self {
        Self::new(QUIZ_REVIEW_TEMPLATE, QUIZ_REVIEW_VARIABLES)
    }

    /// Fills every declared placeholder in a single pass.
    ///
    /// Substituted values are never rescanned, so braces inside the document
    /// text or the JSON example come through untouched. Undeclared `{..}`
    /// spans are left as written.
    pub fn render(&self, values: &[(&str, &str)]) -> AppResult<String> {
        if let Some(missing) = self
            .input_variables
            .iter()
            .find(|var| !values.iter().any(|(name, _)| name == *var))
        {
            return Err(AppError::InternalError(format!(
                "missing value for prompt variable `{}`",
                missing
            )));
        }

        let rendered = PLACEHOLDER_REGEX.replace_all(self.template, |caps: &Captures| {
            let name = &caps[1];
            let value = values
                .iter()
                .find(|(key, _)| *key == name)
                .filter(|_| self.input_variables.contains(&name));
            match value {
                Some((_, value)) => value.to_string(),
                None => caps[0].to_string(),
            }
        });

        Ok(rendered.into_owned())
    }
}

/// Loads the example reply shown to the model, compacted to a single line.
///
/// Falls back to the built-in example when no path is configured.
pub fn load_response_json(path: Option<&str>) -> AppResult<String> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            AppError::InternalError(format!("Failed to read response JSON from {}: {}", path, e))
        })?,
        None => DEFAULT_RESPONSE_JSON.to_string(),
    };

    let value: serde_json::Value = serde_json::from_str(&raw).map_err(|e| {
        AppError::InternalError(format!("Response JSON example is not valid JSON: {}", e))
    })?;

    Ok(serde_json::to_string(&value)?)
}

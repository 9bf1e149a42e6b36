use std::env;
use secrecy::SecretString;

const PLACEHOLDER_API_KEY: &str = "llm_api_key";

#[derive(Clone, Debug)]
pub struct Config {
    pub llm_api_key: SecretString,
    pub llm_api_base: String,
    pub llm_model: String,
    pub llm_temperature: f32,
    pub llm_timeout_seconds: u64,
    pub response_json_path: Option<String>,
    pub max_upload_bytes: usize,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            llm_api_key: SecretString::from(
                env::var("LLM_API_KEY")
                    .or_else(|_| env::var("AI21_API_KEY"))
                    .unwrap_or_else(|_| PLACEHOLDER_API_KEY.to_string()),
            ),
            llm_api_base: env::var("LLM_API_BASE")
                .unwrap_or_else(|_| "https://api.ai21.com/studio/v1".to_string()),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| "jamba-large".to_string()),
            llm_temperature: env::var("LLM_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0.7),
            llm_timeout_seconds: env::var("LLM_TIMEOUT_SECONDS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(120),
            response_json_path: env::var("RESPONSE_JSON_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty()),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|b| b.parse().ok())
                .unwrap_or(10 * 1024 * 1024),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if the API key is missing or still the placeholder
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        let api_key = self.llm_api_key.expose_secret();

        if api_key == PLACEHOLDER_API_KEY || api_key.trim().is_empty() {
            panic!(
                "FATAL: LLM_API_KEY is not set! Set LLM_API_KEY (or AI21_API_KEY) environment variable."
            );
        }

        if !(0.0..=2.0).contains(&self.llm_temperature) {
            panic!(
                "FATAL: LLM_TEMPERATURE must be between 0.0 and 2.0, got {}",
                self.llm_temperature
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            llm_api_key: SecretString::from("test_api_key".to_string()),
            llm_api_base: "http://127.0.0.1:9/v1".to_string(),
            llm_model: "test-model".to_string(),
            llm_temperature: 0.7,
            llm_timeout_seconds: 5,
            response_json_path: None,
            max_upload_bytes: 1024 * 1024,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}

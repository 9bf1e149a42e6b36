use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        document_reader::DocumentReader,
        model_service::{ChatModelService, LanguageModel},
        prompt_template::load_response_json,
        quiz_pipeline::QuizPipeline,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_pipeline: Arc<QuizPipeline>,
    pub document_reader: Arc<DocumentReader>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let response_json = load_response_json(config.response_json_path.as_deref())?;
        let model = Arc::new(ChatModelService::new(&config));

        Ok(Self::with_model(config, model, response_json))
    }

    /// Builds the state around any model, e.g. a stub in tests.
    pub fn with_model(config: Config, model: Arc<dyn LanguageModel>, response_json: String) -> Self {
        let document_reader = Arc::new(DocumentReader::new(config.max_upload_bytes));
        let quiz_pipeline = Arc::new(QuizPipeline::new(model, response_json));

        Self {
            quiz_pipeline,
            document_reader,
            config: Arc::new(config),
        }
    }
}

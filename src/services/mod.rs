pub mod document_reader;
pub mod http_helpers;
pub mod model_service;
pub mod prompt_template;
pub mod quiz_pipeline;
pub mod table_builder;

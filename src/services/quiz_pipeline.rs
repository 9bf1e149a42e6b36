use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::AppResult,
    models::{
        domain::{Quiz, TableRow},
        dto::request::GenerateQuizRequest,
    },
    services::{
        model_service::LanguageModel, prompt_template::PromptTemplate,
        table_builder::rows_from_quiz,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Generate,
    Review,
}

impl PipelineStage {
    pub fn name(&self) -> &'static str {
        match self {
            PipelineStage::Generate => "generate_quiz",
            PipelineStage::Review => "review_quiz",
        }
    }
}

/// Output of the generation stage.
///
/// A reply that does not parse is not a stage failure: the raw text is kept
/// so it can still be reviewed and shown to the user. Questions that parse but
/// name an unknown correct option are still rendered and reported as warnings.
#[derive(Debug, Clone)]
pub struct GeneratedQuiz {
    pub raw: String,
    pub parsed: AppResult<Quiz>,
    pub warnings: Vec<String>,
}

impl GeneratedQuiz {
    pub fn from_reply(raw: String) -> Self {
        let parsed = Quiz::parse(&raw);
        let warnings = parsed.as_ref().map(Quiz::warnings).unwrap_or_default();
        Self {
            raw,
            parsed,
            warnings,
        }
    }

    /// Quiz text handed to the review stage.
    pub fn review_input(&self) -> String {
        self.parsed
            .as_ref()
            .ok()
            .and_then(|quiz| quiz.to_json().ok())
            .unwrap_or_else(|| self.raw.clone())
    }
}

#[derive(Debug, Clone)]
pub struct QuizOutcome {
    pub raw_quiz: String,
    pub quiz: AppResult<Quiz>,
    pub warnings: Vec<String>,
    pub review: String,
}

impl QuizOutcome {
    pub fn table(&self) -> AppResult<Vec<TableRow>> {
        self.quiz.as_ref().map(rows_from_quiz).map_err(Clone::clone)
    }
}

/// Generate-then-review pipeline over a single document.
pub struct QuizPipeline {
    model: Arc<dyn LanguageModel>,
    generation_template: PromptTemplate,
    review_template: PromptTemplate,
    response_json: String,
}

impl QuizPipeline {
    pub fn new(model: Arc<dyn LanguageModel>, response_json: String) -> Self {
        Self {
            model,
            generation_template: PromptTemplate::quiz_generation(),
            review_template: PromptTemplate::quiz_review(),
            response_json,
        }
    }

    pub fn validate(request: &GenerateQuizRequest) -> AppResult<()> {
        request.validate()?;
        Ok(())
    }

    pub async fn generate(
        &self,
        request: &GenerateQuizRequest,
        document_text: &str,
    ) -> AppResult<GeneratedQuiz> {
        let stage = PipelineStage::Generate;
        log::info!(
            "Executing {} stage: {} questions on {} in {} tone",
            stage.name(),
            request.number,
            request.subject,
            request.tone
        );

        let number = request.number.to_string();
        let prompt = self.generation_template.render(&[
            ("text", document_text),
            ("number", &number),
            ("subject", &request.subject),
            ("tone", &request.tone),
            ("response_json", &self.response_json),
        ])?;

        let reply = self.model.complete(&prompt).await.map_err(|e| {
            log::error!("{} stage failed: {}", stage.name(), e);
            e
        })?;

        let generated = GeneratedQuiz::from_reply(reply);
        match &generated.parsed {
            Ok(quiz) if quiz.len() != request.number as usize => log::warn!(
                "Model returned {} questions, {} were requested",
                quiz.len(),
                request.number
            ),
            Ok(_) => {}
            Err(e) => log::warn!("Generated quiz could not be parsed: {}", e),
        }
        for warning in &generated.warnings {
            log::warn!("Generated quiz: {}", warning);
        }

        Ok(generated)
    }

    pub async fn review(&self, subject: &str, generated: &GeneratedQuiz) -> AppResult<String> {
        let stage = PipelineStage::Review;
        log::info!("Executing {} stage", stage.name());

        let quiz = generated.review_input();
        let prompt = self
            .review_template
            .render(&[("subject", subject), ("quiz", &quiz)])?;

        self.model.complete(&prompt).await.map_err(|e| {
            log::error!("{} stage failed: {}", stage.name(), e);
            e
        })
    }

    /// Validates the request, then runs generation and review in order.
    pub async fn run(
        &self,
        request: &GenerateQuizRequest,
        document_text: &str,
    ) -> AppResult<QuizOutcome> {
        Self::validate(request)?;

        let generated = self.generate(request, document_text).await?;
        let review = self.review(&request.subject, &generated).await?;

        log::info!("Quiz pipeline completed");

        Ok(QuizOutcome {
            raw_quiz: generated.raw,
            quiz: generated.parsed,
            warnings: generated.warnings,
            review,
        })
    }
}

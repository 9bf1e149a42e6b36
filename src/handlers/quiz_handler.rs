use std::sync::Arc;

use actix_multipart::Multipart;
use actix_web::{get, post, web, HttpRequest, HttpResponse, ResponseError};

use crate::{
    app_state::AppState,
    errors::{AppError, AppResult},
    handlers::{
        upload::read_submission,
        views::{render_error, render_form, render_results},
    },
    middleware::get_request_id,
    models::dto::response::GenerateQuizResponse,
    services::{
        http_helpers::{html_ok, html_response, success_json},
        quiz_pipeline::{QuizOutcome, QuizPipeline},
    },
};

#[get("/")]
async fn quiz_form() -> HttpResponse {
    html_ok(render_form())
}

#[post("/quizzes")]
async fn create_quiz_page(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: Multipart,
) -> HttpResponse {
    match generate_quiz(&req, &state, payload).await {
        Ok(outcome) => html_ok(render_results(&outcome)),
        Err(e) => html_response(e.status_code(), render_error(&e)),
    }
}

#[post("/api/quizzes")]
async fn create_quiz(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let outcome = generate_quiz(&req, &state, payload).await?;
    Ok(success_json(GenerateQuizResponse::from(outcome)))
}

async fn generate_quiz(
    req: &HttpRequest,
    state: &AppState,
    payload: Multipart,
) -> AppResult<QuizOutcome> {
    let request_id = get_request_id(req).unwrap_or_default();

    let result = async {
        let submission = read_submission(payload, state.config.max_upload_bytes).await?;
        QuizPipeline::validate(&submission.request)?;

        let reader = Arc::clone(&state.document_reader);
        let document = submission.document;
        let text = web::block(move || reader.read(&document))
            .await
            .map_err(|e| AppError::InternalError(format!("document reader failed: {}", e)))??;

        state.quiz_pipeline.run(&submission.request, &text).await
    }
    .await;

    match &result {
        Ok(_) => log::info!("[{}] Task completed", request_id),
        Err(e) => log::error!("[{}] Quiz generation failed: {}", request_id, e),
    }

    result
}

use actix_web::{get, HttpResponse};

use crate::services::http_helpers::success_json;

#[get("/health")]
async fn health_check() -> HttpResponse {
    success_json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub mod health_handler;
pub mod quiz_handler;
pub mod upload;
pub mod views;

use actix_web::web;

pub use health_handler::health_check;
pub use quiz_handler::{create_quiz, create_quiz_page, quiz_form};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(quiz_form)
        .service(create_quiz_page)
        .service(create_quiz);
}

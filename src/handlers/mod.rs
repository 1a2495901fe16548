pub mod chat;
pub mod landing;
pub mod params;

use actix_web::{web, HttpResponse};
use serde_json::json;

pub use params::Params;

pub const FORM_LIMIT_BYTES: usize = 256 * 1024;

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Routes and extractor settings shared by the server and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(FORM_LIMIT_BYTES))
        .route("/", web::get().to(landing::index))
        .route("/health", web::get().to(health_check))
        .route("/send", web::post().to(chat::send_message))
        .route("/suggest-prompts", web::post().to(chat::suggest_prompts));
}

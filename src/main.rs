use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{web, App, HttpServer};
use quickreply_chat::services::OpenRouterClient;
use quickreply_chat::{handlers, AppState, Settings};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let settings = Settings::from_env().map_err(|err| {
        error!("invalid configuration: {}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err)
    })?;

    let client = OpenRouterClient::new(settings.llm.clone()).map_err(|err| {
        error!("failed to build model client: {}", err);
        io::Error::new(io::ErrorKind::Other, err)
    })?;

    info!(
        model = %settings.llm.model,
        base_url = %settings.llm.base_url,
        timeout_secs = settings.llm.timeout.as_secs(),
        "model client ready"
    );

    let app_state = web::Data::new(AppState::new(Arc::new(client)));

    info!("listening on {}:{}", settings.bind_addr, settings.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .wrap(Cors::permissive())
            .app_data(app_state.clone())
            .configure(handlers::configure)
    })
    .bind((settings.bind_addr.as_str(), settings.port))?
    .run()
    .await
}

//! # Quill Web Server
//!
//! The main entry point for the Actix-web HTTP server rendering the blog.

use actix_web::{App, HttpServer, web};
use tera::Tera;
use tracing_actix_web::TracingLogger;

mod config;
mod error;
mod handlers;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&telemetry::TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    let Some(db_config) = config.database else {
        anyhow::bail!("DATABASE_URL must be set");
    };
    let db = quill_infra::database::connect(&db_config).await?;

    let templates = Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*"))?;

    let state = AppState::new(db, templates);

    tracing::info!(
        "Starting Quill web server on {}:{}",
        config.host,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}

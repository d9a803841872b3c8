use std::fs;

use actix_web::{middleware as actix_middleware, web, App, HttpServer};

use docshelf::config::AppConfig;
use docshelf::handlers;
use docshelf::middleware::session_middleware;
use docshelf::session::SessionManager;
use docshelf::store::{CredentialStore, DocumentStore};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists (for development)
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();

    fs::create_dir_all(&config.data_dir)?;
    if !config.credentials_path.exists() {
        fs::write(&config.credentials_path, "")?;
    }

    log::info!("Serving documents from {}", config.data_dir.display());
    log::info!("Credential file at {}", config.credentials_path.display());

    let documents = DocumentStore::new(&config.data_dir);
    let credentials = CredentialStore::new(&config.credentials_path);
    let sessions = SessionManager::new();

    log::info!("Starting HTTP server at {}:{}...", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            // Shared state
            .app_data(web::Data::new(documents.clone()))
            .app_data(web::Data::new(credentials.clone()))
            .app_data(web::Data::new(sessions.clone()))
            // Middleware
            .wrap(actix_middleware::Logger::default())
            .wrap(actix_middleware::from_fn(session_middleware))
            .configure(handlers::routes)
    })
    .bind((config.host.clone(), config.port))?
    .run()
    .await?;

    Ok(())
}

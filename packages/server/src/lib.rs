#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web JSON API for the Kenya elections dashboard.
//!
//! Every dashboard view is served from `/api/views/{view}` as a flat table
//! plus chart hints; the frontend does the drawing. The two required
//! documents are loaded before the server binds. A missing boundary file
//! only disables the interactive map and `/api/boundaries`.

mod handlers;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use kenya_elections_data::{DataPaths, DocumentStore};

/// Shared application state.
pub struct AppState {
    /// Memoized source documents.
    pub store: Arc<DocumentStore>,
}

/// Registers the `/api` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::QueryConfig::default().error_handler(handlers::query_error))
            .route("/health", web::get().to(handlers::health))
            .route("/views", web::get().to(handlers::views))
            .route("/views/{view}", web::get().to(handlers::view))
            .route("/counties", web::get().to(handlers::counties))
            .route("/years", web::get().to(handlers::years))
            .route("/boundaries", web::get().to(handlers::boundaries)),
    );
}

/// Starts the dashboard API server.
///
/// Loads the election history and county documents from `paths`, probes
/// the boundary document, and starts the Actix-Web HTTP server on
/// `BIND_ADDR`:`PORT` (default `127.0.0.1:8080`). The caller provides the
/// async runtime and initializes logging.
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
///
/// # Panics
///
/// Panics if a required document cannot be loaded.
#[allow(clippy::future_not_send)]
pub async fn run_server(paths: DataPaths) -> std::io::Result<()> {
    log::info!("Loading election documents...");
    let store = DocumentStore::new(paths);
    store
        .load_required()
        .expect("Failed to load required election documents");

    if !store.boundaries_available() {
        log::warn!("Serving without county boundaries");
    }

    let state = web::Data::new(AppState {
        store: Arc::new(store),
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((bind_addr, port))?
    .run()
    .await
}

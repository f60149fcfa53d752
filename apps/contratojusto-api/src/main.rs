//! ContratoJusto API Server - Backend for document generation
//!
//! Provides REST endpoints for:
//! - Template and plan listing
//! - Document preview (rendered text)
//! - PDF / DOCX export
//! - Checkout order submission and polling

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

mod error;
mod handlers;
mod models;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("contratojusto_api=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    // Initialize application state
    info!("Initializing ContratoJusto API...");
    let state = AppState::new()?;
    let state = Arc::new(state);

    // CORS configuration for web clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Catalog endpoints
        .route("/api/templates", get(handlers::list_templates))
        .route("/api/plans", get(handlers::list_plans))
        // Document endpoints
        .route("/api/documents/preview", post(handlers::preview_document))
        .route("/api/documents/export/pdf", post(handlers::export_document_pdf))
        .route("/api/documents/export/docx", post(handlers::export_document_docx))
        // Checkout endpoints
        .route("/api/checkout/orders", post(handlers::create_order))
        .route("/api/checkout/orders/:id", get(handlers::get_order))
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    // Parse bind address
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3002);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting ContratoJusto API on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

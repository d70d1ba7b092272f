// src/bin/api_server.rs

use anyhow::Context;
use movie_catalog::infra::{config, logging};
use movie_catalog::transport;
use movie_catalog::CatalogService;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_dotenv();
    logging::init(&config::log_filter());

    // --- Catalog Initialization ---
    let catalog_path = config::catalog_path();
    info!(path = %catalog_path.display(), "loading catalog");
    let catalog_service = match CatalogService::load(&catalog_path) {
        Ok(s) => s,
        Err(e) => {
            // A partial or corrupt catalog is never served.
            error!(path = %catalog_path.display(), error = %e, "catalog failed to load");
            return Err(e).with_context(|| format!("loading {}", catalog_path.display()));
        }
    };
    if let Ok(facets) = catalog_service.facets() {
        info!(
            movies = catalog_service.catalog().len(),
            genres = facets.genres.len(),
            years = %format!("{}..={}", facets.years.min, facets.years.max),
            "catalog ready"
        );
    }

    let app_state = transport::http::AppState {
        catalog_service: Arc::new(catalog_service),
    };

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);
    let bind_addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {}", bind_addr))?;
    info!(addr = %bind_addr, "API server listening");
    info!("Swagger UI available at /swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("shutdown signal received");
            }
        })
        .await?;

    info!("graceful shutdown complete");
    Ok(())
}

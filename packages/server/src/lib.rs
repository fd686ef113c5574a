pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::{AppConfig, CorsConfig, StoreBackend};
use crate::state::AppState;
use crate::store::{BlogStore, DatabaseBlogStore, MemoryBlogStore};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bloglist API",
        version = "1.0.0",
        description = "CRUD API for blog records"
    ),
    tags(
        (name = "Blogs", description = "Blog collection operations"),
    ),
)]
struct ApiDoc;

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    let cors = cors_layer(&state.config.server.cors);
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api", routes::api_routes())
        .split_for_parts();

    router
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
        .merge(Scalar::with_url("/scalar", api))
        .layer(cors)
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = if config.allow_origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let list: Vec<HeaderValue> = config
            .allow_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(v) => Some(v),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {origin}");
                    None
                }
            })
            .collect();
        AllowOrigin::list(list)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(config.max_age))
}

/// Open the configured document store.
pub async fn connect_store(config: &AppConfig) -> anyhow::Result<Arc<dyn BlogStore>> {
    match config.store.backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory blog store; data is lost on shutdown");
            Ok(Arc::new(MemoryBlogStore::new()))
        }
        StoreBackend::Postgres => {
            let url = config
                .database
                .url
                .as_deref()
                .context("database.url must be set for the postgres store")?;
            let db = database::init_db(url, &config.database)
                .await
                .context("Failed to connect to database")?;
            Ok(Arc::new(DatabaseBlogStore::new(db)))
        }
    }
}

//! HTTP surface: two read routes and a JSON 404 for everything else.

pub mod joyas;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::middleware::RequestLogLayer;
use crate::services::JoyasService;

#[derive(Clone)]
pub struct AppState {
    pub joyas: JoyasService,
}

impl AppState {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self {
            joyas: JoyasService::new(pool),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any);

    Router::new()
        .route("/joyas", get(joyas::list_joyas).fallback(not_found))
        .route("/joyas/filtros", get(joyas::filter_joyas).fallback(not_found))
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // outermost, so it sees every request first
        .layer(RequestLogLayer::new())
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}

use crate::config::Config;
use crate::services::rest_countries::RestCountriesClient;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, Router},
    Json,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod countries;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: RestCountriesClient,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/countries/{name}", get(countries::get_country))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn health(State(app_state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "healthy",
            "upstream": app_state.config.rest_countries_url,
        })),
    )
}

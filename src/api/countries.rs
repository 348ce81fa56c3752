use crate::api::AppState;
use crate::models::response::ApiResponse;
use crate::models::view::CountryViewModel;
use crate::services::detail::{CountryDetail, CountryDetailController};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub async fn get_country(
    State(app_state): State<AppState>,
    Path(name): Path<String>,
) -> (StatusCode, Json<ApiResponse<CountryViewModel>>) {
    let controller = CountryDetailController::new(app_state.client.clone());

    match controller.show(&name, None).await {
        CountryDetail::Loaded(view) => (StatusCode::OK, Json(ApiResponse::ok(view))),
        CountryDetail::NotFound | CountryDetail::Loading => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Country not found")),
        ),
    }
}

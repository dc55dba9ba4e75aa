use axum::{Json, Router, extract::State};

use crate::{error::AppResult, models::Stats, services::stats_service, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/", axum::routing::get(get_stats))
}

#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Entity counts and revenue placeholders", body = Stats)
    ),
    tag = "stats"
)]
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<Stats>> {
    let stats = stats_service::stats(&state).await?;
    Ok(Json(stats))
}

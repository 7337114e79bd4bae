use axum::{extract::Query, Json};
use serde::Deserialize;

use crate::engine::trend::{daily_trend, TrendPoint};

#[derive(Deserialize)]
pub struct TrendParams {
    #[serde(default = "default_window")]
    pub days: u32,
}

fn default_window() -> u32 {
    30
}

/// Daily aggregate series for the requested window: `days + 1` points,
/// oldest first, ending today.
pub async fn get_trend(Query(params): Query<TrendParams>) -> Json<Vec<TrendPoint>> {
    Json(daily_trend(params.days))
}

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::engine::{outliers, FilterCriteria, FleetMetrics};
use crate::model::DeviceRecord;
use crate::AppState;

#[derive(Serialize)]
pub struct OutlierReport {
    pub mean_quality: f64,
    pub std_dev: f64,
    pub outliers: Vec<DeviceRecord>,
}

/// Devices more than 1.5 population standard deviations below the filtered
/// subset's average quality, worst first.
pub async fn get_outliers(
    State(state): State<AppState>,
    Query(criteria): Query<FilterCriteria>,
) -> Json<OutlierReport> {
    let filtered = criteria.apply(&state.fleet);
    let metrics = FleetMetrics::compute(&filtered);
    Json(OutlierReport {
        mean_quality: metrics.avg_quality,
        std_dev: outliers::std_dev(&filtered, metrics.avg_quality),
        outliers: outliers::detect(&filtered, metrics.avg_quality),
    })
}

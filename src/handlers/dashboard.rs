use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::engine::{
    by_country, by_device_type, by_manufacturer, subnet_health, CountrySummary,
    DeviceTypeSummary, FilterCriteria, FleetMetrics, ManufacturerSummary, SubnetHealth,
};
use crate::AppState;

/// Everything the overview panels render for the current filtered subset,
/// computed fresh on every request.
#[derive(Serialize)]
pub struct DashboardSnapshot {
    pub metrics: FleetMetrics,
    pub by_country: Vec<CountrySummary>,
    pub by_manufacturer: Vec<ManufacturerSummary>,
    pub by_device_type: Vec<DeviceTypeSummary>,
    pub subnet_health: Vec<SubnetHealth>,
}

pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(criteria): Query<FilterCriteria>,
) -> Json<DashboardSnapshot> {
    let filtered = criteria.apply(&state.fleet);
    Json(DashboardSnapshot {
        metrics: FleetMetrics::compute(&filtered),
        by_country: by_country(&filtered),
        by_manufacturer: by_manufacturer(&filtered),
        by_device_type: by_device_type(&filtered),
        subnet_health: subnet_health(&filtered),
    })
}

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::engine::{FilterCriteria, FilterOptions};
use crate::AppState;

#[derive(Serialize)]
pub struct FilterValues {
    pub countries: Vec<String>,
    pub cities: Vec<String>,
    pub manufacturers: Vec<String>,
    pub device_types: Vec<String>,
    pub subnets: Vec<String>,
    pub countries_monitored: usize,
    pub cities_monitored: usize,
}

/// Option lists for the filter controls. The current criteria only matter
/// for the city list, which is scoped to the selected country.
pub async fn get_filter_values(
    State(state): State<AppState>,
    Query(criteria): Query<FilterCriteria>,
) -> Json<FilterValues> {
    let options = FilterOptions::derive(&state.fleet, &criteria);
    Json(FilterValues {
        countries_monitored: options.countries_monitored(),
        cities_monitored: options.cities_monitored(),
        countries: options.countries,
        cities: options.cities,
        manufacturers: options.manufacturers,
        device_types: options.device_types,
        subnets: options.subnets,
    })
}

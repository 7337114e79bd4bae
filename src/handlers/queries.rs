use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::engine::{queries, FilterCriteria, QualityComparison, ALL};
use crate::AppState;

/// The fleet filters plus the parameters of the three ad-hoc computations.
/// Defaults reproduce the reference dashboard's queries: Poly devices in the
/// USA above 10% poor calls, and premium-vs-standard room quality.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AdHocQueryParams {
    pub country: String,
    pub city: String,
    pub manufacturer: String,
    pub device_type: String,
    pub subnet: String,
    pub target_manufacturer: String,
    pub target_country: String,
    pub poor_call_threshold: f64,
    pub left_type: String,
    pub right_type: String,
}

impl Default for AdHocQueryParams {
    fn default() -> Self {
        Self {
            country: ALL.to_string(),
            city: ALL.to_string(),
            manufacturer: ALL.to_string(),
            device_type: ALL.to_string(),
            subnet: ALL.to_string(),
            target_manufacturer: "Poly".to_string(),
            target_country: "USA".to_string(),
            poor_call_threshold: 10.0,
            left_type: "Teams Room Premium".to_string(),
            right_type: "Teams Room Standard".to_string(),
        }
    }
}

impl AdHocQueryParams {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            country: self.country.clone(),
            city: self.city.clone(),
            manufacturer: self.manufacturer.clone(),
            device_type: self.device_type.clone(),
            subnet: self.subnet.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct AdHocQueryResults {
    pub conditional_count: usize,
    pub comparison: QualityComparison,
    pub max_variance_subnet: Option<String>,
}

pub async fn get_ad_hoc_queries(
    State(state): State<AppState>,
    Query(params): Query<AdHocQueryParams>,
) -> Json<AdHocQueryResults> {
    let filtered = params.criteria().apply(&state.fleet);
    Json(AdHocQueryResults {
        conditional_count: queries::conditional_count(
            &filtered,
            &params.target_manufacturer,
            &params.target_country,
            params.poor_call_threshold,
        ),
        comparison: queries::compare_device_types(&filtered, &params.left_type, &params.right_type),
        max_variance_subnet: queries::max_variance_subnet(&filtered),
    })
}

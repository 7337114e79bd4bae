//! Device-performance analytics for a fleet of conferencing-room devices.
//!
//! The engine turns a flat, read-only snapshot of device records into
//! grouped summaries, trend series, outlier lists, and ad-hoc query results,
//! sliceable by geography, manufacturer, device type, and subnet. The HTTP
//! layer is a thin JSON surface over those pure computations; the snapshot
//! is loaded once at startup and never mutated.

pub mod config;
pub mod dev_tools;
pub mod engine;
pub mod handlers;
pub mod model;
pub mod session;
pub mod source;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::model::DeviceRecord;

#[derive(Clone)]
pub struct AppState {
    pub fleet: Arc<Vec<DeviceRecord>>,
}

impl AppState {
    pub fn new(fleet: Vec<DeviceRecord>) -> Self {
        Self {
            fleet: Arc::new(fleet),
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/filters", get(handlers::get_filter_values))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/outliers", get(handlers::get_outliers))
        .route("/api/trends", get(handlers::get_trend))
        .route("/api/queries", get(handlers::get_ad_hoc_queries))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

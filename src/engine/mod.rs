//! The aggregation and outlier-analysis engine.
//!
//! Every function in here is a pure, synchronous computation over a read-only
//! slice of the fleet snapshot. Degenerate inputs (an empty filtered subset)
//! produce defined zero/empty results rather than errors.

pub mod filter;
pub mod groups;
pub mod metrics;
pub mod outliers;
pub mod queries;
pub mod stats;
pub mod trend;

pub use filter::{FilterCriteria, FilterOptions, ALL};
pub use groups::{
    by_country, by_device_type, by_manufacturer, group_by, subnet_health, CountrySummary,
    DeviceTypeSummary, ManufacturerSummary, SubnetHealth,
};
pub use metrics::FleetMetrics;
pub use queries::QualityComparison;
pub use trend::TrendPoint;

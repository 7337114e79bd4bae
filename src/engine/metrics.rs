use serde::Serialize;

use crate::engine::stats::{mean, round1};
use crate::model::DeviceRecord;

/// A device below this quality score counts as having issues.
const QUALITY_ISSUE_THRESHOLD: f64 = 80.0;

/// Top-level numbers for the current filtered subset. Averages report 0 for
/// an empty subset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetMetrics {
    pub avg_quality: f64,
    pub avg_poor_call: f64,
    pub total_devices: usize,
    pub total_calls: u64,
    pub devices_with_issues: usize,
}

impl FleetMetrics {
    pub fn compute(records: &[&DeviceRecord]) -> Self {
        let quality: Vec<f64> = records.iter().map(|d| d.quality_score).collect();
        let poor: Vec<f64> = records.iter().map(|d| d.poor_call_pct).collect();
        Self {
            avg_quality: round1(mean(&quality)),
            avg_poor_call: round1(mean(&poor)),
            total_devices: records.len(),
            total_calls: records.iter().map(|d| d.total_calls).sum(),
            devices_with_issues: records
                .iter()
                .filter(|d| d.quality_score < QUALITY_ISSUE_THRESHOLD)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::record;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_subset_reports_zeros() {
        let metrics = FleetMetrics::compute(&[]);
        assert_eq!(
            metrics,
            FleetMetrics {
                avg_quality: 0.0,
                avg_poor_call: 0.0,
                total_devices: 0,
                total_calls: 0,
                devices_with_issues: 0,
            }
        );
    }

    #[test]
    fn averages_and_issue_count() {
        let fleet = vec![
            record("DEV-1", "USA", "Austin", "Poly", "Teams Phone", "10.0.0.0/24", 70.0),
            record("DEV-2", "USA", "Austin", "Poly", "Teams Phone", "10.0.0.0/24", 95.0),
        ];
        let refs: Vec<&DeviceRecord> = fleet.iter().collect();
        let metrics = FleetMetrics::compute(&refs);
        assert_eq!(metrics.avg_quality, 82.5);
        assert_eq!(metrics.total_devices, 2);
        assert_eq!(metrics.devices_with_issues, 1);
        assert_eq!(metrics.total_calls, fleet[0].total_calls + fleet[1].total_calls);
    }
}

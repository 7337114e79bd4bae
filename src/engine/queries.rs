use serde::Serialize;

use crate::engine::group_by;
use crate::engine::stats::{mean, population_variance, round1};
use crate::model::DeviceRecord;

/// Count of records matching an extra predicate on top of the current
/// filters. The reference dashboard asks for one manufacturer in one country
/// above a poor-call threshold.
pub fn conditional_count(
    records: &[&DeviceRecord],
    manufacturer: &str,
    country: &str,
    poor_call_threshold: f64,
) -> usize {
    records
        .iter()
        .filter(|d| {
            d.manufacturer == manufacturer
                && d.country == country
                && d.poor_call_pct > poor_call_threshold
        })
        .count()
}

/// Mean quality for two named device types, each independently defaulting to
/// 0 when its subset is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityComparison {
    pub left_type: String,
    pub left_avg_quality: f64,
    pub right_type: String,
    pub right_avg_quality: f64,
}

pub fn compare_device_types(
    records: &[&DeviceRecord],
    left_type: &str,
    right_type: &str,
) -> QualityComparison {
    QualityComparison {
        left_type: left_type.to_string(),
        left_avg_quality: avg_quality_of_type(records, left_type),
        right_type: right_type.to_string(),
        right_avg_quality: avg_quality_of_type(records, right_type),
    }
}

fn avg_quality_of_type(records: &[&DeviceRecord], device_type: &str) -> f64 {
    let scores: Vec<f64> = records
        .iter()
        .filter(|d| d.device_type == device_type)
        .map(|d| d.quality_score)
        .collect();
    round1(mean(&scores))
}

/// The subnet whose members have the highest population variance in quality
/// score; `None` when the subset is empty.
pub fn max_variance_subnet(records: &[&DeviceRecord]) -> Option<String> {
    group_by(records, |d| d.subnet.clone())
        .into_iter()
        .map(|(subnet, members)| {
            let scores: Vec<f64> = members.iter().map(|d| d.quality_score).collect();
            let variance = population_variance(&scores, mean(&scores));
            (subnet, variance)
        })
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(subnet, _)| subnet)
}

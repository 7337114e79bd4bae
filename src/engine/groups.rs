use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

use crate::engine::stats::{mean, round1};
use crate::model::DeviceRecord;

/// How many subnet rows the health panel shows.
const SUBNET_HEALTH_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountrySummary {
    pub country: String,
    pub total_devices: usize,
    pub avg_quality: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManufacturerSummary {
    pub manufacturer: String,
    pub devices: usize,
    pub avg_quality: f64,
    pub poor_call_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceTypeSummary {
    pub device_type: String,
    pub count: usize,
    pub avg_quality: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubnetHealth {
    pub subnet: String,
    pub devices: usize,
    pub avg_quality: f64,
    pub avg_latency: f64,
}

/// Partition records by an extracted key, preserving first-seen group order.
/// Groups exist only for observed members, so no group is ever empty.
pub fn group_by<'a, K, F>(records: &[&'a DeviceRecord], key: F) -> Vec<(K, Vec<&'a DeviceRecord>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&DeviceRecord) -> K,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&DeviceRecord>)> = Vec::new();
    for &record in records {
        let k = key(record);
        match slots.get(&k) {
            Some(&i) => groups[i].1.push(record),
            None => {
                slots.insert(k.clone(), groups.len());
                groups.push((k, vec![record]));
            }
        }
    }
    groups
}

fn avg_quality(members: &[&DeviceRecord]) -> f64 {
    let scores: Vec<f64> = members.iter().map(|d| d.quality_score).collect();
    round1(mean(&scores))
}

/// Per-country quality, sorted descending by the rounded average.
pub fn by_country(records: &[&DeviceRecord]) -> Vec<CountrySummary> {
    let mut summaries: Vec<CountrySummary> = group_by(records, |d| d.country.clone())
        .into_iter()
        .map(|(country, members)| CountrySummary {
            country,
            total_devices: members.len(),
            avg_quality: avg_quality(&members),
        })
        .collect();
    summaries.sort_by(|a, b| b.avg_quality.total_cmp(&a.avg_quality));
    summaries
}

/// Per-manufacturer quality and poor-call rate, sorted descending by the
/// rounded average quality.
pub fn by_manufacturer(records: &[&DeviceRecord]) -> Vec<ManufacturerSummary> {
    let mut summaries: Vec<ManufacturerSummary> = group_by(records, |d| d.manufacturer.clone())
        .into_iter()
        .map(|(manufacturer, members)| {
            let poor: Vec<f64> = members.iter().map(|d| d.poor_call_pct).collect();
            ManufacturerSummary {
                manufacturer,
                devices: members.len(),
                avg_quality: avg_quality(&members),
                poor_call_pct: round1(mean(&poor)),
            }
        })
        .collect();
    summaries.sort_by(|a, b| b.avg_quality.total_cmp(&a.avg_quality));
    summaries
}

/// Per-device-type quality in first-seen order.
pub fn by_device_type(records: &[&DeviceRecord]) -> Vec<DeviceTypeSummary> {
    group_by(records, |d| d.device_type.clone())
        .into_iter()
        .map(|(device_type, members)| DeviceTypeSummary {
            device_type,
            count: members.len(),
            avg_quality: avg_quality(&members),
        })
        .collect()
}

/// Per-subnet quality and latency for the busiest subnets, sorted descending
/// by member count and capped at ten rows.
pub fn subnet_health(records: &[&DeviceRecord]) -> Vec<SubnetHealth> {
    let mut summaries: Vec<SubnetHealth> = group_by(records, |d| d.subnet.clone())
        .into_iter()
        .map(|(subnet, members)| {
            let latencies: Vec<f64> = members.iter().map(|d| d.avg_latency).collect();
            SubnetHealth {
                subnet,
                devices: members.len(),
                avg_quality: avg_quality(&members),
                avg_latency: mean(&latencies).round(),
            }
        })
        .collect();
    summaries.sort_by(|a, b| b.devices.cmp(&a.devices));
    summaries.truncate(SUBNET_HEALTH_LIMIT);
    summaries
}

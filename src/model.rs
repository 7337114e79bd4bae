use serde::{Deserialize, Serialize};

/// One device-performance record as supplied by the upstream collector.
///
/// Field names on the wire are camelCase. String dimensions are open sets;
/// `subnet` is a free-text segment label and is not validated as a real CIDR
/// block. Numeric fields carry the collector's values as-is: nominal ranges
/// (quality 0-100, percentages 0-100) are not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRecord {
    pub device_id: String,
    pub country: String,
    pub city: String,
    pub building: String,
    pub manufacturer: String,
    pub device_type: String,
    pub subnet: String,
    pub quality_score: f64,
    pub poor_call_pct: f64,
    pub avg_latency: f64,
    pub packet_loss: f64,
    pub total_calls: u64,
    pub active_users: u64,
}

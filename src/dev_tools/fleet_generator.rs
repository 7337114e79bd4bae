use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::model::DeviceRecord;
use crate::source::{RecordSource, SourceError};

const SAMPLE_DEPLOYMENTS: &[(&str, &[&str])] = &[
    ("USA", &["New York", "San Francisco", "Chicago", "Austin", "Seattle"]),
    ("UK", &["London", "Manchester", "Edinburgh"]),
    ("Germany", &["Berlin", "Munich", "Frankfurt"]),
    ("France", &["Paris", "Lyon", "Marseille"]),
    ("Australia", &["Sydney", "Melbourne", "Brisbane"]),
    ("Canada", &["Toronto", "Vancouver", "Montreal"]),
    ("Japan", &["Tokyo", "Osaka", "Nagoya"]),
    ("Singapore", &["Singapore"]),
];

const SAMPLE_MANUFACTURERS: &[&str] = &["Microsoft", "Logitech", "Poly", "Crestron", "Yealink"];

const SAMPLE_DEVICE_TYPES: &[&str] = &[
    "Teams Room Standard",
    "Teams Room Premium",
    "Teams Display",
    "Teams Phone",
];

const SAMPLE_BUILDINGS: &[&str] = &[
    "HQ Building A",
    "HQ Building B",
    "Remote Office",
    "Branch Office",
    "Data Center",
];

/// Synthesizes a plausible fleet snapshot for development and fixtures.
///
/// Each city gets 5-19 devices. Quality is drawn around 75-95 with small
/// manufacturer and premium-tier bonuses plus jitter; the failure metrics are
/// derived from it so low-quality devices also show high poor-call rates,
/// latency, and loss. Values are not clamped back into their nominal ranges
/// beyond what the construction itself bounds.
pub struct FleetGenerator {
    seed: Option<u64>,
}

impl FleetGenerator {
    /// A fresh random fleet on every load.
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// A reproducible fleet for fixtures and tests.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn generate(&self) -> Vec<DeviceRecord> {
        let mut rng = self.rng();
        let mut fleet = Vec::new();
        let mut next_id = 1000u32;

        for (country, cities) in SAMPLE_DEPLOYMENTS {
            for city in *cities {
                let devices = rng.gen_range(5..20);
                for _ in 0..devices {
                    fleet.push(device(&mut rng, country, city, &mut next_id));
                }
            }
        }
        fleet
    }
}

fn device(rng: &mut StdRng, country: &str, city: &str, next_id: &mut u32) -> DeviceRecord {
    let manufacturer = *SAMPLE_MANUFACTURERS.choose(rng).unwrap_or(&"Poly");
    let device_type = *SAMPLE_DEVICE_TYPES.choose(rng).unwrap_or(&"Teams Phone");
    let building = *SAMPLE_BUILDINGS.choose(rng).unwrap_or(&"HQ Building A");
    let subnet = format!(
        "10.{}.{}.0/24",
        rng.gen_range(0..255),
        rng.gen_range(0..255)
    );

    let base_quality = 75.0 + rng.gen::<f64>() * 20.0;
    let manufacturer_bonus = match manufacturer {
        "Microsoft" => 5.0,
        "Poly" => 3.0,
        _ => 0.0,
    };
    let tier_bonus = if device_type.contains("Premium") { 5.0 } else { 0.0 };
    let jitter = (rng.gen::<f64>() - 0.5) * 10.0;

    let quality_score = (base_quality + manufacturer_bonus + tier_bonus + jitter).min(100.0);
    let poor_call_pct = (100.0 - quality_score + (rng.gen::<f64>() - 0.5) * 10.0).max(0.0);
    let avg_latency = 20.0 + (100.0 - quality_score) * 0.5 + rng.gen::<f64>() * 15.0;
    let packet_loss = ((100.0 - quality_score) * 0.05 + rng.gen::<f64>() * 2.0).max(0.0);

    let device_id = format!("DEV-{next_id}");
    *next_id += 1;

    DeviceRecord {
        device_id,
        country: country.to_string(),
        city: city.to_string(),
        building: building.to_string(),
        manufacturer: manufacturer.to_string(),
        device_type: device_type.to_string(),
        subnet,
        quality_score: round1(quality_score),
        poor_call_pct: round1(poor_call_pct),
        avg_latency: round1(avg_latency),
        packet_loss: round2(packet_loss),
        total_calls: rng.gen_range(100..600),
        active_users: rng.gen_range(10..60),
    }
}

impl Default for FleetGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordSource for FleetGenerator {
    fn load(&self) -> Result<Vec<DeviceRecord>, SourceError> {
        Ok(self.generate())
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

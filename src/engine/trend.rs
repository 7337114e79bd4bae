use chrono::Utc;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;

/// One day of fleet-wide aggregate metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub quality_score: f64,
    pub poor_call_pct: f64,
    pub avg_latency: f64,
    pub packet_loss: f64,
}

/// Produce `window_days + 1` daily points, oldest to newest, one per calendar
/// day ending today (UTC). Values are synthetic: quality sits around 82-92
/// with the oldest third of the window depressed, poor-call rate mirrors it,
/// latency and loss jitter inside their nominal bands. Consumers should rely
/// only on the count, ordering, and date contract.
pub fn daily_trend(window_days: u32) -> Vec<TrendPoint> {
    daily_trend_with(window_days, &mut StdRng::from_entropy())
}

pub fn daily_trend_with<R: Rng>(window_days: u32, rng: &mut R) -> Vec<TrendPoint> {
    let today = Utc::now().date_naive();
    let mut points = Vec::with_capacity(window_days as usize + 1);
    for i in (0..=i64::from(window_days)).rev() {
        let date = today - chrono::Duration::days(i);
        let early_window = i > 20;
        points.push(TrendPoint {
            date: date.format("%Y-%m-%d").to_string(),
            quality_score: 82.0 + rng.gen::<f64>() * 10.0 - if early_window { 5.0 } else { 0.0 },
            poor_call_pct: 8.0 + rng.gen::<f64>() * 5.0 + if early_window { 3.0 } else { 0.0 },
            avg_latency: 35.0 + rng.gen::<f64>() * 15.0,
            packet_loss: 0.5 + rng.gen::<f64>() * 1.5,
        });
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_window_plus_one_points() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(daily_trend_with(30, &mut rng).len(), 31);
        assert_eq!(daily_trend_with(0, &mut rng).len(), 1);
    }

    #[test]
    fn dates_ascend_and_end_today() {
        let mut rng = StdRng::seed_from_u64(7);
        let points = daily_trend_with(30, &mut rng);
        for pair in points.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
        let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
        assert_eq!(points.last().map(|p| p.date.as_str()), Some(today.as_str()));
    }

    #[test]
    fn values_stay_inside_their_construction_bands() {
        let mut rng = StdRng::seed_from_u64(42);
        for point in daily_trend_with(30, &mut rng) {
            assert!(point.quality_score >= 77.0 && point.quality_score < 92.0);
            assert!(point.poor_call_pct >= 8.0 && point.poor_call_pct < 16.0);
            assert!(point.avg_latency >= 35.0 && point.avg_latency < 50.0);
            assert!(point.packet_loss >= 0.5 && point.packet_loss < 2.0);
        }
    }
}

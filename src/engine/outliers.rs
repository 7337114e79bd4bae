use crate::engine::stats::population_std_dev;
use crate::model::DeviceRecord;

/// How many standard deviations below the mean a record must fall.
const OUTLIER_SIGMA: f64 = 1.5;

/// Upper bound on the reported outlier list.
const MAX_OUTLIERS: usize = 10;

/// Select the statistically low-performing records of a filtered subset.
///
/// `mean_quality` is the subset's fleet average as reported to the user (the
/// 1dp-rounded value); the population standard deviation is measured against
/// it. Records strictly below `mean - 1.5 * stddev` are returned worst first,
/// capped at ten. An empty subset yields an empty list; no division happens.
pub fn detect(records: &[&DeviceRecord], mean_quality: f64) -> Vec<DeviceRecord> {
    let scores: Vec<f64> = records.iter().map(|d| d.quality_score).collect();
    let std_dev = population_std_dev(&scores, mean_quality);
    let threshold = mean_quality - OUTLIER_SIGMA * std_dev;

    let mut outliers: Vec<DeviceRecord> = records
        .iter()
        .filter(|d| d.quality_score < threshold)
        .map(|d| (*d).clone())
        .collect();
    outliers.sort_by(|a, b| a.quality_score.total_cmp(&b.quality_score));
    outliers.truncate(MAX_OUTLIERS);
    outliers
}

/// The population standard deviation the detector worked with, for display
/// next to the outlier table.
pub fn std_dev(records: &[&DeviceRecord], mean_quality: f64) -> f64 {
    let scores: Vec<f64> = records.iter().map(|d| d.quality_score).collect();
    population_std_dev(&scores, mean_quality)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::record_with_quality;
    use pretty_assertions::assert_eq;

    fn fleet(scores: &[f64]) -> Vec<DeviceRecord> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &q)| record_with_quality(&format!("DEV-{}", 1000 + i), q))
            .collect()
    }

    #[test]
    fn reference_example_selects_only_the_worst_record() {
        // mean 83.4, population stddev ~15.0, threshold ~60.9.
        let fleet = fleet(&[60.0, 61.0, 62.0, 90.0, 91.0, 92.0, 93.0, 94.0, 95.0, 96.0]);
        let refs: Vec<&DeviceRecord> = fleet.iter().collect();
        let outliers = detect(&refs, 83.4);
        assert_eq!(outliers.len(), 1);
        assert_eq!(outliers[0].device_id, "DEV-1000");
        assert_eq!(outliers[0].quality_score, 60.0);
    }

    #[test]
    fn empty_subset_yields_empty_list() {
        assert!(detect(&[], 0.0).is_empty());
        assert_eq!(std_dev(&[], 0.0), 0.0);
    }

    #[test]
    fn uniform_scores_have_no_outliers() {
        let fleet = fleet(&[85.0; 20]);
        let refs: Vec<&DeviceRecord> = fleet.iter().collect();
        assert!(detect(&refs, 85.0).is_empty());
    }

    #[test]
    fn list_is_ascending_and_capped_at_ten() {
        // 100 tightly clustered scores plus 12 near-zero stragglers: the
        // threshold lands around 42, so all 12 stragglers qualify.
        let mut scores = vec![90.0; 100];
        for i in 0..12 {
            scores.push(i as f64);
        }
        let fleet = fleet(&scores);
        let refs: Vec<&DeviceRecord> = fleet.iter().collect();
        let mean = crate::engine::stats::round1(crate::engine::stats::mean(
            &refs.iter().map(|d| d.quality_score).collect::<Vec<_>>(),
        ));

        let outliers = detect(&refs, mean);
        assert_eq!(outliers.len(), 10);
        for pair in outliers.windows(2) {
            assert!(pair[0].quality_score <= pair[1].quality_score);
        }
        assert_eq!(outliers[0].quality_score, 0.0);
        assert_eq!(outliers[9].quality_score, 9.0);
    }

    #[test]
    fn detection_is_idempotent() {
        let fleet = fleet(&[60.0, 61.0, 62.0, 90.0, 91.0, 92.0, 93.0, 94.0, 95.0, 96.0]);
        let refs: Vec<&DeviceRecord> = fleet.iter().collect();
        let first = detect(&refs, 83.4);
        let second = detect(&refs, 83.4);
        assert_eq!(first, second);
    }
}

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::model::DeviceRecord;

/// Sentinel filter value meaning "no restriction on this dimension".
pub const ALL: &str = "All";

/// Equality filters across the five sliceable dimensions. A missing query
/// parameter deserializes to `"All"`, so an empty query string selects the
/// whole fleet.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub country: String,
    pub city: String,
    pub manufacturer: String,
    pub device_type: String,
    pub subnet: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            country: ALL.to_string(),
            city: ALL.to_string(),
            manufacturer: ALL.to_string(),
            device_type: ALL.to_string(),
            subnet: ALL.to_string(),
        }
    }
}

impl FilterCriteria {
    /// Keep the records matching every restricted dimension. Pure AND across
    /// dimensions, case-sensitive equality, input order preserved. A value
    /// not present in the data yields an empty subset, not an error.
    pub fn apply<'a>(&self, records: &'a [DeviceRecord]) -> Vec<&'a DeviceRecord> {
        records
            .iter()
            .filter(|d| matches(&self.country, &d.country))
            .filter(|d| matches(&self.city, &d.city))
            .filter(|d| matches(&self.manufacturer, &d.manufacturer))
            .filter(|d| matches(&self.device_type, &d.device_type))
            .filter(|d| matches(&self.subnet, &d.subnet))
            .collect()
    }
}

fn matches(criterion: &str, value: &str) -> bool {
    criterion == ALL || criterion == value
}

/// Option lists for populating the filter controls, derived from the full
/// (unfiltered) fleet. Each list is the deduplicated projection of one
/// dimension in first-seen order, with `"All"` prepended.
#[derive(Debug, Serialize)]
pub struct FilterOptions {
    pub countries: Vec<String>,
    pub cities: Vec<String>,
    pub manufacturers: Vec<String>,
    pub device_types: Vec<String>,
    pub subnets: Vec<String>,
}

impl FilterOptions {
    /// The city list is scoped to the currently selected country; every other
    /// list always spans the whole fleet.
    pub fn derive(records: &[DeviceRecord], criteria: &FilterCriteria) -> Self {
        Self {
            countries: distinct(records, |d| &d.country),
            cities: distinct_where(
                records,
                |d| matches(&criteria.country, &d.country),
                |d| &d.city,
            ),
            manufacturers: distinct(records, |d| &d.manufacturer),
            device_types: distinct(records, |d| &d.device_type),
            subnets: distinct(records, |d| &d.subnet),
        }
    }

    /// Number of distinct countries on offer, excluding the sentinel.
    pub fn countries_monitored(&self) -> usize {
        self.countries.len().saturating_sub(1)
    }

    /// Number of distinct cities on offer, excluding the sentinel.
    pub fn cities_monitored(&self) -> usize {
        self.cities.len().saturating_sub(1)
    }
}

fn distinct<F>(records: &[DeviceRecord], project: F) -> Vec<String>
where
    F: Fn(&DeviceRecord) -> &str,
{
    distinct_where(records, |_| true, project)
}

fn distinct_where<P, F>(records: &[DeviceRecord], keep: P, project: F) -> Vec<String>
where
    P: Fn(&DeviceRecord) -> bool,
    F: Fn(&DeviceRecord) -> &str,
{
    let mut seen = HashSet::new();
    let mut values = vec![ALL.to_string()];
    for record in records.iter().filter(|d| keep(d)) {
        let value = project(record);
        if seen.insert(value.to_string()) {
            values.push(value.to_string());
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::record;
    use pretty_assertions::assert_eq;

    fn fleet() -> Vec<DeviceRecord> {
        vec![
            record("DEV-1000", "USA", "New York", "Poly", "Teams Room Standard", "10.1.1.0/24", 70.0),
            record("DEV-1001", "USA", "Austin", "Poly", "Teams Room Premium", "10.1.2.0/24", 95.0),
            record("DEV-1002", "USA", "Austin", "Logitech", "Teams Display", "10.1.1.0/24", 90.0),
            record("DEV-1003", "UK", "London", "Yealink", "Teams Phone", "10.2.1.0/24", 82.0),
        ]
    }

    #[test]
    fn unrestricted_criteria_are_a_no_op() {
        let fleet = fleet();
        let filtered = FilterCriteria::default().apply(&fleet);
        let ids: Vec<_> = filtered.iter().map(|d| d.device_id.as_str()).collect();
        assert_eq!(ids, vec!["DEV-1000", "DEV-1001", "DEV-1002", "DEV-1003"]);
    }

    #[test]
    fn filtering_is_conjunctive() {
        let fleet = fleet();
        let combined = FilterCriteria {
            manufacturer: "Poly".into(),
            country: "USA".into(),
            ..FilterCriteria::default()
        };

        let by_manufacturer = FilterCriteria {
            manufacturer: "Poly".into(),
            ..FilterCriteria::default()
        };
        let by_country = FilterCriteria {
            country: "USA".into(),
            ..FilterCriteria::default()
        };

        let combined_ids: Vec<_> = combined.apply(&fleet).iter().map(|d| &d.device_id).collect();
        let intersection: Vec<_> = by_manufacturer
            .apply(&fleet)
            .into_iter()
            .filter(|d| by_country.apply(&fleet).contains(d))
            .map(|d| &d.device_id)
            .collect();
        assert_eq!(combined_ids, intersection);
        assert_eq!(combined_ids.len(), 2);
    }

    #[test]
    fn unknown_value_yields_empty_subset() {
        let fleet = fleet();
        let criteria = FilterCriteria {
            country: "Atlantis".into(),
            ..FilterCriteria::default()
        };
        assert!(criteria.apply(&fleet).is_empty());
    }

    #[test]
    fn equality_is_case_sensitive() {
        let fleet = fleet();
        let criteria = FilterCriteria {
            country: "usa".into(),
            ..FilterCriteria::default()
        };
        assert!(criteria.apply(&fleet).is_empty());
    }

    #[test]
    fn options_dedupe_and_prepend_all() {
        let fleet = fleet();
        let options = FilterOptions::derive(&fleet, &FilterCriteria::default());
        assert_eq!(options.countries, vec!["All", "USA", "UK"]);
        assert_eq!(options.manufacturers, vec!["All", "Poly", "Logitech", "Yealink"]);
        assert_eq!(options.subnets, vec!["All", "10.1.1.0/24", "10.1.2.0/24", "10.2.1.0/24"]);
        assert_eq!(options.countries_monitored(), 2);
        assert_eq!(options.cities_monitored(), 4);
    }

    #[test]
    fn city_options_follow_selected_country() {
        let fleet = fleet();
        let criteria = FilterCriteria {
            country: "USA".into(),
            ..FilterCriteria::default()
        };
        let options = FilterOptions::derive(&fleet, &criteria);
        assert_eq!(options.cities, vec!["All", "New York", "Austin"]);

        let unrestricted = FilterOptions::derive(&fleet, &FilterCriteria::default());
        assert_eq!(unrestricted.cities, vec!["All", "New York", "Austin", "London"]);
    }
}

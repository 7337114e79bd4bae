use serde::{Deserialize, Serialize};

use crate::engine::{FilterCriteria, ALL};

/// Which analysis panel the session is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    Overview,
    Geographic,
    Trends,
    Comparative,
    Outliers,
    Network,
}

/// A single user interaction with the filter controls or the view selector.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum Action {
    SetCountry(String),
    SetCity(String),
    SetManufacturer(String),
    SetDeviceType(String),
    SetSubnet(String),
    SelectView(View),
}

/// The presentation session as an explicit immutable value. Each interaction
/// produces a new state via [`SessionState::reduce`]; nothing is mutated in
/// place, and the engine is re-run against whatever the current state says.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub filters: FilterCriteria,
    pub view: View,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            filters: FilterCriteria::default(),
            view: View::Overview,
        }
    }
}

impl SessionState {
    /// Apply one action. Selecting a country invalidates any city selection
    /// scoped to the previous country, so the city resets to `"All"`; every
    /// other action touches exactly one field.
    pub fn reduce(self, action: Action) -> Self {
        let mut next = self;
        match action {
            Action::SetCountry(country) => {
                next.filters.country = country;
                next.filters.city = ALL.to_string();
            }
            Action::SetCity(city) => next.filters.city = city,
            Action::SetManufacturer(manufacturer) => next.filters.manufacturer = manufacturer,
            Action::SetDeviceType(device_type) => next.filters.device_type = device_type,
            Action::SetSubnet(subnet) => next.filters.subnet = subnet,
            Action::SelectView(view) => next.view = view,
        }
        next
    }
}

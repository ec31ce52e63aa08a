//! The user-adjustable control values and the events that carry them.
//!
//! Both values are owned by the UI runtime. The dashboard only reads them,
//! either as a whole [`ControlState`] or one [`ControlEvent`] at a time.

use crate::ids;
use serde::{Deserialize, Serialize};
use std::fmt;
use sxl_data::{Dataset, ALL_SITES};

/// Lower bound of the payload slider domain (kg).
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
/// Upper bound of the payload slider domain (kg).
pub const PAYLOAD_SLIDER_MAX: f64 = 10000.0;
/// Slider step (kg).
pub const PAYLOAD_SLIDER_STEP: f64 = 1000.0;

/// Value of the site dropdown: either the "All sites" sentinel or one site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    AllSites,
    Site(String),
}

impl SiteSelection {
    /// The string the dropdown shows and emits for this selection.
    pub fn as_str(&self) -> &str {
        match self {
            SiteSelection::AllSites => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }

    pub fn is_all_sites(&self) -> bool {
        matches!(self, SiteSelection::AllSites)
    }

    /// Whether a record launched from `site` passes this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::AllSites => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::AllSites
        } else {
            SiteSelection::Site(value.to_string())
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelection::AllSites
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<SiteSelection> for String {
    fn from(value: SiteSelection) -> Self {
        match value {
            SiteSelection::AllSites => ALL_SITES.to_string(),
            SiteSelection::Site(site) => site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed payload interval `[low, high]` in kilograms.
///
/// Serialized as a two-element array, the shape the range slider emits.
/// `low > high` is representable and simply matches no payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// The whole slider domain, `[0, 10000]`.
    pub fn slider_domain() -> Self {
        Self::new(PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX)
    }

    /// The dataset's own `[min payload, max payload]`.
    pub fn dataset_bounds(dataset: &Dataset) -> Self {
        Self::new(dataset.min_payload(), dataset.max_payload())
    }

    pub fn contains(&self, payload: f64) -> bool {
        payload >= self.low && payload <= self.high
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }
}

impl From<[f64; 2]> for PayloadRange {
    fn from([low, high]: [f64; 2]) -> Self {
        Self::new(low, high)
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(range: PayloadRange) -> Self {
        [range.low, range.high]
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

/// Current values of every control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl ControlState {
    /// Startup values: all sites, and the dataset's full payload span.
    pub fn defaults(dataset: &Dataset) -> Self {
        Self {
            site: SiteSelection::AllSites,
            payload: PayloadRange::dataset_bounds(dataset),
        }
    }
}

/// New value emitted by a control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlValue {
    Site(SiteSelection),
    PayloadRange(PayloadRange),
}

/// A control change relayed by the UI runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlEvent {
    pub control_id: String,
    pub value: ControlValue,
}

impl ControlEvent {
    /// Change of the site dropdown.
    pub fn site(selection: SiteSelection) -> Self {
        Self {
            control_id: ids::SITE_DROPDOWN.to_string(),
            value: ControlValue::Site(selection),
        }
    }

    /// Change of the payload slider.
    pub fn payload(range: PayloadRange) -> Self {
        Self {
            control_id: ids::PAYLOAD_SLIDER.to_string(),
            value: ControlValue::PayloadRange(range),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sites_string_maps_to_sentinel() {
        assert_eq!(SiteSelection::from("All sites"), SiteSelection::AllSites);
        assert_eq!(
            SiteSelection::from("KSC LC-39A"),
            SiteSelection::Site("KSC LC-39A".to_string())
        );
        assert_eq!(SiteSelection::AllSites.to_string(), ALL_SITES);
    }

    #[test]
    fn site_selection_matches() {
        assert!(SiteSelection::AllSites.matches("VAFB SLC-4E"));
        let ksc = SiteSelection::from("KSC LC-39A");
        assert!(ksc.matches("KSC LC-39A"));
        assert!(!ksc.matches("CCAFS LC-40"));
    }

    #[test]
    fn site_selection_serializes_as_plain_string() {
        let json = serde_json::to_string(&SiteSelection::AllSites).unwrap();
        assert_eq!(json, "\"All sites\"");
        let parsed: SiteSelection = serde_json::from_str("\"CCAFS LC-40\"").unwrap();
        assert_eq!(parsed, SiteSelection::Site("CCAFS LC-40".to_string()));
    }

    #[test]
    fn payload_range_is_inclusive_and_tolerates_inversion() {
        let range = PayloadRange::new(2000.0, 6000.0);
        assert!(range.contains(2000.0));
        assert!(range.contains(6000.0));
        assert!(!range.contains(6000.1));

        let inverted = PayloadRange::new(6000.0, 2000.0);
        assert!(inverted.is_inverted());
        assert!(!inverted.contains(4000.0));
    }

    #[test]
    fn payload_range_uses_slider_wire_shape() {
        let json = serde_json::to_string(&PayloadRange::new(0.0, 9600.0)).unwrap();
        assert_eq!(json, "[0.0,9600.0]");
        let parsed: PayloadRange = serde_json::from_str("[2000, 6000]").unwrap();
        assert_eq!(parsed, PayloadRange::new(2000.0, 6000.0));
    }

    #[test]
    fn control_event_constructors_use_layout_ids() {
        assert_eq!(
            ControlEvent::site(SiteSelection::AllSites).control_id,
            ids::SITE_DROPDOWN
        );
        assert_eq!(
            ControlEvent::payload(PayloadRange::slider_domain()).control_id,
            ids::PAYLOAD_SLIDER
        );
    }
}

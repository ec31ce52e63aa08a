use serde::{Deserialize, Serialize};

/// Header names the loader requires to be present.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "class",
    "Payload Mass (kg)",
    "Booster Version Category",
];

/// One launch attempt.
///
/// Columns are matched by header name. `Flight Number` and `Booster Version`
/// are optional; any other column in the file is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Flight Number", default)]
    pub flight_number: Option<u32>,
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    /// Outcome class: 1 = success, 0 = failure
    #[serde(rename = "class")]
    pub class: u8,
    /// Payload mass in kilograms
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "Booster Version", default)]
    pub booster_version: Option<String>,
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
}

impl LaunchRecord {
    pub fn is_success(&self) -> bool {
        self.class == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(payload: f64, class: u8) -> LaunchRecord {
        LaunchRecord {
            flight_number: None,
            launch_site: "CCAFS LC-40".to_string(),
            class,
            payload_mass_kg: payload,
            booster_version: None,
            booster_version_category: "FT".to_string(),
        }
    }

    #[test]
    fn success_follows_class() {
        assert!(record(0.0, 1).is_success());
        assert!(!record(0.0, 0).is_success());
    }
}

//! Static description of the dashboard's control tree.
//!
//! Built once from the dataset summary; the UI renders it and never changes
//! it afterwards.

use crate::controls::{
    PayloadRange, PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_STEP,
};
use crate::ids;
use serde::Serialize;
use sxl_data::{DatasetSummary, ALL_SITES};

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const SITE_PLACEHOLDER: &str = "Select a launch site here";
pub const PAYLOAD_LABEL: &str = "Payload range (Kg):";

/// Launch site dropdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownSpec {
    pub id: String,
    pub options: Vec<String>,
    pub default: String,
    pub placeholder: String,
    pub searchable: bool,
}

impl DropdownSpec {
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o == value)
    }
}

/// One of the two slider handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderHandle {
    Low,
    High,
}

/// Two-handle payload range slider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSliderSpec {
    pub id: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: PayloadRange,
}

impl RangeSliderSpec {
    /// Tick positions from `min` to `max` every `step`.
    pub fn marks(&self) -> Vec<f64> {
        let mut marks = Vec::new();
        if self.step <= 0.0 {
            return marks;
        }
        let mut mark = self.min;
        while mark <= self.max {
            marks.push(mark);
            mark += self.step;
        }
        marks
    }

    /// Keep a value reported by the slider inside its domain.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Move one handle of `current` to `value`.
    ///
    /// The value is clamped to the domain and the handle is pinned at the
    /// other handle so they never cross. The flag is true when the handle
    /// did not land where it was dragged, in which case the input showing
    /// it must be reset to the returned position.
    pub fn move_handle(
        &self,
        current: PayloadRange,
        handle: SliderHandle,
        value: f64,
    ) -> (PayloadRange, bool) {
        let moved = match handle {
            SliderHandle::Low => {
                PayloadRange::new(self.clamp(value).min(current.high), current.high)
            }
            SliderHandle::High => {
                PayloadRange::new(current.low, self.clamp(value).max(current.low))
            }
        };
        let landed = match handle {
            SliderHandle::Low => moved.low,
            SliderHandle::High => moved.high,
        };
        (moved, landed != value)
    }
}

/// Placeholder for a chart output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSpec {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardLayout {
    pub title: String,
    pub site_dropdown: DropdownSpec,
    pub pie_chart: GraphSpec,
    pub payload_label: String,
    pub payload_slider: RangeSliderSpec,
    pub scatter_chart: GraphSpec,
}

impl DashboardLayout {
    /// Ids of the input controls.
    pub fn control_ids(&self) -> [&str; 2] {
        [&self.site_dropdown.id, &self.payload_slider.id]
    }

    /// Ids of the chart outputs.
    pub fn output_ids(&self) -> [&str; 2] {
        [&self.pie_chart.id, &self.scatter_chart.id]
    }
}

/// Assemble the control tree for a loaded dataset.
///
/// The slider domain is fixed at `[0, 10000]` by `1000`; its default is the
/// dataset's own payload span, which need not sit on a step.
pub fn build_layout(summary: &DatasetSummary) -> DashboardLayout {
    DashboardLayout {
        title: DASHBOARD_TITLE.to_string(),
        site_dropdown: DropdownSpec {
            id: ids::SITE_DROPDOWN.to_string(),
            options: summary.site_options.clone(),
            default: ALL_SITES.to_string(),
            placeholder: SITE_PLACEHOLDER.to_string(),
            searchable: true,
        },
        pie_chart: GraphSpec {
            id: ids::SUCCESS_PIE_CHART.to_string(),
        },
        payload_label: PAYLOAD_LABEL.to_string(),
        payload_slider: RangeSliderSpec {
            id: ids::PAYLOAD_SLIDER.to_string(),
            min: PAYLOAD_SLIDER_MIN,
            max: PAYLOAD_SLIDER_MAX,
            step: PAYLOAD_SLIDER_STEP,
            default: PayloadRange::new(summary.min_payload, summary.max_payload),
        },
        scatter_chart: GraphSpec {
            id: ids::SUCCESS_PAYLOAD_SCATTER_CHART.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> DatasetSummary {
        DatasetSummary {
            record_count: 3,
            min_payload: 0.0,
            max_payload: 9600.0,
            sites: vec!["CCAFS LC-40".to_string(), "KSC LC-39A".to_string()],
            site_options: vec![
                "CCAFS LC-40".to_string(),
                "KSC LC-39A".to_string(),
                ALL_SITES.to_string(),
            ],
        }
    }

    #[test]
    fn dropdown_defaults_to_all_sites() {
        let layout = build_layout(&summary());
        let dropdown = &layout.site_dropdown;
        assert_eq!(dropdown.id, "site-dropdown");
        assert_eq!(dropdown.default, ALL_SITES);
        assert_eq!(dropdown.placeholder, SITE_PLACEHOLDER);
        assert!(dropdown.has_option(ALL_SITES));
        assert!(dropdown.has_option("KSC LC-39A"));
        assert_eq!(dropdown.options.last().map(String::as_str), Some(ALL_SITES));
        assert!(dropdown.searchable);
    }

    #[test]
    fn slider_uses_fixed_domain_and_dataset_default() {
        let layout = build_layout(&summary());
        let slider = &layout.payload_slider;
        assert_eq!(slider.id, "payload-slider");
        assert_eq!((slider.min, slider.max, slider.step), (0.0, 10000.0, 1000.0));
        assert_eq!(slider.default, PayloadRange::new(0.0, 9600.0));
        assert_eq!(slider.marks().len(), 11);
        assert_eq!(slider.clamp(12000.0), 10000.0);
        assert_eq!(slider.clamp(-5.0), 0.0);
    }

    #[test]
    fn layout_exposes_control_and_output_ids() {
        let layout = build_layout(&summary());
        assert_eq!(layout.title, DASHBOARD_TITLE);
        assert_eq!(layout.payload_label, PAYLOAD_LABEL);
        assert_eq!(layout.control_ids(), ["site-dropdown", "payload-slider"]);
        assert_eq!(
            layout.output_ids(),
            ["success-pie-chart", "success-payload-scatter-chart"]
        );
    }

    #[test]
    fn move_handle_within_range_lands_where_dragged() {
        let slider = build_layout(&summary()).payload_slider;
        let current = PayloadRange::new(2000.0, 8000.0);

        let (moved, snapped) = slider.move_handle(current, SliderHandle::Low, 3000.0);
        assert_eq!(moved, PayloadRange::new(3000.0, 8000.0));
        assert!(!snapped);

        let (moved, snapped) = slider.move_handle(current, SliderHandle::High, 9000.0);
        assert_eq!(moved, PayloadRange::new(2000.0, 9000.0));
        assert!(!snapped);
    }

    #[test]
    fn move_handle_pins_at_other_handle() {
        let slider = build_layout(&summary()).payload_slider;
        let current = PayloadRange::new(2000.0, 5000.0);

        let (moved, snapped) = slider.move_handle(current, SliderHandle::Low, 7000.0);
        assert_eq!(moved, PayloadRange::new(5000.0, 5000.0));
        assert!(snapped);

        let (moved, snapped) = slider.move_handle(current, SliderHandle::High, 1000.0);
        assert_eq!(moved, PayloadRange::new(2000.0, 2000.0));
        assert!(snapped);
    }

    #[test]
    fn move_handle_reports_snap_when_range_is_unchanged() {
        // Low already pinned at high: dragging it up again leaves the range
        // as it was, but the input still shows the dragged position
        let slider = build_layout(&summary()).payload_slider;
        let current = PayloadRange::new(5000.0, 5000.0);

        let (moved, snapped) = slider.move_handle(current, SliderHandle::Low, 8000.0);
        assert_eq!(moved, current);
        assert!(snapped);
    }

    #[test]
    fn move_handle_clamps_to_domain() {
        let slider = build_layout(&summary()).payload_slider;
        let current = PayloadRange::new(2000.0, 8000.0);

        let (moved, snapped) = slider.move_handle(current, SliderHandle::High, 12000.0);
        assert_eq!(moved, PayloadRange::new(2000.0, 10000.0));
        assert!(snapped);

        let (moved, snapped) = slider.move_handle(current, SliderHandle::Low, -5.0);
        assert_eq!(moved, PayloadRange::new(0.0, 8000.0));
        assert!(snapped);
    }
}

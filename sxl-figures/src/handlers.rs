//! The two reactive handlers.
//!
//! Both are pure: they read the dataset and the control values and return a
//! fresh [`Figure`]. An empty filter result is a valid, empty figure.

use crate::controls::{ControlState, PayloadRange, SiteSelection};
use crate::figure::{Figure, PieFigure, PieSlice, ScatterFigure, ScatterPoint};
use sxl_data::Dataset;

pub const PIE_TITLE_ALL_SITES: &str = "Total successful launches by site";
pub const SCATTER_TITLE_ALL_SITES: &str = "Correlation between payload and success";

pub const SCATTER_X_LABEL: &str = "Payload Mass (kg)";
pub const SCATTER_Y_LABEL: &str = "class";
pub const SCATTER_COLOR_LABEL: &str = "Booster Version Category";

/// Outcome classes in slice order for the single-site pie.
const OUTCOME_CLASSES: [u8; 2] = [0, 1];

pub fn pie_title_for_site(site: &str) -> String {
    format!("Successful vs. failed launches for site {}", site)
}

pub fn scatter_title_for_site(site: &str) -> String {
    format!("Correlation between payload and success for site {}", site)
}

/// Pie chart of launch outcomes.
///
/// - All sites: one slice per site that has successes, valued at the sum of
///   `class` over its successful launches.
/// - One site: a slice for class `0` and one for class `1`, each valued at its
///   launch count. Zero counts are kept. A site with no launches at all gives
///   a figure with no slices.
pub fn pie_chart(dataset: &Dataset, site: &SiteSelection) -> Figure {
    let figure = match site {
        SiteSelection::AllSites => PieFigure {
            title: PIE_TITLE_ALL_SITES.to_string(),
            slices: successes_by_site(dataset),
        },
        SiteSelection::Site(name) => PieFigure {
            title: pie_title_for_site(name),
            slices: outcomes_at_site(dataset, name),
        },
    };
    Figure::Pie(figure)
}

fn successes_by_site(dataset: &Dataset) -> Vec<PieSlice> {
    let mut slices: Vec<PieSlice> = Vec::new();
    for record in dataset.iter().filter(|r| r.is_success()) {
        // class is binary, so summing it over successes counts them
        let value = u32::from(record.class);
        match slices.iter_mut().find(|s| s.label == record.launch_site) {
            Some(slice) => slice.value += value,
            None => slices.push(PieSlice {
                label: record.launch_site.clone(),
                value,
            }),
        }
    }
    slices
}

fn outcomes_at_site(dataset: &Dataset, site: &str) -> Vec<PieSlice> {
    let mut counts = [0u32; 2];
    let mut seen = false;
    for record in dataset.iter().filter(|r| r.launch_site == site) {
        seen = true;
        if let Some(count) = counts.get_mut(usize::from(record.class)) {
            *count += 1;
        }
    }
    if !seen {
        return Vec::new();
    }
    OUTCOME_CLASSES
        .iter()
        .zip(counts)
        .map(|(class, value)| PieSlice {
            label: class.to_string(),
            value,
        })
        .collect()
}

/// Scatter of payload mass against outcome class, colored by booster
/// version category.
///
/// Records are kept when their payload lies in the inclusive `range`, then
/// narrowed to `site` unless all sites are selected.
pub fn scatter_chart(dataset: &Dataset, site: &SiteSelection, range: &PayloadRange) -> Figure {
    let title = match site {
        SiteSelection::AllSites => SCATTER_TITLE_ALL_SITES.to_string(),
        SiteSelection::Site(name) => scatter_title_for_site(name),
    };

    let mut groups: Vec<String> = Vec::new();
    let points: Vec<ScatterPoint> = dataset
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .filter(|r| site.matches(&r.launch_site))
        .map(|r| {
            if !groups.contains(&r.booster_version_category) {
                groups.push(r.booster_version_category.clone());
            }
            ScatterPoint {
                x: r.payload_mass_kg,
                y: r.class,
                group: r.booster_version_category.clone(),
                site: r.launch_site.clone(),
                booster_version: r.booster_version.clone(),
                flight_number: r.flight_number,
            }
        })
        .collect();

    Figure::Scatter(ScatterFigure {
        title,
        x_label: SCATTER_X_LABEL.to_string(),
        y_label: SCATTER_Y_LABEL.to_string(),
        color_label: SCATTER_COLOR_LABEL.to_string(),
        groups,
        points,
    })
}

/// [`pie_chart`] over a full control state, for use in a binding table.
pub fn pie_chart_handler(dataset: &Dataset, state: &ControlState) -> Figure {
    pie_chart(dataset, &state.site)
}

/// [`scatter_chart`] over a full control state, for use in a binding table.
pub fn scatter_chart_handler(dataset: &Dataset, state: &ControlState) -> Figure {
    scatter_chart(dataset, &state.site, &state.payload)
}

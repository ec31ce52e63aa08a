//! SpaceX Launch Records Dashboard
//!
//! A site dropdown drives a pie chart of launch outcomes, and the same
//! dropdown together with a payload range slider drives a scatter chart of
//! payload mass against outcome, colored by booster version category.
//!
//! Data flow:
//! 1. `build.rs` copies `spacex_launch_dash.csv` into `OUT_DIR`. When the
//!    real file is absent it copies the synthetic `fixtures/launch_sample.csv`
//!    instead, and the header says so.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is parsed into a `Dataset`; the layout and the
//!    dispatcher are built from it and both charts are drawn.
//! 4. Each control change is sent to the dispatcher, which re-runs only the
//!    handlers bound to that control and hands the figures to D3.js.

use dioxus::prelude::*;
use std::sync::Arc;
use sxl_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, PayloadRangeSlider,
    SiteSelector,
};
use sxl_chart_ui::js_bridge;
use sxl_chart_ui::state::AppState;
use sxl_data::Dataset;
use sxl_figures::layout::DASHBOARD_TITLE;

/// SpaceX launch records, one row per launch attempt. Synthetic rows when
/// `SAMPLE_DATA` is set.
const LAUNCH_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/spacex_launch_dash.csv"));

/// Set by `build.rs` when the synthetic sample was embedded.
const SAMPLE_DATA: bool = matches!(env!("SXL_DATASET_SOURCE").as_bytes(), b"sample");

const SAMPLE_NOTICE: &str = "Sample data, not real launch statistics";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("main"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the dataset once on mount. A failure here is fatal for the page.
    use_effect(move || match Dataset::from_csv_str(LAUNCH_CSV) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} launches across {} sites",
                dataset.len(),
                dataset.sites().len()
            );
            js_bridge::init_charts();
            state.install(Arc::new(dataset));
        }
        Err(e) => {
            log::error!("Failed to load launch dataset: {}", e);
            state.fail(e.to_string());
        }
    });

    let layout = state.layout.read().clone();

    rsx! {
        div {
            style: "max-width: 1000px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            ChartHeader {
                title: layout
                    .as_ref()
                    .map(|l| l.title.clone())
                    .unwrap_or_else(|| DASHBOARD_TITLE.to_string()),
                notice: if SAMPLE_DATA { SAMPLE_NOTICE.to_string() } else { String::new() },
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else if let Some(layout) = layout {
                SiteSelector {}
                br {}
                ChartContainer { graph: layout.pie_chart.clone() }
                br {}
                PayloadRangeSlider {}
                ChartContainer { graph: layout.scatter_chart.clone() }
            }
        }
    }
}

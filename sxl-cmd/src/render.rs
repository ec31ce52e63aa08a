//! Native evaluation of the dashboard: load, build, dispatch, print.

use anyhow::Context;
use log::info;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use sxl_data::Dataset;
use sxl_figures::controls::{PayloadRange, SiteSelection};
use sxl_figures::dispatch::Dispatcher;
use sxl_figures::handlers::{pie_chart, scatter_chart};
use sxl_figures::layout::build_layout;

/// Load the dataset or fail with the path in the error chain.
pub fn load_dataset(path: &Path) -> anyhow::Result<Dataset> {
    let dataset = Dataset::from_path(path)
        .with_context(|| format!("Cannot start without launch dataset {}", path.display()))?;
    info!(
        "Loaded {} launches from {} ({} sites)",
        dataset.len(),
        path.display(),
        dataset.sites().len()
    );
    Ok(dataset)
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn run_summary<W: Write>(csv: &Path, out: &mut W) -> anyhow::Result<()> {
    let dataset = load_dataset(csv)?;
    write_json(out, dataset.summary())
}

pub fn run_layout<W: Write>(csv: &Path, out: &mut W) -> anyhow::Result<()> {
    let dataset = load_dataset(csv)?;
    write_json(out, &build_layout(dataset.summary()))
}

pub fn run_pie<W: Write>(csv: &Path, site: &str, out: &mut W) -> anyhow::Result<()> {
    let dataset = load_dataset(csv)?;
    let selection = SiteSelection::from(site);
    warn_unknown_site(&dataset, &selection);
    write_json(out, &pie_chart(&dataset, &selection))
}

pub fn run_scatter<W: Write>(
    csv: &Path,
    site: &str,
    low: Option<f64>,
    high: Option<f64>,
    out: &mut W,
) -> anyhow::Result<()> {
    let dataset = load_dataset(csv)?;
    let selection = SiteSelection::from(site);
    warn_unknown_site(&dataset, &selection);
    let range = PayloadRange::new(
        low.unwrap_or_else(|| dataset.min_payload()),
        high.unwrap_or_else(|| dataset.max_payload()),
    );
    info!("Scatter for {} over {}", selection, range);
    write_json(out, &scatter_chart(&dataset, &selection, &range))
}

pub fn run_render<W: Write>(csv: &Path, out: &mut W) -> anyhow::Result<()> {
    let dataset = load_dataset(csv)?;
    let dispatcher = Dispatcher::new(Arc::new(dataset));
    let rendered: BTreeMap<&str, _> = dispatcher
        .initial_render()
        .into_iter()
        .map(|output| (output.output_id, output.figure))
        .collect();
    write_json(out, &rendered)
}

/// An unknown site is not an error (the chart is just empty), but it is
/// almost always a typo on the command line.
fn warn_unknown_site(dataset: &Dataset, selection: &SiteSelection) {
    if let SiteSelection::Site(site) = selection {
        if !dataset.sites().iter().any(|s| s == site) {
            log::warn!("Launch site {:?} not in dataset; chart will be empty", site);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixture() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../fixtures/launch_sample.csv")
    }

    fn output_json(result: anyhow::Result<()>, out: Vec<u8>) -> serde_json::Value {
        result.unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn summary_reports_bounds() {
        let mut out = Vec::new();
        let result = run_summary(&fixture(), &mut out);
        let json = output_json(result, out);
        assert_eq!(json["record_count"], 56);
        assert_eq!(json["min_payload"], 0.0);
        assert_eq!(json["max_payload"], 9600.0);
        assert_eq!(json["site_options"][4], "All sites");
    }

    #[test]
    fn layout_lists_control_ids() {
        let mut out = Vec::new();
        let result = run_layout(&fixture(), &mut out);
        let json = output_json(result, out);
        assert_eq!(json["site_dropdown"]["id"], "site-dropdown");
        assert_eq!(json["payload_slider"]["default"], serde_json::json!([0.0, 9600.0]));
    }

    #[test]
    fn pie_for_site_has_two_slices() {
        let mut out = Vec::new();
        let result = run_pie(&fixture(), "KSC LC-39A", &mut out);
        let json = output_json(result, out);
        assert_eq!(json["kind"], "pie");
        assert_eq!(json["slices"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn scatter_defaults_to_dataset_bounds() {
        let mut out = Vec::new();
        let result = run_scatter(&fixture(), "All sites", None, None, &mut out);
        let json = output_json(result, out);
        assert_eq!(json["points"].as_array().map(Vec::len), Some(56));
    }

    #[test]
    fn render_emits_both_outputs() {
        let mut out = Vec::new();
        let result = run_render(&fixture(), &mut out);
        let json = output_json(result, out);
        assert_eq!(json["success-pie-chart"]["kind"], "pie");
        assert_eq!(json["success-payload-scatter-chart"]["kind"], "scatter");
    }

    #[test]
    fn missing_dataset_is_fatal() {
        let mut out = Vec::new();
        let err = run_summary(Path::new("does-not-exist.csv"), &mut out).unwrap_err();
        assert!(err.to_string().contains("does-not-exist.csv"));
        assert!(out.is_empty());
    }
}

//! Dashboard behavior against the synthetic launch sample in `fixtures/`.

use crate::controls::{ControlEvent, PayloadRange, SiteSelection};
use crate::dispatch::Dispatcher;
use crate::figure::Figure;
use crate::handlers::{pie_chart, scatter_chart};
use crate::ids;
use crate::layout::build_layout;
use std::sync::Arc;
use sxl_data::{Dataset, ALL_SITES};

static LAUNCH_CSV: &str = include_str!("../../fixtures/launch_sample.csv");

fn dataset() -> Dataset {
    Dataset::from_csv_str(LAUNCH_CSV).unwrap()
}

#[test]
fn fixture_loads_with_expected_bounds() {
    let dataset = dataset();
    assert_eq!(dataset.len(), 56);
    assert_eq!(dataset.min_payload(), 0.0);
    assert_eq!(dataset.max_payload(), 9600.0);
    assert_eq!(
        dataset.summary().site_options,
        vec![
            "CCAFS LC-40",
            "VAFB SLC-4E",
            "KSC LC-39A",
            "CCAFS SLC-40",
            ALL_SITES
        ]
    );
}

#[test]
fn all_sites_pie_has_one_slice_per_site_with_successes() {
    let figure = match pie_chart(&dataset(), &SiteSelection::AllSites) {
        Figure::Pie(pie) => pie,
        other => panic!("expected pie, got {:?}", other),
    };
    let slices: Vec<(&str, u32)> = figure
        .slices
        .iter()
        .map(|s| (s.label.as_str(), s.value))
        .collect();
    assert_eq!(
        slices,
        vec![
            ("CCAFS LC-40", 4),
            ("VAFB SLC-4E", 4),
            ("KSC LC-39A", 11),
            ("CCAFS SLC-40", 4),
        ]
    );
}

#[test]
fn single_site_pie_splits_failures_and_successes() {
    let figure = match pie_chart(&dataset(), &SiteSelection::from("CCAFS LC-40")) {
        Figure::Pie(pie) => pie,
        other => panic!("expected pie, got {:?}", other),
    };
    assert_eq!(figure.slices.len(), 2);
    assert_eq!(figure.slice("0").map(|s| s.value), Some(19));
    assert_eq!(figure.slice("1").map(|s| s.value), Some(4));
}

#[test]
fn full_slider_domain_plots_every_launch() {
    let dataset = dataset();
    let figure = scatter_chart(
        &dataset,
        &SiteSelection::AllSites,
        &PayloadRange::slider_domain(),
    );
    match figure {
        Figure::Scatter(scatter) => {
            assert_eq!(scatter.points.len(), dataset.len());
            assert_eq!(scatter.groups, vec!["v1.0", "v1.1", "FT", "B4", "B5"]);
        }
        other => panic!("expected scatter, got {:?}", other),
    }
}

#[test]
fn ksc_mid_payloads_only() {
    let figure = scatter_chart(
        &dataset(),
        &SiteSelection::from("KSC LC-39A"),
        &PayloadRange::new(2000.0, 6000.0),
    );
    match figure {
        Figure::Scatter(scatter) => {
            assert_eq!(scatter.points.len(), 12);
            assert!(scatter
                .points
                .iter()
                .all(|p| p.site == "KSC LC-39A" && (2000.0..=6000.0).contains(&p.x)));
            assert_eq!(scatter.groups, vec!["FT", "B4", "B5"]);
        }
        other => panic!("expected scatter, got {:?}", other),
    }
}

#[test]
fn dispatcher_defaults_match_layout() {
    let dataset = Arc::new(dataset());
    let layout = build_layout(dataset.summary());
    let dispatcher = Dispatcher::new(dataset);
    assert_eq!(dispatcher.state().payload, layout.payload_slider.default);
    assert_eq!(
        dispatcher.state().site.as_str(),
        layout.site_dropdown.default
    );
}

#[test]
fn replayed_events_reproduce_direct_handler_output() {
    let dataset = Arc::new(dataset());
    let mut dispatcher = Dispatcher::new(Arc::clone(&dataset));
    dispatcher
        .dispatch(ControlEvent::payload(PayloadRange::new(2000.0, 6000.0)))
        .unwrap();
    let outputs = dispatcher
        .dispatch(ControlEvent::site(SiteSelection::from("KSC LC-39A")))
        .unwrap();

    let scatter = outputs
        .iter()
        .find(|o| o.output_id == ids::SUCCESS_PAYLOAD_SCATTER_CHART)
        .map(|o| o.figure.to_json().unwrap())
        .unwrap();
    let direct = scatter_chart(
        &dataset,
        &SiteSelection::from("KSC LC-39A"),
        &PayloadRange::new(2000.0, 6000.0),
    )
    .to_json()
    .unwrap();
    assert_eq!(scatter, direct);
}

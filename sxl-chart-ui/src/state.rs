//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()` and report control changes through
//! [`AppState::apply`], which runs the dispatcher and re-renders the bound
//! charts.

use crate::js_bridge;
use dioxus::prelude::*;
use std::sync::Arc;
use sxl_data::Dataset;
use sxl_figures::controls::{ControlEvent, PayloadRange, SiteSelection};
use sxl_figures::dispatch::Dispatcher;
use sxl_figures::layout::{build_layout, DashboardLayout};

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Dispatcher over the loaded dataset (None until loaded)
    pub dispatcher: Signal<Option<Dispatcher>>,
    /// Control tree built from the dataset summary (None until loaded)
    pub layout: Signal<Option<DashboardLayout>>,
    /// Whether the dataset is still loading
    pub loading: Signal<bool>,
    /// Fatal load error, if any
    pub error_msg: Signal<Option<String>>,
    /// Mirror of the dispatcher's site selection, for rendering the dropdown
    pub selected_site: Signal<SiteSelection>,
    /// Mirror of the dispatcher's payload range, for rendering the slider
    pub payload_range: Signal<PayloadRange>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dispatcher: Signal::new(None),
            layout: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_site: Signal::new(SiteSelection::AllSites),
            payload_range: Signal::new(PayloadRange::slider_domain()),
        }
    }

    /// Take ownership of the loaded dataset, build the layout and draw the
    /// initial charts.
    ///
    /// Only writes signals, so it is safe to call from inside an effect.
    pub fn install(&mut self, dataset: Arc<Dataset>) {
        let layout = build_layout(dataset.summary());
        let dispatcher = Dispatcher::new(dataset);
        let outputs = dispatcher.initial_render();

        self.selected_site.set(dispatcher.state().site.clone());
        self.payload_range.set(dispatcher.state().payload);
        self.layout.set(Some(layout));
        self.dispatcher.set(Some(dispatcher));
        self.error_msg.set(None);
        self.loading.set(false);

        js_bridge::render_outputs(&outputs);
    }

    /// Record a fatal load failure.
    pub fn fail(&mut self, message: String) {
        self.error_msg.set(Some(message));
        self.loading.set(false);
    }

    /// Route a control change through the dispatcher and redraw the charts
    /// bound to that control.
    pub fn apply(&mut self, event: ControlEvent) {
        let result = match &mut *self.dispatcher.write() {
            Some(dispatcher) => dispatcher
                .dispatch(event)
                .map(|outputs| (dispatcher.state().clone(), outputs)),
            None => {
                log::warn!("[SXL] control change before dataset loaded; ignored");
                return;
            }
        };

        match result {
            Ok((controls, outputs)) => {
                self.selected_site.set(controls.site);
                self.payload_range.set(controls.payload);
                js_bridge::render_outputs(&outputs);
            }
            Err(e) => log::warn!("[SXL] rejected control change: {}", e),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

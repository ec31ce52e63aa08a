//! Routing of control change events to the handlers bound to them.
//!
//! Each chart output is bound to a handler and the list of controls it reads.
//! When a control changes, the [`Dispatcher`] updates its copy of the control
//! state and re-evaluates exactly the bindings that list that control.

use crate::controls::{ControlEvent, ControlState, ControlValue};
use crate::error::DispatchError;
use crate::figure::Figure;
use crate::handlers::{pie_chart_handler, scatter_chart_handler};
use crate::ids;
use serde::Serialize;
use std::sync::Arc;
use sxl_data::Dataset;

/// A pure function from control values to a chart specification.
pub type Handler = fn(&Dataset, &ControlState) -> Figure;

/// Output id bound to a handler and the controls that feed it.
#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub output_id: &'static str,
    pub input_ids: &'static [&'static str],
    pub handler: Handler,
}

impl Binding {
    pub fn depends_on(&self, control_id: &str) -> bool {
        self.input_ids.iter().any(|id| *id == control_id)
    }
}

/// The dashboard's binding table.
pub const DASHBOARD_BINDINGS: [Binding; 2] = [
    Binding {
        output_id: ids::SUCCESS_PIE_CHART,
        input_ids: &[ids::SITE_DROPDOWN],
        handler: pie_chart_handler,
    },
    Binding {
        output_id: ids::SUCCESS_PAYLOAD_SCATTER_CHART,
        input_ids: &[ids::SITE_DROPDOWN, ids::PAYLOAD_SLIDER],
        handler: scatter_chart_handler,
    },
];

/// A freshly computed figure and the output it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedOutput {
    pub output_id: &'static str,
    pub figure: Figure,
}

/// Holds the read-only dataset, the current control state and the bindings.
///
/// Cloning is cheap for the dataset (shared via `Arc`).
#[derive(Debug, Clone)]
pub struct Dispatcher {
    dataset: Arc<Dataset>,
    state: ControlState,
    bindings: Vec<Binding>,
}

impl Dispatcher {
    /// Dispatcher over the dashboard bindings, starting from default controls.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let state = ControlState::defaults(&dataset);
        Self::with_state(dataset, state)
    }

    /// Dispatcher over the dashboard bindings, starting from `state`.
    pub fn with_state(dataset: Arc<Dataset>, state: ControlState) -> Self {
        Self {
            dataset,
            state,
            bindings: DASHBOARD_BINDINGS.to_vec(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn state(&self) -> &ControlState {
        &self.state
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Evaluate every binding against the current state.
    pub fn initial_render(&self) -> Vec<RenderedOutput> {
        self.bindings.iter().map(|b| self.evaluate(b)).collect()
    }

    /// Evaluate the binding for one output, if it exists.
    pub fn render(&self, output_id: &str) -> Option<Figure> {
        self.bindings
            .iter()
            .find(|b| b.output_id == output_id)
            .map(|b| (b.handler)(&self.dataset, &self.state))
    }

    /// Apply a control change and return the outputs that depend on it.
    ///
    /// The state is left untouched when the event is rejected.
    pub fn dispatch(&mut self, event: ControlEvent) -> Result<Vec<RenderedOutput>, DispatchError> {
        let ControlEvent { control_id, value } = event;
        match (control_id.as_str(), value) {
            (ids::SITE_DROPDOWN, ControlValue::Site(site)) => self.state.site = site,
            (ids::PAYLOAD_SLIDER, ControlValue::PayloadRange(range)) => self.state.payload = range,
            (ids::SITE_DROPDOWN, _) => {
                return Err(DispatchError::ValueMismatch {
                    control: control_id.clone(),
                    expected: "site",
                })
            }
            (ids::PAYLOAD_SLIDER, _) => {
                return Err(DispatchError::ValueMismatch {
                    control: control_id.clone(),
                    expected: "payload range",
                })
            }
            _ => return Err(DispatchError::UnknownControl(control_id.clone())),
        }

        let outputs: Vec<RenderedOutput> = self
            .bindings
            .iter()
            .filter(|b| b.depends_on(&control_id))
            .map(|b| self.evaluate(b))
            .collect();
        log::debug!(
            "[SXL] dispatch: {} changed, re-rendered {} output(s)",
            control_id,
            outputs.len()
        );
        Ok(outputs)
    }

    fn evaluate(&self, binding: &Binding) -> RenderedOutput {
        RenderedOutput {
            output_id: binding.output_id,
            figure: (binding.handler)(&self.dataset, &self.state),
        }
    }
}

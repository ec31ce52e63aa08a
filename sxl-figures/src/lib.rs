//! Chart specifications and the reactive wiring of the launch records dashboard.
//!
//! This crate provides:
//! - `controls`: the two user-adjustable values (site selection, payload range)
//! - `figure`: serializable chart specifications handed to the renderer
//! - `handlers`: pure functions mapping control values to a [`figure::Figure`]
//! - `layout`: the static control tree, parameterized by the dataset summary
//! - `dispatch`: routes control change events to the bound handlers
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use sxl_data::Dataset;
//! use sxl_figures::controls::{ControlEvent, SiteSelection};
//! use sxl_figures::dispatch::Dispatcher;
//!
//! let csv = "\
//! Launch Site,class,Payload Mass (kg),Booster Version Category
//! CCAFS LC-40,0,525.0,v1.0
//! KSC LC-39A,1,2490.0,FT
//! ";
//! let dataset = Arc::new(Dataset::from_csv_str(csv).unwrap());
//! let mut dispatcher = Dispatcher::new(dataset);
//!
//! let initial = dispatcher.initial_render();
//! assert_eq!(initial.len(), 2);
//!
//! let updated = dispatcher
//!     .dispatch(ControlEvent::site(SiteSelection::from("KSC LC-39A")))
//!     .unwrap();
//! assert_eq!(updated.len(), 2);
//! ```

pub mod controls;
pub mod dispatch;
pub mod error;
pub mod figure;
pub mod handlers;
pub mod layout;

/// DOM ids shared between the layout, the dispatcher and the renderer.
pub mod ids {
    pub const SITE_DROPDOWN: &str = "site-dropdown";
    pub const PAYLOAD_SLIDER: &str = "payload-slider";
    pub const SUCCESS_PIE_CHART: &str = "success-pie-chart";
    pub const SUCCESS_PAYLOAD_SCATTER_CHART: &str = "success-payload-scatter-chart";
}

#[cfg(test)]
mod fixture_tests;

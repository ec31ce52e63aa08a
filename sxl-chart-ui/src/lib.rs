//! Dioxus components and D3.js bridge for the launch records dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js pie and scatter renderers via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals, fronting the figure dispatcher
//! - `components`: RSX components for the layout (site selector, payload slider, charts)

pub mod components;
pub mod js_bridge;
pub mod state;

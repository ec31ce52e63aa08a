//! Two-handle payload range slider.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use sxl_figures::controls::ControlEvent;
use sxl_figures::layout::SliderHandle;

const LOW_INPUT_ID: &str = "payload-slider-low";
const HIGH_INPUT_ID: &str = "payload-slider-high";

/// Payload range slider built from two range inputs sharing one domain.
///
/// Handles cannot cross: moving `low` past `high` pins it at `high` and
/// vice versa, so the emitted interval always has `low <= high`. A pinned
/// handle's input is reset to the pinned value.
#[component]
pub fn PayloadRangeSlider() -> Element {
    let mut state = use_context::<AppState>();

    let Some(layout) = state.layout.read().clone() else {
        return rsx! {};
    };
    let slider = layout.payload_slider;
    let range = (state.payload_range)();
    let marks = slider.marks();

    let low_slider = slider.clone();
    let on_low_change = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<f64>() {
            let current = (state.payload_range)();
            let (moved, snapped) = low_slider.move_handle(current, SliderHandle::Low, value);
            if snapped {
                js_bridge::set_input_value(LOW_INPUT_ID, moved.low);
            }
            if moved != current {
                state.apply(ControlEvent::payload(moved));
            }
        }
    };

    let high_slider = slider.clone();
    let on_high_change = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<f64>() {
            let current = (state.payload_range)();
            let (moved, snapped) = high_slider.move_handle(current, SliderHandle::High, value);
            if snapped {
                js_bridge::set_input_value(HIGH_INPUT_ID, moved.high);
            }
            if moved != current {
                state.apply(ControlEvent::payload(moved));
            }
        }
    };

    rsx! {
        div {
            id: "{slider.id}",
            style: "margin: 12px 0;",
            p {
                style: "font-weight: bold; margin: 0 0 4px 0;",
                "{layout.payload_label} {range.low} to {range.high}"
            }
            div {
                style: "display: flex; gap: 12px; align-items: center;",
                label {
                    "Min "
                    input {
                        id: LOW_INPUT_ID,
                        r#type: "range",
                        min: "{slider.min}",
                        max: "{slider.max}",
                        step: "{slider.step}",
                        value: "{range.low}",
                        onchange: on_low_change,
                    }
                }
                label {
                    "Max "
                    input {
                        id: HIGH_INPUT_ID,
                        r#type: "range",
                        min: "{slider.min}",
                        max: "{slider.max}",
                        step: "{slider.step}",
                        value: "{range.high}",
                        onchange: on_high_change,
                    }
                }
            }
            div {
                style: "display: flex; justify-content: space-between; font-size: 11px; color: #888; max-width: 520px;",
                for mark in marks.iter() {
                    span { "{mark}" }
                }
            }
        }
    }
}

//! Dropdown selector for choosing a launch site.

use crate::state::AppState;
use dioxus::prelude::*;
use sxl_figures::controls::{ControlEvent, SiteSelection};

/// Launch site dropdown.
///
/// Options come from the layout (every site plus "All sites"). When the
/// layout marks the dropdown searchable, a text box narrows the visible
/// options; the current selection always stays listed.
#[component]
pub fn SiteSelector() -> Element {
    let mut state = use_context::<AppState>();
    let mut query = use_signal(String::new);

    let Some(layout) = state.layout.read().clone() else {
        return rsx! {};
    };
    let dropdown = layout.site_dropdown;
    let selected = (state.selected_site)();
    let query_text = query();
    let needle = query_text.to_lowercase();

    let visible: Vec<String> = dropdown
        .options
        .iter()
        .filter(|o| {
            needle.is_empty() || o.to_lowercase().contains(&needle) || o.as_str() == selected.as_str()
        })
        .cloned()
        .collect();

    let on_change = move |evt: Event<FormData>| {
        state.apply(ControlEvent::site(SiteSelection::from(evt.value())));
    };

    let on_search = move |evt: Event<FormData>| {
        query.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px; align-items: center;",
            label {
                r#for: "{dropdown.id}",
                style: "font-weight: bold;",
                "Launch site: "
            }
            if dropdown.searchable {
                input {
                    r#type: "search",
                    placeholder: "{dropdown.placeholder}",
                    value: "{query_text}",
                    oninput: on_search,
                }
            }
            select {
                id: "{dropdown.id}",
                style: "min-width: 220px;",
                onchange: on_change,
                for site in visible.iter() {
                    option {
                        value: "{site}",
                        selected: site.as_str() == selected.as_str(),
                        "{site}"
                    }
                }
            }
        }
    }
}

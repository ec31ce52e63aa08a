//! Page header with the dashboard title and an optional notice line.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Dashboard title
    pub title: String,
    /// Shown under the title when non-empty (e.g. "Sample data, not real launch statistics")
    #[props(default = String::new())]
    pub notice: String,
}

/// Centered page heading, with the notice line under it when one is given.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin: 8px 0 16px 0; text-align: center;",
            h1 {
                style: "color: #503D36; font-size: 40px; margin: 0;",
                "{props.title}"
            }
            if !props.notice.is_empty() {
                p {
                    style: "margin: 4px 0 0 0; font-size: 13px; color: #a15c00;",
                    "{props.notice}"
                }
            }
        }
    }
}

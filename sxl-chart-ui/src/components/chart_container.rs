//! Placeholder element a D3.js chart renders into.

use dioxus::prelude::*;
use sxl_figures::layout::GraphSpec;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// Graph output from the layout; its id becomes the DOM id
    pub graph: GraphSpec,
    /// Minimum height in pixels while the chart is drawing
    #[props(default = 420)]
    pub min_height: u32,
}

#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!("min-height: {}px; width: 100%;", props.min_height);

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.graph.id}",
                style: "width: 100%;",
            }
        }
    }
}

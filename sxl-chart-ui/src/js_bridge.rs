//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js renderers live in `assets/js/*.js`, are embedded at compile time
//! and evaluated as globals once D3 itself has loaded. Figures cross the
//! boundary as JSON strings.

use sxl_figures::dispatch::RenderedOutput;
use sxl_figures::figure::Figure;

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");

/// Message drawn inside a chart whose filters match no launches.
pub const EMPTY_CHART_MESSAGE: &str = "No launches match the current selection";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SXL JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a Rust string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Overwrite the `value` of the input element with the given id.
///
/// Used when a control snapped back: the signal may be unchanged, so Dioxus
/// has nothing to re-render and the element keeps the dragged value.
pub fn set_input_value(element_id: &str, value: f64) {
    call_js(&format!(
        "var el = document.getElementById({}); if (el) {{ el.value = {}; }}",
        js_string(element_id),
        js_string(&value.to_string())
    ));
}

/// Register the chart renderers once D3 is available. Call once at startup.
///
/// The scripts are stashed on `window` and evaluated with an indirect `eval`
/// so their function declarations land in global scope rather than inside
/// the polling callback.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, PIE_CHART_JS, SCATTER_CHART_JS].join("\n");
    let _ = js_sys::eval(&format!("window.__sxlChartScripts = {};", js_string(&all_js)));

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__sxlChartScripts);
                    delete window.__sxlChartScripts;
                    if (typeof renderPieChart !== 'undefined') window.renderPieChart = renderPieChart;
                    if (typeof renderScatterChart !== 'undefined') window.renderScatterChart = renderScatterChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__sxlChartsReady = true;
                    console.log('SXL charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Call a global renderer once the scripts are ready and the container exists.
///
/// A later call for the same container replaces the earlier chart, so rapid
/// control changes settle on the last figure.
fn render_when_ready(renderer: &str, container_id: &str, figure_json: &str, config_json: &str) {
    let id = js_string(container_id);
    let figure = js_string(figure_json);
    let config = js_string(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__sxlChartsReady &&
                    typeof window.{renderer} !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.{renderer}({id}, {figure}, {config});
                    }} catch(e) {{ console.error('[SXL] {renderer} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

fn chart_config(width: u32, height: u32) -> String {
    serde_json::json!({
        "width": width,
        "height": height,
        "emptyMessage": EMPTY_CHART_MESSAGE,
    })
    .to_string()
}

/// Render a figure into the DOM element with id `container_id`.
pub fn render_figure(container_id: &str, figure: &Figure) {
    let figure_json = match figure.to_json() {
        Ok(json) => json,
        Err(e) => {
            log::error!("[SXL] failed to serialize figure for {}: {}", container_id, e);
            return;
        }
    };
    match figure {
        Figure::Pie(_) => render_when_ready(
            "renderPieChart",
            container_id,
            &figure_json,
            &chart_config(600, 420),
        ),
        Figure::Scatter(_) => render_when_ready(
            "renderScatterChart",
            container_id,
            &figure_json,
            &chart_config(900, 420),
        ),
    }
}

/// Render every output returned by the dispatcher into its bound element.
pub fn render_outputs(outputs: &[RenderedOutput]) {
    for output in outputs {
        log::debug!(
            "[SXL] rendering {} ({})",
            output.output_id,
            output.figure.title()
        );
        render_figure(output.output_id, &output.figure);
    }
}

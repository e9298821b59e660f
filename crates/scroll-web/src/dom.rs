use scroll_core::{content_size, parse_px, Command, Edges, ViewportState};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// All HTML elements matching `selector`, in document order.
pub fn query_all(
    document: &web::Document,
    selector: &str,
) -> anyhow::Result<Vec<web::HtmlElement>> {
    let list = document.query_selector_all(selector).map_err(js_err)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        let Some(node) = list.item(i) else { continue };
        match node.dyn_into::<web::HtmlElement>() {
            Ok(el) => out.push(el),
            Err(_) => log::warn!("[dom] {selector} #{i} is not an HTML element; skipped"),
        }
    }
    Ok(out)
}

/// Size of the window's layout viewport (scrollbars excluded), falling back
/// to `innerWidth`/`innerHeight` when there is no document element.
pub fn window_size(window: &web::Window) -> ViewportState {
    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        return ViewportState {
            width: root.client_width() as f64,
            height: root.client_height() as f64,
        };
    }
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    ViewportState { width, height }
}

#[inline]
fn computed_style(
    window: &web::Window,
    element: &web::Element,
) -> Option<web::CssStyleDeclaration> {
    window.get_computed_style(element).ok().flatten()
}

#[inline]
fn computed_px(style: &web::CssStyleDeclaration, property: &str) -> Option<f64> {
    style
        .get_property_value(property)
        .ok()
        .and_then(|v| parse_px(&v))
}

// `padding` + "" reads padding-top etc., `border` + "-width" reads border-top-width.
fn computed_edges(style: &web::CssStyleDeclaration, prefix: &str, suffix: &str) -> Edges {
    let side = |name: &str| computed_px(style, &format!("{prefix}-{name}{suffix}")).unwrap_or(0.0);
    Edges {
        top: side("top"),
        right: side("right"),
        bottom: side("bottom"),
        left: side("left"),
    }
}

/// Content-box size of a viewport element (padding excluded, like jQuery `.height()`).
pub fn element_size(window: &web::Window, element: &web::Element) -> ViewportState {
    let padding = computed_style(window, element)
        .map(|style| computed_edges(&style, "padding", ""))
        .unwrap_or_default();
    content_size(
        element.client_width() as f64,
        element.client_height() as f64,
        &padding,
    )
}

/// Fractional border-box height from computed style, like jQuery `.outerHeight()`.
/// Falls back to the integer `offsetHeight` when the computed height is not in px.
pub fn outer_height(window: &web::Window, element: &web::HtmlElement) -> f64 {
    let fallback = element.offset_height() as f64;
    let Some(style) = computed_style(window, element) else {
        return fallback;
    };
    let Some(height) = computed_px(&style, "height") else {
        return fallback;
    };
    let border_box = style
        .get_property_value("box-sizing")
        .map(|v| v.trim() == "border-box")
        .unwrap_or(false);
    scroll_core::outer_height(
        height,
        border_box,
        &computed_edges(&style, "padding", ""),
        &computed_edges(&style, "border", "-width"),
    )
}

pub fn apply_command(element: &web::HtmlElement, command: &Command) -> anyhow::Result<()> {
    match command {
        Command::SetStyle { property, value } => element
            .style()
            .set_property(property, value)
            .map_err(js_err),
        Command::AddClass(name) => element.class_list().add_1(name).map_err(js_err),
        Command::RemoveClass(name) => element.class_list().remove_1(name).map_err(js_err),
    }
}

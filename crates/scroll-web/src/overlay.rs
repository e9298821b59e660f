use crate::dom::js_err;
use scroll_core::{EffectKind, TickSummary};
use wasm_bindgen::JsCast;
use web_sys as web;

const OVERLAY_STYLE: &str = "z-index:1000;position:fixed;top:10px;left:20px;color:white;\
background-color:rgba(0,0,0,.3);padding:10px 5px;border-radius:3px";

/// Append the fixed-position debug box to `body`.
pub fn create(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body for debug overlay"))?;
    let el = document
        .create_element("div")
        .map_err(js_err)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    el.set_attribute("style", OVERLAY_STYLE).map_err(js_err)?;
    el.set_text_content(Some("debug"));
    body.append_child(&el).map_err(js_err)?;
    Ok(el)
}

#[inline]
pub fn update(el: &web::HtmlElement, kind: EffectKind, summary: &TickSummary) {
    let text = format!(
        "{} • {} ok / {} failed • viewport {:.0}×{:.0}",
        kind, summary.processed, summary.failed, summary.viewport.width, summary.viewport.height
    );
    el.set_text_content(Some(&text));
}

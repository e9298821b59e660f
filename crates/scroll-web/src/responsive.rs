use crate::dom;
use crate::host::SharedController;
use scroll_core::Breakpoint;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Enable `controllers` at or above the breakpoint width and disable them
/// with normalization below it. Evaluated now and on every window resize.
pub fn wire_breakpoint(
    controllers: Vec<SharedController>,
    breakpoint: Breakpoint,
) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let window_for_resize = window.clone();
    let mut last: Option<bool> = None;
    let mut update = move || {
        let width = dom::window_size(&window_for_resize).width;
        let active = breakpoint.is_active(width);
        if last != Some(active) {
            log::info!(
                "[breakpoint] width {:.0} -> effects {}",
                width,
                if active { "on" } else { "off" }
            );
            last = Some(active);
        }
        for controller in &controllers {
            let Ok(mut c) = controller.try_borrow_mut() else {
                continue;
            };
            if active {
                c.enable();
            } else {
                c.disable(true);
            }
        }
    };
    update();

    let closure = Closure::wrap(Box::new(update) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        .map_err(dom::js_err)?;
    closure.forget();
    Ok(())
}

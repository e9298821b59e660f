#![cfg(target_arch = "wasm32")]
use scroll_core::{Breakpoint, ConfigOverrides, EffectConfig, EffectKind};
use wasm_bindgen::prelude::*;

mod dom;
mod host;
mod options;
mod overlay;
mod responsive;

use host::SharedController;

// Selectors mounted on start-up
const PARALLAX_SELECTOR: &str = ".parallax";
const REVEAL_SELECTOR: &str = ".scrollreveal";

#[inline]
fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}

/// Scroll effects bound to every element matching a selector.
///
/// ```js
/// const fx = new ScrollEffects('.card', { effectType: 'scrollReveal' });
/// fx.disable(true);
/// ```
#[wasm_bindgen]
pub struct ScrollEffects {
    inner: SharedController,
}

#[wasm_bindgen]
impl ScrollEffects {
    #[wasm_bindgen(constructor)]
    pub fn new(selector: &str, options: JsValue) -> Result<ScrollEffects, JsValue> {
        let overrides = options::parse(&options).map_err(to_js)?;
        let config = EffectConfig::merged(overrides);
        let inner = host::mount(selector, &config).map_err(to_js)?;
        Ok(Self { inner })
    }

    pub fn enable(&self) {
        match self.inner.try_borrow_mut() {
            Ok(mut c) => c.enable(),
            Err(_) => log::warn!("[scroll] enable ignored while a tick is running"),
        }
    }

    pub fn disable(&self, normalize: bool) {
        match self.inner.try_borrow_mut() {
            Ok(mut c) => c.disable(normalize),
            Err(_) => log::warn!("[scroll] disable ignored while a tick is running"),
        }
    }

    #[wasm_bindgen(js_name = isEnabled)]
    pub fn is_enabled(&self) -> bool {
        self.inner.try_borrow().map(|c| c.is_enabled()).unwrap_or(false)
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scroll-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    if dom::window_document().is_none() {
        anyhow::bail!("no document");
    }
    let mount = |selector: &str, effect: EffectKind| {
        host::mount(
            selector,
            &EffectConfig::merged(ConfigOverrides {
                effect: Some(effect),
                ..ConfigOverrides::default()
            }),
        )
    };
    let parallax = mount(PARALLAX_SELECTOR, EffectKind::Parallax)?;
    let reveal = mount(REVEAL_SELECTOR, EffectKind::ScrollReveal)?;
    responsive::wire_breakpoint(vec![parallax, reveal], Breakpoint::default())
}

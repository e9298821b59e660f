//! Read a plain JS options object into [`ConfigOverrides`].
//!
//! Keys follow the JS naming: `viewportSelector`, `effectType`,
//! `parallaxMaxOffset`, `scrollRevealedClass`, `scrollFirstRevealClass`,
//! `autoEnable`, `debug`. Missing, `undefined` and `null` keys keep defaults;
//! a value of the wrong type is an error.

use crate::dom::js_err;
use scroll_core::{ConfigOverrides, EffectKind};
use wasm_bindgen::JsValue;

pub fn parse(options: &JsValue) -> anyhow::Result<ConfigOverrides> {
    if options.is_undefined() || options.is_null() {
        return Ok(ConfigOverrides::default());
    }
    if !options.is_object() {
        anyhow::bail!("options must be an object, got {:?}", options);
    }
    let effect = match string(options, "effectType")? {
        Some(name) => Some(name.parse::<EffectKind>()?),
        None => None,
    };
    Ok(ConfigOverrides {
        viewport_selector: string(options, "viewportSelector")?,
        effect,
        parallax_max_offset: number(options, "parallaxMaxOffset")?,
        revealed_class: string(options, "scrollRevealedClass")?,
        first_reveal_class: string(options, "scrollFirstRevealClass")?,
        auto_enable: boolean(options, "autoEnable")?,
        debug: boolean(options, "debug")?,
    })
}

fn field(options: &JsValue, key: &str) -> anyhow::Result<Option<JsValue>> {
    let value = js_sys::Reflect::get(options, &JsValue::from_str(key)).map_err(js_err)?;
    Ok((!value.is_undefined() && !value.is_null()).then_some(value))
}

fn string(options: &JsValue, key: &str) -> anyhow::Result<Option<String>> {
    field(options, key)?
        .map(|v| {
            v.as_string()
                .ok_or_else(|| anyhow::anyhow!("option {key} must be a string"))
        })
        .transpose()
}

fn number(options: &JsValue, key: &str) -> anyhow::Result<Option<f64>> {
    field(options, key)?
        .map(|v| {
            v.as_f64()
                .ok_or_else(|| anyhow::anyhow!("option {key} must be a number"))
        })
        .transpose()
}

fn boolean(options: &JsValue, key: &str) -> anyhow::Result<Option<bool>> {
    field(options, key)?
        .map(|v| {
            v.as_bool()
                .ok_or_else(|| anyhow::anyhow!("option {key} must be a boolean"))
        })
        .transpose()
}

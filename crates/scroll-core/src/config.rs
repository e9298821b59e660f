//! Controller configuration.
//!
//! [`EffectConfig`] is immutable once built. Callers describe only what they
//! change through [`ConfigOverrides`]; every other field keeps its default.

use crate::constants::{
    DEFAULT_FIRST_REVEAL_CLASS, DEFAULT_PARALLAX_MAX_OFFSET, DEFAULT_REVEALED_CLASS,
};
use crate::error::EffectError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EffectKind {
    #[default]
    Parallax,
    ScrollReveal,
}

impl EffectKind {
    /// Name used in host option objects.
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectKind::Parallax => "parallax",
            EffectKind::ScrollReveal => "scrollReveal",
        }
    }
}

impl FromStr for EffectKind {
    type Err = EffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parallax" => Ok(EffectKind::Parallax),
            "scrollReveal" => Ok(EffectKind::ScrollReveal),
            other => Err(EffectError::UnknownEffect(other.to_string())),
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved configuration for one controller.
///
/// - `viewport_selector`: element whose box defines the viewport (`None` = window)
/// - `effect`: which effect the controller drives
/// - `parallax_max_offset`: default max background offset in px
/// - `revealed_class` / `first_reveal_class`: reveal class names
/// - `auto_enable`: enable right after initialization
/// - `debug`: report every tick to the host's debug overlay
#[derive(Clone, Debug, PartialEq)]
pub struct EffectConfig {
    pub viewport_selector: Option<String>,
    pub effect: EffectKind,
    pub parallax_max_offset: f64,
    pub revealed_class: String,
    pub first_reveal_class: String,
    pub auto_enable: bool,
    pub debug: bool,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            viewport_selector: None,
            effect: EffectKind::Parallax,
            parallax_max_offset: DEFAULT_PARALLAX_MAX_OFFSET,
            revealed_class: DEFAULT_REVEALED_CLASS.to_string(),
            first_reveal_class: DEFAULT_FIRST_REVEAL_CLASS.to_string(),
            auto_enable: true,
            debug: false,
        }
    }
}

/// Caller-supplied options; `None` keeps the default.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigOverrides {
    pub viewport_selector: Option<String>,
    pub effect: Option<EffectKind>,
    pub parallax_max_offset: Option<f64>,
    pub revealed_class: Option<String>,
    pub first_reveal_class: Option<String>,
    pub auto_enable: Option<bool>,
    pub debug: Option<bool>,
}

impl EffectConfig {
    /// Defaults with `overrides` applied field by field.
    pub fn merged(overrides: ConfigOverrides) -> Self {
        let base = Self::default();
        Self {
            viewport_selector: overrides.viewport_selector.or(base.viewport_selector),
            effect: overrides.effect.unwrap_or(base.effect),
            parallax_max_offset: overrides
                .parallax_max_offset
                .unwrap_or(base.parallax_max_offset),
            revealed_class: overrides.revealed_class.unwrap_or(base.revealed_class),
            first_reveal_class: overrides
                .first_reveal_class
                .unwrap_or(base.first_reveal_class),
            auto_enable: overrides.auto_enable.unwrap_or(base.auto_enable),
            debug: overrides.debug.unwrap_or(base.debug),
        }
    }

    pub fn validate(&self) -> Result<(), EffectError> {
        if !self.parallax_max_offset.is_finite() {
            return Err(EffectError::InvalidConfig(format!(
                "parallax max offset must be finite, got {}",
                self.parallax_max_offset
            )));
        }
        if self.effect == EffectKind::ScrollReveal {
            for (name, value) in [
                ("revealed class", &self.revealed_class),
                ("first reveal class", &self.first_reveal_class),
            ] {
                if value.trim().is_empty() || value.contains(char::is_whitespace) {
                    return Err(EffectError::InvalidConfig(format!(
                        "{name} must be a single class name, got {value:?}"
                    )));
                }
            }
        }
        Ok(())
    }
}

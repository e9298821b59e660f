//! Platform-independent core of scroll-effects.
//!
//! Everything here works on plain numbers: the host supplies element and
//! viewport geometry and receives [`Command`]s to apply. Nothing in this crate
//! references the DOM, so it builds and tests natively.

pub mod breakpoint;
pub mod command;
pub mod config;
pub mod constants;
pub mod controller;
pub mod css;
pub mod effect;
pub mod error;
pub mod metric;
pub mod parallax;
pub mod range;
pub mod reveal;

pub use breakpoint::Breakpoint;
pub use command::{Command, Commands};
pub use config::{ConfigOverrides, EffectConfig, EffectKind};
pub use constants::*;
pub use controller::{EffectController, Host, TickSummary, TrackedElement};
pub use css::{content_size, outer_height, parse_px, Edges};
pub use effect::{Effect, EffectState};
pub use error::EffectError;
pub use metric::{probe, ElementBox, ScrollMetric, ViewportState};
pub use range::{to_percent, to_range};
pub use reveal::{RevealEffect, RevealState};

//! Effect selection and the per-element state each effect carries.

use crate::command::Commands;
use crate::config::{EffectConfig, EffectKind};
use crate::error::EffectError;
use crate::metric::ScrollMetric;
use crate::parallax;
use crate::reveal::{RevealEffect, RevealState};
use smallvec::smallvec;

/// The effect a controller drives, chosen once from configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Parallax { default_max_offset: f64 },
    Reveal(RevealEffect),
}

/// Mutable per-element data for the configured effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EffectState {
    Parallax { max_offset: f64 },
    Reveal(RevealState),
}

impl Effect {
    pub fn from_config(config: &EffectConfig) -> Self {
        match config.effect {
            EffectKind::Parallax => Effect::Parallax {
                default_max_offset: config.parallax_max_offset,
            },
            EffectKind::ScrollReveal => Effect::Reveal(RevealEffect::new(
                config.revealed_class.clone(),
                config.first_reveal_class.clone(),
            )),
        }
    }

    pub fn kind(&self) -> EffectKind {
        match self {
            Effect::Parallax { .. } => EffectKind::Parallax,
            Effect::Reveal(_) => EffectKind::ScrollReveal,
        }
    }

    /// Initial state for a newly tracked element. `max_offset_attr` is the
    /// element's raw `data-parallax` value, only read for parallax.
    pub fn track(&self, max_offset_attr: Option<&str>) -> EffectState {
        match self {
            Effect::Parallax { default_max_offset } => EffectState::Parallax {
                max_offset: parallax::resolve_max_offset(max_offset_attr, *default_max_offset),
            },
            Effect::Reveal(_) => EffectState::Reveal(RevealState::default()),
        }
    }

    /// Advance `state` with this tick's metric. Fails when `state` was not
    /// built by this effect.
    pub fn process(
        &self,
        state: &mut EffectState,
        metric: &ScrollMetric,
    ) -> Result<Commands, EffectError> {
        match (self, state) {
            (Effect::Parallax { .. }, EffectState::Parallax { max_offset }) => {
                Ok(parallax::apply(metric, *max_offset).into_iter().collect())
            }
            (Effect::Reveal(reveal), EffectState::Reveal(state)) => {
                Ok(reveal.process(state, metric))
            }
            (effect, state) => Err(mismatch(effect, state)),
        }
    }

    /// Return an element to its initial (hidden) presentation. Parallax has none.
    pub fn reset(&self, state: &mut EffectState) -> Result<Commands, EffectError> {
        match (self, state) {
            (Effect::Parallax { .. }, EffectState::Parallax { .. }) => Ok(Commands::new()),
            (Effect::Reveal(reveal), EffectState::Reveal(state)) => Ok(reveal.reset(state)),
            (effect, state) => Err(mismatch(effect, state)),
        }
    }

    /// Neutral (shown/centered) presentation for effects switched off.
    pub fn normalize(&self) -> Commands {
        match self {
            Effect::Parallax { .. } => smallvec![parallax::neutral()],
            Effect::Reveal(reveal) => reveal.normalize(),
        }
    }
}

fn mismatch(effect: &Effect, state: &EffectState) -> EffectError {
    EffectError::StateMismatch {
        effect: effect.kind().as_str(),
        state: match state {
            EffectState::Parallax { .. } => EffectKind::Parallax.as_str(),
            EffectState::Reveal(_) => EffectKind::ScrollReveal.as_str(),
        },
    }
}

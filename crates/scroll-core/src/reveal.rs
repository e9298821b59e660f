//! Reveal: toggle classes as elements scroll fully into and out of view.

use crate::command::{Command, Commands};
use crate::metric::ScrollMetric;
use smallvec::smallvec;

/// Per-element reveal flags.
///
/// `has_been_revealed_once` is a one-way latch: processing only ever sets it,
/// and only [`RevealEffect::reset`] clears it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    pub has_been_revealed_once: bool,
    pub is_currently_revealed: bool,
}

/// Class names driven by the reveal state machine.
///
/// - `revealed_class`: present while the element is revealed
/// - `first_reveal_class`: added on the first reveal and kept until reset
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealEffect {
    pub revealed_class: String,
    pub first_reveal_class: String,
}

impl RevealEffect {
    pub fn new(revealed_class: impl Into<String>, first_reveal_class: impl Into<String>) -> Self {
        Self {
            revealed_class: revealed_class.into(),
            first_reveal_class: first_reveal_class.into(),
        }
    }

    /// Advance `state` with this tick's metric and return the class changes.
    ///
    /// Mid-transit metrics (neither fully entered nor fully exited) hold the state.
    pub fn process(&self, state: &mut RevealState, metric: &ScrollMetric) -> Commands {
        let mut out = Commands::new();
        if !state.is_currently_revealed && metric.is_fully_entered {
            out.push(Command::AddClass(self.revealed_class.clone()));
            if !state.has_been_revealed_once {
                state.has_been_revealed_once = true;
                out.push(Command::AddClass(self.first_reveal_class.clone()));
            }
            state.is_currently_revealed = true;
            log::debug!("[reveal] entered (first={})", out.len() == 2);
        }
        if state.is_currently_revealed && metric.is_fully_exited {
            state.is_currently_revealed = false;
            out.push(Command::RemoveClass(self.revealed_class.clone()));
            log::debug!("[reveal] exited");
        }
        out
    }

    /// Back to the hidden baseline: both classes removed, both flags cleared.
    pub fn reset(&self, state: &mut RevealState) -> Commands {
        *state = RevealState::default();
        smallvec![
            Command::RemoveClass(self.revealed_class.clone()),
            Command::RemoveClass(self.first_reveal_class.clone()),
        ]
    }

    /// Static "shown" look used when effects are turned off. Flags are left alone.
    pub fn normalize(&self) -> Commands {
        smallvec![
            Command::AddClass(self.revealed_class.clone()),
            Command::AddClass(self.first_reveal_class.clone()),
        ]
    }
}

//! Drives one effect over a fixed set of elements.
//!
//! The host owns the event loop and calls [`EffectController::on_resize`] and
//! [`EffectController::on_scroll`] from its `resize`/`scroll` handlers. The
//! cached viewport is only written by `on_resize`, so every element in a
//! scroll tick is measured against the same viewport.

use crate::command::Command;
use crate::config::EffectConfig;
use crate::constants::PARALLAX_DATA_ATTRIBUTE;
use crate::effect::{Effect, EffectState};
use crate::error::EffectError;
use crate::metric::{probe, ElementBox, ViewportState};

/// Environment adapter: geometry in, commands out, listener lifecycle.
pub trait Host {
    type Element;

    fn viewport_size(&self) -> ViewportState;
    fn element_box(&self, element: &Self::Element) -> ElementBox;
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;
    fn apply(&mut self, element: &Self::Element, command: &Command) -> anyhow::Result<()>;

    /// Start delivering `resize`/`scroll` to the controller.
    fn listen(&mut self);
    /// Stop delivering events. Must tolerate being called when not listening.
    fn unlisten(&mut self);

    /// Called after every scroll tick when `debug` is configured.
    fn report(&mut self, _summary: &TickSummary) {}
}

/// One element under control together with its effect state.
#[derive(Clone, Debug)]
pub struct TrackedElement<E> {
    pub element: E,
    pub state: EffectState,
}

/// Outcome of one scroll tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickSummary {
    pub processed: usize,
    pub failed: usize,
    pub viewport: ViewportState,
}

pub struct EffectController<H: Host> {
    host: H,
    effect: Effect,
    elements: Vec<TrackedElement<H::Element>>,
    viewport: ViewportState,
    enabled: bool,
    debug: bool,
}

impl<H: Host> EffectController<H> {
    /// Track `elements` with the configured effect and, when `auto_enable`
    /// is set, enable straight away.
    pub fn initialize(
        host: H,
        elements: Vec<H::Element>,
        config: &EffectConfig,
    ) -> Result<Self, EffectError> {
        config.validate()?;
        let effect = Effect::from_config(config);
        let elements = elements
            .into_iter()
            .map(|element| {
                let attr = match effect {
                    Effect::Parallax { .. } => host.attribute(&element, PARALLAX_DATA_ATTRIBUTE),
                    Effect::Reveal(_) => None,
                };
                let state = effect.track(attr.as_deref());
                TrackedElement { element, state }
            })
            .collect::<Vec<_>>();
        log::info!(
            "[scroll] tracking {} element(s) with {}",
            elements.len(),
            effect.kind()
        );

        let mut controller = Self {
            host,
            effect,
            elements,
            viewport: ViewportState::default(),
            enabled: false,
            debug: config.debug,
        };
        if config.auto_enable {
            controller.enable();
        }
        Ok(controller)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    pub fn elements(&self) -> &[TrackedElement<H::Element>] {
        &self.elements
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Start from the hidden baseline, attach listeners and evaluate once
    /// (resize, then scroll). No-op while already enabled.
    pub fn enable(&mut self) {
        if self.enabled {
            return;
        }
        self.enabled = true;
        log::info!("[scroll] enable {}", self.effect.kind());

        for (i, tracked) in self.elements.iter_mut().enumerate() {
            match self.effect.reset(&mut tracked.state) {
                Ok(commands) => {
                    apply_all(&mut self.host, &tracked.element, &commands);
                }
                Err(e) => log::warn!("[scroll] element {i}: {e}"),
            }
        }
        self.host.listen();
        self.on_resize();
        self.on_scroll();
    }

    /// Detach listeners. With `normalize`, leave every element in its neutral
    /// shown state (centered background, both reveal classes present).
    /// No-op while already disabled.
    pub fn disable(&mut self, normalize: bool) {
        if !self.enabled {
            return;
        }
        self.enabled = false;
        self.host.unlisten();
        log::info!(
            "[scroll] disable {} (normalize={})",
            self.effect.kind(),
            normalize
        );

        if normalize {
            let commands = self.effect.normalize();
            for tracked in &self.elements {
                apply_all(&mut self.host, &tracked.element, &commands);
            }
        }
    }

    pub fn on_resize(&mut self) {
        self.viewport = self.host.viewport_size();
        log::debug!(
            "[scroll] viewport {}x{}",
            self.viewport.width,
            self.viewport.height
        );
    }

    /// Measure every element against the cached viewport and apply the
    /// resulting commands. A failing element is logged and skipped.
    pub fn on_scroll(&mut self) -> TickSummary {
        let viewport_height = self.viewport.height;
        let mut summary = TickSummary {
            viewport: self.viewport,
            ..TickSummary::default()
        };

        for (i, tracked) in self.elements.iter_mut().enumerate() {
            let bounds = self.host.element_box(&tracked.element);
            let commands = match probe(&bounds, viewport_height)
                .and_then(|metric| self.effect.process(&mut tracked.state, &metric))
            {
                Ok(commands) => commands,
                Err(e) => {
                    log::warn!("[scroll] element {i}: {e}");
                    summary.failed += 1;
                    continue;
                }
            };
            if apply_all(&mut self.host, &tracked.element, &commands) {
                summary.processed += 1;
            } else {
                summary.failed += 1;
            }
        }

        if self.debug {
            self.host.report(&summary);
        }
        summary
    }
}

// Applies every command even if an earlier one fails; true when all succeeded.
fn apply_all<H: Host>(host: &mut H, element: &H::Element, commands: &[Command]) -> bool {
    let mut ok = true;
    for command in commands {
        if let Err(e) = host.apply(element, command) {
            log::warn!("[scroll] apply `{command}` failed: {e:#}");
            ok = false;
        }
    }
    ok
}

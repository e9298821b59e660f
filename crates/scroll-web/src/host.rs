use crate::dom;
use crate::overlay;
use scroll_core::{
    Command, EffectConfig, EffectController, EffectKind, ElementBox, Host, TickSummary,
    ViewportState,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedController = Rc<RefCell<EffectController<WebHost>>>;

struct Listeners {
    resize: Closure<dyn FnMut()>,
    scroll: Closure<dyn FnMut()>,
}

/// DOM side of a controller: measures elements, applies commands and owns
/// the window listeners while the controller is enabled.
pub struct WebHost {
    window: web::Window,
    viewport: Option<web::Element>,
    kind: EffectKind,
    overlay: Option<web::HtmlElement>,
    controller: Weak<RefCell<EffectController<WebHost>>>,
    listeners: Option<Listeners>,
}

/// Select `selector`, build a controller for it and enable it when configured.
pub fn mount(selector: &str, config: &EffectConfig) -> anyhow::Result<SharedController> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let viewport = match &config.viewport_selector {
        Some(sel) => Some(
            document
                .query_selector(sel)
                .map_err(dom::js_err)?
                .ok_or_else(|| anyhow::anyhow!("missing viewport {sel}"))?,
        ),
        None => None,
    };
    let overlay = if config.debug {
        Some(overlay::create(&document)?)
    } else {
        None
    };
    let elements = dom::query_all(&document, selector)?;
    log::info!("[scroll] {selector}: {} element(s)", elements.len());

    let host = WebHost {
        window,
        viewport,
        kind: config.effect,
        overlay,
        controller: Weak::new(),
        listeners: None,
    };

    // Listeners need a handle back to the controller, so enabling waits until it is shared.
    let deferred = EffectConfig {
        auto_enable: false,
        ..config.clone()
    };
    let controller = Rc::new(RefCell::new(EffectController::initialize(
        host, elements, &deferred,
    )?));
    controller.borrow_mut().host_mut().controller = Rc::downgrade(&controller);
    if config.auto_enable {
        controller.borrow_mut().enable();
    }
    Ok(controller)
}

fn listener(
    controller: Weak<RefCell<EffectController<WebHost>>>,
    tick: fn(&mut EffectController<WebHost>),
) -> Closure<dyn FnMut()> {
    Closure::wrap(Box::new(move || {
        let Some(shared) = controller.upgrade() else {
            return;
        };
        // Already borrowed means we were dispatched from inside enable/disable.
        let Ok(mut c) = shared.try_borrow_mut() else {
            log::debug!("[scroll] controller busy; tick skipped");
            return;
        };
        tick(&mut *c);
    }) as Box<dyn FnMut()>)
}

impl Host for WebHost {
    type Element = web::HtmlElement;

    fn viewport_size(&self) -> ViewportState {
        match &self.viewport {
            Some(el) => dom::element_size(&self.window, el),
            None => dom::window_size(&self.window),
        }
    }

    fn element_box(&self, element: &web::HtmlElement) -> ElementBox {
        let rect = element.get_bounding_client_rect();
        ElementBox {
            top: rect.top(),
            bottom: rect.bottom(),
            height: dom::outer_height(&self.window, element),
        }
    }

    fn attribute(&self, element: &web::HtmlElement, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn apply(&mut self, element: &web::HtmlElement, command: &Command) -> anyhow::Result<()> {
        dom::apply_command(element, command)
    }

    fn listen(&mut self) {
        if self.listeners.is_some() {
            return;
        }
        let listeners = Listeners {
            resize: listener(self.controller.clone(), |c| c.on_resize()),
            scroll: listener(self.controller.clone(), |c| {
                c.on_scroll();
            }),
        };
        for (event, closure) in [("resize", &listeners.resize), ("scroll", &listeners.scroll)] {
            if let Err(e) = self
                .window
                .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            {
                log::warn!("[scroll] add {event} listener failed: {:?}", e);
            }
        }
        self.listeners = Some(listeners);
    }

    fn unlisten(&mut self) {
        let Some(listeners) = self.listeners.take() else {
            return;
        };
        for (event, closure) in [("resize", &listeners.resize), ("scroll", &listeners.scroll)] {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            {
                log::warn!("[scroll] remove {event} listener failed: {:?}", e);
            }
        }
    }

    fn report(&mut self, summary: &TickSummary) {
        if let Some(el) = &self.overlay {
            overlay::update(el, self.kind, summary);
        }
    }
}

impl Drop for WebHost {
    fn drop(&mut self) {
        self.unlisten();
    }
}

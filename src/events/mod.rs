pub mod pointer;
pub mod resize;

use crate::canvas::CanvasSurface;
use dotfield_core::Simulation;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub use pointer::wire_pointer_handlers;
pub use resize::{observe_canvas, wire_resize, CanvasObserver};

pub type SharedSimulation = Rc<RefCell<Simulation<CanvasSurface>>>;

/// An attached DOM event listener, detached again on drop.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!(format!("add {} listener: {:?}", kind, e)))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Everything one field subscribes to; dropping it unsubscribes.
pub struct Subscriptions {
    _listeners: Vec<Listener>,
    _observer: CanvasObserver,
}

/// Subscribe `sim` to window and canvas resizes and to canvas pointer events.
pub fn wire_all(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    sim: &SharedSimulation,
) -> anyhow::Result<Subscriptions> {
    let mut listeners = vec![wire_resize(window, sim)?];
    listeners.extend(wire_pointer_handlers(canvas, sim)?);
    let observer = observe_canvas(canvas, sim)?;
    Ok(Subscriptions {
        _listeners: listeners,
        _observer: observer,
    })
}

use super::{Listener, SharedSimulation};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Re-read the canvas size on window resize; the field is rebuilt only if it changed.
pub fn wire_resize(window: &web::Window, sim: &SharedSimulation) -> anyhow::Result<Listener> {
    let sim = sim.clone();
    Listener::attach(window.as_ref(), "resize", move |_ev: web::Event| {
        sync_and_log(&sim, "window");
    })
}

/// A `ResizeObserver` watching the canvas element, disconnected on drop.
pub struct CanvasObserver {
    observer: web::ResizeObserver,
    _closure: Closure<dyn FnMut(js_sys::Array)>,
}

impl Drop for CanvasObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Follow element-level size changes of `canvas` (container or layout changes
/// the window never hears about).
pub fn observe_canvas(
    canvas: &web::HtmlCanvasElement,
    sim: &SharedSimulation,
) -> anyhow::Result<CanvasObserver> {
    let sim = sim.clone();
    let closure = Closure::wrap(Box::new(move |_entries: js_sys::Array| {
        sync_and_log(&sim, "canvas");
    }) as Box<dyn FnMut(js_sys::Array)>);
    let observer = web::ResizeObserver::new(closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!(format!("ResizeObserver: {:?}", e)))?;
    observer.observe(canvas.as_ref());
    Ok(CanvasObserver {
        observer,
        _closure: closure,
    })
}

fn sync_and_log(sim: &SharedSimulation, source: &str) {
    let mut s = sim.borrow_mut();
    if s.sync_size() {
        if let Some((w, h)) = s.field().dimensions() {
            log::debug!(
                "[dom] canvas resized to {}x{} ({}), {} particles",
                w,
                h,
                source,
                s.field().len()
            );
        }
    }
}

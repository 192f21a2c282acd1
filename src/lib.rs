#![cfg(target_arch = "wasm32")]
use dotfield_core::{create_simulation, FrameScheduler, SimulationHandle, UserConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod input;
mod overlay;
mod scheduler;
mod settings;

use canvas::CanvasSurface;
use constants::{CANVAS_ID, CONFIG_ATTR, LOG_LEVEL, RATE_READOUT_ID};
use scheduler::AnimationFrameScheduler;

thread_local! {
    // Field started from page markup; lives as long as the page.
    static AUTO_FIELD: RefCell<Option<DotField>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(LOG_LEVEL).ok();
    log::info!("dotfield-web starting");

    if let Err(e) = autostart() {
        log::error!("autostart error: {:?}", e);
    }
    Ok(())
}

fn autostart() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let Some(canvas) = dom::find_canvas(&document, CANVAS_ID)? else {
        log::info!("[dom] no #{} on page; waiting for DotField", CANVAS_ID);
        return Ok(());
    };
    let user = settings::parse_user_config(canvas.get_attribute(CONFIG_ATTR).as_deref())?;
    let readout = document.get_element_by_id(RATE_READOUT_ID);
    let field = DotField::build(canvas, user, move |rate| {
        if let Some(el) = &readout {
            overlay::show_rate(el, rate);
        }
    })?;
    AUTO_FIELD.with(|slot| *slot.borrow_mut() = Some(field));
    Ok(())
}

/// A running particle field on a host-owned canvas.
///
/// Dropping it (or calling `free()` from JS) stops the loop, detaches every
/// listener it installed and disconnects its canvas resize observer.
#[wasm_bindgen]
pub struct DotField {
    handle: SimulationHandle<CanvasSurface>,
    subscriptions: Option<events::Subscriptions>,
}

#[wasm_bindgen]
impl DotField {
    /// `config_json` uses the option names `density`, `size`, `speed`,
    /// `wander`, `cursor`, `fps` and `color`; `on_rate` receives the smoothed
    /// frame rate once per painted frame.
    #[wasm_bindgen(constructor)]
    pub fn create(
        canvas: web::HtmlCanvasElement,
        config_json: Option<String>,
        on_rate: Option<js_sys::Function>,
    ) -> Result<DotField, JsValue> {
        let user = settings::parse_user_config(config_json.as_deref()).map_err(to_js)?;
        Self::build(canvas, user, move |rate| {
            if let Some(f) = &on_rate {
                if let Err(e) = f.call1(&JsValue::NULL, &JsValue::from(rate)) {
                    log::warn!("[loop] on_rate callback threw: {:?}", e);
                }
            }
        })
        .map_err(to_js)
    }

    pub fn stop(&mut self) {
        self.handle.stop();
        self.subscriptions = None;
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.handle.is_running()
    }

    #[wasm_bindgen(getter, js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.handle.simulation().borrow().field().len()
    }
}

impl DotField {
    fn build(
        canvas: web::HtmlCanvasElement,
        user: UserConfig,
        on_rate: impl FnMut(u32) + 'static,
    ) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let surface = CanvasSurface::new(canvas.clone())?;
        let scheduler: Rc<dyn FrameScheduler> = Rc::new(AnimationFrameScheduler::new()?);
        let handle = create_simulation(surface, user, on_rate, scheduler, dom::entropy_seed())?;
        let subscriptions = match events::wire_all(&window, &canvas, handle.simulation()) {
            Ok(subscriptions) => subscriptions,
            Err(e) => {
                handle.stop();
                return Err(e);
            }
        };
        Ok(Self {
            handle,
            subscriptions: Some(subscriptions),
        })
    }
}

impl Drop for DotField {
    fn drop(&mut self) {
        self.handle.stop();
    }
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

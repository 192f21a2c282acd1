use super::{Listener, SharedSimulation};
use crate::input;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(
    canvas: &web::HtmlCanvasElement,
    sim: &SharedSimulation,
) -> anyhow::Result<Vec<Listener>> {
    Ok(vec![
        wire_pointermove(canvas, sim)?,
        wire_pointer_gone(canvas, sim, "pointerleave")?,
        wire_pointer_gone(canvas, sim, "pointercancel")?,
    ])
}

/// Pointer position in the canvas' surface units.
#[inline]
fn pointer_surface_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    input::client_to_surface(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

fn wire_pointermove(
    canvas: &web::HtmlCanvasElement,
    sim: &SharedSimulation,
) -> anyhow::Result<Listener> {
    let sim = sim.clone();
    let canvas_for_move = canvas.clone();
    Listener::attach(canvas.as_ref(), "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let backing = Vec2::new(
            canvas_for_move.width() as f32,
            canvas_for_move.height() as f32,
        );
        let mut s = sim.borrow_mut();
        match pointer_surface_px(ev, &canvas_for_move) {
            Some(pos) if input::within_surface(pos, backing) => s.pointer_moved(pos),
            _ => s.pointer_left(),
        }
    })
}

fn wire_pointer_gone(
    canvas: &web::HtmlCanvasElement,
    sim: &SharedSimulation,
    kind: &'static str,
) -> anyhow::Result<Listener> {
    let sim = sim.clone();
    Listener::attach(canvas.as_ref(), kind, move |_ev: web::Event| {
        sim.borrow_mut().pointer_left();
    })
}

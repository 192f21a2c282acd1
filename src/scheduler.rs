use dotfield_core::{FrameScheduler, FrameToken, ScheduleError};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameClosure = Closure<dyn FnMut(f64)>;

#[derive(Default)]
struct Frames {
    pending: Vec<(i32, FrameClosure)>,
    // Last fired closure; it may not be freed while it is still running.
    spent: Option<FrameClosure>,
}

impl Frames {
    fn take(&mut self, id: i32) -> Option<FrameClosure> {
        let i = self.pending.iter().position(|(pending, _)| *pending == id)?;
        Some(self.pending.swap_remove(i).1)
    }
}

/// `FrameScheduler` backed by `requestAnimationFrame`.
///
/// Owns the closure of every outstanding request, so a cancelled frame frees
/// its callback (and whatever it captured) right away.
pub struct AnimationFrameScheduler {
    window: web::Window,
    frames: Rc<RefCell<Frames>>,
}

impl AnimationFrameScheduler {
    pub fn new() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        Ok(Self {
            window,
            frames: Rc::new(RefCell::new(Frames::default())),
        })
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> Result<FrameToken, ScheduleError> {
        let id = Rc::new(Cell::new(0));
        let own_id = id.clone();
        let frames: Weak<RefCell<Frames>> = Rc::downgrade(&self.frames);
        let tick: FrameClosure = Closure::once(move |timestamp: f64| {
            let own = frames.upgrade().and_then(|f| f.borrow_mut().take(own_id.get()));
            callback(timestamp);
            if let Some(f) = frames.upgrade() {
                f.borrow_mut().spent = own;
            }
        });
        let handle = self
            .window
            .request_animation_frame(tick.as_ref().unchecked_ref())
            .map_err(|e| ScheduleError::Rejected(format!("{:?}", e)))?;
        id.set(handle);

        let spent = {
            let mut frames = self.frames.borrow_mut();
            frames.pending.push((handle, tick));
            frames.spent.take()
        };
        drop(spent);
        Ok(FrameToken(handle))
    }

    fn cancel_frame(&self, token: FrameToken) {
        if let Err(e) = self.window.cancel_animation_frame(token.0) {
            log::warn!("[loop] cancel_animation_frame({}) failed: {:?}", token.0, e);
        }
        let cancelled = self.frames.borrow_mut().take(token.0);
        drop(cancelled);
    }
}

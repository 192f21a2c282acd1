//! One particle field bound to one drawing surface, and the handle that keeps
//! its render loop running.

use crate::config::{normalize, Config, UserConfig};
use crate::error::ConfigError;
use crate::field::ParticleField;
use crate::frame::{RenderLoop, TickOutcome};
use crate::schedule::{FrameScheduler, FrameToken};
use crate::surface::DrawSurface;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub struct Simulation<S: DrawSurface> {
    config: Config,
    field: ParticleField,
    pointer: Option<Vec2>,
    surface: S,
    render: RenderLoop,
    rng: StdRng,
    on_rate: Rc<RefCell<dyn FnMut(u32)>>,
}

impl<S: DrawSurface> Simulation<S> {
    /// Normalize `user`, size the field to the surface and get ready to tick.
    pub fn new<F>(surface: S, user: UserConfig, on_rate: F, seed: u64) -> Result<Self, ConfigError>
    where
        F: FnMut(u32) + 'static,
    {
        let config = normalize(user)?;
        let mut sim = Self {
            config,
            field: ParticleField::new(),
            pointer: None,
            surface,
            render: RenderLoop::new(),
            rng: StdRng::seed_from_u64(seed),
            on_rate: Rc::new(RefCell::new(on_rate)),
        };
        sim.sync_size();
        Ok(sim)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn render_loop(&self) -> &RenderLoop {
        &self.render
    }

    /// Re-read the surface's on-screen size and resize to it.
    pub fn sync_size(&mut self) -> bool {
        let (width, height) = self.surface.client_size();
        self.resize(width, height)
    }

    /// Match the backing buffer to `width` x `height` and rebuild the lattice.
    /// Does nothing when the size is unchanged.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if self.field.dimensions() == Some((width, height)) {
            return false;
        }
        self.surface.set_backing_size(width, height);
        self.field.resize(width, height, &self.config, &mut self.rng)
    }

    pub fn pointer_moved(&mut self, position: Vec2) {
        self.pointer = Some(position);
    }

    pub fn pointer_left(&mut self) {
        self.pointer = None;
    }

    /// Run one scheduled frame at timestamp `now` (ms).
    ///
    /// The smoothed rate of a painted frame is not reported from here; the
    /// render loop hands it to the host callback once the simulation is no
    /// longer borrowed, so the callback may read it.
    pub fn tick(&mut self, now: f64) -> TickOutcome {
        self.render.tick(
            now,
            &self.config,
            &mut self.field,
            self.pointer,
            &mut self.surface,
            &mut self.rng,
        )
    }
}

#[derive(Debug, Default)]
struct LoopState {
    running: Cell<bool>,
    pending: Cell<Option<FrameToken>>,
}

/// Owner-side handle of a running simulation.
///
/// The loop reschedules itself every frame until [`SimulationHandle::stop`]
/// is called or the scheduler refuses a request.
pub struct SimulationHandle<S: DrawSurface + 'static> {
    sim: Rc<RefCell<Simulation<S>>>,
    scheduler: Rc<dyn FrameScheduler>,
    state: Rc<LoopState>,
}

/// Build a simulation on `surface` and start its render loop on `scheduler`.
pub fn create_simulation<S, F>(
    surface: S,
    user: UserConfig,
    on_rate: F,
    scheduler: Rc<dyn FrameScheduler>,
    seed: u64,
) -> Result<SimulationHandle<S>, ConfigError>
where
    S: DrawSurface + 'static,
    F: FnMut(u32) + 'static,
{
    let sim = Simulation::new(surface, user, on_rate, seed)?;
    Ok(SimulationHandle::start(Rc::new(RefCell::new(sim)), scheduler))
}

impl<S: DrawSurface + 'static> SimulationHandle<S> {
    pub fn start(sim: Rc<RefCell<Simulation<S>>>, scheduler: Rc<dyn FrameScheduler>) -> Self {
        let state = Rc::new(LoopState::default());
        state.running.set(true);
        {
            let s = sim.borrow();
            log::info!(
                "[loop] starting: {} particles, {:.1} fps target ({:.2} ms interval)",
                s.field().len(),
                s.config().fps,
                s.config().frame_interval_ms()
            );
        }
        schedule_next(sim.clone(), scheduler.clone(), state.clone());
        Self {
            sim,
            scheduler,
            state,
        }
    }

    pub fn simulation(&self) -> &Rc<RefCell<Simulation<S>>> {
        &self.sim
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    pub fn resize(&self, width: u32, height: u32) -> bool {
        self.sim.borrow_mut().resize(width, height)
    }

    pub fn sync_size(&self) -> bool {
        self.sim.borrow_mut().sync_size()
    }

    pub fn pointer_moved(&self, x: f32, y: f32) {
        self.sim.borrow_mut().pointer_moved(Vec2::new(x, y));
    }

    pub fn pointer_left(&self) {
        self.sim.borrow_mut().pointer_left();
    }

    /// Cancel the pending frame and stop rescheduling. Idempotent.
    pub fn stop(&self) {
        if !self.state.running.replace(false) {
            return;
        }
        if let Some(token) = self.state.pending.take() {
            self.scheduler.cancel_frame(token);
        }
        log::info!("[loop] stopped");
    }
}

fn schedule_next<S: DrawSurface + 'static>(
    sim: Rc<RefCell<Simulation<S>>>,
    scheduler: Rc<dyn FrameScheduler>,
    state: Rc<LoopState>,
) {
    if !state.running.get() {
        return;
    }
    let cb_scheduler = scheduler.clone();
    let cb_state = state.clone();
    let callback = Box::new(move |now: f64| {
        cb_state.pending.set(None);
        if !cb_state.running.get() {
            return;
        }
        let (outcome, on_rate) = {
            let mut s = sim.borrow_mut();
            (s.tick(now), s.on_rate.clone())
        };
        if let Some(rate) = outcome.rate() {
            (&mut *on_rate.borrow_mut())(rate);
        }
        schedule_next(sim, cb_scheduler, cb_state);
    });
    match scheduler.request_frame(callback) {
        Ok(token) => state.pending.set(Some(token)),
        Err(e) => {
            log::error!("[loop] frame request failed, stopping: {}", e);
            state.running.set(false);
        }
    }
}

// Shared host-side fakes: a surface that records draw calls and a scheduler
// whose frames fire only when the test says so.

#![allow(dead_code)]
use dotfield_core::{DrawSurface, FrameScheduler, FrameToken, ScheduleError, UserConfig};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    SetBackingSize(u32, u32),
    Clear,
    BeginPath,
    Circle(Vec2, f32),
    Fill(String),
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub client: (u32, u32),
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            client: (width, height),
            ops: Vec::new(),
        }
    }

    pub fn fills(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Fill(_)))
            .count()
    }

    pub fn circles(&self) -> Vec<(Vec2, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Circle(c, r) => Some((*c, *r)),
                _ => None,
            })
            .collect()
    }

    pub fn draw_calls(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| !matches!(op, DrawOp::SetBackingSize(..)))
            .count()
    }
}

impl DrawSurface for RecordingSurface {
    fn client_size(&self) -> (u32, u32) {
        self.client
    }
    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.ops.push(DrawOp::SetBackingSize(width, height));
    }
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }
    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }
    fn circle(&mut self, center: Vec2, radius: f32) {
        self.ops.push(DrawOp::Circle(center, radius));
    }
    fn fill(&mut self, color: &str) {
        self.ops.push(DrawOp::Fill(color.to_string()));
    }
}

/// Queues frame callbacks until `fire` runs them with a chosen timestamp.
#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<Vec<(FrameToken, Box<dyn FnOnce(f64)>)>>,
    next_id: Cell<i32>,
    pub cancelled: RefCell<Vec<FrameToken>>,
    pub refuse: Cell<bool>,
}

impl ManualScheduler {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run every callback queued so far at timestamp `now`; returns how many ran.
    pub fn fire(&self, now: f64) -> usize {
        let due: Vec<_> = self.queue.borrow_mut().drain(..).collect();
        let n = due.len();
        for (_, cb) in due {
            cb(now);
        }
        n
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> Result<FrameToken, ScheduleError> {
        if self.refuse.get() {
            return Err(ScheduleError::Unavailable);
        }
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let token = FrameToken(id);
        self.queue.borrow_mut().push((token, callback));
        Ok(token)
    }

    fn cancel_frame(&self, token: FrameToken) {
        self.queue.borrow_mut().retain(|(t, _)| *t != token);
        self.cancelled.borrow_mut().push(token);
    }
}

/// Stock config with the lattice spacing replaced.
pub fn lattice_config(density: f32) -> UserConfig {
    UserConfig {
        density,
        ..UserConfig::default()
    }
}

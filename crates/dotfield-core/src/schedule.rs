use crate::error::ScheduleError;

/// Identifier of a pending frame request, used to cancel it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken(pub i32);

/// Per-frame callback primitive supplied by the host, typically tied to
/// display refresh. The callback receives the frame timestamp in milliseconds.
pub trait FrameScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> Result<FrameToken, ScheduleError>;
    fn cancel_frame(&self, token: FrameToken);
}

// Shared tuning constants for the particle field and render loop.

// Rate smoothing
pub const RATE_WINDOW: usize = 10; // painted frames folded into the reported rate

// Jitter injected into velocity, in hundredths of a surface unit per frame
pub const JITTER_RANGE: [f32; 2] = [-10.0, 10.0];
pub const VELOCITY_SCALE: f32 = 100.0;

// Milliseconds per second, used for frame interval and instantaneous rate
pub const MS_PER_SEC: f64 = 1000.0;

// Defaults matching the stock host page
pub const DEFAULT_DENSITY: f32 = 8.0;
pub const DEFAULT_SIZE: [f32; 2] = [1.0, 2.0];
pub const DEFAULT_SPEED: f32 = 0.5;
pub const DEFAULT_WANDER: f32 = 1.0;
pub const DEFAULT_CURSOR: f32 = 20.0;
pub const DEFAULT_FPS: f64 = 60.0;
pub const DEFAULT_COLOR: &str = "rgba(255,255,255,0.5)";

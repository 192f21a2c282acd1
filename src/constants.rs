// Page wiring for the auto-started field

// Canvas the field draws on when the page opts in without calling `DotField` itself
pub const CANVAS_ID: &str = "dotfield-canvas";

// JSON configuration read from the canvas element
pub const CONFIG_ATTR: &str = "data-config";

// Optional element whose text shows the smoothed frame rate
pub const RATE_READOUT_ID: &str = "dotfield-fps";

// Console log level installed at start
pub const LOG_LEVEL: log::Level = log::Level::Info;

pub mod average;
pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod frame;
pub mod motion;
pub mod sampler;
pub mod schedule;
pub mod simulation;
pub mod surface;

pub use average::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use field::*;
pub use frame::*;
pub use motion::*;
pub use sampler::*;
pub use schedule::*;
pub use simulation::*;
pub use surface::*;

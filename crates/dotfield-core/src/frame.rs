use crate::average::MovingAverage;
use crate::config::{Config, RateWarmup};
use crate::constants::MS_PER_SEC;
use crate::field::ParticleField;
use crate::motion;
use crate::surface::DrawSurface;
use glam::Vec2;
use rand::Rng;

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// Too soon since the last paint; nothing changed.
    Waiting { elapsed: f64 },
    /// Particles advanced and painted; `rate` is the smoothed frame rate.
    Painted { elapsed: f64, rate: u32 },
}

impl TickOutcome {
    pub fn painted(&self) -> bool {
        matches!(self, TickOutcome::Painted { .. })
    }

    pub fn rate(&self) -> Option<u32> {
        match *self {
            TickOutcome::Painted { rate, .. } => Some(rate),
            TickOutcome::Waiting { .. } => None,
        }
    }
}

/// Frame gating and rate smoothing state.
#[derive(Clone, Debug, Default)]
pub struct RenderLoop {
    last_paint: f64,
    rates: MovingAverage,
}

impl RenderLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timestamp (ms) of the last painted frame; zero before the first paint.
    pub fn last_paint(&self) -> f64 {
        self.last_paint
    }

    pub fn rates(&self) -> &MovingAverage {
        &self.rates
    }

    pub fn tick<S, R>(
        &mut self,
        now: f64,
        config: &Config,
        field: &mut ParticleField,
        pointer: Option<Vec2>,
        surface: &mut S,
        rng: &mut R,
    ) -> TickOutcome
    where
        S: DrawSurface + ?Sized,
        R: Rng + ?Sized,
    {
        let elapsed = now - self.last_paint;
        if elapsed < config.frame_interval_ms() {
            return TickOutcome::Waiting { elapsed };
        }

        surface.clear();
        surface.begin_path();
        for particle in field.particles_mut() {
            motion::advance(particle, pointer, config, rng);
            surface.circle(particle.position, particle.size);
        }
        surface.fill(&config.color);

        self.rates.push(instant_rate(elapsed));
        let rate = match config.rate_warmup {
            RateWarmup::ZeroFilled => self.rates.average(),
            RateWarmup::Populated => self.rates.average_populated(),
        };
        self.last_paint = now;
        TickOutcome::Painted { elapsed, rate }
    }
}

/// Frames per second implied by one frame taking `elapsed_ms`.
#[inline]
pub fn instant_rate(elapsed_ms: f64) -> u32 {
    if elapsed_ms <= 0.0 {
        return 0;
    }
    (MS_PER_SEC / elapsed_ms + 0.5).floor() as u32
}

use crate::config::Config;
use crate::constants::{JITTER_RANGE, VELOCITY_SCALE};
use crate::sampler::sample_range;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    origin: Vec2,
    pub size: f32,
    pub velocity: Vec2,
}

impl Particle {
    pub fn new(origin: Vec2, position: Vec2, size: f32, velocity: Vec2) -> Self {
        Self {
            position,
            origin,
            size,
            velocity,
        }
    }

    /// Lattice point this particle is pulled back toward. Fixed at creation.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }
}

/// All particles for one surface size.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
    dimensions: Option<(u32, u32)>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Surface size the current lattice was generated for, if any.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.dimensions
    }

    /// Regenerate when the size differs from the last one seen (or on first call).
    /// Returns whether a new lattice was built.
    pub fn resize<R: Rng + ?Sized>(
        &mut self,
        width: u32,
        height: u32,
        config: &Config,
        rng: &mut R,
    ) -> bool {
        if self.dimensions == Some((width, height)) {
            return false;
        }
        self.regenerate(width, height, config, rng);
        true
    }

    /// Discard every particle and lay out a fresh lattice over `width` x `height`.
    pub fn regenerate<R: Rng + ?Sized>(
        &mut self,
        width: u32,
        height: u32,
        config: &Config,
        rng: &mut R,
    ) {
        let density = config.density;
        let half = density / 2.0;
        let (w, h) = (width as f32, height as f32);

        self.particles.clear();
        let mut x = 0.0_f32;
        while x < w {
            let mut y = 0.0_f32;
            while y < h {
                let origin = Vec2::new(x, y);
                let offset = Vec2::new(
                    sample_range(rng, [-half, half]),
                    sample_range(rng, [-half, half]),
                );
                let velocity = Vec2::new(
                    sample_range(rng, JITTER_RANGE) / VELOCITY_SCALE,
                    sample_range(rng, JITTER_RANGE) / VELOCITY_SCALE,
                );
                let size = sample_range(rng, config.size_range) / 2.0;
                self.particles
                    .push(Particle::new(origin, origin + offset, size, velocity));
                y += density;
            }
            x += density;
        }
        self.dimensions = Some((width, height));
        log::debug!(
            "[field] regenerated {} particles for {}x{} (density {})",
            self.particles.len(),
            width,
            height,
            density
        );
    }
}

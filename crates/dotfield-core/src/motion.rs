use crate::config::{Config, MotionLimits};
use crate::constants::{JITTER_RANGE, VELOCITY_SCALE};
use crate::field::Particle;
use crate::sampler::{round_half_up, sample_range};
use glam::Vec2;
use rand::Rng;

/// Advance one particle by one painted frame.
///
/// Position moves by the rounded, speed-scaled velocity. Velocity then takes
/// random jitter plus a pull back toward the origin (weaker for larger
/// `wander`), and a push away from the pointer when it sits within
/// `2 * cursor_radius` on both axes. Nothing damps velocity.
pub fn advance<R: Rng + ?Sized>(
    particle: &mut Particle,
    pointer: Option<Vec2>,
    config: &Config,
    rng: &mut R,
) {
    let step = particle.velocity * config.speed;
    particle.position += Vec2::new(round_half_up(step.x), round_half_up(step.y));

    let to_origin = particle.origin() - particle.position;
    let jitter = Vec2::new(
        sample_range(rng, JITTER_RANGE),
        sample_range(rng, JITTER_RANGE),
    );
    particle.velocity += (jitter + to_origin / config.wander) / VELOCITY_SCALE;

    if let Some(pointer) = pointer {
        if let Some(push) = pointer_push(particle.position, pointer, config) {
            particle.velocity += push;
        }
    }

    if let Some(max_speed) = config.limits.and_then(|l| l.max_speed) {
        particle.velocity = limit_speed(particle.velocity, max_speed.max(0.0));
    }
}

/// Clamp `velocity` to at most `max` in magnitude, keeping its direction.
///
/// An infinite axis (a pointer sitting exactly on the particle's row or
/// column) dominates the direction; NaN axes count as zero.
fn limit_speed(velocity: Vec2, max: f32) -> Vec2 {
    if !velocity.is_finite() {
        let axis = |v: f32| if v.is_infinite() { v.signum() } else { 0.0 };
        return Vec2::new(axis(velocity.x), axis(velocity.y)).normalize_or_zero() * max;
    }
    if !velocity.length_squared().is_finite() {
        // |v|^2 overflows f32; measure a rescaled copy instead
        let largest = velocity.abs().max_element();
        return (velocity / largest).clamp_length_max(max / largest) * largest;
    }
    velocity.clamp_length_max(max)
}

/// Velocity change caused by the pointer, or `None` when the particle is out of reach.
///
/// Each axis contributes `cursor_radius / distance`, signed by which side of
/// the pointer the particle sits on. Without `min_pointer_distance` a zero
/// distance yields an infinite push.
pub fn pointer_push(position: Vec2, pointer: Vec2, config: &Config) -> Option<Vec2> {
    let reach = config.cursor_radius * 2.0;
    let mut distance = position - pointer;
    if distance.x.abs() > reach || distance.y.abs() > reach {
        return None;
    }
    if let Some(MotionLimits {
        min_pointer_distance: Some(min),
        ..
    }) = config.limits
    {
        distance = Vec2::new(
            bound_away_from_zero(distance.x, min),
            bound_away_from_zero(distance.y, min),
        );
    }
    Some(Vec2::new(
        config.cursor_radius / distance.x,
        config.cursor_radius / distance.y,
    ))
}

#[inline]
fn bound_away_from_zero(d: f32, min: f32) -> f32 {
    if d.abs() >= min {
        d
    } else if d.is_sign_negative() {
        -min
    } else {
        min
    }
}

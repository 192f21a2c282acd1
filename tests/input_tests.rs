// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

fn assert_maps_to(p: Option<Vec2>, expected: Vec2) {
    let p = p.expect("pointer should map onto the surface");
    assert!((p - expected).length() < 1e-3, "{p:?} != {expected:?}");
}

#[test]
fn client_maps_to_surface_when_css_and_backing_match() {
    let p = client_to_surface(
        Vec2::new(130.0, 75.0),
        Vec2::new(100.0, 50.0),
        Vec2::new(400.0, 300.0),
        Vec2::new(400.0, 300.0),
    );
    assert_maps_to(p, Vec2::new(30.0, 25.0));
}

#[test]
fn client_maps_through_css_scaling() {
    // element drawn at half its backing resolution
    let p = client_to_surface(
        Vec2::new(50.0, 20.0),
        Vec2::ZERO,
        Vec2::new(200.0, 100.0),
        Vec2::new(400.0, 200.0),
    );
    assert_maps_to(p, Vec2::new(100.0, 40.0));
}

#[test]
fn zero_sized_element_has_no_pointer_position() {
    let client = Vec2::new(5.0, 5.0);
    let backing = Vec2::new(1.0, 1.0);
    assert_eq!(client_to_surface(client, Vec2::ZERO, Vec2::new(0.0, 100.0), backing), None);
    assert_eq!(client_to_surface(client, Vec2::ZERO, Vec2::new(100.0, 0.0), backing), None);
}

#[test]
fn within_surface_is_inclusive_of_edges() {
    let backing = Vec2::new(200.0, 100.0);
    assert!(within_surface(Vec2::ZERO, backing));
    assert!(within_surface(Vec2::new(200.0, 100.0), backing));
    assert!(within_surface(Vec2::new(120.5, 3.0), backing));
    assert!(!within_surface(Vec2::new(-0.5, 10.0), backing));
    assert!(!within_surface(Vec2::new(10.0, 100.5), backing));
}

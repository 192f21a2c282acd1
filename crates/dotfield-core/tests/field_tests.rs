mod common;

use common::lattice_config;
use dotfield_core::{normalize, ParticleField, ParticleSize, UserConfig};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn twenty_by_twenty_at_density_ten_has_four_particles() {
    let cfg = normalize(lattice_config(10.0)).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let mut field = ParticleField::new();
    field.regenerate(20, 20, &cfg, &mut rng);

    assert_eq!(field.len(), 4);
    let mut origins: Vec<(i32, i32)> = field
        .particles()
        .iter()
        .map(|p| (p.origin().x as i32, p.origin().y as i32))
        .collect();
    origins.sort();
    assert_eq!(origins, vec![(0, 0), (0, 10), (10, 0), (10, 10)]);

    for p in field.particles() {
        let offset = p.position - p.origin();
        assert!(offset.x.abs() <= 5.0 && offset.y.abs() <= 5.0, "{offset:?}");
    }
}

#[test]
fn particle_attributes_come_from_configured_ranges() {
    let cfg = normalize(UserConfig {
        density: 8.0,
        size: ParticleSize::Range([2.0, 6.0]),
        ..UserConfig::default()
    })
    .unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let mut field = ParticleField::new();
    field.regenerate(200, 120, &cfg, &mut rng);

    assert_eq!(field.len(), 25 * 15);
    for p in field.particles() {
        assert!(p.size >= 1.0 && p.size <= 3.0, "size {}", p.size);
        assert!(p.velocity.x.abs() <= 0.1 + 1e-6);
        assert!(p.velocity.y.abs() <= 0.1 + 1e-6);
        assert_eq!(p.origin().x % 8.0, 0.0);
        assert_eq!(p.origin().y % 8.0, 0.0);
    }
}

#[test]
fn lattice_upper_bound_is_exclusive() {
    let cfg = normalize(lattice_config(10.0)).unwrap();
    let mut rng = StdRng::seed_from_u64(4);
    let mut field = ParticleField::new();

    field.regenerate(25, 10, &cfg, &mut rng);
    assert_eq!(field.len(), 3);
    assert!(field.particles().iter().all(|p| p.origin().y == 0.0));

    field.regenerate(0, 100, &cfg, &mut rng);
    assert!(field.is_empty());
}

#[test]
fn regenerate_replaces_every_particle() {
    let cfg = normalize(lattice_config(10.0)).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    let mut field = ParticleField::new();
    field.regenerate(40, 40, &cfg, &mut rng);
    assert_eq!(field.len(), 16);
    field.particles_mut()[0].position = Vec2::new(-999.0, -999.0);

    field.regenerate(20, 10, &cfg, &mut rng);
    assert_eq!(field.len(), 2);
    assert!(field.particles().iter().all(|p| p.position.x > -10.0));
    assert_eq!(field.dimensions(), Some((20, 10)));
}

#[test]
fn resize_only_rebuilds_on_dimension_change() {
    let cfg = normalize(lattice_config(10.0)).unwrap();
    let mut rng = StdRng::seed_from_u64(6);
    let mut field = ParticleField::new();
    assert_eq!(field.dimensions(), None);

    assert!(field.resize(30, 30, &cfg, &mut rng));
    let before = field.particles().to_vec();
    assert!(!field.resize(30, 30, &cfg, &mut rng));
    assert_eq!(field.particles(), &before[..]);

    assert!(field.resize(30, 31, &cfg, &mut rng));
    assert_eq!(field.len(), 3 * 4);
}

#[test]
fn same_seed_gives_same_lattice() {
    let cfg = normalize(lattice_config(6.0)).unwrap();
    let mut a = ParticleField::new();
    let mut b = ParticleField::new();
    a.regenerate(64, 48, &cfg, &mut StdRng::seed_from_u64(8));
    b.regenerate(64, 48, &cfg, &mut StdRng::seed_from_u64(8));
    assert_eq!(a.particles(), b.particles());
}

use super::*;
use crate::sink::GridSink;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn planted(seed: u64, time: f64) -> Flower {
    let mut rng = StdRng::seed_from_u64(seed);
    Flower::new(&mut rng, time, Geometry::flower(), Tuning::default()).unwrap()
}

#[test]
fn new_rejects_invalid_tunings() {
    let mut rng = StdRng::seed_from_u64(1);
    let tuning = Tuning {
        petal_count: 0,
        ..Tuning::default()
    };
    assert!(Flower::new(&mut rng, 0.0, Geometry::flower(), tuning).is_err());
}

#[test]
fn planting_draws_the_configured_petal_count_and_cycle() {
    let flower = planted(7, 0.0);
    assert_eq!(flower.petals().len(), 5);
    let cycle = flower.cycle_length();
    assert!((180.0..=360.0).contains(&cycle));
}

#[test]
fn energy_waxes_and_wanes_over_the_cycle() {
    let flower = planted(7, 100.0);
    let cycle = flower.cycle_length();
    assert!((flower.energy(100.0) - 1.0).abs() < 1e-12);
    assert!(flower.energy(100.0 + cycle / 2.0) < 1e-12);
    assert!((flower.energy(100.0 + cycle) - 1.0).abs() < 1e-9);
    for step in 0..20 {
        let t = 100.0 + cycle * f64::from(step) / 20.0;
        let e = flower.energy(t);
        assert!((0.0..=1.0).contains(&e));
    }
}

#[test]
fn color_with_all_petals_dead_is_the_invisible_base() {
    let flower = planted(7, 0.0);
    // Lifespans cap at 180 seconds, so everything is dead by t = 1000.
    let light = flower.color_at(0.0, 0.5, 1000.0);
    assert_eq!(light.value, 0.0);
    assert_eq!(light.saturation, 0.5);
    assert!((0.0..1.0).contains(&light.hue));
}

#[test]
fn render_lights_the_grid_shortly_after_planting() {
    let flower = planted(7, 0.0);
    let mut sink = GridSink::new(flower.geometry());
    // All initial petals outlive 0.05s (minimum life is 0.1s) and their
    // fades have lifted off zero by then.
    flower.render(0.05, &mut sink);
    assert_eq!(sink.cells().len(), 56);
    assert!(sink.cells().iter().any(|cell| cell.value > 0.0));
}

#[test]
fn grow_replaces_every_dead_petal_once() {
    let mut flower = planted(7, 0.0);
    let mut rng = StdRng::seed_from_u64(99);
    let events = flower.grow(&mut rng, 1000.0);
    assert_eq!(events.len(), 5);
    assert_eq!(flower.petals().len(), 5);
    for event in &events {
        assert!(event.retired.end_time <= 1000.0);
        assert_eq!(event.replacement.begin_time, 1000.0);
        assert!((0.0..=1.0).contains(&event.energy));
    }
    // The fresh petals are alive, so an immediate regrow is a no-op.
    assert!(flower.grow(&mut rng, 1000.0).is_empty());
}

#[test]
fn grow_leaves_living_petals_alone() {
    let mut flower = planted(7, 0.0);
    let before: Vec<_> = flower.petals().iter().map(Petal::params).collect();
    let mut rng = StdRng::seed_from_u64(99);
    // Minimum lifespan is 0.1s, so nothing has died yet.
    let events = flower.grow(&mut rng, 0.05);
    assert!(events.is_empty());
    let after: Vec<_> = flower.petals().iter().map(Petal::params).collect();
    assert_eq!(before, after);
}

use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn dists() -> PetalDistributions {
    PetalDistributions::from_tuning(&Tuning::default()).unwrap()
}

#[test]
fn draws_land_in_documented_domains() {
    let dists = dists();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let petal = Petal::new(&mut rng, 0.0, 1.0, &dists);
        let params = petal.params();
        assert!((1..=7).contains(&params.lobes));
        assert!((0.0..TAU).contains(&params.angle));
        assert!((0.0..1.0).contains(&params.color.hue));
        assert!((0.0..=1.0).contains(&params.color.saturation));
        assert!((0.0..=1.0).contains(&params.color.value));
        assert!(params.period != 0.0);
        let life = params.end_time - params.begin_time;
        assert!((0.1..=180.0).contains(&life));
    }
}

#[test]
fn same_seed_draws_the_same_petal() {
    let dists = dists();
    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);
    let one = Petal::new(&mut a, 5.0, 0.5, &dists);
    let two = Petal::new(&mut b, 5.0, 0.5, &dists);
    assert_eq!(one.params(), two.params());
}

#[test]
fn zero_energy_life_hits_the_cap() {
    let dists = dists();
    let mut rng = StdRng::seed_from_u64(3);
    let petal = Petal::new(&mut rng, 10.0, 0.0, &dists);
    let params = petal.params();
    assert_eq!(params.end_time - params.begin_time, 180.0);
}

#[test]
fn low_energy_petals_outlive_high_energy_petals() {
    let dists = dists();
    let mut rng = StdRng::seed_from_u64(11);
    let total_life = |rng: &mut StdRng, energy: f64| -> f64 {
        (0..200)
            .map(|_| {
                let p = Petal::new(rng, 0.0, energy, &dists).params();
                p.end_time - p.begin_time
            })
            .sum()
    };
    let excited = total_life(&mut rng, 1.0);
    let calm = total_life(&mut rng, 0.3);
    assert!(calm > excited);
}

#[test]
fn fade_is_zero_outside_the_lifespan() {
    let dists = dists();
    let mut rng = StdRng::seed_from_u64(9);
    let petal = Petal::new(&mut rng, 100.0, 0.0, &dists);
    assert_eq!(petal.fade(99.9), 0.0);
    assert_eq!(petal.fade(280.0), 0.0);
    assert!(!petal.is_dead(279.9));
    assert!(petal.is_dead(280.0));
}

#[test]
fn fade_rises_from_both_boundaries() {
    let dists = dists();
    let mut rng = StdRng::seed_from_u64(9);
    // Zero energy pins the lifespan to [0, 180).
    let petal = Petal::new(&mut rng, 0.0, 0.0, &dists);
    assert_eq!(petal.fade(0.0), 0.0);
    let early = petal.fade(0.01);
    let mid = petal.fade(90.0);
    let late = petal.fade(179.99);
    assert!(early > 0.0 && early < 0.1);
    assert!(mid > 0.999);
    assert!(late > 0.0 && late < 0.1);
}

#[test]
fn strength_stays_in_unit_interval() {
    let dists = dists();
    let mut rng = StdRng::seed_from_u64(21);
    for _ in 0..20 {
        let petal = Petal::new(&mut rng, 0.0, 0.8, &dists);
        for theta_step in 0..7 {
            for radius_step in 1..=8 {
                let theta = f64::from(theta_step) / 7.0 * TAU;
                let radius = f64::from(radius_step) / 8.0;
                for time in [0.05, 1.0, 50.0, 500.0] {
                    let s = petal.sample_strength(theta, radius, time);
                    assert!((0.0..=1.0).contains(&s));
                }
            }
        }
    }
}

#[test]
fn distributions_reject_degenerate_tunings() {
    let tuning = Tuning {
        slope_sigma: -1.0,
        ..Tuning::default()
    };
    assert!(PetalDistributions::from_tuning(&tuning).is_err());
}

use std::f64::consts::TAU;

use rand::Rng;

use crate::color::Color;
use crate::foundation::core::Geometry;
use crate::foundation::error::BloomResult;
use crate::foundation::math::wrap_unit;
use crate::petal::{Petal, PetalDistributions, PetalParams};
use crate::sink::PixelSink;
use crate::tuning::Tuning;

/// A flower animation, projected onto a display over time.
///
/// The flower sits at a fixed-saturation base color whose hue drifts at a
/// slow, steady rate. Over this we layer petals, wave functions that
/// modulate the base color toward their own tints. The interaction of
/// those waves produces the animation. Petals die and are replaced at a
/// rate governed by the flower's energy level, which waxes and wanes over
/// a cycle drawn at construction.
#[derive(Clone, Debug)]
pub struct Flower {
    begin_time: f64,
    cycle_length: f64,
    geometry: Geometry,
    tuning: Tuning,
    dists: PetalDistributions,
    petals: Vec<Petal>,
}

impl Flower {
    /// Plant a flower at `time`, validating `tuning` first.
    ///
    /// The initial petals are drawn at full energy, so a fresh flower
    /// starts lively.
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        time: f64,
        geometry: Geometry,
        tuning: Tuning,
    ) -> BloomResult<Self> {
        tuning.validate()?;
        let dists = PetalDistributions::from_tuning(&tuning)?;
        let cycle_length = rng.gen_range(tuning.cycle_min_secs..=tuning.cycle_max_secs);
        let petals = (0..tuning.petal_count)
            .map(|_| Petal::new(rng, time, 1.0, &dists))
            .collect();
        Ok(Self {
            begin_time: time,
            cycle_length,
            geometry,
            tuning,
            dists,
            petals,
        })
    }

    /// The grid this flower renders onto.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Length of the energy cycle drawn at construction, in seconds.
    pub fn cycle_length(&self) -> f64 {
        self.cycle_length
    }

    /// The live petals, in slot order.
    pub fn petals(&self) -> &[Petal] {
        &self.petals
    }

    /// Energy level at `time`, in `[0, 1]`.
    ///
    /// A squared raised cosine over the flower's cycle: full at planting,
    /// ebbing to zero mid-cycle, then swelling back.
    pub fn energy(&self, time: f64) -> f64 {
        let elapsed = time - self.begin_time;
        let cycle_pos = elapsed / self.cycle_length * TAU;
        ((1.0 + cycle_pos.cos()) / 2.0).powi(2)
    }

    /// The flower's color at one cylindrical coordinate and moment.
    ///
    /// Starts from the invisible base color and folds each petal in slot
    /// order, blending toward the petal tint by its sampled strength.
    pub fn color_at(&self, theta: f64, radius: f64, time: f64) -> Color {
        let base_hue = wrap_unit(time / self.tuning.base_hue_drift_secs);
        let mut light = Color::new(base_hue, self.tuning.base_saturation, 0.0);
        for petal in &self.petals {
            let strength = petal.sample_strength(theta, radius, time);
            light = light.blend_toward(&petal.color(), strength);
        }
        light
    }

    /// Compute the current state of the flower and push it to `sink`.
    #[tracing::instrument(level = "trace", skip(self, sink))]
    pub fn render<S: PixelSink + ?Sized>(&self, time: f64, sink: &mut S) {
        for (ring, position) in self.geometry.cells() {
            let theta = self.geometry.theta(ring);
            let radius = self.geometry.radius(position);
            sink.set(ring, position, self.color_at(theta, radius, time));
        }
    }

    /// Replace every dead petal with a fresh draw at the current energy.
    ///
    /// Returns one event per replacement so callers can log the turnover.
    #[tracing::instrument(level = "trace", skip(self, rng))]
    pub fn grow<R: Rng + ?Sized>(&mut self, rng: &mut R, time: f64) -> Vec<GrowEvent> {
        let energy = self.energy(time);
        let mut events = Vec::new();
        for (slot, petal) in self.petals.iter_mut().enumerate() {
            if petal.is_dead(time) {
                let fresh = Petal::new(rng, time, energy, &self.dists);
                events.push(GrowEvent {
                    slot,
                    time,
                    energy,
                    retired: petal.params(),
                    replacement: fresh.params(),
                });
                *petal = fresh;
            }
        }
        events
    }
}

/// Record of one petal replacement during [`Flower::grow`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GrowEvent {
    /// Index of the replaced petal.
    pub slot: usize,
    /// Time of the replacement.
    pub time: f64,
    /// Flower energy that shaped the new petal's lifespan.
    pub energy: f64,
    /// Parameters of the petal that died.
    pub retired: PetalParams,
    /// Parameters of the petal that took its place.
    pub replacement: PetalParams,
}

#[cfg(test)]
#[path = "../tests/unit/flower.rs"]
mod tests;

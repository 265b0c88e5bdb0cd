use std::f64::consts::{E, TAU};

use rand::Rng;
use rand_distr::{Distribution, Exp, LogNormal, Normal, Triangular};

use crate::color::Color;
use crate::foundation::error::{BloomError, BloomResult};
use crate::foundation::math::{crest, soft_step};
use crate::tuning::Tuning;

/// One wave component of a flower animation.
///
/// A petal is a rotating, multi-lobed sine wave projected over the
/// cylindrical grid, tinted with a single color and alive over a bounded
/// span of time. All randomness is spent at construction; sampling an
/// existing petal is a pure function of position and time.
#[derive(Clone, Debug)]
pub struct Petal {
    color: Color,
    lobes: u32,
    angle: f64,
    period: f64,
    slope: f64,
    begin_time: f64,
    end_time: f64,
}

impl Petal {
    /// Draw a fresh petal at `time` under the flower's current `energy`.
    ///
    /// Energy ranges from 0 (calm) to 1 (excited) and feeds the lifespan
    /// draw: high energy yields quick turnover, low energy lets petals
    /// linger. The lifespan is capped so a dead-calm flower still turns
    /// over eventually.
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        time: f64,
        energy: f64,
        dists: &PetalDistributions,
    ) -> Self {
        let hue = rng.gen_range(0.0..1.0);
        let saturation = dists.saturation.sample(rng);
        let value = dists.value.sample(rng);
        let color = Color::new(hue, saturation, value);
        let lobes = rng.gen_range(1..=dists.max_lobes);
        let angle = rng.gen_range(0.0..TAU);
        // Half the petals rotate clockwise, half counterclockwise.
        let spin = dists.period.sample(rng);
        let period = if rng.gen_bool(0.5) { -spin } else { spin };
        let slope = dists.slope.sample(rng);
        let life = match Exp::new(energy * energy) {
            Ok(life_dist) => life_dist.sample(rng).min(dists.life_cap),
            // Zero energy has no valid rate; treat it as the longest draw.
            Err(_) => dists.life_cap,
        };
        let life = life.clamp(dists.life_min, dists.life_max);
        Self {
            color,
            lobes,
            angle,
            period,
            slope,
            begin_time: time,
            end_time: time + life,
        }
    }

    /// The petal's tint, fixed at construction.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Opacity of the petal at a grid coordinate and moment in time.
    ///
    /// A sine wave tells us how far the petal stretches from the center at
    /// this angle; the wave rotates slowly as time passes. The signed
    /// distance between that reach and the sampled radius runs through a
    /// tanh step whose sharpness is the petal's slope, then the lifecycle
    /// fade scales the result.
    pub fn sample_strength(&self, theta: f64, radius: f64, time: f64) -> f64 {
        let rotated = self.angle + time / (self.period * TAU);
        let reach = crest(theta * f64::from(self.lobes) + rotated);
        soft_step((reach - radius) * self.slope) * self.fade(time)
    }

    /// Lifecycle envelope: bloom up quickly, hold, then fade out quickly.
    ///
    /// Zero outside `[begin, end)`; inside, the envelope rises toward 1
    /// exponentially with distance from the nearer boundary.
    pub fn fade(&self, time: f64) -> f64 {
        if time < self.begin_time || time >= self.end_time {
            return 0.0;
        }
        let edge = (time - self.begin_time).min(self.end_time - time);
        1.0 - (-(edge * E).abs()).exp()
    }

    /// Whether the petal's lifespan has elapsed at `time`.
    pub fn is_dead(&self, time: f64) -> bool {
        time >= self.end_time
    }

    /// Snapshot of the drawn parameters, for logs and diagnostics.
    pub fn params(&self) -> PetalParams {
        PetalParams {
            color: self.color,
            lobes: self.lobes,
            angle: self.angle,
            period: self.period,
            slope: self.slope,
            begin_time: self.begin_time,
            end_time: self.end_time,
        }
    }
}

/// The parameters behind one petal, frozen for inspection.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PetalParams {
    /// Tint applied wherever the petal reaches.
    pub color: Color,
    /// Sine multiplier shaping the petal outline.
    pub lobes: u32,
    /// Starting rotation, in radians.
    pub angle: f64,
    /// Rotation speed divisor; negative spins the other way.
    pub period: f64,
    /// Sharpness of the active/inactive edge transition.
    pub slope: f64,
    /// Time the petal started affecting its flower.
    pub begin_time: f64,
    /// Time the petal stops affecting its flower.
    pub end_time: f64,
}

/// Sampling distributions shared by every petal a flower grows.
///
/// Built once from a validated [`Tuning`] so that drawing an individual
/// petal can never fail.
#[derive(Clone, Debug)]
pub struct PetalDistributions {
    saturation: Triangular<f64>,
    value: Triangular<f64>,
    period: LogNormal<f64>,
    slope: Normal<f64>,
    max_lobes: u32,
    life_cap: f64,
    life_min: f64,
    life_max: f64,
}

impl PetalDistributions {
    /// Construct the shared distributions from a tuning.
    ///
    /// The tuning should already be validated; this still reports any
    /// parameter set the underlying distributions reject.
    pub fn from_tuning(tuning: &Tuning) -> BloomResult<Self> {
        let saturation = Triangular::new(0.0, 1.0, tuning.saturation_mode)
            .map_err(|err| BloomError::tuning(format!("saturation distribution: {err}")))?;
        let value = Triangular::new(0.0, 1.0, tuning.value_mode)
            .map_err(|err| BloomError::tuning(format!("value distribution: {err}")))?;
        let period = LogNormal::new(0.0, 1.0)
            .map_err(|err| BloomError::tuning(format!("period distribution: {err}")))?;
        let slope = Normal::new(0.0, tuning.slope_sigma)
            .map_err(|err| BloomError::tuning(format!("slope distribution: {err}")))?;
        Ok(Self {
            saturation,
            value,
            period,
            slope,
            max_lobes: tuning.max_lobes,
            life_cap: tuning.life_cap_secs,
            life_min: tuning.min_petal_life_secs,
            life_max: tuning.max_petal_life_secs,
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/petal.rs"]
mod tests;

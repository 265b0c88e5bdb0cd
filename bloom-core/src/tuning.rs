use std::path::Path;

use crate::foundation::error::{BloomError, BloomResult};

/// All the magic numbers that shape the randomness.
///
/// Defaults reproduce the reference animation; load alternatives from JSON
/// with [`Tuning::from_path`]. Values are validated before a
/// [`Flower`](crate::Flower) will accept them.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Seconds for the base hue to complete one full circuit.
    pub base_hue_drift_secs: f64,
    /// Fixed saturation of the invisible base color.
    pub base_saturation: f64,
    /// Number of petals a flower keeps alive.
    pub petal_count: usize,
    /// Upper bound on the lobe count drawn per petal (lower bound is 1).
    pub max_lobes: u32,
    /// Spread of the normal distribution behind petal edge sharpness.
    pub slope_sigma: f64,
    /// Hard cap applied to every petal lifespan draw, in seconds.
    pub life_cap_secs: f64,
    /// Minimum petal lifespan, in seconds.
    pub min_petal_life_secs: f64,
    /// Maximum petal lifespan, in seconds.
    pub max_petal_life_secs: f64,
    /// Mode of the triangular draw for petal color saturation.
    pub saturation_mode: f64,
    /// Mode of the triangular draw for petal color value.
    pub value_mode: f64,
    /// Shortest energy cycle a flower may draw, in seconds.
    pub cycle_min_secs: f64,
    /// Longest energy cycle a flower may draw, in seconds.
    pub cycle_max_secs: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_hue_drift_secs: 60.0,
            base_saturation: 0.5,
            petal_count: 5,
            max_lobes: 7,
            slope_sigma: 3.0,
            life_cap_secs: 180.0,
            min_petal_life_secs: 0.1,
            max_petal_life_secs: 5.0 * 60.0,
            saturation_mode: 0.6,
            value_mode: 0.5,
            cycle_min_secs: 3.0 * 60.0,
            cycle_max_secs: 6.0 * 60.0,
        }
    }
}

impl Tuning {
    /// Check every field against its documented domain.
    pub fn validate(&self) -> BloomResult<()> {
        if self.base_hue_drift_secs <= 0.0 {
            return Err(BloomError::tuning("base_hue_drift_secs must be > 0"));
        }
        if self.petal_count == 0 {
            return Err(BloomError::tuning("petal_count must be > 0"));
        }
        if self.max_lobes == 0 {
            return Err(BloomError::tuning("max_lobes must be > 0"));
        }
        if self.slope_sigma <= 0.0 {
            return Err(BloomError::tuning("slope_sigma must be > 0"));
        }
        if self.life_cap_secs <= 0.0 {
            return Err(BloomError::tuning("life_cap_secs must be > 0"));
        }
        if self.min_petal_life_secs <= 0.0 || self.min_petal_life_secs > self.max_petal_life_secs {
            return Err(BloomError::tuning(
                "petal life bounds must satisfy 0 < min <= max",
            ));
        }
        if !(0.0..=1.0).contains(&self.saturation_mode) {
            return Err(BloomError::tuning("saturation_mode must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.value_mode) {
            return Err(BloomError::tuning("value_mode must be in [0, 1]"));
        }
        if self.cycle_min_secs <= 0.0 || self.cycle_min_secs > self.cycle_max_secs {
            return Err(BloomError::tuning(
                "cycle bounds must satisfy 0 < min <= max",
            ));
        }
        Ok(())
    }

    /// Load and validate a tuning from a JSON file.
    ///
    /// Absent fields fall back to their defaults, so a file may override just
    /// the values under study.
    pub fn from_path(path: impl AsRef<Path>) -> BloomResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let tuning: Self = serde_json::from_str(&text)
            .map_err(|err| BloomError::tuning(format!("invalid tuning JSON: {err}")))?;
        tuning.validate()?;
        Ok(tuning)
    }
}

#[cfg(test)]
#[path = "../tests/unit/tuning.rs"]
mod tests;

use crate::foundation::error::{BloomError, BloomResult};

/// Cylindrical pixel grid: `rings` strips wrapped around the flower, each
/// carrying `positions` pixels outward from the center.
///
/// Ring index maps to an angle, position index to a fractional radius. The
/// first position sits one pixel out from the center to leave room for the
/// controller board and wire bundle on the physical build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Geometry {
    /// Number of strips around the cylinder.
    pub rings: u32,
    /// Number of pixels along each strip.
    pub positions: u32,
}

impl Geometry {
    /// Build a geometry with at least one ring and one position per ring.
    pub fn new(rings: u32, positions: u32) -> BloomResult<Self> {
        if rings == 0 {
            return Err(BloomError::validation("Geometry rings must be > 0"));
        }
        if positions == 0 {
            return Err(BloomError::validation("Geometry positions must be > 0"));
        }
        Ok(Self { rings, positions })
    }

    /// The reference flower hardware: 7 strips of 8 pixels.
    pub fn flower() -> Self {
        Self {
            rings: 7,
            positions: 8,
        }
    }

    /// Angle of a ring in radians, in `[0, 2π)`.
    pub fn theta(self, ring: u32) -> f64 {
        f64::from(ring) / f64::from(self.rings) * std::f64::consts::TAU
    }

    /// Fractional radius of a position, in `(0, 1]`.
    pub fn radius(self, position: u32) -> f64 {
        f64::from(position + 1) / f64::from(self.positions)
    }

    /// Total number of grid cells.
    pub fn cell_count(self) -> usize {
        self.rings as usize * self.positions as usize
    }

    /// All `(ring, position)` cells in fixed row-major order.
    pub fn cells(self) -> impl Iterator<Item = (u32, u32)> {
        (0..self.rings).flat_map(move |ring| (0..self.positions).map(move |position| (ring, position)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

use crate::color::Color;
use crate::foundation::core::Geometry;

/// Receiver for the per-cell colors produced by a render pass.
///
/// A flower pushes one color per `(ring, position)` cell each frame;
/// implementations decide whether that lands in a pixel buffer, a network
/// stream, or a test capture.
pub trait PixelSink {
    /// Accept the color for one grid cell.
    fn set(&mut self, ring: u32, position: u32, color: Color);
}

/// In-memory sink capturing one full frame, keyed by its geometry.
///
/// Useful for still-frame export and for asserting on render output.
#[derive(Clone, Debug)]
pub struct GridSink {
    geometry: Geometry,
    cells: Vec<Color>,
}

impl GridSink {
    /// An all-black frame sized for `geometry`.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            cells: vec![Color::new(0.0, 0.0, 0.0); geometry.cell_count()],
        }
    }

    /// The geometry this sink was sized for.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// The captured color of one cell, or `None` outside the grid.
    pub fn get(&self, ring: u32, position: u32) -> Option<Color> {
        self.index(ring, position).map(|i| self.cells[i])
    }

    /// All captured cells in the geometry's row-major order.
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    fn index(&self, ring: u32, position: u32) -> Option<usize> {
        if ring < self.geometry.rings && position < self.geometry.positions {
            Some(ring as usize * self.geometry.positions as usize + position as usize)
        } else {
            None
        }
    }
}

impl PixelSink for GridSink {
    // Writes outside the geometry are dropped.
    fn set(&mut self, ring: u32, position: u32, color: Color) {
        if let Some(i) = self.index(ring, position) {
            self.cells[i] = color;
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/sink.rs"]
mod tests;

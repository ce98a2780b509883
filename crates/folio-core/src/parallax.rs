use crate::constants::{PARALLAX_DAMPING, PARALLAX_SMOOTHING};
use glam::Vec2;

/// Pointer-driven offset, exponentially smoothed toward the pointer's
/// displacement from the viewport center. Survives resizes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Parallax {
    smoothed: Vec2,
}

impl Parallax {
    /// Feed one pointer sample; closes [`PARALLAX_SMOOTHING`] of the remaining gap.
    pub fn observe(&mut self, pointer: Vec2, viewport: Vec2) {
        let raw = pointer - viewport * 0.5;
        self.smoothed += (raw - self.smoothed) * PARALLAX_SMOOTHING;
    }

    pub fn smoothed(&self) -> Vec2 {
        self.smoothed
    }

    /// Offset applied to every particle when drawing.
    pub fn render_offset(&self) -> Vec2 {
        self.smoothed * PARALLAX_DAMPING
    }
}

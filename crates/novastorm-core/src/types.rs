//! Fundamental time and geometry types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Encounter time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Update counter (increments by 1 each non-paused update).
    pub tick: u64,
    /// Elapsed virtual time in seconds (scaled by time rate, frozen while paused).
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one update of `dt` virtual seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Play field dimensions. The origin is the bottom-left corner;
/// x grows right, y grows up. Enemies enter from above `height`
/// and exit below 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSize {
    pub width: f32,
    pub height: f32,
}

impl FieldSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Horizontal midline of the field.
    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }

    /// Whether a point lies inside the field rectangle.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}

impl Default for FieldSize {
    fn default() -> Self {
        Self {
            width: crate::constants::FIELD_WIDTH,
            height: crate::constants::FIELD_HEIGHT,
        }
    }
}

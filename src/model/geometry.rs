//! Geometry types.

use serde::{Deserialize, Serialize};

/// Axis-aligned box locating an element on its page.
///
/// Coordinates are ratios of the page dimensions, measured from the top-left
/// corner. Values typically fall in `0.0..=1.0` but are not clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Distance from the top edge of the page
    pub top: f64,

    /// Distance from the left edge of the page
    pub left: f64,

    /// Box width
    pub width: f64,

    /// Box height
    pub height: f64,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Bottom edge (`top + height`).
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Right edge (`left + width`).
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "width: {}, height: {}, left: {}, top: {}",
            self.width, self.height, self.left, self.top
        )
    }
}

//! Available space handed to an element during measurement.
//!
//! A parent that imposes no limit along an axis passes
//! [`PxAvailableLength::Infinite`]. The infinite case is its own variant so
//! sums and comparisons never treat it as a very large number.

use serde::{Deserialize, Serialize};

use crate::Axis;
use crate::geometry::PxSize2D;

/// Available length along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PxAvailableLength {
    /// A bounded amount of pixels (never negative)
    Definite(i32),
    /// No limit
    Infinite,
}

impl PxAvailableLength {
    /// Create a definite length, clamping negative values to zero.
    pub const fn definite(value: i32) -> Self {
        if value < 0 {
            Self::Definite(0)
        } else {
            Self::Definite(value)
        }
    }

    /// Check if this length is unbounded.
    pub const fn is_infinite(self) -> bool {
        matches!(self, Self::Infinite)
    }

    /// The bounded pixel value, if any.
    pub const fn as_px(self) -> Option<i32> {
        match self {
            Self::Definite(value) => Some(value),
            Self::Infinite => None,
        }
    }

    /// Clamp `value` so it does not exceed this length. Infinite never clamps.
    pub fn min_px(self, value: i32) -> i32 {
        match self {
            Self::Definite(limit) => value.min(limit),
            Self::Infinite => value,
        }
    }
}

impl Default for PxAvailableLength {
    fn default() -> Self {
        Self::Definite(0)
    }
}

/// Available size for both axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PxAvailableSize {
    /// Available width
    pub width: PxAvailableLength,
    /// Available height
    pub height: PxAvailableLength,
}

impl PxAvailableSize {
    /// Create an available size from per-axis lengths.
    pub const fn new(width: PxAvailableLength, height: PxAvailableLength) -> Self {
        Self { width, height }
    }

    /// Create a bounded available size from pixel values.
    pub const fn from_px(width: i32, height: i32) -> Self {
        Self::new(
            PxAvailableLength::definite(width),
            PxAvailableLength::definite(height),
        )
    }

    /// Unbounded along both axes.
    pub const fn infinite() -> Self {
        Self::new(PxAvailableLength::Infinite, PxAvailableLength::Infinite)
    }

    /// Check if the width is unbounded.
    pub const fn is_infinity_width(&self) -> bool {
        self.width.is_infinite()
    }

    /// Check if the height is unbounded.
    pub const fn is_infinity_height(&self) -> bool {
        self.height.is_infinite()
    }

    /// Get the length along the given axis.
    pub const fn get(&self, axis: Axis) -> PxAvailableLength {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Clamp `size` so it fits inside the bounded axes.
    pub fn clamp_size(&self, size: PxSize2D) -> PxSize2D {
        PxSize2D::new(self.width.min_px(size.width), self.height.min_px(size.height))
    }
}

impl From<PxSize2D> for PxAvailableSize {
    fn from(size: PxSize2D) -> Self {
        Self::from_px(size.width, size.height)
    }
}

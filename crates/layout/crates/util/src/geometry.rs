//! Integer pixel geometry.

use serde::{Deserialize, Serialize};

use crate::Axis;

/// A size in whole pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PxSize2D {
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl PxSize2D {
    /// Create a new size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Get the extent along the given axis.
    pub const fn get(self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// A position in whole pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PxPoint2 {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
}

impl PxPoint2 {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis aligned rectangle in whole pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PxRectangle {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl PxRectangle {
    /// Create a new rectangle.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at `location` with the given size.
    pub const fn from_location_size(location: PxPoint2, size: PxSize2D) -> Self {
        Self::new(location.x, location.y, size.width, size.height)
    }

    /// Top left corner.
    pub const fn location(&self) -> PxPoint2 {
        PxPoint2::new(self.x, self.y)
    }

    /// Width and height.
    pub const fn size(&self) -> PxSize2D {
        PxSize2D::new(self.width, self.height)
    }
}

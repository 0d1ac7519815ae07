//! Row and column definitions.

use serde::{Deserialize, Serialize};
use ui_layout_util::Axis;

use crate::error::GridError;

/// Largest accepted fixed length. Whole pixel values above this are not
/// representable in `f32`.
pub const MAX_FIXED_LENGTH: f32 = 16_777_216.0;

/// How a track derives its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridUnitType {
    /// Size to the largest child placed in the track
    Auto,
    /// Explicit length in device independent units
    Fixed,
    /// Explicit length in pixels
    FixedPx,
    /// Weighted share of the space left over by the other tracks
    Star,
}

impl GridUnitType {
    /// Check if this unit has an explicit length.
    pub const fn is_fixed(self) -> bool {
        matches!(self, Self::Fixed | Self::FixedPx)
    }
}

/// A single row or column definition.
///
/// `size` is the length for [`GridUnitType::Fixed`] / [`GridUnitType::FixedPx`]
/// and the weight for [`GridUnitType::Star`]; it is ignored for
/// [`GridUnitType::Auto`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackDefinition {
    /// Sizing mode
    pub unit: GridUnitType,
    /// Length or star weight
    pub size: f32,
}

/// Column definition.
pub type GridColumnDefinition = TrackDefinition;
/// Row definition.
pub type GridRowDefinition = TrackDefinition;

impl TrackDefinition {
    /// Create a definition from a unit and size.
    pub const fn new(unit: GridUnitType, size: f32) -> Self {
        Self { unit, size }
    }

    /// Track sized by its content.
    pub const fn auto() -> Self {
        Self::new(GridUnitType::Auto, 0.0)
    }

    /// Track with an explicit device independent length.
    pub const fn fixed(size_dp: f32) -> Self {
        Self::new(GridUnitType::Fixed, size_dp)
    }

    /// Track with an explicit pixel length.
    pub const fn fixed_px(size_px: f32) -> Self {
        Self::new(GridUnitType::FixedPx, size_px)
    }

    /// Track taking a `weight` share of the leftover space.
    pub const fn star(weight: f32) -> Self {
        Self::new(GridUnitType::Star, weight)
    }

    /// Star weight of this track, or 0.0 if it is not a star track.
    pub fn star_weight(&self) -> f32 {
        match self.unit {
            GridUnitType::Star => self.size,
            GridUnitType::Auto | GridUnitType::Fixed | GridUnitType::FixedPx => 0.0,
        }
    }

    /// Check that the definition can be laid out.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidDefinition`] for negative or non-finite
    /// lengths and weights, and for fixed lengths above [`MAX_FIXED_LENGTH`].
    pub fn validate(&self, axis: Axis) -> Result<(), GridError> {
        if self.unit == GridUnitType::Auto {
            return Ok(());
        }
        if !self.size.is_finite() {
            return Err(GridError::InvalidDefinition {
                axis,
                reason: "size must be finite",
            });
        }
        if self.size < 0.0 {
            return Err(GridError::InvalidDefinition {
                axis,
                reason: if self.unit == GridUnitType::Star {
                    "star weight must not be negative"
                } else {
                    "fixed size must not be negative"
                },
            });
        }
        if self.unit.is_fixed() && self.size > MAX_FIXED_LENGTH {
            return Err(GridError::InvalidDefinition {
                axis,
                reason: "fixed size is too large",
            });
        }
        Ok(())
    }
}

impl Default for TrackDefinition {
    fn default() -> Self {
        Self::auto()
    }
}

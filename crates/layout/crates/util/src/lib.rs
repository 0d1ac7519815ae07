//! Layout utility types and traits shared by the layout containers.
//!
//! This crate defines the pixel geometry, the available-size model (with a
//! distinct infinite sentinel), the unit conversion service, the interface a
//! container uses to talk to its child elements, and runtime configuration.

pub mod available;
pub mod config;
pub mod geometry;
pub mod host;
pub mod units;

pub use available::{PxAvailableLength, PxAvailableSize};
pub use config::{LayoutConfig, LayoutContext};
pub use geometry::{PxPoint2, PxRectangle, PxSize2D};
pub use host::ElementHost;
pub use units::{BASE_DENSITY_DPI, DensityConverter, UnitConverter};

use serde::{Deserialize, Serialize};

/// Axis enumeration - specifies which direction a track list runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Horizontal axis (columns, X)
    Horizontal,
    /// Vertical axis (rows, Y)
    Vertical,
}

impl Axis {
    /// Human readable name of the track kind running along this axis.
    pub const fn track_name(self) -> &'static str {
        match self {
            Self::Horizontal => "column",
            Self::Vertical => "row",
        }
    }
}

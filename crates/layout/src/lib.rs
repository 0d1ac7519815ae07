//! UI layout containers.
//!
//! Re-exports the shared layout types from [`ui_layout_util`] and the grid
//! container from [`ui_layout_grid`], plus [`SizedElements`], an element host
//! whose children have fixed desired sizes.

pub use ui_layout_grid as grid;
pub use ui_layout_util as util;

pub use ui_layout_grid::{GridError, GridLayout, GridSnapshot, GridUnitType, ResolvedTrack, TrackDefinition};
pub use ui_layout_util::{
    ElementHost, LayoutConfig, LayoutContext, PxAvailableLength, PxAvailableSize, PxRectangle, PxSize2D,
};

// Fixed size element host
mod elements;
pub use elements::{ElementError, SizedElements};

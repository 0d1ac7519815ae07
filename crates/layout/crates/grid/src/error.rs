//! Errors raised while configuring a grid.

use core::fmt;

use ui_layout_util::Axis;

/// Grid configuration errors.
///
/// These are raised by the call that introduced the bad state; measure and
/// arrange never produce them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A row or column definition has an unusable size.
    InvalidDefinition {
        /// Axis of the rejected definition
        axis: Axis,
        /// What is wrong with it
        reason: &'static str,
    },
    /// A cell index does not name an existing row or column.
    IndexOutOfBounds {
        /// Axis of the index
        axis: Axis,
        /// Requested index
        index: usize,
        /// Number of tracks on that axis
        count: usize,
    },
    /// The element is not a child of this grid.
    UnknownChild,
    /// The element is already a child of this grid.
    DuplicateChild,
}

impl fmt::Display for GridError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDefinition { axis, reason } => {
                write!(formatter, "Invalid {} definition: {reason}", axis.track_name())
            }
            Self::IndexOutOfBounds { axis, index, count } => write!(
                formatter,
                "{} index {index} out of bounds (count {count})",
                axis.track_name()
            ),
            Self::UnknownChild => write!(formatter, "Element is not a child of this grid"),
            Self::DuplicateChild => write!(formatter, "Element is already a child of this grid"),
        }
    }
}

impl std::error::Error for GridError {}

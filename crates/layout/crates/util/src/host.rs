//! Interface between a layout container and the elements it positions.

use crate::available::PxAvailableSize;
use crate::geometry::{PxRectangle, PxSize2D};

/// Owner of the child elements a container lays out.
///
/// Containers reference children by `NodeId` only; the element tree that
/// implements this trait owns them. Errors are passed through the container
/// untouched.
pub trait ElementHost<NodeId> {
    /// Error raised by a child during measure or arrange.
    type Error;

    /// Measure `node` against the available space and return its desired size.
    ///
    /// # Errors
    /// Returns the child's own error if it fails to measure.
    fn measure(&mut self, node: &NodeId, available: PxAvailableSize) -> Result<PxSize2D, Self::Error>;

    /// Place `node` at its final rectangle.
    ///
    /// # Errors
    /// Returns the child's own error if it fails to arrange.
    fn arrange(&mut self, node: &NodeId, rect: PxRectangle) -> Result<(), Self::Error>;
}

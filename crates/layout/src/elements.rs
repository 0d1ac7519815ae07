//! An element host backed by a table of fixed desired sizes.

use core::fmt;
use core::hash::Hash;
use std::collections::HashMap;

use ui_layout_util::{ElementHost, PxAvailableSize, PxRectangle, PxSize2D};

/// Error raised by a [`SizedElements`] child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementError<NodeId> {
    /// The node was configured to fail its measure
    MeasureFailed(NodeId),
    /// The node was configured to fail its arrange
    ArrangeFailed(NodeId),
}

impl<NodeId: fmt::Debug> fmt::Display for ElementError<NodeId> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MeasureFailed(node) => write!(formatter, "Element {node:?} failed to measure"),
            Self::ArrangeFailed(node) => write!(formatter, "Element {node:?} failed to arrange"),
        }
    }
}

impl<NodeId: fmt::Debug> std::error::Error for ElementError<NodeId> {}

/// Elements that always want the same size.
///
/// Remembers the last available size and final rectangle each element was
/// given. Unknown elements want nothing.
#[derive(Debug, Clone)]
pub struct SizedElements<NodeId> {
    sizes: HashMap<NodeId, PxSize2D>,
    last_available: HashMap<NodeId, PxAvailableSize>,
    arranged: HashMap<NodeId, PxRectangle>,
    fail_measure: Option<NodeId>,
    fail_arrange: Option<NodeId>,
    measure_count: usize,
}

impl<NodeId> SizedElements<NodeId>
where
    NodeId: Eq + Hash + Clone,
{
    /// Create an empty host.
    pub fn new() -> Self {
        Self {
            sizes: HashMap::new(),
            last_available: HashMap::new(),
            arranged: HashMap::new(),
            fail_measure: None,
            fail_arrange: None,
            measure_count: 0,
        }
    }

    /// Builder form of [`Self::set_size`].
    #[must_use]
    pub fn with_size(mut self, node: NodeId, size: PxSize2D) -> Self {
        self.set_size(node, size);
        self
    }

    /// Set the size `node` reports from now on.
    pub fn set_size(&mut self, node: NodeId, size: PxSize2D) {
        self.sizes.insert(node, size);
    }

    /// Make `node` fail every measure.
    pub fn fail_measure_of(&mut self, node: NodeId) {
        self.fail_measure = Some(node);
    }

    /// Make `node` fail every arrange.
    pub fn fail_arrange_of(&mut self, node: NodeId) {
        self.fail_arrange = Some(node);
    }

    /// Available size passed to the last measure of `node`.
    pub fn last_available(&self, node: &NodeId) -> Option<PxAvailableSize> {
        self.last_available.get(node).copied()
    }

    /// Rectangle passed to the last arrange of `node`.
    pub fn arranged_rect(&self, node: &NodeId) -> Option<PxRectangle> {
        self.arranged.get(node).copied()
    }

    /// Number of measure calls so far.
    pub const fn measure_count(&self) -> usize {
        self.measure_count
    }
}

impl<NodeId> Default for SizedElements<NodeId>
where
    NodeId: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<NodeId> ElementHost<NodeId> for SizedElements<NodeId>
where
    NodeId: Eq + Hash + Clone,
{
    type Error = ElementError<NodeId>;

    fn measure(&mut self, node: &NodeId, available: PxAvailableSize) -> Result<PxSize2D, Self::Error> {
        self.measure_count += 1;
        if self.fail_measure.as_ref() == Some(node) {
            return Err(ElementError::MeasureFailed(node.clone()));
        }
        self.last_available.insert(node.clone(), available);
        Ok(self.sizes.get(node).copied().unwrap_or_default())
    }

    fn arrange(&mut self, node: &NodeId, rect: PxRectangle) -> Result<(), Self::Error> {
        if self.fail_arrange.as_ref() == Some(node) {
            return Err(ElementError::ArrangeFailed(node.clone()));
        }
        self.arranged.insert(node.clone(), rect);
        Ok(())
    }
}

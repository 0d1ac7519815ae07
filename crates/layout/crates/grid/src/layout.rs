//! The grid container.

use serde::{Deserialize, Serialize};
use ui_layout_util::{
    Axis, ElementHost, LayoutContext, PxAvailableSize, PxPoint2, PxRectangle, PxSize2D, UnitConverter,
};

use crate::classify::{CellClassification, classify};
use crate::definition::TrackDefinition;
use crate::error::GridError;
use crate::measure::{MeasurePass, MeasurePhase};
use crate::snapshot::GridSnapshot;
use crate::stars::finalize_stars;
use crate::track::{DefinitionCache, Track, assign_offsets, measured_total};

/// A child and the cell it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridChild<NodeId> {
    /// Handle understood by the element host
    pub node: NodeId,
    /// Column index
    pub column: usize,
    /// Row index
    pub row: usize,
    /// Size returned by the child's last measure
    pub desired: PxSize2D,
}

/// Final position and length of a track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedTrack {
    /// Offset from the grid origin
    pub offset: i32,
    /// Length
    pub size: i32,
}

impl From<&Track> for ResolvedTrack {
    fn from(track: &Track) -> Self {
        Self {
            offset: track.resolved_offset(),
            size: track.resolved_size(),
        }
    }
}

/// Lays children out in rows and columns.
///
/// Columns and rows are [`TrackDefinition`]s sized as fixed lengths, by
/// their content (auto) or by weighted shares of the leftover space (star).
/// An axis without definitions behaves as a single auto track. Children are
/// referenced by `NodeId` and measured and arranged through an
/// [`ElementHost`].
#[derive(Debug, Clone)]
pub struct GridLayout<NodeId = usize> {
    context: LayoutContext,
    columns: Vec<Track>,
    rows: Vec<Track>,
    children: Vec<GridChild<NodeId>>,
    definition_cache: DefinitionCache,
    classification: Option<CellClassification>,
    limit_to_available_space: bool,
    desired_size: PxSize2D,
    last_phase: Option<MeasurePhase>,
}

impl<NodeId> GridLayout<NodeId>
where
    NodeId: PartialEq,
{
    /// Create an empty grid.
    ///
    /// # Arguments
    ///
    /// * `context` - Unit conversion and configuration shared by the layout tree
    pub fn new(context: LayoutContext) -> Self {
        let implicit = Track::new(TrackDefinition::auto(), &context.units);
        Self {
            limit_to_available_space: context.config.limit_to_available_space,
            columns: vec![implicit.clone()],
            rows: vec![implicit],
            context,
            children: Vec::new(),
            definition_cache: DefinitionCache::default(),
            classification: None,
            desired_size: PxSize2D::default(),
            last_phase: None,
        }
    }

    /// The context this grid was created with.
    pub const fn context(&self) -> &LayoutContext {
        &self.context
    }

    /// Append a column. Returns its index.
    ///
    /// The first column replaces the implicit auto column.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidDefinition`] for negative, non-finite or
    /// oversized sizes.
    pub fn add_column_definition(&mut self, definition: TrackDefinition) -> Result<usize, GridError> {
        definition.validate(Axis::Horizontal)?;
        let track = Track::new(definition, &self.context.units);
        let index = push_definition(&mut self.columns, &mut self.definition_cache.has_entries_x, track);
        self.classification = None;
        Ok(index)
    }

    /// Append a row. Returns its index.
    ///
    /// The first row replaces the implicit auto row.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidDefinition`] for negative, non-finite or
    /// oversized sizes.
    pub fn add_row_definition(&mut self, definition: TrackDefinition) -> Result<usize, GridError> {
        definition.validate(Axis::Vertical)?;
        let track = Track::new(definition, &self.context.units);
        let index = push_definition(&mut self.rows, &mut self.definition_cache.has_entries_y, track);
        self.classification = None;
        Ok(index)
    }

    /// Number of columns, including the implicit one.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows, including the implicit one.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Column at `index`.
    pub fn column(&self, index: usize) -> Option<&Track> {
        self.columns.get(index)
    }

    /// Row at `index`.
    pub fn row(&self, index: usize) -> Option<&Track> {
        self.rows.get(index)
    }

    /// Add a child in the first cell.
    ///
    /// # Errors
    /// Returns [`GridError::DuplicateChild`] if `node` is already a child.
    pub fn add_child(&mut self, node: NodeId) -> Result<(), GridError> {
        self.add_child_at(node, 0, 0)
    }

    /// Add a child at (`column`, `row`).
    ///
    /// # Errors
    /// Returns [`GridError::DuplicateChild`] if `node` is already a child and
    /// [`GridError::IndexOutOfBounds`] if the cell does not exist.
    pub fn add_child_at(&mut self, node: NodeId, column: usize, row: usize) -> Result<(), GridError> {
        if self.children.iter().any(|child| child.node == node) {
            return Err(GridError::DuplicateChild);
        }
        self.check_cell(column, row)?;
        self.children.push(GridChild {
            node,
            column,
            row,
            desired: PxSize2D::default(),
        });
        self.classification = None;
        Ok(())
    }

    /// Remove a child and hand its node back.
    ///
    /// # Errors
    /// Returns [`GridError::UnknownChild`] if `node` is not a child.
    pub fn remove_child(&mut self, node: &NodeId) -> Result<NodeId, GridError> {
        let index = self.child_index(node)?;
        self.classification = None;
        Ok(self.children.remove(index).node)
    }

    /// Remove all children.
    pub fn clear_children(&mut self) {
        self.children.clear();
        self.classification = None;
    }

    /// Number of children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = &NodeId> {
        self.children.iter().map(|child| &child.node)
    }

    /// The (column, row) a child occupies.
    pub fn cell_of(&self, node: &NodeId) -> Option<(usize, usize)> {
        self.children
            .iter()
            .find(|child| child.node == *node)
            .map(|child| (child.column, child.row))
    }

    /// Move a child to (`column`, `row`).
    ///
    /// # Errors
    /// Returns [`GridError::IndexOutOfBounds`] if the cell does not exist and
    /// [`GridError::UnknownChild`] if `node` is not a child.
    pub fn set(&mut self, node: &NodeId, column: usize, row: usize) -> Result<(), GridError> {
        self.check_cell(column, row)?;
        self.assign(node, Some(column), Some(row))
    }

    /// Move a child to another column, keeping its row.
    ///
    /// # Errors
    /// Returns [`GridError::IndexOutOfBounds`] if the column does not exist
    /// and [`GridError::UnknownChild`] if `node` is not a child.
    pub fn set_column(&mut self, node: &NodeId, column: usize) -> Result<(), GridError> {
        check_index(Axis::Horizontal, column, self.columns.len())?;
        self.assign(node, Some(column), None)
    }

    /// Move a child to another row, keeping its column.
    ///
    /// # Errors
    /// Returns [`GridError::IndexOutOfBounds`] if the row does not exist and
    /// [`GridError::UnknownChild`] if `node` is not a child.
    pub fn set_row(&mut self, node: &NodeId, row: usize) -> Result<(), GridError> {
        check_index(Axis::Vertical, row, self.rows.len())?;
        self.assign(node, None, Some(row))
    }

    /// Clamp the reported size to the available space.
    pub fn set_limit_to_available_space(&mut self, enabled: bool) {
        self.limit_to_available_space = enabled;
    }

    /// Check if the reported size is clamped to the available space.
    pub const fn limit_to_available_space(&self) -> bool {
        self.limit_to_available_space
    }

    /// Size computed by the last measure.
    pub const fn desired_size(&self) -> PxSize2D {
        self.desired_size
    }

    /// Strategy used by the last measure.
    pub const fn last_measure_phase(&self) -> Option<MeasurePhase> {
        self.last_phase
    }

    /// Phase switches from the definitions and the last measure.
    pub const fn definition_cache(&self) -> DefinitionCache {
        self.definition_cache
    }

    /// Current classification of the children, computed if stale.
    pub fn classification(&mut self) -> &CellClassification {
        self.classification
            .get_or_insert_with(|| classify_children(&self.children, &self.columns, &self.rows))
    }

    /// Measure the grid and every child against `available`.
    ///
    /// Returns the desired size: the sum of the track minimums on each axis,
    /// clamped to the available space if
    /// [`Self::limit_to_available_space`] is set.
    ///
    /// # Errors
    /// Returns the first error a child reports, unmodified.
    pub fn measure<Host>(&mut self, host: &mut Host, available: PxAvailableSize) -> Result<PxSize2D, Host::Error>
    where
        Host: ElementHost<NodeId>,
    {
        let units = self.context.units;
        self.definition_cache.has_star_x = refresh_tracks(&mut self.columns, &units, available.is_infinity_width());
        self.definition_cache.has_star_y = refresh_tracks(&mut self.rows, &units, available.is_infinity_height());

        let classification = self
            .classification
            .get_or_insert_with(|| classify_children(&self.children, &self.columns, &self.rows));

        let phase = MeasurePass {
            columns: &mut self.columns,
            rows: &mut self.rows,
            children: &mut self.children,
            classification,
            host,
            available,
            cache: self.definition_cache,
            max_passes: self.context.config.max_measure_passes,
        }
        .run()?;
        self.last_phase = Some(phase);

        let measured = PxSize2D::new(measured_total(&self.columns), measured_total(&self.rows));
        self.desired_size = if self.limit_to_available_space {
            available.clamp_size(measured)
        } else {
            measured
        };
        tracing::debug!("Grid measured: available={:?}, desired={:?}", available, self.desired_size);
        Ok(self.desired_size)
    }

    /// Resolve the final track sizes for `final_rect` and arrange every child
    /// in its cell.
    ///
    /// Returns the arranged size, clamped to the final size if
    /// [`Self::limit_to_available_space`] is set.
    ///
    /// # Errors
    /// Returns the first error a child reports, unmodified.
    pub fn arrange<Host>(&mut self, host: &mut Host, final_rect: PxRectangle) -> Result<PxSize2D, Host::Error>
    where
        Host: ElementHost<NodeId>,
    {
        self.columns.iter_mut().for_each(Track::clear_arrange_min);
        self.rows.iter_mut().for_each(Track::clear_arrange_min);
        finalize_stars(&mut self.rows, final_rect.height);
        finalize_stars(&mut self.columns, final_rect.width);

        let size = PxSize2D::new(assign_offsets(&mut self.columns), assign_offsets(&mut self.rows));

        let origin = final_rect.location();
        for child in &self.children {
            debug_assert!(
                child.column < self.columns.len() && child.row < self.rows.len(),
                "child cell outside the track lists"
            );
            let (Some(column), Some(row)) = (self.columns.get(child.column), self.rows.get(child.row)) else {
                tracing::warn!("Grid arrange: skipping child in missing cell ({}, {})", child.column, child.row);
                continue;
            };
            let location = PxPoint2::new(
                origin.x.saturating_add(column.resolved_offset()),
                origin.y.saturating_add(row.resolved_offset()),
            );
            let cell = PxSize2D::new(column.resolved_size(), row.resolved_size());
            host.arrange(&child.node, PxRectangle::from_location_size(location, cell))?;
        }

        tracing::debug!("Grid arranged: final={:?}, size={:?}", final_rect, size);
        Ok(if self.limit_to_available_space {
            PxAvailableSize::from(final_rect.size()).clamp_size(size)
        } else {
            size
        })
    }

    /// Offset and length of every column after the last arrange.
    pub fn resolved_columns(&self) -> Vec<ResolvedTrack> {
        self.columns.iter().map(ResolvedTrack::from).collect()
    }

    /// Offset and length of every row after the last arrange.
    pub fn resolved_rows(&self) -> Vec<ResolvedTrack> {
        self.rows.iter().map(ResolvedTrack::from).collect()
    }

    /// Serializable view of the tracks and the last desired size.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::new(self.desired_size, &self.columns, &self.rows, self.children.len())
    }

    fn child_index(&self, node: &NodeId) -> Result<usize, GridError> {
        self.children
            .iter()
            .position(|child| child.node == *node)
            .ok_or(GridError::UnknownChild)
    }

    fn check_cell(&self, column: usize, row: usize) -> Result<(), GridError> {
        check_index(Axis::Horizontal, column, self.columns.len())?;
        check_index(Axis::Vertical, row, self.rows.len())
    }

    fn assign(&mut self, node: &NodeId, column: Option<usize>, row: Option<usize>) -> Result<(), GridError> {
        let index = self.child_index(node)?;
        let Some(child) = self.children.get_mut(index) else {
            return Err(GridError::UnknownChild);
        };
        let column = column.unwrap_or(child.column);
        let row = row.unwrap_or(child.row);
        if child.column != column || child.row != row {
            child.column = column;
            child.row = row;
            self.classification = None;
        }
        Ok(())
    }
}

impl<NodeId> Default for GridLayout<NodeId>
where
    NodeId: PartialEq,
{
    fn default() -> Self {
        Self::new(LayoutContext::default())
    }
}

fn push_definition(tracks: &mut Vec<Track>, has_entries: &mut bool, track: Track) -> usize {
    if !*has_entries {
        tracks.clear();
        *has_entries = true;
    }
    tracks.push(track);
    tracks.len() - 1
}

fn check_index(axis: Axis, index: usize, count: usize) -> Result<(), GridError> {
    if index < count {
        Ok(())
    } else {
        Err(GridError::IndexOutOfBounds { axis, index, count })
    }
}

/// Reset every track for a new measure. Returns true if any track takes part
/// in star resolution.
fn refresh_tracks(tracks: &mut [Track], units: &impl UnitConverter, infinite: bool) -> bool {
    tracks
        .iter_mut()
        .fold(false, |has_star, track| track.refresh(units, infinite) || has_star)
}

fn classify_children<NodeId>(children: &[GridChild<NodeId>], columns: &[Track], rows: &[Track]) -> CellClassification {
    let column_definitions: Vec<TrackDefinition> = columns.iter().map(|track| *track.definition()).collect();
    let row_definitions: Vec<TrackDefinition> = rows.iter().map(|track| *track.definition()).collect();
    classify(
        children.iter().map(|child| (child.column, child.row)),
        &column_definitions,
        &row_definitions,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::CellGroup;
    use core::convert::Infallible;
    use std::collections::HashMap;
    use std::error::Error;
    use ui_layout_util::{LayoutConfig, PxAvailableLength};

    type TestResult = Result<(), Box<dyn Error>>;

    /// Children with a fixed desired size that remember what they were given.
    #[derive(Default)]
    struct RecordingHost {
        desired: HashMap<usize, PxSize2D>,
        available: HashMap<usize, PxAvailableSize>,
        arranged: HashMap<usize, PxRectangle>,
        measure_calls: usize,
    }

    impl RecordingHost {
        fn with_sizes(sizes: &[(usize, PxSize2D)]) -> Self {
            Self {
                desired: sizes.iter().copied().collect(),
                ..Self::default()
            }
        }
    }

    impl ElementHost<usize> for RecordingHost {
        type Error = Infallible;

        fn measure(&mut self, node: &usize, available: PxAvailableSize) -> Result<PxSize2D, Infallible> {
            self.measure_calls += 1;
            self.available.insert(*node, available);
            Ok(self.desired.get(node).copied().unwrap_or_default())
        }

        fn arrange(&mut self, node: &usize, rect: PxRectangle) -> Result<(), Infallible> {
            self.arranged.insert(*node, rect);
            Ok(())
        }
    }

    fn grid(columns: &[TrackDefinition], rows: &[TrackDefinition]) -> Result<GridLayout, GridError> {
        let mut layout = GridLayout::<usize>::default();
        for column in columns {
            layout.add_column_definition(*column)?;
        }
        for row in rows {
            layout.add_row_definition(*row)?;
        }
        Ok(layout)
    }

    /// A grid without definitions has one implicit auto track per axis.
    #[test]
    fn test_implicit_tracks() -> TestResult {
        let mut layout = GridLayout::<usize>::default();
        assert_eq!(layout.column_count(), 1);
        assert_eq!(layout.row_count(), 1);
        assert_eq!(layout.add_column_definition(TrackDefinition::fixed(20.0))?, 0);
        assert_eq!(layout.column_count(), 1);
        assert_eq!(layout.add_column_definition(TrackDefinition::auto())?, 1);
        assert!(layout.definition_cache().has_entries_x);
        assert!(!layout.definition_cache().has_entries_y);
        Ok(())
    }

    /// No definitions and no children measure to nothing.
    #[test]
    fn test_measure_empty() -> TestResult {
        let mut layout = GridLayout::<usize>::default();
        let mut host = RecordingHost::default();
        assert_eq!(layout.measure(&mut host, PxAvailableSize::from_px(1920, 1080))?, PxSize2D::default());
        layout.arrange(&mut host, PxRectangle::new(1, 2, 1920, 1080))?;
        Ok(())
    }

    /// Fixed tracks with children produce exact rectangles.
    #[test]
    fn test_fixed_grid_rects() -> TestResult {
        let mut layout = grid(
            &[TrackDefinition::fixed(100.0), TrackDefinition::fixed(50.0)],
            &[TrackDefinition::fixed(30.0)],
        )?;
        layout.add_child(1)?;
        layout.add_child_at(2, 1, 0)?;
        let mut host = RecordingHost::with_sizes(&[(1, PxSize2D::new(500, 500))]);

        let desired = layout.measure(&mut host, PxAvailableSize::from_px(1000, 1000))?;
        assert_eq!(desired, PxSize2D::new(150, 30));
        let arranged = layout.arrange(&mut host, PxRectangle::new(0, 0, 150, 30))?;
        assert_eq!(arranged, PxSize2D::new(150, 30));
        assert_eq!(host.arranged[&1], PxRectangle::new(0, 0, 100, 30));
        assert_eq!(host.arranged[&2], PxRectangle::new(100, 0, 50, 30));
        Ok(())
    }

    /// Star columns split the leftover by weight.
    #[test]
    fn test_star_weights() -> TestResult {
        let mut layout = grid(&[TrackDefinition::star(1.0), TrackDefinition::star(3.0)], &[])?;
        let mut host = RecordingHost::default();
        layout.measure(&mut host, PxAvailableSize::from_px(100, 10))?;
        layout.arrange(&mut host, PxRectangle::new(0, 0, 100, 10))?;
        let columns = layout.resolved_columns();
        assert_eq!(columns[0], ResolvedTrack { offset: 0, size: 25 });
        assert_eq!(columns[1], ResolvedTrack { offset: 25, size: 75 });
        Ok(())
    }

    /// Zero weights split evenly.
    #[test]
    fn test_zero_weight_stars() -> TestResult {
        let mut layout = grid(&[TrackDefinition::star(0.0), TrackDefinition::star(0.0)], &[])?;
        let mut host = RecordingHost::default();
        layout.measure(&mut host, PxAvailableSize::from_px(100, 10))?;
        layout.arrange(&mut host, PxRectangle::new(0, 0, 100, 10))?;
        let sizes: Vec<i32> = layout.resolved_columns().iter().map(|track| track.size).collect();
        assert_eq!(sizes, vec![50, 50]);
        Ok(())
    }

    /// Auto tracks take the size of their content.
    #[test]
    fn test_auto_column_content() -> TestResult {
        let mut layout = grid(&[TrackDefinition::auto()], &[TrackDefinition::auto()])?;
        layout.add_child(7)?;
        let mut host = RecordingHost::with_sizes(&[(7, PxSize2D::new(42, 9))]);
        assert_eq!(layout.measure(&mut host, PxAvailableSize::from_px(500, 500))?, PxSize2D::new(42, 9));
        assert_eq!(host.available[&7], PxAvailableSize::infinite());
        layout.arrange(&mut host, PxRectangle::new(0, 0, 500, 500))?;
        assert_eq!(layout.resolved_columns()[0].size, 42);
        Ok(())
    }

    /// Content larger than the final size overflows instead of shrinking.
    #[test]
    fn test_overflow_keeps_minimum() -> TestResult {
        let mut layout = grid(&[TrackDefinition::star(1.0)], &[])?;
        layout.add_child(1)?;
        let mut host = RecordingHost::with_sizes(&[(1, PxSize2D::new(50, 5))]);
        layout.measure(&mut host, PxAvailableSize::from_px(100, 100))?;
        layout.arrange(&mut host, PxRectangle::new(0, 0, 30, 100))?;
        assert_eq!(layout.resolved_columns()[0].size, 100);

        layout.measure(&mut host, PxAvailableSize::new(PxAvailableLength::Infinite, PxAvailableLength::Definite(100)))?;
        layout.arrange(&mut host, PxRectangle::new(0, 0, 30, 100))?;
        assert_eq!(layout.resolved_columns()[0].size, 50);
        Ok(())
    }

    /// Measuring twice without changes gives the same result.
    #[test]
    fn test_measure_idempotent() -> TestResult {
        let mut layout = grid(
            &[TrackDefinition::auto(), TrackDefinition::star(1.0)],
            &[TrackDefinition::auto(), TrackDefinition::star(2.0)],
        )?;
        for (node, column, row) in [(0, 0, 0), (1, 1, 0), (2, 0, 1), (3, 1, 1)] {
            layout.add_child_at(node, column, row)?;
        }
        let mut host = RecordingHost::with_sizes(&[(0, PxSize2D::new(10, 10)), (1, PxSize2D::new(20, 30))]);
        let available = PxAvailableSize::from_px(300, 200);
        let first = layout.measure(&mut host, available)?;
        let first_snapshot = layout.snapshot();
        let second = layout.measure(&mut host, available)?;
        assert_eq!(first, second);
        assert_eq!(first_snapshot, layout.snapshot());
        Ok(())
    }

    /// Arranging twice into the same rectangle gives the same rectangles.
    #[test]
    fn test_arrange_deterministic() -> TestResult {
        let mut layout = grid(
            &[TrackDefinition::fixed(10.0), TrackDefinition::star(1.0), TrackDefinition::star(2.0)],
            &[TrackDefinition::star(1.0)],
        )?;
        for node in 0..3 {
            layout.add_child_at(node, node, 0)?;
        }
        let mut host = RecordingHost::default();
        layout.measure(&mut host, PxAvailableSize::from_px(101, 50))?;
        let final_rect = PxRectangle::new(5, 5, 101, 50);
        layout.arrange(&mut host, final_rect)?;
        let first = host.arranged.clone();
        let first_columns = layout.resolved_columns();
        layout.arrange(&mut host, final_rect)?;
        assert_eq!(first, host.arranged);
        assert_eq!(first_columns, layout.resolved_columns());
        assert_eq!(host.arranged[&2], PxRectangle::new(5 + 10 + 31, 5, 60, 50));
        Ok(())
    }

    /// The classification is cached until a change invalidates it.
    #[test]
    fn test_classification_cached() -> TestResult {
        let mut layout = grid(&[TrackDefinition::auto(), TrackDefinition::star(1.0)], &[TrackDefinition::star(1.0)])?;
        layout.add_child(1)?;
        let first = layout.classification().clone();
        assert_eq!(&first, layout.classification());
        assert_eq!(first.group(CellGroup::Group1).len(), 1);

        layout.set(&1, 0, 0)?;
        assert_eq!(&first, layout.classification());
        layout.set_column(&1, 1)?;
        assert_eq!(layout.classification().group(CellGroup::Group3).len(), 1);
        Ok(())
    }

    /// Invalid cell indices and unknown children are rejected at the call.
    #[test]
    fn test_assignment_errors() -> TestResult {
        let mut layout = grid(&[TrackDefinition::auto(), TrackDefinition::auto()], &[])?;
        layout.add_child(1)?;
        assert_eq!(
            layout.set(&1, 2, 0),
            Err(GridError::IndexOutOfBounds {
                axis: Axis::Horizontal,
                index: 2,
                count: 2,
            })
        );
        assert_eq!(
            layout.set_row(&1, 1),
            Err(GridError::IndexOutOfBounds {
                axis: Axis::Vertical,
                index: 1,
                count: 1,
            })
        );
        assert_eq!(layout.set(&9, 0, 0), Err(GridError::UnknownChild));
        assert_eq!(layout.add_child(1), Err(GridError::DuplicateChild));
        assert_eq!(layout.cell_of(&1), Some((0, 0)));
        Ok(())
    }

    /// Removing children and clearing them updates the count.
    #[test]
    fn test_remove_and_clear() -> TestResult {
        let mut layout = GridLayout::<usize>::default();
        layout.add_child(1)?;
        layout.add_child(2)?;
        assert_eq!(layout.remove_child(&1)?, 1);
        assert_eq!(layout.remove_child(&1), Err(GridError::UnknownChild));
        assert_eq!(layout.children().copied().collect::<Vec<_>>(), vec![2]);
        layout.clear_children();
        assert_eq!(layout.child_count(), 0);
        Ok(())
    }

    /// Invalid definitions are rejected before they are stored.
    #[test]
    fn test_invalid_definition() {
        let mut layout = GridLayout::<usize>::default();
        assert!(matches!(
            layout.add_row_definition(TrackDefinition::star(-1.0)),
            Err(GridError::InvalidDefinition { axis: Axis::Vertical, .. })
        ));
        assert!(!layout.definition_cache().has_entries_y);
    }

    /// Clamping applies to the reported size, not the tracks.
    #[test]
    fn test_limit_to_available_space() -> TestResult {
        let config = LayoutConfig::new(160, 4, true);
        let mut layout = GridLayout::<usize>::new(LayoutContext::new(config));
        assert!(layout.limit_to_available_space());
        layout.add_column_definition(TrackDefinition::fixed(300.0))?;
        let mut host = RecordingHost::default();
        assert_eq!(layout.measure(&mut host, PxAvailableSize::from_px(100, 100))?, PxSize2D::new(100, 0));
        assert_eq!(layout.arrange(&mut host, PxRectangle::new(0, 0, 100, 100))?, PxSize2D::new(100, 0));
        assert_eq!(layout.resolved_columns()[0].size, 300);

        layout.set_limit_to_available_space(false);
        assert_eq!(layout.measure(&mut host, PxAvailableSize::from_px(100, 100))?, PxSize2D::new(300, 0));
        Ok(())
    }

    /// Star tracks measured against infinite space size to content.
    #[test]
    fn test_infinite_star_as_auto() -> TestResult {
        let mut layout = grid(&[TrackDefinition::star(1.0), TrackDefinition::star(1.0)], &[])?;
        layout.add_child(1)?;
        let mut host = RecordingHost::with_sizes(&[(1, PxSize2D::new(40, 10))]);
        let desired = layout.measure(&mut host, PxAvailableSize::infinite())?;
        assert_eq!(desired, PxSize2D::new(40, 10));
        assert!(!layout.definition_cache().has_star_x);
        assert!(host.available[&1].is_infinity_width());
        Ok(())
    }

    /// Auto columns depending on star rows settle within the pass bound.
    #[test]
    fn test_complex_measure_terminates() -> TestResult {
        let mut layout = grid(
            &[TrackDefinition::auto(), TrackDefinition::star(1.0)],
            &[TrackDefinition::auto(), TrackDefinition::star(1.0)],
        )?;
        layout.add_child_at(0, 0, 1)?;
        layout.add_child_at(1, 1, 0)?;
        let mut host = RecordingHost::with_sizes(&[(0, PxSize2D::new(25, 10)), (1, PxSize2D::new(10, 40))]);
        let desired = layout.measure(&mut host, PxAvailableSize::from_px(200, 100))?;
        assert_eq!(layout.last_measure_phase(), Some(MeasurePhase::Complex));
        assert_eq!(desired, PxSize2D::new(200, 100));
        assert_eq!(host.available[&1], PxAvailableSize::new(PxAvailableLength::Definite(175), PxAvailableLength::Infinite));
        assert_eq!(host.available[&0], PxAvailableSize::new(PxAvailableLength::Infinite, PxAvailableLength::Definite(60)));
        assert_eq!(host.measure_calls, 3);
        Ok(())
    }

    /// Reports a wider size on every measure of node 0.
    #[derive(Default)]
    struct GrowingHost {
        widths: i32,
        measure_calls: usize,
    }

    impl ElementHost<usize> for GrowingHost {
        type Error = Infallible;

        fn measure(&mut self, node: &usize, _available: PxAvailableSize) -> Result<PxSize2D, Infallible> {
            self.measure_calls += 1;
            if *node == 0 {
                self.widths += 10;
                Ok(PxSize2D::new(self.widths, 5))
            } else {
                Ok(PxSize2D::new(5, 5))
            }
        }

        fn arrange(&mut self, _node: &usize, _rect: PxRectangle) -> Result<(), Infallible> {
            Ok(())
        }
    }

    /// An auto column that never settles stops at the configured bound, and
    /// the last pass does not feed its width back.
    #[test]
    fn test_complex_measure_pass_bound() -> TestResult {
        let _logger = env_logger::builder().is_test(true).try_init();
        let config = LayoutConfig::new(160, 2, false);
        let mut layout = GridLayout::<usize>::new(LayoutContext::new(config));
        for definition in [TrackDefinition::auto(), TrackDefinition::star(1.0)] {
            layout.add_column_definition(definition)?;
            layout.add_row_definition(definition)?;
        }
        layout.add_child_at(0, 0, 1)?;
        layout.add_child_at(1, 1, 0)?;

        let mut host = GrowingHost::default();
        let desired = layout.measure(&mut host, PxAvailableSize::from_px(200, 100))?;
        assert_eq!(layout.last_measure_phase(), Some(MeasurePhase::Complex));
        // One unbounded group 1 pass, then group 2 and group 1 for each of
        // the max_passes + 1 loop iterations.
        assert_eq!(host.measure_calls, 1 + 2 * 3);
        assert_eq!(host.widths, 40);
        assert_eq!(layout.column(0).map(Track::measured_min), Some(0));
        assert_eq!(desired, PxSize2D::new(190, 100));
        Ok(())
    }

    /// Content wider than `i32` can sum saturates instead of overflowing.
    #[test]
    fn test_huge_content_saturates() -> TestResult {
        let half = i32::MAX / 2 + 10;
        let mut layout = grid(&[TrackDefinition::auto(), TrackDefinition::auto()], &[])?;
        layout.add_child_at(0, 0, 0)?;
        layout.add_child_at(1, 1, 0)?;
        let mut host = RecordingHost::with_sizes(&[(0, PxSize2D::new(half, 10)), (1, PxSize2D::new(half, 10))]);

        let desired = layout.measure(&mut host, PxAvailableSize::infinite())?;
        assert_eq!(desired, PxSize2D::new(i32::MAX, 10));

        let arranged = layout.arrange(&mut host, PxRectangle::new(i32::MAX - 1, 0, 100, 100))?;
        assert_eq!(arranged.width, i32::MAX);
        assert_eq!(host.arranged[&0].x, i32::MAX - 1);
        assert_eq!(host.arranged[&1].x, i32::MAX);
        assert_eq!(layout.resolved_columns()[1].offset, half);
        Ok(())
    }

    /// Fixed lengths too large to lay out are refused up front.
    #[test]
    fn test_huge_fixed_rejected() {
        let mut layout = GridLayout::<usize>::default();
        assert!(matches!(
            layout.add_column_definition(TrackDefinition::fixed(3.0e9)),
            Err(GridError::InvalidDefinition { axis: Axis::Horizontal, .. })
        ));
        assert!(matches!(
            layout.add_row_definition(TrackDefinition::fixed_px(3.0e9)),
            Err(GridError::InvalidDefinition { axis: Axis::Vertical, .. })
        ));
        assert_eq!(layout.column_count(), 1);
    }
}

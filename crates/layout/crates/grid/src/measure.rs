//! The measure pass.
//!
//! Children are measured group by group (see [`crate::classify`]). Group 0
//! needs no star information and is measured first, group 3 needs all of it
//! and is measured last. Groups 1 and 2 can depend on each other: an auto
//! column's width may depend on a star row's height, and a star column's
//! content decides an auto row's height, which in turn changes what the star
//! rows get. Three strategies cover the possible combinations, the most
//! general one iterating until auto column widths settle.

use ui_layout_util::{ElementHost, PxAvailableLength, PxAvailableSize, PxSize2D};

use crate::classify::{CellClassification, CellGroup, CellRecord};
use crate::definition::GridUnitType;
use crate::layout::GridChild;
use crate::stars::resolve_stars;
use crate::track::{DefinitionCache, Track, TrackUnit};

/// Strategy picked for groups 1 and 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurePhase {
    /// Star rows do not depend on star column content
    Basic,
    /// Star rows depend on star columns but no auto column depends on star rows
    SemiComplex,
    /// Star rows and auto columns depend on each other
    Complex,
}

impl MeasurePhase {
    /// Pick the strategy for a classification.
    pub fn select(classification: &CellClassification) -> Self {
        if !classification.group2_has_auto_members() {
            Self::Basic
        } else if classification.is_group_empty(CellGroup::Group1) {
            Self::SemiComplex
        } else {
            Self::Complex
        }
    }
}

/// Borrowed grid state for one measure pass.
pub struct MeasurePass<'grid, NodeId, Host> {
    pub columns: &'grid mut [Track],
    pub rows: &'grid mut [Track],
    pub children: &'grid mut [GridChild<NodeId>],
    pub classification: &'grid CellClassification,
    pub host: &'grid mut Host,
    pub available: PxAvailableSize,
    pub cache: DefinitionCache,
    pub max_passes: u32,
}

impl<NodeId, Host> MeasurePass<'_, NodeId, Host>
where
    Host: ElementHost<NodeId>,
{
    /// Measure every child and collect the track minimums.
    pub fn run(mut self) -> Result<MeasurePhase, Host::Error> {
        self.measure_group0()?;

        let phase = MeasurePhase::select(self.classification);
        tracing::debug!(
            "Grid measure: phase={:?}, children={}, available={:?}",
            phase,
            self.children.len(),
            self.available
        );
        match phase {
            MeasurePhase::Basic => self.basic_measure()?,
            MeasurePhase::SemiComplex => self.semi_complex_measure()?,
            MeasurePhase::Complex => self.complex_measure()?,
        }

        self.measure_group3()?;
        Ok(phase)
    }

    fn basic_measure(&mut self) -> Result<(), Host::Error> {
        self.resolve_row_stars();
        self.measure_group1(false, false)?;
        self.resolve_column_stars();
        self.measure_group2()
    }

    fn semi_complex_measure(&mut self) -> Result<(), Host::Error> {
        self.resolve_column_stars();
        self.measure_group2()?;
        self.resolve_row_stars();
        Ok(())
    }

    fn complex_measure(&mut self) -> Result<(), Host::Error> {
        self.store_group_minimums();
        self.measure_group1(true, false)?;

        let mut has_x_changes = false;
        let mut retry = 0;
        loop {
            if has_x_changes {
                self.rows.iter_mut().for_each(Track::restore_min);
            }
            self.resolve_column_stars();
            self.measure_group2()?;
            self.columns.iter_mut().for_each(Track::restore_min);
            self.resolve_row_stars();
            has_x_changes = self.measure_group1(false, retry == self.max_passes)?;

            retry += 1;
            tracing::trace!("Grid measure: pass {}, width changed={}", retry, has_x_changes);
            if !has_x_changes {
                break;
            }
            if retry > self.max_passes {
                log::warn!("Grid measure: auto column widths did not settle after {retry} passes");
                break;
            }
        }
        Ok(())
    }

    /// Remember the column minimums group 1 starts from and the row minimums
    /// group 2 starts from; the other tracks are never restored.
    fn store_group_minimums(&mut self) {
        self.columns.iter_mut().for_each(Track::forget_stored_min);
        self.rows.iter_mut().for_each(Track::forget_stored_min);
        let classification = self.classification;
        for record in classification.group(CellGroup::Group1) {
            if let Some(column) = self.columns.get_mut(record.column) {
                column.store_min();
            }
        }
        for record in classification.group(CellGroup::Group2) {
            if let Some(row) = self.rows.get_mut(record.row) {
                row.store_min();
            }
        }
    }

    fn resolve_column_stars(&mut self) {
        if self.cache.has_star_x
            && let Some(width) = self.available.width.as_px()
        {
            resolve_stars(self.columns, width);
        }
    }

    fn resolve_row_stars(&mut self) {
        if self.cache.has_star_y
            && let Some(height) = self.available.height.as_px()
        {
            resolve_stars(self.rows, height);
        }
    }

    /// Fixed and auto tracks on both axes.
    fn measure_group0(&mut self) -> Result<(), Host::Error> {
        let classification = self.classification;
        for record in classification.group(CellGroup::Group0) {
            let available = PxAvailableSize::new(
                self.track_size(record, TrackKind::Column, record.unit_x == GridUnitType::Auto),
                self.track_size(record, TrackKind::Row, record.unit_y == GridUnitType::Auto),
            );
            let desired = self.measure_child(record, available)?;
            self.apply_column_min(record, desired.width, false);
            self.apply_row_min(record, desired.height, false);
        }
        Ok(())
    }

    /// Auto column, star row. Returns true if any desired width changed.
    fn measure_group1(&mut self, use_infinite_y: bool, ignore_desired_x: bool) -> Result<bool, Host::Error> {
        let mut width_modified = false;
        let classification = self.classification;
        for record in classification.group(CellGroup::Group1) {
            let old_width = self.children.get(record.child).map_or(0, |child| child.desired.width);
            let available = PxAvailableSize::new(
                PxAvailableLength::Infinite,
                self.track_size(record, TrackKind::Row, use_infinite_y),
            );
            let desired = self.measure_child(record, available)?;
            width_modified |= old_width != desired.width;

            if !ignore_desired_x {
                self.apply_column_min(record, desired.width, true);
            }
            if !use_infinite_y {
                self.apply_row_min(record, desired.height, true);
            }
        }
        Ok(width_modified)
    }

    /// Star column, fixed or auto row.
    fn measure_group2(&mut self) -> Result<(), Host::Error> {
        let classification = self.classification;
        for record in classification.group(CellGroup::Group2) {
            let available = PxAvailableSize::new(
                self.track_size(record, TrackKind::Column, false),
                self.track_size(record, TrackKind::Row, record.unit_y == GridUnitType::Auto),
            );
            let desired = self.measure_child(record, available)?;
            self.apply_column_min(record, desired.width, true);
            self.apply_row_min(record, desired.height, false);
        }
        Ok(())
    }

    /// Star row with a fixed or star column.
    fn measure_group3(&mut self) -> Result<(), Host::Error> {
        let classification = self.classification;
        for record in classification.group(CellGroup::Group3) {
            let available = PxAvailableSize::new(
                self.track_size(record, TrackKind::Column, false),
                self.track_size(record, TrackKind::Row, false),
            );
            let desired = self.measure_child(record, available)?;
            self.apply_column_min(record, desired.width, false);
            self.apply_row_min(record, desired.height, true);
        }
        Ok(())
    }

    fn track_size(&self, record: &CellRecord, kind: TrackKind, infinite: bool) -> PxAvailableLength {
        if infinite {
            return PxAvailableLength::Infinite;
        }
        let track = match kind {
            TrackKind::Column => self.columns.get(record.column),
            TrackKind::Row => self.rows.get(record.row),
        };
        track.map_or(PxAvailableLength::Infinite, Track::measure_size)
    }

    fn measure_child(&mut self, record: &CellRecord, available: PxAvailableSize) -> Result<PxSize2D, Host::Error> {
        debug_assert!(record.child < self.children.len(), "classification out of date");
        let Some(child) = self.children.get_mut(record.child) else {
            tracing::warn!("Grid measure: no child at classified index {}", record.child);
            return Ok(PxSize2D::default());
        };
        let desired = self.host.measure(&child.node, available)?;
        child.desired = desired;
        Ok(desired)
    }

    /// Raise the column minimum, skipping fixed columns unless `always`.
    fn apply_column_min(&mut self, record: &CellRecord, width: i32, always: bool) {
        if let Some(column) = self.columns.get_mut(record.column)
            && (always || column.measure_unit() != TrackUnit::Fixed)
        {
            column.apply_measure_min(width);
        }
    }

    /// Raise the row minimum, skipping fixed rows unless `always`.
    fn apply_row_min(&mut self, record: &CellRecord, height: i32, always: bool) {
        if let Some(row) = self.rows.get_mut(record.row)
            && (always || row.measure_unit() != TrackUnit::Fixed)
        {
            row.apply_measure_min(height);
        }
    }
}

#[derive(Clone, Copy)]
enum TrackKind {
    Column,
    Row,
}

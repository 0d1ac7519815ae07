//! Serializable record of a grid's last layout, for debugging and golden tests.

use serde::{Deserialize, Serialize};
use ui_layout_util::PxSize2D;

use crate::definition::GridUnitType;
use crate::track::{Track, TrackUnit};

/// State of one track after measure/arrange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSnapshot {
    /// Defined unit
    pub unit: GridUnitType,
    /// Defined length or weight
    pub size: f32,
    /// Unit used by the last measure
    pub measure_unit: TrackUnit,
    /// Minimum collected by the last measure
    pub measured_min: i32,
    /// Offset from the grid origin
    pub offset: i32,
    /// Arranged length
    pub resolved_size: i32,
}

impl From<&Track> for TrackSnapshot {
    fn from(track: &Track) -> Self {
        Self {
            unit: track.definition().unit,
            size: track.definition().size,
            measure_unit: track.measure_unit(),
            measured_min: track.measured_min(),
            offset: track.resolved_offset(),
            resolved_size: track.resolved_size(),
        }
    }
}

/// State of a whole grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSnapshot {
    /// Size reported by the last measure
    pub desired_size: PxSize2D,
    /// Columns in index order
    pub columns: Vec<TrackSnapshot>,
    /// Rows in index order
    pub rows: Vec<TrackSnapshot>,
    /// Number of children
    pub child_count: usize,
}

impl GridSnapshot {
    /// Build a snapshot from track lists.
    pub fn new(desired_size: PxSize2D, columns: &[Track], rows: &[Track], child_count: usize) -> Self {
        Self {
            desired_size,
            columns: columns.iter().map(TrackSnapshot::from).collect(),
            rows: rows.iter().map(TrackSnapshot::from).collect(),
            child_count,
        }
    }
}

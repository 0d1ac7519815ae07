//! Per-track measurement state.

use serde::{Deserialize, Serialize};
use ui_layout_util::{PxAvailableLength, UnitConverter};

use crate::definition::{GridUnitType, TrackDefinition};

/// Unit a track behaves as during the current measure pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackUnit {
    /// Explicit length
    Fixed,
    /// Sized by content
    Auto,
    /// Weighted share of the leftover space
    Star,
    /// Star track measured against infinite space; sized by content until arrange
    AutoStar,
}

impl TrackUnit {
    /// Star tracks get a share of the leftover space at arrange time.
    pub const fn is_star_like(self) -> bool {
        matches!(self, Self::Star | Self::AutoStar)
    }
}

/// Switches recomputed when the definitions or available size change, used
/// to skip whole measure phases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefinitionCache {
    /// A column takes part in star resolution this pass
    pub has_star_x: bool,
    /// A row takes part in star resolution this pass
    pub has_star_y: bool,
    /// At least one column was defined explicitly
    pub has_entries_x: bool,
    /// At least one row was defined explicitly
    pub has_entries_y: bool,
}

/// A row or column together with its measure and arrange results.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    definition: TrackDefinition,
    measure_unit: TrackUnit,
    measure_size: PxAvailableLength,
    measured_min: i32,
    arrange_min: i32,
    offset: i32,
    stored_min: Option<i32>,
}

impl Track {
    /// Create a track in its unmeasured state.
    pub fn new(definition: TrackDefinition, units: &impl UnitConverter) -> Self {
        let mut track = Self {
            definition,
            measure_unit: TrackUnit::Auto,
            measure_size: PxAvailableLength::Infinite,
            measured_min: 0,
            arrange_min: 0,
            offset: 0,
            stored_min: None,
        };
        track.refresh(units, false);
        track.arrange_min = track.measured_min;
        track
    }

    /// The user supplied definition.
    pub const fn definition(&self) -> &TrackDefinition {
        &self.definition
    }

    /// Unit used by the current measure pass.
    pub const fn measure_unit(&self) -> TrackUnit {
        self.measure_unit
    }

    /// Space offered to children placed in this track.
    pub const fn measure_size(&self) -> PxAvailableLength {
        self.measure_size
    }

    /// Running minimum collected while measuring.
    pub const fn measured_min(&self) -> i32 {
        self.measured_min
    }

    /// Final pixel offset from the grid origin.
    pub const fn resolved_offset(&self) -> i32 {
        self.offset
    }

    /// Final pixel length.
    pub const fn resolved_size(&self) -> i32 {
        self.arrange_min
    }

    /// Reset the measure state for a new pass.
    ///
    /// Returns true if the track takes part in star resolution.
    pub fn refresh(&mut self, units: &impl UnitConverter, treat_star_as_auto: bool) -> bool {
        let (unit, size, min) = match self.definition.unit {
            GridUnitType::Fixed => {
                let px = units.dp_to_px(self.definition.size).max(0);
                (TrackUnit::Fixed, PxAvailableLength::Definite(px), px)
            }
            GridUnitType::FixedPx => {
                let px = units.pxf_to_px(self.definition.size).max(0);
                (TrackUnit::Fixed, PxAvailableLength::Definite(px), px)
            }
            GridUnitType::Auto => (TrackUnit::Auto, PxAvailableLength::Infinite, 0),
            GridUnitType::Star if treat_star_as_auto => {
                (TrackUnit::AutoStar, PxAvailableLength::Infinite, 0)
            }
            GridUnitType::Star => (TrackUnit::Star, PxAvailableLength::Infinite, 0),
        };
        self.measure_unit = unit;
        self.measure_size = size;
        self.measured_min = min;
        self.stored_min = None;
        unit == TrackUnit::Star
    }

    /// Grow the measured minimum to at least `value`.
    pub fn apply_measure_min(&mut self, value: i32) {
        self.measured_min = self.measured_min.max(value);
    }

    pub(crate) fn set_measure_size(&mut self, value: i32) {
        self.measure_size = PxAvailableLength::definite(value);
    }

    pub(crate) fn clear_arrange_min(&mut self) {
        self.arrange_min = self.measured_min;
    }

    pub(crate) fn set_arrange_min(&mut self, value: i32) {
        self.arrange_min = value.max(self.measured_min);
    }

    pub(crate) fn set_offset(&mut self, offset: i32) {
        self.offset = offset;
    }

    pub(crate) fn store_min(&mut self) {
        self.stored_min = Some(self.measured_min);
    }

    pub(crate) fn forget_stored_min(&mut self) {
        self.stored_min = None;
    }

    pub(crate) fn restore_min(&mut self) {
        if let Some(min) = self.stored_min {
            self.measured_min = min;
        }
    }
}

/// Sum of the measured minimums, saturating at `i32::MAX`.
pub fn measured_total(tracks: &[Track]) -> i32 {
    tracks
        .iter()
        .map(Track::measured_min)
        .fold(0_i32, i32::saturating_add)
}

/// Assign offsets by prefix summing resolved sizes in index order.
///
/// Returns the total resolved length. Offsets saturate at `i32::MAX`.
pub fn assign_offsets(tracks: &mut [Track]) -> i32 {
    let mut position = 0_i32;
    for track in tracks {
        track.set_offset(position);
        position = position.saturating_add(track.resolved_size());
    }
    position
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui_layout_util::DensityConverter;

    /// Fixed tracks start with their converted length as minimum.
    #[test]
    fn test_new_fixed_track() {
        let units = DensityConverter::new(320);
        let track = Track::new(TrackDefinition::fixed(10.0), &units);
        assert_eq!(track.measure_unit(), TrackUnit::Fixed);
        assert_eq!(track.measured_min(), 20);
        assert_eq!(track.resolved_size(), 20);
        assert_eq!(track.measure_size(), PxAvailableLength::Definite(20));
    }

    /// A star measured against infinite space behaves as auto.
    #[test]
    fn test_refresh_star_as_auto() {
        let units = DensityConverter::default();
        let mut track = Track::new(TrackDefinition::star(1.0), &units);
        assert!(track.refresh(&units, false));
        assert_eq!(track.measure_unit(), TrackUnit::Star);
        assert!(!track.refresh(&units, true));
        assert_eq!(track.measure_unit(), TrackUnit::AutoStar);
        assert!(track.measure_unit().is_star_like());
    }

    /// Restoring brings back the stored minimum; nothing stored is a no-op.
    #[test]
    fn test_store_restore_min() {
        let units = DensityConverter::default();
        let mut track = Track::new(TrackDefinition::auto(), &units);
        track.apply_measure_min(12);
        track.store_min();
        track.apply_measure_min(40);
        track.restore_min();
        assert_eq!(track.measured_min(), 12);

        track.forget_stored_min();
        track.apply_measure_min(30);
        track.restore_min();
        assert_eq!(track.measured_min(), 30);
    }

    /// Offsets are prefix sums of resolved sizes.
    #[test]
    fn test_assign_offsets() {
        let units = DensityConverter::default();
        let mut tracks = vec![
            Track::new(TrackDefinition::fixed(100.0), &units),
            Track::new(TrackDefinition::fixed(50.0), &units),
            Track::new(TrackDefinition::fixed(5.0), &units),
        ];
        assert_eq!(assign_offsets(&mut tracks), 155);
        let offsets: Vec<i32> = tracks.iter().map(Track::resolved_offset).collect();
        assert_eq!(offsets, vec![0, 100, 150]);
    }

    /// Sums saturate instead of overflowing.
    #[test]
    fn test_totals_saturate() {
        let units = DensityConverter::default();
        let mut tracks = vec![
            Track::new(TrackDefinition::auto(), &units),
            Track::new(TrackDefinition::auto(), &units),
        ];
        for track in &mut tracks {
            track.apply_measure_min(i32::MAX / 2 + 10);
            track.clear_arrange_min();
        }
        assert_eq!(measured_total(&tracks), i32::MAX);
        assert_eq!(assign_offsets(&mut tracks), i32::MAX);
        assert_eq!(tracks[1].resolved_offset(), i32::MAX / 2 + 10);
    }
}

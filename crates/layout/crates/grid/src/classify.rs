//! Sort children into measurement groups.
//!
//! A child's group depends on the units of the column (X) and row (Y) it
//! sits in:
//!
//! ```text
//!  row \ column | Fixed | Auto | Star |
//!  Fixed        |   0   |  0   |  2   |
//!  Auto         |   0   |  0   |  2   |
//!  Star         |   3   |  1   |  3   |
//! ```

use crate::definition::{GridUnitType, TrackDefinition};

/// Measurement group of a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellGroup {
    /// No star on either axis; measured first
    Group0,
    /// Auto column, star row
    Group1,
    /// Star column, non-star row
    Group2,
    /// Star row with a fixed or star column; measured last
    Group3,
}

impl CellGroup {
    /// All groups in measurement order.
    pub const ALL: [Self; 4] = [Self::Group0, Self::Group1, Self::Group2, Self::Group3];

    /// Group for a column/row unit pair.
    pub const fn for_units(unit_x: GridUnitType, unit_y: GridUnitType) -> Self {
        match (unit_y, unit_x) {
            (GridUnitType::Star, GridUnitType::Auto) => Self::Group1,
            (GridUnitType::Star, _) => Self::Group3,
            (_, GridUnitType::Star) => Self::Group2,
            _ => Self::Group0,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Group0 => 0,
            Self::Group1 => 1,
            Self::Group2 => 2,
            Self::Group3 => 3,
        }
    }
}

/// A classified child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRecord {
    /// Position of the child in insertion order
    pub child: usize,
    /// Column index
    pub column: usize,
    /// Row index
    pub row: usize,
    /// Column unit
    pub unit_x: GridUnitType,
    /// Row unit
    pub unit_y: GridUnitType,
    /// Resulting group
    pub group: CellGroup,
}

/// Children sorted by group.
///
/// Each group occupies a contiguous run of records, and within a group
/// children keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellClassification {
    records: Vec<CellRecord>,
    group_starts: [usize; 4],
    group2_has_auto_members: bool,
}

impl CellClassification {
    /// Records of one group.
    pub fn group(&self, group: CellGroup) -> &[CellRecord] {
        let start = self.group_start(group);
        let end = CellGroup::ALL
            .get(group.index() + 1)
            .map_or(self.records.len(), |next| self.group_start(*next));
        self.records.get(start..end).unwrap_or_default()
    }

    /// Offset of the group's first record in the grouped record list.
    ///
    /// An empty group starts where the next one does.
    pub fn group_start(&self, group: CellGroup) -> usize {
        self.group_starts.get(group.index()).copied().unwrap_or(self.records.len())
    }

    /// Check if the group has no members.
    pub fn is_group_empty(&self, group: CellGroup) -> bool {
        self.group(group).is_empty()
    }

    /// A group 2 child sits in an auto row, so star columns and star rows
    /// depend on each other.
    pub const fn group2_has_auto_members(&self) -> bool {
        self.group2_has_auto_members
    }
}

/// Classify children placed at `cells` (column, row).
///
/// Indices without a definition classify as auto.
pub fn classify(
    cells: impl IntoIterator<Item = (usize, usize)>,
    columns: &[TrackDefinition],
    rows: &[TrackDefinition],
) -> CellClassification {
    let unit_of = |definitions: &[TrackDefinition], index: usize| {
        definitions
            .get(index)
            .map_or(GridUnitType::Auto, |definition| definition.unit)
    };

    let mut records: Vec<CellRecord> = cells
        .into_iter()
        .enumerate()
        .map(|(child, (column, row))| {
            let unit_x = unit_of(columns, column);
            let unit_y = unit_of(rows, row);
            CellRecord {
                child,
                column,
                row,
                unit_x,
                unit_y,
                group: CellGroup::for_units(unit_x, unit_y),
            }
        })
        .collect();
    // Stable, so insertion order survives inside each group.
    records.sort_by_key(|record| record.group);

    let mut group_starts = [records.len(); 4];
    for group in CellGroup::ALL.iter().rev() {
        let start = records.partition_point(|record| record.group < *group);
        if let Some(slot) = group_starts.get_mut(group.index()) {
            *slot = start;
        }
    }

    let group2_has_auto_members = records
        .iter()
        .any(|record| record.group == CellGroup::Group2 && record.unit_y == GridUnitType::Auto);

    CellClassification {
        records,
        group_starts,
        group2_has_auto_members,
    }
}

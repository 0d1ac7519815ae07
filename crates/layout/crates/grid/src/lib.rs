//! Grid layout container.
//!
//! Children are placed in cells formed by column and row definitions. Each
//! track is either a fixed length, sized to its content (auto), or given a
//! weighted share of the space the other tracks leave (star). Measuring
//! reports the size the grid wants; arranging resolves the final track sizes
//! for the space actually granted and positions every child in its cell.

// Row and column definitions
mod definition;
pub use definition::{GridColumnDefinition, GridRowDefinition, GridUnitType, MAX_FIXED_LENGTH, TrackDefinition};

// Configuration errors
mod error;
pub use error::GridError;

// Per-track measure/arrange state
mod track;
pub use track::{DefinitionCache, Track, TrackUnit};

// Child classification
mod classify;
pub use classify::{CellClassification, CellGroup, CellRecord, classify};

// Star distribution
mod stars;
pub use stars::{distribute_star_space, finalize_stars, resolve_stars};

// Measure phases
mod measure;
pub use measure::MeasurePhase;

// The container
mod layout;
pub use layout::{GridChild, GridLayout, ResolvedTrack};

// Debug snapshots
mod snapshot;
pub use snapshot::{GridSnapshot, TrackSnapshot};

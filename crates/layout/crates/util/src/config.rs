//! Configuration settings for layout containers.
//!
//! This module defines runtime configuration for unit conversion and grid
//! measurement. Configuration can be loaded from environment variables or
//! constructed programmatically.

use std::env;

use crate::units::{BASE_DENSITY_DPI, DensityConverter};

/// Default bound on the extra measure passes a grid may run to settle
/// auto columns that depend on star rows.
pub const DEFAULT_MAX_MEASURE_PASSES: u32 = 4;

const ENV_DENSITY_DPI: &str = "UI_LAYOUT_DENSITY_DPI";
const ENV_MAX_MEASURE_PASSES: &str = "UI_LAYOUT_MAX_MEASURE_PASSES";
const ENV_LIMIT_TO_AVAILABLE: &str = "UI_LAYOUT_LIMIT_TO_AVAILABLE";

/// Runtime configuration for layout containers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Screen density used to convert device independent lengths
    pub density_dpi: u32,
    /// Upper bound on the grid's re-measure loop (minimum 1)
    pub max_measure_passes: u32,
    /// Whether new grids clamp their reported size to the available space
    pub limit_to_available_space: bool,
}

impl LayoutConfig {
    /// Construct a new `LayoutConfig` with explicit values.
    ///
    /// # Arguments
    ///
    /// * `density_dpi` - Screen density (zero falls back to the base density)
    /// * `max_measure_passes` - Re-measure bound (minimum 1)
    /// * `limit_to_available_space` - Default clamp behaviour for new grids
    #[inline]
    #[must_use]
    pub const fn new(density_dpi: u32, max_measure_passes: u32, limit_to_available_space: bool) -> Self {
        let density_dpi = if density_dpi == 0 {
            BASE_DENSITY_DPI
        } else {
            density_dpi
        };
        let max_measure_passes = if max_measure_passes < 1 {
            1
        } else {
            max_measure_passes
        };
        Self {
            density_dpi,
            max_measure_passes,
            limit_to_available_space,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `UI_LAYOUT_DENSITY_DPI`: Screen density (default: 160)
    /// - `UI_LAYOUT_MAX_MEASURE_PASSES`: Grid re-measure bound (default: 4)
    /// - `UI_LAYOUT_LIMIT_TO_AVAILABLE`: Set to "1" to clamp grid sizes (default: disabled)
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Malformed values are logged and replaced by their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let density_dpi = parse_or_default(&lookup, ENV_DENSITY_DPI, BASE_DENSITY_DPI);
        let max_measure_passes =
            parse_or_default(&lookup, ENV_MAX_MEASURE_PASSES, DEFAULT_MAX_MEASURE_PASSES);
        let limit_to_available_space = lookup(ENV_LIMIT_TO_AVAILABLE).as_deref() == Some("1");
        Self::new(density_dpi, max_measure_passes, limit_to_available_space)
    }

    /// Unit converter matching the configured density.
    #[inline]
    #[must_use]
    pub const fn unit_converter(&self) -> DensityConverter {
        DensityConverter::new(self.density_dpi)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(BASE_DENSITY_DPI, DEFAULT_MAX_MEASURE_PASSES, false)
    }
}

fn parse_or_default<F>(lookup: &F, key: &str, default: u32) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse::<u32>().unwrap_or_else(|_| {
            log::warn!("Ignoring malformed {key}={raw:?}, using {default}");
            default
        }),
    }
}

/// Everything a layout container needs from its surroundings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayoutContext {
    /// Device independent unit conversion
    pub units: DensityConverter,
    /// Runtime configuration
    pub config: LayoutConfig,
}

impl LayoutContext {
    /// Build a context from a configuration.
    pub const fn new(config: LayoutConfig) -> Self {
        Self {
            units: config.unit_converter(),
            config,
        }
    }
}

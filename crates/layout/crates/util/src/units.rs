//! Conversion from device independent units to pixels.

/// Density at which one device independent pixel equals one pixel.
pub const BASE_DENSITY_DPI: u32 = 160;

/// Converts user facing lengths to whole pixels.
pub trait UnitConverter {
    /// Convert a device independent length to pixels.
    fn dp_to_px(&self, value: f32) -> i32;

    /// Round a fractional pixel length to whole pixels.
    fn pxf_to_px(&self, value: f32) -> i32 {
        value.round() as i32
    }
}

/// Unit converter for a screen of a given pixel density.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DensityConverter {
    density_dpi: u32,
}

impl DensityConverter {
    /// Create a converter for the given density. A density of zero falls back
    /// to [`BASE_DENSITY_DPI`].
    pub const fn new(density_dpi: u32) -> Self {
        let density_dpi = if density_dpi == 0 {
            BASE_DENSITY_DPI
        } else {
            density_dpi
        };
        Self { density_dpi }
    }

    /// The density this converter was created for.
    pub const fn density_dpi(&self) -> u32 {
        self.density_dpi
    }
}

impl Default for DensityConverter {
    fn default() -> Self {
        Self::new(BASE_DENSITY_DPI)
    }
}

impl UnitConverter for DensityConverter {
    fn dp_to_px(&self, value: f32) -> i32 {
        let scale = f64::from(self.density_dpi) / f64::from(BASE_DENSITY_DPI);
        (f64::from(value) * scale).round() as i32
    }
}

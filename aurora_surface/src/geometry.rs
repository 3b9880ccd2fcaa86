//! Geometry value types for surface sizing
//!
//! Sizes are expressed in device pixels (`PixelSize`) and converted to
//! logical units (`LogicalSize`) through a display scale factor.

use std::fmt;

use crate::error::{Error, Result};

/// Size of a surface in device pixels
///
/// Immutable value; a resize replaces the whole size rather than mutating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelSize {
    /// Width in device pixels
    pub width: u32,
    /// Height in device pixels
    pub height: u32,
}

impl PixelSize {
    /// The empty size (0x0)
    pub const ZERO: PixelSize = PixelSize {
        width: 0,
        height: 0,
    };

    /// Create a new pixel size
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels (width * height), without overflow
    pub fn area(&self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    /// Derive the logical size for the given display scale
    pub fn to_logical(&self, scale: ScaleFactor) -> LogicalSize {
        LogicalSize {
            width: self.width as f32 / scale.get(),
            height: self.height as f32 / scale.get(),
        }
    }
}

impl fmt::Display for PixelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Size in logical (scale-independent) units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogicalSize {
    /// Width in logical units
    pub width: f32,
    /// Height in logical units
    pub height: f32,
}

/// Display scale factor (backing-store scale)
///
/// Always positive and finite; construction validates the raw value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor(f32);

impl ScaleFactor {
    /// Scale factor of 1.0 (no scaling)
    pub const IDENTITY: ScaleFactor = ScaleFactor(1.0);

    /// Create a validated scale factor
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not finite or not strictly positive.
    pub fn new(value: f32) -> Result<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(Error::InvalidState(format!(
                "invalid scale factor: {}",
                value
            )));
        }
        Ok(Self(value))
    }

    /// The raw scale value
    pub fn get(&self) -> f32 {
        self.0
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;

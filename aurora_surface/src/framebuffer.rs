//! Framebuffer descriptor for software-rendered frames
//!
//! A `Framebuffer` describes externally-owned pixel memory for one frame.
//! Ownership stays with the caller for the duration of the call; the borrow
//! makes it impossible for a render target to retain it past presentation.

use std::fmt;

use crate::error::PresentError;
use crate::geometry::PixelSize;

/// Pixel format of a surface or framebuffer
///
/// Both formats are 32-bit with 8 bits per channel; they differ only in the
/// in-memory channel order.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// Red, green, blue, alpha byte order
    R8G8B8A8_UNORM,
    /// Blue, green, red, alpha byte order
    B8G8R8A8_UNORM,
}

impl PixelFormat {
    /// Bytes per pixel for this format
    pub const fn bytes_per_pixel(self) -> usize {
        4
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelFormat::R8G8B8A8_UNORM => write!(f, "R8G8B8A8_UNORM"),
            PixelFormat::B8G8R8A8_UNORM => write!(f, "B8G8R8A8_UNORM"),
        }
    }
}

/// Externally-owned pixel memory for one software-rendered frame
///
/// The render target copies the referenced pixels into its backing surface
/// during presentation and never holds on to the slice afterwards.
#[derive(Debug, Clone, Copy)]
pub struct Framebuffer<'a> {
    /// Raw pixel bytes, row-major
    pub data: &'a [u8],
    /// Frame dimensions in device pixels
    pub size: PixelSize,
    /// Bytes per row (may exceed width * bytes_per_pixel for padded rows)
    pub stride: usize,
    /// Channel order of `data`
    pub format: PixelFormat,
}

impl<'a> Framebuffer<'a> {
    /// Create a framebuffer descriptor with an explicit row stride
    pub fn new(data: &'a [u8], size: PixelSize, stride: usize, format: PixelFormat) -> Self {
        Self {
            data,
            size,
            stride,
            format,
        }
    }

    /// Create a framebuffer descriptor for tightly-packed rows
    pub fn packed(data: &'a [u8], size: PixelSize, format: PixelFormat) -> Self {
        let stride = size.width as usize * format.bytes_per_pixel();
        Self::new(data, size, stride, format)
    }

    /// Bytes of meaningful pixel data per row
    pub fn row_bytes(&self) -> usize {
        self.size.width as usize * self.format.bytes_per_pixel()
    }

    /// One row of pixels, without any stride padding
    ///
    /// Callers must validate the framebuffer first; `y` must be in range.
    pub fn row(&self, y: u32) -> &'a [u8] {
        let start = y as usize * self.stride;
        &self.data[start..start + self.row_bytes()]
    }

    /// Check that the descriptor is internally consistent
    ///
    /// # Errors
    ///
    /// Returns `PresentError::InvalidFramebuffer` if the frame is empty, the
    /// stride is smaller than a row, or the data slice is too short.
    pub fn validate(&self) -> std::result::Result<(), PresentError> {
        if self.size.is_empty() {
            return Err(PresentError::InvalidFramebuffer(format!(
                "empty frame ({})",
                self.size
            )));
        }

        let row_bytes = self.row_bytes();
        if self.stride < row_bytes {
            return Err(PresentError::InvalidFramebuffer(format!(
                "stride {} is smaller than row length {}",
                self.stride, row_bytes
            )));
        }

        // The final row does not need stride padding after it.
        let required = (self.size.height as usize - 1)
            .saturating_mul(self.stride)
            .saturating_add(row_bytes);
        if self.data.len() < required {
            return Err(PresentError::InvalidFramebuffer(format!(
                "data is {} bytes but {} at {} requires {}",
                self.data.len(),
                self.size,
                self.stride,
                required
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "framebuffer_tests.rs"]
mod tests;

//! SoftwareRenderTarget - the CPU-raster render sink
//!
//! Accepts externally-rendered framebuffer contents and copies them into the
//! parent's backing surface, converting channel order when the frame and the
//! surface disagree.

use crate::error::{Error, PresentError, Result};
use crate::framebuffer::{Framebuffer, PixelFormat};
use crate::geometry::PixelSize;
use crate::layer::Layer;

/// CPU-backed render sink
///
/// Created lazily by `SurfaceRenderTarget::software_render_target()` and
/// sized to the surface dimensions current at creation. Presentation is
/// mediated by the parent's `set_sw_frame`.
pub struct SoftwareRenderTarget {
    size: PixelSize,
    format: PixelFormat,
}

impl SoftwareRenderTarget {
    /// Internal: created via `SurfaceRenderTarget::software_render_target()`
    pub(crate) fn new(size: PixelSize, format: PixelFormat) -> Self {
        Self { size, format }
    }

    /// Dimensions this sink is bound to, in device pixels
    pub fn size(&self) -> PixelSize {
        self.size
    }

    /// Pixel format of the surface this sink writes into
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Validate a framebuffer and copy it into the layer's backing store
    ///
    /// A rejected frame leaves the previously presented content untouched.
    pub(crate) fn present(&self, layer: &mut Layer, fb: &Framebuffer<'_>) -> Result<()> {
        fb.validate().map_err(Error::Present)?;

        if fb.size != self.size {
            return Err(Error::Present(PresentError::DimensionMismatch {
                expected: self.size,
                actual: fb.size,
            }));
        }

        layer.buffer_mut().write_frame(fb);
        layer.mark_presented();
        Ok(())
    }
}

#[cfg(test)]
#[path = "software_target_tests.rs"]
mod tests;

//! SurfaceAllocator trait and the default in-process allocator
//!
//! Backing surfaces come from an allocator so platform glue (or a test) can
//! substitute its own allocation policy; `SystemAllocator` is the default.

use crate::error::{Error, Result};
use crate::framebuffer::PixelFormat;
use crate::geometry::PixelSize;
use crate::surface::buffer::{SurfaceBuffer, SurfaceUsage};

/// Row alignment for allocated surfaces, in bytes
///
/// Matches the alignment platform surface buffers typically use so a real
/// backend can adopt the same strides.
pub const ROW_ALIGNMENT: usize = 64;

/// Upper bound on either surface dimension accepted by `SystemAllocator`
pub const MAX_SURFACE_DIMENSION: u32 = 16384;

/// Descriptor for allocating a surface buffer
#[derive(Debug, Clone, Copy)]
pub struct SurfaceDesc {
    /// Requested dimensions in device pixels
    pub size: PixelSize,
    /// Pixel channel order
    pub format: PixelFormat,
    /// Usage mask to record on the buffer
    pub usage: SurfaceUsage,
}

/// Allocator for surface backing stores
///
/// Implemented by the default `SystemAllocator`; tests inject failing
/// implementations to exercise allocation-error paths.
pub trait SurfaceAllocator: Send + Sync {
    /// Allocate a zeroed surface buffer
    ///
    /// # Errors
    ///
    /// Returns `Error::SurfaceAllocation` if the request cannot be satisfied.
    fn allocate(&self, desc: &SurfaceDesc) -> Result<SurfaceBuffer>;
}

/// Default allocator backed by process memory
#[derive(Debug, Clone)]
pub struct SystemAllocator {
    max_dimension: u32,
}

impl SystemAllocator {
    /// Create an allocator with the default dimension limit
    pub fn new() -> Self {
        Self {
            max_dimension: MAX_SURFACE_DIMENSION,
        }
    }

    /// Create an allocator with a custom dimension limit
    pub fn with_max_dimension(max_dimension: u32) -> Self {
        Self { max_dimension }
    }
}

impl Default for SystemAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceAllocator for SystemAllocator {
    fn allocate(&self, desc: &SurfaceDesc) -> Result<SurfaceBuffer> {
        if desc.size.is_empty() {
            return Err(Error::SurfaceAllocation(format!(
                "cannot allocate a zero-sized surface ({})",
                desc.size
            )));
        }

        if desc.size.width > self.max_dimension || desc.size.height > self.max_dimension {
            return Err(Error::SurfaceAllocation(format!(
                "{} exceeds the maximum surface dimension {}",
                desc.size, self.max_dimension
            )));
        }

        let row_bytes = desc.size.width as usize * desc.format.bytes_per_pixel();
        let stride = row_bytes.div_ceil(ROW_ALIGNMENT) * ROW_ALIGNMENT;

        Ok(SurfaceBuffer::new(
            desc.size,
            desc.format,
            desc.usage,
            stride,
        ))
    }
}

#[cfg(test)]
#[path = "allocator_tests.rs"]
mod tests;

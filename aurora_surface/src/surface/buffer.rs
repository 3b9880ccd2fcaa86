//! SurfaceBuffer - owned pixel storage backing a compositable layer
//!
//! Rows are stride-aligned the way platform surface buffers are; pixels are
//! stored as 32-bit words so the whole buffer can be reinterpreted as bytes
//! for the compositor without copying.

use bitflags::bitflags;

use crate::framebuffer::{Framebuffer, PixelFormat};
use crate::geometry::PixelSize;

bitflags! {
    /// Usage mask recorded on a surface buffer at allocation
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SurfaceUsage: u32 {
        /// CPU-rasterized frames may be copied in
        const CPU_WRITE = 1 << 0;
        /// A GPU context may render into the surface
        const GPU_RENDER = 1 << 1;
        /// The compositor reads the surface contents
        const COMPOSITOR_READ = 1 << 2;
    }
}

impl Default for SurfaceUsage {
    fn default() -> Self {
        SurfaceUsage::CPU_WRITE | SurfaceUsage::GPU_RENDER | SurfaceUsage::COMPOSITOR_READ
    }
}

/// Owned backing store for one presentable surface
///
/// Allocated through a `SurfaceAllocator`; replaced wholesale on resize.
#[derive(Debug, Clone)]
pub struct SurfaceBuffer {
    size: PixelSize,
    format: PixelFormat,
    usage: SurfaceUsage,
    /// Bytes per row, aligned per the allocator (multiple of 4)
    stride: usize,
    /// Pixel words, `stride / 4` per row
    data: Vec<u32>,
}

impl SurfaceBuffer {
    /// Create a zeroed buffer (internal: allocators construct these)
    ///
    /// `stride` must be a multiple of 4 and at least `width * 4`.
    pub(crate) fn new(
        size: PixelSize,
        format: PixelFormat,
        usage: SurfaceUsage,
        stride: usize,
    ) -> Self {
        debug_assert!(stride % 4 == 0);
        debug_assert!(stride >= size.width as usize * format.bytes_per_pixel());
        let words = (stride / 4).saturating_mul(size.height as usize);
        Self {
            size,
            format,
            usage,
            stride,
            data: vec![0; words],
        }
    }

    /// An empty 0x0 buffer, used before the first resize attaches storage
    pub(crate) fn empty(format: PixelFormat) -> Self {
        Self {
            size: PixelSize::ZERO,
            format,
            usage: SurfaceUsage::default(),
            stride: 0,
            data: Vec::new(),
        }
    }

    /// Surface dimensions in device pixels
    pub fn size(&self) -> PixelSize {
        self.size
    }

    /// Channel order of the stored pixels
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Usage mask recorded at allocation
    pub fn usage(&self) -> SurfaceUsage {
        self.usage
    }

    /// Bytes per row including alignment padding
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Total storage size in bytes
    pub fn byte_len(&self) -> usize {
        self.data.len() * 4
    }

    /// The whole buffer as raw bytes (rows are `stride` bytes apart)
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// One row of meaningful pixel bytes (stride padding excluded)
    pub fn row_bytes(&self, y: u32) -> &[u8] {
        let start = y as usize * self.stride;
        let len = self.size.width as usize * self.format.bytes_per_pixel();
        &self.as_bytes()[start..start + len]
    }

    /// The pixel at (x, y) in this buffer's channel order
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let word = self.data[y as usize * (self.stride / 4) + x as usize];
        word.to_ne_bytes()
    }

    /// Copy a validated framebuffer in, converting channel order if needed
    ///
    /// The frame must already match this buffer's dimensions; both the frame
    /// stride and the surface stride are honored.
    pub(crate) fn write_frame(&mut self, fb: &Framebuffer<'_>) {
        debug_assert_eq!(fb.size, self.size);

        let width = self.size.width as usize;
        let words_per_row = self.stride / 4;
        let swizzle = fb.format != self.format;

        for y in 0..self.size.height {
            let src = fb.row(y);
            let start = y as usize * words_per_row;
            let dst = &mut self.data[start..start + width];
            for (x, out) in dst.iter_mut().enumerate() {
                let mut px = [src[x * 4], src[x * 4 + 1], src[x * 4 + 2], src[x * 4 + 3]];
                if swizzle {
                    // R8G8B8A8 <-> B8G8R8A8 differ only in the first and third channel
                    px.swap(0, 2);
                }
                *out = u32::from_ne_bytes(px);
            }
        }
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;

//! Layer - the compositable surface handle
//!
//! A layer is owned by its render target and handed to the compositor by
//! reference only. The compositor reads pixel contents and polls the
//! presentation generation; it never mutates the layer.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::framebuffer::PixelFormat;
use crate::geometry::{LogicalSize, PixelSize, ScaleFactor};
use crate::surface::SurfaceBuffer;

/// Compositable layer owned by a render target
///
/// Created at target construction with an empty 0x0 buffer; the first
/// successful resize attaches real storage. After a resize completes the
/// layer always reflects the new dimensions (it is never stale).
#[derive(Debug)]
pub struct Layer {
    buffer: SurfaceBuffer,
    scale: ScaleFactor,
    /// Bumped once per presented frame; shared with the GL sub-target so a
    /// GPU frame submission can mark new content without touching the layer
    generation: Arc<AtomicU64>,
}

impl Layer {
    /// Create a layer with no attached storage (internal)
    pub(crate) fn new(format: PixelFormat) -> Self {
        Self {
            buffer: SurfaceBuffer::empty(format),
            scale: ScaleFactor::IDENTITY,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Backing dimensions in device pixels
    pub fn size(&self) -> PixelSize {
        self.buffer.size()
    }

    /// Display scale factor of the current backing store
    pub fn scale(&self) -> ScaleFactor {
        self.scale
    }

    /// Logical size derived from the backing pixels and scale
    pub fn logical_size(&self) -> LogicalSize {
        self.buffer.size().to_logical(self.scale)
    }

    /// Pixel format of the backing store
    pub fn format(&self) -> PixelFormat {
        self.buffer.format()
    }

    /// Presentation generation
    ///
    /// Increments once per presented frame (software copy or GPU frame
    /// submission). Safe to poll from a compositor thread.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// The presentable surface contents
    pub fn contents(&self) -> &SurfaceBuffer {
        &self.buffer
    }

    /// Attach a freshly allocated backing store (internal: resize path)
    pub(crate) fn attach(&mut self, buffer: SurfaceBuffer, scale: ScaleFactor) {
        self.buffer = buffer;
        self.scale = scale;
    }

    /// Mutable access to the backing store (internal: software present path)
    pub(crate) fn buffer_mut(&mut self) -> &mut SurfaceBuffer {
        &mut self.buffer
    }

    /// Clone of the shared generation counter (internal: GL sub-target)
    pub(crate) fn generation_counter(&self) -> Arc<AtomicU64> {
        Arc::clone(&self.generation)
    }

    /// Record that a new frame was presented (internal)
    pub(crate) fn mark_presented(&self) {
        self.generation.fetch_add(1, Ordering::Release);
    }
}

#[cfg(test)]
#[path = "layer_tests.rs"]
mod tests;

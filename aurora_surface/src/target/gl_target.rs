//! GlSurfaceRenderTarget - the GPU-accelerated render sink
//!
//! Bound to the caller-supplied graphics context and sized to the parent
//! surface at creation. The actual draw calls belong to the host graphics
//! stack; this sink manages binding, fencing, and presentation bookkeeping.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::context::GraphicsContext;
use crate::error::{Error, Result};
use crate::geometry::{PixelSize, ScaleFactor};
use crate::surface_trace;

const SOURCE: &str = "aurora::GlSurfaceRenderTarget";

/// GPU-backed render sink
///
/// Created lazily by `SurfaceRenderTarget::gl_render_target()`. A resize of
/// the parent invalidates the sink; request it again to rebind to the new
/// dimensions.
pub struct GlSurfaceRenderTarget {
    context: Arc<dyn GraphicsContext>,
    size: PixelSize,
    scale: ScaleFactor,
    /// Shared with the parent layer; bumped when a GPU frame lands
    generation: Arc<AtomicU64>,
    frame_in_flight: bool,
}

impl GlSurfaceRenderTarget {
    /// Internal: created via `SurfaceRenderTarget::gl_render_target()`
    pub(crate) fn new(
        context: Arc<dyn GraphicsContext>,
        size: PixelSize,
        scale: ScaleFactor,
        generation: Arc<AtomicU64>,
    ) -> Self {
        Self {
            context,
            size,
            scale,
            generation,
            frame_in_flight: false,
        }
    }

    /// Dimensions this sink is bound to, in device pixels
    pub fn size(&self) -> PixelSize {
        self.size
    }

    /// Display scale this sink is bound to
    pub fn scale(&self) -> ScaleFactor {
        self.scale
    }

    /// Whether a frame is currently open
    pub fn frame_in_flight(&self) -> bool {
        self.frame_in_flight
    }

    /// Begin a GPU frame: re-validate the context and make it current
    ///
    /// # Errors
    ///
    /// - `Error::ContextUnavailable` if the context reports invalid or
    ///   cannot be made current.
    /// - `Error::InvalidState` if a frame is already open.
    pub fn begin_frame(&mut self) -> Result<()> {
        if self.frame_in_flight {
            return Err(Error::InvalidState(
                "begin_frame called while a frame is already in flight".to_string(),
            ));
        }
        if !self.context.is_valid() {
            return Err(Error::ContextUnavailable(
                "graphics context lost before begin_frame".to_string(),
            ));
        }

        self.context.make_current()?;
        self.frame_in_flight = true;
        surface_trace!(SOURCE, "GPU frame opened on {}", self.size);
        Ok(())
    }

    /// End the GPU frame: flush the context and publish the new contents
    ///
    /// The GPU wrote the surface directly, so finishing the frame only has
    /// to fence and bump the layer's presentation generation.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidState` if no frame is open, or the context's
    /// flush error.
    pub fn end_frame(&mut self) -> Result<()> {
        if !self.frame_in_flight {
            return Err(Error::InvalidState(
                "end_frame called without a matching begin_frame".to_string(),
            ));
        }

        self.context.flush()?;
        self.frame_in_flight = false;
        self.generation.fetch_add(1, Ordering::Release);
        surface_trace!(SOURCE, "GPU frame presented on {}", self.size);
        Ok(())
    }
}

#[cfg(test)]
#[path = "gl_target_tests.rs"]
mod tests;

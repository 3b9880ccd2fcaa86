//! SurfaceRenderTarget - the concrete render target over a surface buffer
//!
//! Implements `RenderTarget` atop an in-process surface buffer (the stand-in
//! for a platform pixel-buffer surface) and multiplexes between two render
//! sinks: a GPU sub-target bound to the supplied graphics context and a
//! software sub-target fed through `set_sw_frame`.

use std::sync::Arc;

use crate::context::GraphicsContext;
use crate::error::{Error, PresentError, Result};
use crate::framebuffer::{Framebuffer, PixelFormat};
use crate::geometry::{PixelSize, ScaleFactor};
use crate::layer::Layer;
use crate::surface::{SurfaceAllocator, SurfaceDesc, SurfaceUsage, SystemAllocator};
use crate::target::gl_target::GlSurfaceRenderTarget;
use crate::target::render_target::RenderTarget;
use crate::target::software_target::SoftwareRenderTarget;
use crate::{surface_debug, surface_error, surface_trace};

const SOURCE: &str = "aurora::SurfaceRenderTarget";

/// Target lifecycle states
///
/// `Uninitialized -> Ready -> (Resizing -> Ready)* -> Disposed`; the
/// Resizing step is internal to a `resize` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TargetState {
    /// Constructed, no backing surface attached yet
    Uninitialized,
    /// A backing surface is attached; frames may be presented
    Ready,
    /// A resize is reallocating the backing surface
    Resizing,
    /// Torn down; mutating operations fail, the layer stays readable
    Disposed,
}

/// The two render sinks, at most one cached at a time
///
/// Mutual exclusivity per frame is a usage convention; modeling the sinks as
/// a tagged union keeps the cached one unambiguous.
enum RenderSink {
    Gl(GlSurfaceRenderTarget),
    Software(SoftwareRenderTarget),
}

/// Configuration for a surface render target
#[derive(Debug, Clone, Copy)]
pub struct SurfaceTargetConfig {
    /// Pixel format of allocated surfaces
    pub format: PixelFormat,
    /// Usage mask recorded on allocated surfaces
    pub usage: SurfaceUsage,
}

impl Default for SurfaceTargetConfig {
    fn default() -> Self {
        Self {
            format: PixelFormat::R8G8B8A8_UNORM,
            usage: SurfaceUsage::default(),
        }
    }
}

/// Render target backed by an in-process surface buffer
///
/// Constructed against an optional caller-owned graphics context (pass
/// `None` when GPU rendering is disabled; only the software path is
/// available then). The target never manages the context's lifetime.
pub struct SurfaceRenderTarget {
    context: Option<Arc<dyn GraphicsContext>>,
    allocator: Arc<dyn SurfaceAllocator>,
    config: SurfaceTargetConfig,
    layer: Layer,
    sink: Option<RenderSink>,
    state: TargetState,
}

impl SurfaceRenderTarget {
    /// Create a target bound to an optional caller-owned graphics context
    ///
    /// The target starts uninitialized; call `resize` to attach a backing
    /// surface before presenting frames.
    pub fn new(context: Option<Arc<dyn GraphicsContext>>, config: SurfaceTargetConfig) -> Self {
        Self::with_allocator(context, config, Arc::new(SystemAllocator::new()))
    }

    /// Create a target with a custom surface allocator
    ///
    /// # Arguments
    ///
    /// * `context` - Caller-owned GPU context, or None for software-only use
    /// * `config` - Surface format and usage configuration
    /// * `allocator` - Allocation policy for backing surfaces
    pub fn with_allocator(
        context: Option<Arc<dyn GraphicsContext>>,
        config: SurfaceTargetConfig,
        allocator: Arc<dyn SurfaceAllocator>,
    ) -> Self {
        surface_debug!(
            SOURCE,
            "created (format {}, context {})",
            config.format,
            if context.is_some() { "bound" } else { "none" }
        );
        Self {
            context,
            allocator,
            config,
            layer: Layer::new(config.format),
            sink: None,
            state: TargetState::Uninitialized,
        }
    }

    /// Whether a backing surface is attached and frames may be presented
    pub fn is_ready(&self) -> bool {
        self.state == TargetState::Ready
    }

    /// Whether the target has been disposed
    pub fn is_disposed(&self) -> bool {
        self.state == TargetState::Disposed
    }

    fn ensure_ready(&self, operation: &str) -> Result<()> {
        match self.state {
            TargetState::Ready => Ok(()),
            TargetState::Uninitialized => Err(Error::InvalidState(format!(
                "{} called before the first resize",
                operation
            ))),
            TargetState::Resizing => Err(Error::Present(PresentError::TargetBusy)),
            TargetState::Disposed => Err(Error::InvalidState(format!(
                "{} called on a disposed target",
                operation
            ))),
        }
    }

    fn gl_frame_in_flight(&self) -> bool {
        matches!(&self.sink, Some(RenderSink::Gl(gl)) if gl.frame_in_flight())
    }

    /// Lazily create (or return the cached) GPU render sink
    ///
    /// The sink is bound to the current surface dimensions; a resize
    /// invalidates it. Requesting the GL sink replaces a cached software
    /// sink.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidState` before the first resize or after disposal.
    /// - `Error::ContextUnavailable` if no context was supplied or the
    ///   bound context reports invalid.
    pub fn gl_render_target(&mut self) -> Result<&mut GlSurfaceRenderTarget> {
        self.ensure_ready("gl_render_target")?;

        let context = match &self.context {
            Some(ctx) if ctx.is_valid() => Arc::clone(ctx),
            Some(_) => {
                return Err(Error::ContextUnavailable(
                    "bound graphics context reports invalid".to_string(),
                ))
            }
            None => {
                return Err(Error::ContextUnavailable(
                    "no graphics context was supplied".to_string(),
                ))
            }
        };

        if !matches!(self.sink, Some(RenderSink::Gl(_))) {
            if self.sink.is_some() {
                surface_debug!(SOURCE, "replacing software sink with GL sink");
            }
            self.sink = Some(RenderSink::Gl(GlSurfaceRenderTarget::new(
                context,
                self.layer.size(),
                self.layer.scale(),
                self.layer.generation_counter(),
            )));
            surface_debug!(SOURCE, "GL sink bound to {}", self.layer.size());
        }

        match self.sink.as_mut() {
            Some(RenderSink::Gl(gl)) => Ok(gl),
            _ => Err(Error::InvalidState(
                "GL sink unavailable after creation".to_string(),
            )),
        }
    }

    /// Lazily create (or return the cached) software render sink
    ///
    /// Sized to the current surface dimensions; a resize invalidates it.
    /// Requesting the software sink replaces a cached GL sink.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidState` before the first resize or after
    /// disposal.
    pub fn software_render_target(&mut self) -> Result<&mut SoftwareRenderTarget> {
        self.ensure_ready("software_render_target")?;
        self.ensure_software_sink();

        match self.sink.as_mut() {
            Some(RenderSink::Software(sw)) => Ok(sw),
            _ => Err(Error::InvalidState(
                "software sink unavailable after creation".to_string(),
            )),
        }
    }

    fn ensure_software_sink(&mut self) {
        if !matches!(self.sink, Some(RenderSink::Software(_))) {
            if self.sink.is_some() {
                surface_debug!(SOURCE, "replacing GL sink with software sink");
            }
            self.sink = Some(RenderSink::Software(SoftwareRenderTarget::new(
                self.layer.size(),
                self.config.format,
            )));
            surface_debug!(SOURCE, "software sink bound to {}", self.layer.size());
        }
    }

    /// Present an externally-rendered framebuffer as the current frame
    ///
    /// Copies the frame into the backing surface (converting channel order
    /// if needed) and bumps the layer's presentation generation. A rejected
    /// frame leaves the previously presented content visible.
    ///
    /// # Errors
    ///
    /// `Error::Present` with:
    /// - `SurfaceUnavailable` before the first resize or after disposal
    /// - `TargetBusy` while a GPU frame is in flight
    /// - `DimensionMismatch` if the frame does not match the surface size
    /// - `InvalidFramebuffer` if the descriptor is inconsistent
    pub fn set_sw_frame(&mut self, fb: &Framebuffer<'_>) -> Result<()> {
        match self.state {
            TargetState::Ready => {}
            TargetState::Resizing => {
                return Err(Error::Present(PresentError::TargetBusy));
            }
            TargetState::Uninitialized | TargetState::Disposed => {
                return Err(Error::Present(PresentError::SurfaceUnavailable));
            }
        }

        if self.gl_frame_in_flight() {
            return Err(Error::Present(PresentError::TargetBusy));
        }

        self.ensure_software_sink();

        let result = match &self.sink {
            Some(RenderSink::Software(sw)) => sw.present(&mut self.layer, fb),
            _ => Err(Error::Present(PresentError::SurfaceUnavailable)),
        };

        match &result {
            Ok(()) => {
                surface_trace!(
                    SOURCE,
                    "software frame presented on {} (generation {})",
                    self.layer.size(),
                    self.layer.generation()
                );
            }
            Err(err) => {
                surface_error!(SOURCE, "software frame rejected: {}", err);
            }
        }
        result
    }

    /// Tear the target down
    ///
    /// Drops the cached sink and refuses further mutating operations. The
    /// layer remains readable so a compositor holding the handle does not
    /// observe a dangling surface. Idempotent.
    pub fn dispose(&mut self) {
        if self.state == TargetState::Disposed {
            return;
        }
        self.sink = None;
        self.state = TargetState::Disposed;
        surface_debug!(SOURCE, "disposed ({})", self.layer.size());
    }
}

impl RenderTarget for SurfaceRenderTarget {
    fn resize(&mut self, size: PixelSize, scale: ScaleFactor) -> Result<()> {
        if self.state == TargetState::Disposed {
            return Err(Error::InvalidState(
                "resize called on a disposed target".to_string(),
            ));
        }

        if self.gl_frame_in_flight() {
            return Err(Error::Present(PresentError::TargetBusy));
        }

        // No-op resize keeps the surface and any cached sink valid.
        if self.state == TargetState::Ready
            && size == self.layer.size()
            && scale == self.layer.scale()
        {
            surface_trace!(SOURCE, "resize to current {} ignored", size);
            return Ok(());
        }

        let previous = self.state;
        self.state = TargetState::Resizing;

        let desc = SurfaceDesc {
            size,
            format: self.config.format,
            usage: self.config.usage,
        };

        match self.allocator.allocate(&desc) {
            Ok(buffer) => {
                self.layer.attach(buffer, scale);
                self.sink = None;
                self.state = TargetState::Ready;
                surface_debug!(SOURCE, "resized to {} at scale {}", size, scale);
                Ok(())
            }
            Err(err) => {
                // Keep the previous surface; the layer must not go stale.
                self.state = previous;
                surface_error!(SOURCE, "resize to {} failed: {}", size, err);
                Err(err)
            }
        }
    }

    fn layer(&self) -> &Layer {
        &self.layer
    }
}

#[cfg(test)]
#[path = "surface_render_target_tests.rs"]
mod tests;

/*!
# Aurora Surface

Render-target layer for the Aurora toolkit's native backend.

This crate provides the seam between the toolkit's portable rendering
abstraction and a native windowing/graphics API: a render target that owns a
presentable surface buffer, supports resizing with a display scale factor,
exposes a compositable layer, and multiplexes between two rendering paths —
a GPU sub-target bound to a caller-supplied graphics context and a software
sub-target fed with externally-rendered framebuffers.

## Architecture

- **RenderTarget**: trait contract for resize + layer access
- **SurfaceRenderTarget**: concrete target over a surface buffer
- **GlSurfaceRenderTarget / SoftwareRenderTarget**: the two render sinks
- **GraphicsContext / SurfaceAllocator**: traits at the host seams
- **TargetManager**: named registry the compositor iterates

The windowing system, the GPU driver, and the compositor itself are external
collaborators; they plug in through the seam traits.
*/

// Internal modules
mod error;
pub mod log;
pub mod context;
pub mod geometry;
pub mod framebuffer;
pub mod layer;
pub mod surface;
pub mod target;

// Mock graphics context for tests (no GPU required)
#[cfg(test)]
pub mod mock_context;

// Main aurora namespace module
pub mod aurora {
    // Error types
    pub use crate::error::{Error, PresentError, Result};

    // Host seam traits
    pub use crate::context::GraphicsContext;

    // Value types
    pub use crate::framebuffer::{Framebuffer, PixelFormat};
    pub use crate::geometry::{LogicalSize, PixelSize, ScaleFactor};

    // Compositable layer
    pub use crate::layer::Layer;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{
            log, log_detailed, reset_logger, set_logger, DefaultLogger, LogEntry, LogSeverity,
            Logger,
        };
    }

    // Surface sub-module (allocation and pixel storage)
    pub mod surface {
        pub use crate::surface::{
            SurfaceAllocator, SurfaceBuffer, SurfaceDesc, SurfaceUsage, SystemAllocator,
            MAX_SURFACE_DIMENSION, ROW_ALIGNMENT,
        };
    }

    // Target sub-module (render targets and sinks)
    pub mod target {
        pub use crate::target::{
            GlSurfaceRenderTarget, RenderTarget, SoftwareRenderTarget, SurfaceRenderTarget,
            SurfaceTargetConfig, TargetKey, TargetManager,
        };
    }
}

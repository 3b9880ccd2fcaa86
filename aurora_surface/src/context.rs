//! Graphics context seam
//!
//! The GPU context is owned by the host graphics stack; render targets only
//! borrow it through this trait and never manage its lifetime.

use crate::error::Result;

/// Opaque handle to a caller-owned GPU context
///
/// Implemented by the embedding application or windowing glue (an OpenGL
/// context, an ANGLE/EGL context, ...). A `SurfaceRenderTarget` re-validates
/// the context before every GPU frame and fails with
/// `Error::ContextUnavailable` once the context reports invalid.
pub trait GraphicsContext: Send + Sync {
    /// Whether the context is still usable
    ///
    /// A context becomes invalid when the driver is lost or the host tears
    /// it down; targets poll this before binding.
    fn is_valid(&self) -> bool;

    /// Make the context current on the calling thread
    fn make_current(&self) -> Result<()>;

    /// Flush pending GPU work so the surface contents are observable
    fn flush(&self) -> Result<()>;
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;

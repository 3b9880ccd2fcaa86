//! RenderTarget trait - the presentable-surface contract

use crate::error::Result;
use crate::geometry::{PixelSize, ScaleFactor};
use crate::layer::Layer;

/// A presentable drawable surface
///
/// Owns a backing surface, supports reconfiguration to new pixel dimensions
/// and display scale, and exposes a compositable layer for presentation.
/// All mutating calls must come from one rendering thread or be externally
/// serialized; the layer may be read concurrently by a compositor.
pub trait RenderTarget: Send + Sync {
    /// Reconfigure the backing surface to the given device-pixel dimensions
    /// and display scale
    ///
    /// Safe to call between frames. Invalidates any cached render sink sized
    /// for the previous dimensions; sinks must be re-created before the next
    /// frame submission.
    ///
    /// # Errors
    ///
    /// - `Error::SurfaceAllocation` if the backing store cannot be
    ///   allocated; the previous surface stays attached.
    /// - `Error::Present(PresentError::TargetBusy)` if a frame is in flight.
    fn resize(&mut self, size: PixelSize, scale: ScaleFactor) -> Result<()>;

    /// The current compositable layer
    ///
    /// Side-effect-free; never returns a stale layer after a resize
    /// completes.
    fn layer(&self) -> &Layer;
}

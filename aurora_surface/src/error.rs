//! Error types for the Aurora surface layer
//!
//! This module defines the error types used throughout the crate,
//! covering surface allocation, graphics-context availability,
//! target lifecycle, and frame presentation.

use std::fmt;

use crate::geometry::PixelSize;

/// Result type for Aurora surface operations
pub type Result<T> = std::result::Result<T, Error>;

/// Aurora surface errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The platform refused to allocate a backing surface of the requested size
    SurfaceAllocation(String),

    /// No graphics context was supplied, or the bound context is invalid
    ContextUnavailable(String),

    /// Operation called in the wrong target state (uninitialized, disposed, ...)
    InvalidState(String),

    /// Frame presentation was rejected; prior presented content is left intact
    Present(PresentError),
}

/// Presentation failure reasons for `set_sw_frame` and GL frame submission
#[derive(Debug, Clone, PartialEq)]
pub enum PresentError {
    /// The framebuffer dimensions do not match the current surface size
    DimensionMismatch {
        /// Current surface size in device pixels
        expected: PixelSize,
        /// Size of the rejected framebuffer
        actual: PixelSize,
    },

    /// The framebuffer description is internally inconsistent (stride/length)
    InvalidFramebuffer(String),

    /// A frame is in flight or the surface is mid-reconfiguration; callers must fence
    TargetBusy,

    /// The target has no presentable surface (never resized, or torn down)
    SurfaceUnavailable,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SurfaceAllocation(msg) => write!(f, "Surface allocation failed: {}", msg),
            Error::ContextUnavailable(msg) => write!(f, "Graphics context unavailable: {}", msg),
            Error::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Error::Present(err) => write!(f, "Present failed: {}", err),
        }
    }
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresentError::DimensionMismatch { expected, actual } => {
                write!(f, "framebuffer is {} but surface is {}", actual, expected)
            }
            PresentError::InvalidFramebuffer(msg) => {
                write!(f, "invalid framebuffer: {}", msg)
            }
            PresentError::TargetBusy => {
                write!(f, "target is busy with an in-flight frame")
            }
            PresentError::SurfaceUnavailable => {
                write!(f, "no presentable surface is attached")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<PresentError> for Error {
    fn from(err: PresentError) -> Self {
        Error::Present(err)
    }
}

// ===== ERROR MACROS =====

/// Construct an `Error::InvalidState`, logging it through the global logger
/// with file:line information.
#[macro_export]
macro_rules! surface_err {
    ($source:expr, $($arg:tt)*) => {{
        $crate::surface_error!($source, $($arg)*);
        $crate::aurora::Error::InvalidState(format!($($arg)*))
    }};
}

/// Log and return an `Error::InvalidState` from the current function.
#[macro_export]
macro_rules! surface_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::surface_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

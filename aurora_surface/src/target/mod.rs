//! Target module - render target trait, surface-backed implementation,
//! render sinks, and the named target registry

// Module declarations
pub mod render_target;
pub mod surface_render_target;
pub mod gl_target;
pub mod software_target;
pub mod target_manager;

// Re-export target types
pub use render_target::*;
pub use surface_render_target::*;
pub use gl_target::*;
pub use software_target::*;
pub use target_manager::*;

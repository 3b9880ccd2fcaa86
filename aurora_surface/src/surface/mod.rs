//! Surface module - backing-store allocation and pixel storage

// Module declarations
pub mod allocator;
pub mod buffer;

// Re-export surface types
pub use allocator::*;
pub use buffer::*;

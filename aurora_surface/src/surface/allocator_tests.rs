//! Tests for surface allocation

use super::*;
use crate::framebuffer::PixelFormat;
use crate::geometry::PixelSize;
use crate::surface::buffer::SurfaceUsage;

fn desc(width: u32, height: u32) -> SurfaceDesc {
    SurfaceDesc {
        size: PixelSize::new(width, height),
        format: PixelFormat::R8G8B8A8_UNORM,
        usage: SurfaceUsage::default(),
    }
}

// ============================================================================
// Tests: Successful allocation
// ============================================================================

#[test]
fn test_allocate_basic() {
    let buf = SystemAllocator::new().allocate(&desc(800, 600)).unwrap();
    assert_eq!(buf.size(), PixelSize::new(800, 600));
    assert_eq!(buf.format(), PixelFormat::R8G8B8A8_UNORM);
}

#[test]
fn test_allocate_aligns_stride() {
    // 10 pixels = 40 bytes, rounded up to the 64-byte row alignment.
    let buf = SystemAllocator::new().allocate(&desc(10, 2)).unwrap();
    assert_eq!(buf.stride(), 64);
}

#[test]
fn test_allocate_exact_alignment_is_not_padded() {
    // 16 pixels = 64 bytes exactly.
    let buf = SystemAllocator::new().allocate(&desc(16, 1)).unwrap();
    assert_eq!(buf.stride(), 64);
}

#[test]
fn test_allocate_records_usage() {
    let mut d = desc(4, 4);
    d.usage = SurfaceUsage::CPU_WRITE | SurfaceUsage::COMPOSITOR_READ;
    let buf = SystemAllocator::new().allocate(&d).unwrap();
    assert!(!buf.usage().contains(SurfaceUsage::GPU_RENDER));
}

// ============================================================================
// Tests: Rejection
// ============================================================================

#[test]
fn test_allocate_rejects_zero_size() {
    let result = SystemAllocator::new().allocate(&desc(0, 600));
    assert!(matches!(result, Err(Error::SurfaceAllocation(_))));
}

#[test]
fn test_allocate_rejects_oversized() {
    let result = SystemAllocator::new().allocate(&desc(MAX_SURFACE_DIMENSION + 1, 100));
    assert!(matches!(result, Err(Error::SurfaceAllocation(_))));
}

#[test]
fn test_allocate_custom_limit() {
    let allocator = SystemAllocator::with_max_dimension(128);
    assert!(allocator.allocate(&desc(128, 128)).is_ok());
    assert!(allocator.allocate(&desc(129, 16)).is_err());
}

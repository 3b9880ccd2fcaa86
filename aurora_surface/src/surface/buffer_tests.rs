//! Tests for SurfaceBuffer storage and frame copies

use super::*;
use crate::framebuffer::{Framebuffer, PixelFormat};
use crate::geometry::PixelSize;

fn buffer(width: u32, height: u32, format: PixelFormat) -> SurfaceBuffer {
    // 64-byte aligned stride, matching SystemAllocator.
    let row_bytes = width as usize * 4;
    let stride = row_bytes.div_ceil(64) * 64;
    SurfaceBuffer::new(
        PixelSize::new(width, height),
        format,
        SurfaceUsage::default(),
        stride,
    )
}

// ============================================================================
// Tests: Storage layout
// ============================================================================

#[test]
fn test_buffer_is_zeroed() {
    let buf = buffer(8, 8, PixelFormat::R8G8B8A8_UNORM);
    assert!(buf.as_bytes().iter().all(|&b| b == 0));
}

#[test]
fn test_buffer_byte_len_includes_stride_padding() {
    let buf = buffer(8, 4, PixelFormat::R8G8B8A8_UNORM);
    assert_eq!(buf.stride(), 64);
    assert_eq!(buf.byte_len(), 64 * 4);
}

#[test]
fn test_empty_buffer() {
    let buf = SurfaceBuffer::empty(PixelFormat::B8G8R8A8_UNORM);
    assert_eq!(buf.size(), PixelSize::ZERO);
    assert_eq!(buf.byte_len(), 0);
    assert_eq!(buf.format(), PixelFormat::B8G8R8A8_UNORM);
}

#[test]
fn test_usage_default_covers_all_paths() {
    let usage = SurfaceUsage::default();
    assert!(usage.contains(SurfaceUsage::CPU_WRITE));
    assert!(usage.contains(SurfaceUsage::GPU_RENDER));
    assert!(usage.contains(SurfaceUsage::COMPOSITOR_READ));
}

// ============================================================================
// Tests: Frame copies
// ============================================================================

#[test]
fn test_write_frame_same_format() {
    let mut buf = buffer(2, 2, PixelFormat::R8G8B8A8_UNORM);
    let data: Vec<u8> = (0u8..16).collect();
    let fb = Framebuffer::packed(&data, PixelSize::new(2, 2), PixelFormat::R8G8B8A8_UNORM);

    buf.write_frame(&fb);

    assert_eq!(buf.pixel(0, 0), [0, 1, 2, 3]);
    assert_eq!(buf.pixel(1, 0), [4, 5, 6, 7]);
    assert_eq!(buf.pixel(0, 1), [8, 9, 10, 11]);
    assert_eq!(buf.pixel(1, 1), [12, 13, 14, 15]);
}

#[test]
fn test_write_frame_swizzles_between_formats() {
    let mut buf = buffer(1, 1, PixelFormat::B8G8R8A8_UNORM);
    let data = [10u8, 20, 30, 40]; // RGBA source
    let fb = Framebuffer::packed(&data, PixelSize::new(1, 1), PixelFormat::R8G8B8A8_UNORM);

    buf.write_frame(&fb);

    // Stored as BGRA: blue first, red third, alpha untouched.
    assert_eq!(buf.pixel(0, 0), [30, 20, 10, 40]);
}

#[test]
fn test_write_frame_honors_source_stride() {
    let mut buf = buffer(2, 2, PixelFormat::R8G8B8A8_UNORM);
    // 2 pixels per row but 16-byte stride; padding bytes are 0xFF.
    let mut data = vec![0xFFu8; 16 + 8];
    for (i, byte) in data.iter_mut().take(8).enumerate() {
        *byte = i as u8;
    }
    for (i, byte) in data.iter_mut().skip(16).enumerate() {
        *byte = 100 + i as u8;
    }
    let fb = Framebuffer::new(
        &data,
        PixelSize::new(2, 2),
        16,
        PixelFormat::R8G8B8A8_UNORM,
    );

    buf.write_frame(&fb);

    assert_eq!(buf.pixel(1, 0), [4, 5, 6, 7]);
    assert_eq!(buf.pixel(0, 1), [100, 101, 102, 103]);
}

#[test]
fn test_row_bytes_excludes_padding() {
    let mut buf = buffer(3, 2, PixelFormat::R8G8B8A8_UNORM);
    let data: Vec<u8> = (0u8..24).collect();
    let fb = Framebuffer::packed(&data, PixelSize::new(3, 2), PixelFormat::R8G8B8A8_UNORM);
    buf.write_frame(&fb);

    assert_eq!(buf.row_bytes(0).len(), 12);
    assert_eq!(buf.row_bytes(1), &data[12..24]);
}

//! Tests for the CPU render sink

use crate::error::{Error, PresentError};
use crate::framebuffer::{Framebuffer, PixelFormat};
use crate::geometry::{PixelSize, ScaleFactor};
use crate::layer::Layer;
use crate::surface::{SurfaceDesc, SurfaceUsage, SystemAllocator, SurfaceAllocator};
use crate::target::software_target::SoftwareRenderTarget;

fn layer(width: u32, height: u32) -> Layer {
    let mut layer = Layer::new(PixelFormat::R8G8B8A8_UNORM);
    let buffer = SystemAllocator::new()
        .allocate(&SurfaceDesc {
            size: PixelSize::new(width, height),
            format: PixelFormat::R8G8B8A8_UNORM,
            usage: SurfaceUsage::default(),
        })
        .unwrap();
    layer.attach(buffer, ScaleFactor::IDENTITY);
    layer
}

// ============================================================================
// Tests: Presentation
// ============================================================================

#[test]
fn test_present_copies_pixels() {
    let mut layer = layer(2, 1);
    let sink = SoftwareRenderTarget::new(PixelSize::new(2, 1), PixelFormat::R8G8B8A8_UNORM);

    let data = [1u8, 2, 3, 4, 5, 6, 7, 8];
    let fb = Framebuffer::packed(&data, PixelSize::new(2, 1), PixelFormat::R8G8B8A8_UNORM);
    sink.present(&mut layer, &fb).unwrap();

    assert_eq!(layer.contents().pixel(0, 0), [1, 2, 3, 4]);
    assert_eq!(layer.contents().pixel(1, 0), [5, 6, 7, 8]);
    assert_eq!(layer.generation(), 1);
}

#[test]
fn test_present_rejects_dimension_mismatch() {
    let mut layer = layer(4, 4);
    let sink = SoftwareRenderTarget::new(PixelSize::new(4, 4), PixelFormat::R8G8B8A8_UNORM);

    let data = vec![0u8; 2 * 2 * 4];
    let fb = Framebuffer::packed(&data, PixelSize::new(2, 2), PixelFormat::R8G8B8A8_UNORM);

    let err = sink.present(&mut layer, &fb).unwrap_err();
    assert_eq!(
        err,
        Error::Present(PresentError::DimensionMismatch {
            expected: PixelSize::new(4, 4),
            actual: PixelSize::new(2, 2),
        })
    );
    assert_eq!(layer.generation(), 0);
}

#[test]
fn test_present_rejects_invalid_framebuffer() {
    let mut layer = layer(4, 4);
    let sink = SoftwareRenderTarget::new(PixelSize::new(4, 4), PixelFormat::R8G8B8A8_UNORM);

    // Claims 4x4 but only holds one row.
    let data = vec![0u8; 16];
    let fb = Framebuffer::packed(&data, PixelSize::new(4, 4), PixelFormat::R8G8B8A8_UNORM);

    assert!(matches!(
        sink.present(&mut layer, &fb),
        Err(Error::Present(PresentError::InvalidFramebuffer(_)))
    ));
}

#[test]
fn test_rejected_present_preserves_previous_content() {
    let mut layer = layer(1, 1);
    let sink = SoftwareRenderTarget::new(PixelSize::new(1, 1), PixelFormat::R8G8B8A8_UNORM);

    let first = [9u8, 9, 9, 9];
    let fb = Framebuffer::packed(&first, PixelSize::new(1, 1), PixelFormat::R8G8B8A8_UNORM);
    sink.present(&mut layer, &fb).unwrap();

    let wrong = vec![0u8; 4 * 4 * 4];
    let bad = Framebuffer::packed(&wrong, PixelSize::new(4, 4), PixelFormat::R8G8B8A8_UNORM);
    assert!(sink.present(&mut layer, &bad).is_err());

    assert_eq!(layer.contents().pixel(0, 0), [9, 9, 9, 9]);
    assert_eq!(layer.generation(), 1);
}

// ============================================================================
// Tests: Accessors
// ============================================================================

#[test]
fn test_sink_reports_binding() {
    let sink = SoftwareRenderTarget::new(PixelSize::new(8, 8), PixelFormat::B8G8R8A8_UNORM);
    assert_eq!(sink.size(), PixelSize::new(8, 8));
    assert_eq!(sink.format(), PixelFormat::B8G8R8A8_UNORM);
}

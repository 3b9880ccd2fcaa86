//! Tests for the graphics context seam (via the mock context)

use crate::context::GraphicsContext;
use crate::mock_context::MockGraphicsContext;

// ============================================================================
// Tests: MockGraphicsContext
// ============================================================================

#[test]
fn test_mock_context_starts_valid() {
    let ctx = MockGraphicsContext::new();
    assert!(ctx.is_valid());
}

#[test]
fn test_mock_context_invalidate() {
    let ctx = MockGraphicsContext::new();
    ctx.invalidate();
    assert!(!ctx.is_valid());
}

#[test]
fn test_mock_context_counts_make_current() {
    let ctx = MockGraphicsContext::new();
    ctx.make_current().unwrap();
    ctx.make_current().unwrap();
    assert_eq!(ctx.make_current_calls(), 2);
}

#[test]
fn test_mock_context_make_current_failure_injection() {
    let ctx = MockGraphicsContext::new();
    ctx.fail_make_current(true);
    assert!(ctx.make_current().is_err());
    ctx.fail_make_current(false);
    assert!(ctx.make_current().is_ok());
}

#[test]
fn test_mock_context_counts_flush() {
    let ctx = MockGraphicsContext::new();
    ctx.flush().unwrap();
    assert_eq!(ctx.flush_calls(), 1);
}

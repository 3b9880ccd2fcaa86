//! Mock GraphicsContext for unit tests (no GPU required)
//!
//! Allows exercising the GL sub-target path without a real driver, including
//! context-loss and make-current failure injection.

#[cfg(test)]
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

#[cfg(test)]
use crate::context::GraphicsContext;
#[cfg(test)]
use crate::error::{Error, Result};

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockGraphicsContext {
    invalid: AtomicBool,
    fail_make_current: AtomicBool,
    make_current_calls: AtomicU32,
    flush_calls: AtomicU32,
}

#[cfg(test)]
impl MockGraphicsContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate context loss: is_valid() reports false from now on
    pub fn invalidate(&self) {
        self.invalid.store(true, Ordering::SeqCst);
    }

    /// Make subsequent make_current() calls fail
    pub fn fail_make_current(&self, fail: bool) {
        self.fail_make_current.store(fail, Ordering::SeqCst);
    }

    pub fn make_current_calls(&self) -> u32 {
        self.make_current_calls.load(Ordering::SeqCst)
    }

    pub fn flush_calls(&self) -> u32 {
        self.flush_calls.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
impl GraphicsContext for MockGraphicsContext {
    fn is_valid(&self) -> bool {
        !self.invalid.load(Ordering::SeqCst)
    }

    fn make_current(&self) -> Result<()> {
        self.make_current_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_make_current.load(Ordering::SeqCst) {
            return Err(Error::ContextUnavailable(
                "mock make_current failure".to_string(),
            ));
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.flush_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

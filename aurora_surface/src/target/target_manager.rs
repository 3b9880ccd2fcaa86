//! TargetManager - named registry of surface render targets
//!
//! Stores render targets under unique names with stable keys, giving the
//! compositor one place to iterate the layers it composites each frame.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

use crate::error::Result;
use crate::layer::Layer;
use crate::surface_bail;
use crate::target::render_target::RenderTarget;
use crate::target::surface_render_target::SurfaceRenderTarget;

new_key_type! {
    /// Stable key for a render target registered in a TargetManager
    ///
    /// Keys remain valid while the target is registered, even as other
    /// targets are added or removed.
    pub struct TargetKey;
}

/// Named registry of surface render targets
///
/// Multiple render targets can exist simultaneously (one per window or
/// popup). Targets are registered under unique names and addressed either
/// by name or by stable key.
pub struct TargetManager {
    targets: SlotMap<TargetKey, SurfaceRenderTarget>,
    by_name: FxHashMap<String, TargetKey>,
}

impl TargetManager {
    /// Create a new empty target manager
    pub fn new() -> Self {
        Self {
            targets: SlotMap::with_key(),
            by_name: FxHashMap::default(),
        }
    }

    /// Register a render target under a unique name
    ///
    /// Returns the stable key of the registered target.
    ///
    /// # Errors
    ///
    /// Returns an error if a render target with the same name already
    /// exists.
    pub fn register(&mut self, name: &str, target: SurfaceRenderTarget) -> Result<TargetKey> {
        if self.by_name.contains_key(name) {
            surface_bail!(
                "aurora::TargetManager",
                "render target '{}' already exists",
                name
            );
        }

        let key = self.targets.insert(target);
        self.by_name.insert(name.to_string(), key);
        Ok(key)
    }

    /// Get a render target by key
    pub fn render_target(&self, key: TargetKey) -> Option<&SurfaceRenderTarget> {
        self.targets.get(key)
    }

    /// Get a mutable render target by key
    pub fn render_target_mut(&mut self, key: TargetKey) -> Option<&mut SurfaceRenderTarget> {
        self.targets.get_mut(key)
    }

    /// Look up the key registered under a name
    pub fn key(&self, name: &str) -> Option<TargetKey> {
        self.by_name.get(name).copied()
    }

    /// Get a render target by name
    pub fn render_target_by_name(&self, name: &str) -> Option<&SurfaceRenderTarget> {
        self.key(name).and_then(|key| self.targets.get(key))
    }

    /// Get a mutable render target by name
    pub fn render_target_by_name_mut(&mut self, name: &str) -> Option<&mut SurfaceRenderTarget> {
        let key = self.key(name)?;
        self.targets.get_mut(key)
    }

    /// Remove a render target by name, disposing it
    ///
    /// Returns the removed target, or None if not found.
    pub fn remove(&mut self, name: &str) -> Option<SurfaceRenderTarget> {
        let key = self.by_name.remove(name)?;
        let mut target = self.targets.remove(key)?;
        target.dispose();
        Some(target)
    }

    /// Number of registered render targets
    pub fn render_target_count(&self) -> usize {
        self.targets.len()
    }

    /// Names of all registered render targets
    pub fn render_target_names(&self) -> Vec<&str> {
        self.by_name.keys().map(|name| name.as_str()).collect()
    }

    /// Iterate all compositable layers (compositor read path)
    pub fn layers(&self) -> impl Iterator<Item = (TargetKey, &Layer)> {
        self.targets.iter().map(|(key, target)| (key, target.layer()))
    }

    /// Remove all render targets, disposing each
    pub fn clear(&mut self) {
        for (_, target) in self.targets.iter_mut() {
            target.dispose();
        }
        self.targets.clear();
        self.by_name.clear();
    }
}

impl Default for TargetManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "target_manager_tests.rs"]
mod tests;

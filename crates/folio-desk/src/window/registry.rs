//! The window registry: the static table of descriptors.

use std::collections::HashMap;
use std::sync::Arc;

use folio_desk_core::logging::targets;

use super::descriptor::{AppId, LauncherPlacement, WindowDescriptor};
use crate::error::{Error, Result};

/// Immutable catalog of window descriptors, keyed by [`AppId`].
///
/// Iteration follows insertion order, which is also the order launchers
/// appear in on the desktop and in the dock.
#[derive(Debug, Clone, Default)]
pub struct WindowRegistry {
    descriptors: Vec<Arc<WindowDescriptor>>,
    index: HashMap<AppId, usize>,
}

impl WindowRegistry {
    /// Build a registry, rejecting duplicate ids and unusable default sizes.
    pub fn new(descriptors: impl IntoIterator<Item = WindowDescriptor>) -> Result<Self> {
        let mut registry = Self::default();
        for descriptor in descriptors {
            validate_size(&descriptor)?;
            if registry.index.contains_key(descriptor.id()) {
                return Err(Error::duplicate_descriptor(descriptor.id().as_str()));
            }
            registry
                .index
                .insert(descriptor.id().clone(), registry.descriptors.len());
            registry.descriptors.push(Arc::new(descriptor));
        }
        tracing::debug!(target: targets::WINDOW, count = registry.len(), "window registry built");
        Ok(registry)
    }

    /// Look up a descriptor by id.
    pub fn get(&self, id: &str) -> Option<&Arc<WindowDescriptor>> {
        self.index.get(id).map(|&i| &self.descriptors[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// All descriptors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<WindowDescriptor>> {
        self.descriptors.iter()
    }

    /// Descriptors whose launcher has the given placement.
    pub fn with_placement(
        &self,
        placement: LauncherPlacement,
    ) -> impl Iterator<Item = &Arc<WindowDescriptor>> {
        self.iter().filter(move |d| d.placement() == placement)
    }
}

fn validate_size(descriptor: &WindowDescriptor) -> Result<()> {
    let size = descriptor.default_size();
    if !(size.width.is_finite() && size.width > 0.0) {
        return Err(Error::invalid_default_size(
            descriptor.id().as_str(),
            format!("width must be positive, got {}", size.width),
        ));
    }
    if let Some(height) = size.height
        && !(height.is_finite() && height > 0.0)
    {
        return Err(Error::invalid_default_size(
            descriptor.id().as_str(),
            format!("height must be positive, got {height}"),
        ));
    }
    Ok(())
}

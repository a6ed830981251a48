//! Runtime window records.

use serde::Serialize;

use super::descriptor::{AppId, WindowDescriptor};
use crate::geometry::{Point, Rect, Size};

/// Geometry captured at the moment a window is maximized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RestoreState {
    pub position: Point,
    pub size_override: Option<Size>,
}

/// The runtime state of one open window.
///
/// At most one instance exists per [`AppId`]. `restore_state` is only
/// meaningful while `is_maximized` is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowInstance {
    /// Same identifier as the descriptor.
    pub id: AppId,
    /// Top-left corner in viewport coordinates.
    pub position: Point,
    /// Stacking key; the highest value is frontmost.
    pub z_index: u64,
    /// Explicit size from a resize, maximize or mobile layout.
    ///
    /// `None` means the descriptor's default size applies.
    pub size_override: Option<Size>,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub restore_state: Option<RestoreState>,
}

impl WindowInstance {
    /// Create a visible, unmaximized instance.
    pub fn new(id: AppId, position: Point, z_index: u64) -> Self {
        Self {
            id,
            position,
            z_index,
            size_override: None,
            is_minimized: false,
            is_maximized: false,
            restore_state: None,
        }
    }

    /// Set the size override.
    pub fn with_size_override(mut self, size: Option<Size>) -> Self {
        self.size_override = size;
        self
    }

    /// The size the window renders at.
    pub fn effective_size(&self, descriptor: &WindowDescriptor, fallback_height: f32) -> Size {
        self.size_override
            .unwrap_or_else(|| descriptor.default_size().resolve(fallback_height))
    }

    /// The rendered frame of the window.
    pub fn frame(&self, descriptor: &WindowDescriptor, fallback_height: f32) -> Rect {
        Rect::from_origin_size(self.position, self.effective_size(descriptor, fallback_height))
    }

    /// The current geometry as a restore snapshot.
    pub fn geometry(&self) -> RestoreState {
        RestoreState {
            position: self.position,
            size_override: self.size_override,
        }
    }
}

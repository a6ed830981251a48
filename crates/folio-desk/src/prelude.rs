//! Prelude module for folio-desk.
//!
//! ```ignore
//! use folio_desk::prelude::*;
//! ```

// ============================================================================
// Window Management
// ============================================================================

pub use crate::window::{
    AppId, DefaultSize, DisplayEnvironment, LauncherPlacement, LayoutMode, WindowDescriptor,
    WindowEvent, WindowManager, WindowRegistry,
};

// ============================================================================
// Interaction
// ============================================================================

pub use crate::interaction::{PointerController, PointerEvent, PointerHost, PointerKind};
pub use crate::window::{ChromeRegion, ResizeDirection};

// ============================================================================
// Shell
// ============================================================================

pub use crate::shell::{DesktopShell, ShellEffect, ShellEvent, StaticContent, catalog};

// ============================================================================
// Configuration, Geometry and Errors
// ============================================================================

pub use crate::config::ShellConfig;
pub use crate::error::{Error, Result};
pub use crate::geometry::{Point, Rect, Size};
pub use folio_desk_core::Signal;

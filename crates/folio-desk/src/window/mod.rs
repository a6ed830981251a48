//! Window management.
//!
//! This module holds the window state machine of the desktop shell:
//!
//! - [`WindowRegistry`]: the static catalog of [`WindowDescriptor`]s
//! - [`WindowManager`]: the owned store of open [`WindowInstance`]s and the
//!   operations that change them
//! - [`reduce`]: the pure transition function the manager is built on
//! - [`layout`]: placement, maximize and mobile geometry rules
//! - [`WindowChrome`]: resize-handle hit testing and cursors
//!
//! # Window Manager
//!
//! ```
//! use folio_desk::config::ShellConfig;
//! use folio_desk::geometry::Point;
//! use folio_desk::shell::catalog;
//! use folio_desk::window::{DisplayEnvironment, WindowManager};
//!
//! let manager = WindowManager::new(
//!     catalog::portfolio_registry()?,
//!     ShellConfig::default(),
//!     DisplayEnvironment::new(1280.0, 800.0),
//! );
//!
//! manager.open("resume");
//! manager.toggle_maximize("resume");
//! assert!(manager.instance("resume").unwrap().is_maximized);
//!
//! // Dragging a maximized window takes it out of the maximized state.
//! manager.move_window("resume", Point::new(50.0, 80.0));
//! let resume = manager.instance("resume").unwrap();
//! assert!(!resume.is_maximized);
//! assert!(resume.restore_state.is_none());
//! # Ok::<(), folio_desk::Error>(())
//! ```

mod chrome;
mod descriptor;
mod instance;
pub mod layout;
mod reducer;
mod registry;
mod window_manager;

pub use chrome::{ChromeHitTestResult, ChromeRegion, ResizeDirection, WindowChrome};
pub use descriptor::{AppId, DefaultSize, LauncherPlacement, WindowDescriptor};
pub use instance::{RestoreState, WindowInstance};
pub use layout::{DisplayEnvironment, LayoutMode};
pub use reducer::{Transition, WindowAction, WindowEvent, WindowSnapshot, reduce};
pub use registry::WindowRegistry;
pub use window_manager::{WindowEntry, WindowManager};

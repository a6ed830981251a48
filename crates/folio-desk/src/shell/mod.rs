//! The desktop shell around the window manager.
//!
//! - [`catalog`]: the portfolio's window descriptors
//! - [`WindowContent`]: the opaque components rendered inside windows
//! - [`DesktopShell`]: routes desktop, dock and title-bar gestures
//! - [`DesktopScene`]: the render model a host draws from
//!
//! # Example
//!
//! ```
//! use folio_desk::config::ShellConfig;
//! use folio_desk::shell::{DesktopShell, ShellEvent, catalog};
//! use folio_desk::window::{DisplayEnvironment, WindowManager};
//!
//! let manager = WindowManager::new(
//!     catalog::portfolio_registry()?,
//!     ShellConfig::default(),
//!     DisplayEnvironment::new(1440.0, 900.0),
//! );
//! let mut shell = DesktopShell::start(manager);
//!
//! shell.handle(ShellEvent::DockClicked("skills".into()));
//! let scene = shell.scene(chrono::Local::now());
//! assert_eq!(scene.windows.len(), 2);
//! # Ok::<(), folio_desk::Error>(())
//! ```

pub mod catalog;
mod content;
mod desktop;
mod scene;

pub use content::{
    FinderContent, FinderEntry, FinderTarget, LaunchRequest, Launcher, StaticContent,
    WindowContent,
};
pub use desktop::{DesktopShell, ShellEffect, ShellEvent, TrafficLight};
pub use scene::{DesktopScene, LauncherItem, MenuBar, WindowView};

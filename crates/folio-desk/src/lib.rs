//! folio-desk - the window manager of a desktop-styled portfolio.
//!
//! The crate models a small desktop: a static catalog of applications,
//! floating windows that open, focus, move, resize, minimize and maximize,
//! a pointer controller that turns drags on window chrome into committed
//! geometry, and a headless shell that produces a render model.
//!
//! # Example
//!
//! ```
//! use folio_desk::prelude::*;
//!
//! let manager = WindowManager::new(
//!     catalog::portfolio_registry()?,
//!     ShellConfig::default(),
//!     DisplayEnvironment::new(1440.0, 900.0),
//! );
//!
//! manager.open("finder");
//! manager.move_window("finder", Point::new(200.0, 120.0));
//! assert_eq!(manager.frame("finder").unwrap().origin, Point::new(200.0, 120.0));
//! # Ok::<(), folio_desk::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`window`]: registry, instances, layout rules and the window manager
//! - [`interaction`]: pointer gestures for dragging and resizing
//! - [`shell`]: the portfolio catalog, content and desktop shell
//! - [`config`]: chrome metrics and thresholds
//! - [`geometry`]: points, sizes and rectangles

pub mod config;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod prelude;
pub mod shell;
pub mod window;

pub use error::{Error, Result};

pub use folio_desk_core::{ConnectionGuard, ConnectionId, PerfSpan, Signal};

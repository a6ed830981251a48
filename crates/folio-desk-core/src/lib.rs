//! Core systems for folio-desk.
//!
//! This crate provides the foundational pieces shared by the desktop shell:
//!
//! - **Signal/Slot System**: Type-safe change notification between the window
//!   manager and whoever renders it
//! - **Logging**: `tracing` targets, span names and a perf-span guard
//!
//! # Signal/Slot Example
//!
//! ```
//! use folio_desk_core::Signal;
//!
//! let window_opened = Signal::<String>::new();
//!
//! let conn_id = window_opened.connect(|id| {
//!     println!("Opened window: {}", id);
//! });
//!
//! window_opened.emit("finder".to_string());
//! window_opened.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};

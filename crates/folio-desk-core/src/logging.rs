//! Logging facilities for folio-desk.
//!
//! This module provides:
//! - Target and span names used by every folio-desk crate with `tracing`
//! - A [`PerfSpan`] guard for timing state transitions
//!
//! # Tracing Integration
//!
//! folio-desk only emits `tracing` events; it never installs a subscriber.
//! To see logs, install one in your application:
//!
//! ```ignore
//! use tracing_subscriber::EnvFilter;
//!
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter(EnvFilter::new("folio_desk=debug"))
//!         .init();
//! }
//! ```

/// Span names used throughout folio-desk for tracing.
pub mod span_names {
    /// Window manager transition span.
    pub const TRANSITION: &str = "folio_desk::transition";
    /// Pointer gesture span.
    pub const GESTURE: &str = "folio_desk::gesture";
    /// Scene composition span.
    pub const SCENE: &str = "folio_desk::scene";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "folio_desk_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "folio_desk_core::signal";
    /// Window manager target.
    pub const WINDOW: &str = "folio_desk::window";
    /// Pointer interaction target.
    pub const POINTER: &str = "folio_desk::pointer";
    /// Desktop shell target.
    pub const SHELL: &str = "folio_desk::shell";
    /// Configuration loading target.
    pub const CONFIG: &str = "folio_desk::config";
    /// Performance spans target.
    pub const PERF: &str = "folio_desk::perf";
}

/// A guard that keeps a tracing span entered until it is dropped.
///
/// Useful for tracking the duration of an operation.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

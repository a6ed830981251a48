//! Window manager for tracking and arranging the portfolio's windows.
//!
//! The `WindowManager` owns the list of open window instances and applies
//! every change through the pure [`reduce`] function: each operation reads
//! the latest snapshot, derives the next one and swaps it in under a single
//! write lock, so two rapid dispatches never observe a half-applied update.
//! Signals are emitted after the lock is released, which lets slots call
//! back into the manager.

use std::sync::Arc;

use parking_lot::RwLock;

use folio_desk_core::logging::{span_names, targets};
use folio_desk_core::{PerfSpan, Signal};

use super::descriptor::{AppId, WindowDescriptor};
use super::instance::WindowInstance;
use super::layout::{DisplayEnvironment, LayoutMode};
use super::reducer::{WindowAction, WindowEvent, WindowSnapshot, reduce};
use super::registry::WindowRegistry;
use crate::config::ShellConfig;
use crate::geometry::{Point, Rect, Size};

/// An open window paired with its descriptor.
#[derive(Debug, Clone)]
pub struct WindowEntry {
    pub descriptor: Arc<WindowDescriptor>,
    pub instance: WindowInstance,
}

impl WindowEntry {
    /// The window's frame, using `fallback_height` for automatic heights.
    pub fn frame(&self, fallback_height: f32) -> Rect {
        self.instance.frame(&self.descriptor, fallback_height)
    }
}

/// Owned store for window state.
///
/// The `WindowManager` provides:
/// - The seven window operations (open, close, focus, move, resize, minimize
///   and maximize toggling) plus display environment updates
/// - Derived reads for rendering: visible windows in z-order and the set of
///   open ids
/// - Signals for window lifecycle events
///
/// Operations on ids that are not open (or not registered, for `open`) are
/// silent no-ops.
///
/// # Example
///
/// ```
/// use folio_desk::config::ShellConfig;
/// use folio_desk::shell::catalog;
/// use folio_desk::window::{DisplayEnvironment, WindowManager};
///
/// let manager = WindowManager::new(
///     catalog::portfolio_registry()?,
///     ShellConfig::default(),
///     DisplayEnvironment::new(1440.0, 900.0),
/// );
///
/// manager.open("finder");
/// manager.open("resume");
/// manager.focus("finder");
///
/// let order: Vec<_> = manager
///     .windows()
///     .iter()
///     .map(|entry| entry.instance.id.to_string())
///     .collect();
/// assert_eq!(order, ["resume", "finder"]);
/// # Ok::<(), folio_desk::Error>(())
/// ```
pub struct WindowManager {
    registry: Arc<WindowRegistry>,
    config: Arc<ShellConfig>,
    /// Latest snapshot. Replaced wholesale on every applied transition.
    state: RwLock<Arc<WindowSnapshot>>,
    /// Signal emitted when a new window is opened.
    window_opened: Signal<AppId>,
    /// Signal emitted when a window is closed.
    window_closed: Signal<AppId>,
    /// Signal emitted when a window is brought to the front.
    window_focused: Signal<AppId>,
    /// Signal emitted when the layout mode changes.
    layout_changed: Signal<LayoutMode>,
    /// Signal emitted for every applied change.
    window_event: Signal<WindowEvent>,
}

impl WindowManager {
    /// Create a window manager with no open windows.
    pub fn new(
        registry: WindowRegistry,
        config: ShellConfig,
        environment: DisplayEnvironment,
    ) -> Self {
        let snapshot = WindowSnapshot::new(&config, environment);
        tracing::debug!(
            target: targets::WINDOW,
            layout = ?snapshot.layout(),
            viewport = ?environment.viewport,
            "window manager created"
        );
        Self {
            registry: Arc::new(registry),
            config: Arc::new(config),
            state: RwLock::new(Arc::new(snapshot)),
            window_opened: Signal::new(),
            window_closed: Signal::new(),
            window_focused: Signal::new(),
            layout_changed: Signal::new(),
            window_event: Signal::new(),
        }
    }

    /// Apply an action and return the events it produced.
    ///
    /// The next snapshot is derived from the latest one while the write lock
    /// is held; signals fire after it is released.
    pub fn dispatch(&self, action: WindowAction) -> Vec<WindowEvent> {
        let events = {
            let mut state = self.state.write();
            let _perf = PerfSpan::new(span_names::TRANSITION);
            tracing::trace!(target: targets::WINDOW, ?action, "dispatch");

            let transition = reduce(&self.registry, &self.config, &state, action);
            if transition.is_noop() {
                return Vec::new();
            }
            *state = Arc::new(transition.snapshot);
            transition.events
        };

        for event in &events {
            self.notify(event);
        }
        events
    }

    // =========================================================================
    // Window Operations
    // =========================================================================

    /// Open a window, or bring an already open one to the front.
    pub fn open(&self, id: impl Into<AppId>) {
        self.dispatch(WindowAction::Open(id.into()));
    }

    /// Close a window.
    pub fn close(&self, id: impl Into<AppId>) {
        self.dispatch(WindowAction::Close(id.into()));
    }

    /// Bring a window to the front and unminimize it.
    pub fn focus(&self, id: impl Into<AppId>) {
        self.dispatch(WindowAction::Focus(id.into()));
    }

    /// Commit a window position.
    ///
    /// Moving a maximized window takes it out of the maximized state and
    /// discards its restore geometry.
    pub fn move_window(&self, id: impl Into<AppId>, position: Point) {
        self.dispatch(WindowAction::Move {
            id: id.into(),
            position,
        });
    }

    /// Commit a window size. The position is left unchanged.
    ///
    /// Like [`move_window`](Self::move_window), this leaves the maximized
    /// state.
    pub fn resize(&self, id: impl Into<AppId>, size: Size) {
        self.dispatch(WindowAction::Resize { id: id.into(), size });
    }

    /// Hide a window while keeping it open.
    pub fn minimize(&self, id: impl Into<AppId>) {
        self.dispatch(WindowAction::Minimize(id.into()));
    }

    /// Maximize a window, or restore it to its pre-maximize geometry.
    ///
    /// Maximizing needs a measured viewport and is ignored without one.
    pub fn toggle_maximize(&self, id: impl Into<AppId>) {
        self.dispatch(WindowAction::ToggleMaximize(id.into()));
    }

    /// Record a new viewport size or user agent.
    ///
    /// Crossing into the mobile layout reflows every open window.
    pub fn update_environment(&self, environment: DisplayEnvironment) {
        self.dispatch(WindowAction::UpdateEnvironment(environment));
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Visible windows, back to front.
    pub fn windows(&self) -> Vec<WindowEntry> {
        self.entries(false)
    }

    /// Every open window including minimized ones, back to front.
    pub fn all_windows(&self) -> Vec<WindowEntry> {
        self.entries(true)
    }

    /// Ids of all open windows, minimized or not, in opening order.
    pub fn open_ids(&self) -> Vec<AppId> {
        self.state
            .read()
            .instances()
            .iter()
            .map(|instance| instance.id.clone())
            .collect()
    }

    /// Check whether a window is open.
    pub fn is_open(&self, id: &str) -> bool {
        self.state.read().contains(id)
    }

    /// A copy of one window's instance.
    pub fn instance(&self, id: &str) -> Option<WindowInstance> {
        self.state.read().get(id).cloned()
    }

    /// The rendered frame of an open window.
    pub fn frame(&self, id: &str) -> Option<Rect> {
        let state = self.state.read();
        let instance = state.get(id)?;
        let descriptor = self.registry.get(id)?;
        Some(instance.frame(descriptor, self.config.window.fallback_height))
    }

    /// The latest snapshot.
    pub fn snapshot(&self) -> Arc<WindowSnapshot> {
        Arc::clone(&*self.state.read())
    }

    /// The current layout mode.
    pub fn layout_mode(&self) -> LayoutMode {
        self.state.read().layout()
    }

    /// The current display environment.
    pub fn environment(&self) -> DisplayEnvironment {
        *self.state.read().environment()
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Get the number of open windows.
    pub fn count(&self) -> usize {
        self.state.read().len()
    }

    /// Check if no windows are open.
    pub fn is_empty(&self) -> bool {
        self.state.read().is_empty()
    }

    // =========================================================================
    // Signals
    // =========================================================================

    /// Signal emitted when a new window is opened.
    pub fn window_opened(&self) -> &Signal<AppId> {
        &self.window_opened
    }

    /// Signal emitted when a window is closed.
    pub fn window_closed(&self) -> &Signal<AppId> {
        &self.window_closed
    }

    /// Signal emitted when a window is brought to the front.
    ///
    /// Fires for opens, focus, and maximize or restore.
    pub fn window_focused(&self) -> &Signal<AppId> {
        &self.window_focused
    }

    /// Signal emitted when the layout mode changes.
    ///
    /// The parameter is the new mode.
    pub fn layout_changed(&self) -> &Signal<LayoutMode> {
        &self.layout_changed
    }

    /// Signal emitted for every change applied by a transition.
    pub fn window_event(&self) -> &Signal<WindowEvent> {
        &self.window_event
    }

    fn entries(&self, include_minimized: bool) -> Vec<WindowEntry> {
        let state = self.snapshot();
        let mut entries: Vec<WindowEntry> = state
            .instances()
            .iter()
            .filter(|instance| include_minimized || !instance.is_minimized)
            .filter_map(|instance| {
                let descriptor = self.registry.get(instance.id.as_str())?;
                Some(WindowEntry {
                    descriptor: Arc::clone(descriptor),
                    instance: instance.clone(),
                })
            })
            .collect();
        entries.sort_by_key(|entry| entry.instance.z_index);
        entries
    }

    fn notify(&self, event: &WindowEvent) {
        tracing::debug!(target: targets::WINDOW, ?event, "window event");
        match event {
            WindowEvent::Opened { id } => {
                self.window_opened.emit(id.clone());
                self.window_focused.emit(id.clone());
            }
            WindowEvent::Closed { id } => self.window_closed.emit(id.clone()),
            WindowEvent::Raised { id }
            | WindowEvent::Maximized { id }
            | WindowEvent::Restored { id } => self.window_focused.emit(id.clone()),
            WindowEvent::LayoutChanged { to, .. } => self.layout_changed.emit(*to),
            WindowEvent::Minimized { .. }
            | WindowEvent::Moved { .. }
            | WindowEvent::Resized { .. }
            | WindowEvent::MaximizeEscaped { .. }
            | WindowEvent::Reflowed { .. } => {}
        }
        self.window_event.emit(event.clone());
    }
}

impl std::fmt::Debug for WindowManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowManager")
            .field("registered", &self.registry.len())
            .field("snapshot", &self.snapshot())
            .finish()
    }
}

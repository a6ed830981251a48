//! Window actions and the pure transition function.
//!
//! [`reduce`] derives the next [`WindowSnapshot`] from the previous one and
//! an action, and reports what changed as a list of [`WindowEvent`]s. It
//! never mutates its input, so the window manager can always apply an action
//! to the latest snapshot and swap the result in atomically.

use folio_desk_core::logging::targets;
use serde::Serialize;

use super::descriptor::AppId;
use super::instance::WindowInstance;
use super::layout::{self, DisplayEnvironment, LayoutMode};
use super::registry::WindowRegistry;
use crate::config::ShellConfig;
use crate::geometry::{Point, Size};

/// Immutable state of every open window plus the display it is laid out on.
///
/// Snapshots only come out of [`reduce`]; they serialize for inspection but
/// are never loaded back.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WindowSnapshot {
    instances: Vec<WindowInstance>,
    environment: DisplayEnvironment,
    layout: LayoutMode,
}

impl WindowSnapshot {
    /// An empty snapshot for the given environment.
    pub fn new(config: &ShellConfig, environment: DisplayEnvironment) -> Self {
        Self {
            instances: Vec::new(),
            environment,
            layout: environment.layout_mode(config),
        }
    }

    /// Open instances in the order they were opened.
    pub fn instances(&self) -> &[WindowInstance] {
        &self.instances
    }

    pub fn get(&self, id: &str) -> Option<&WindowInstance> {
        self.instances.iter().find(|instance| instance.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn environment(&self) -> &DisplayEnvironment {
        &self.environment
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    /// Highest z-index among open instances, or 0 when none are open.
    pub fn max_z_index(&self) -> u64 {
        self.instances
            .iter()
            .map(|instance| instance.z_index)
            .max()
            .unwrap_or(0)
    }

    /// The frontmost visible instance.
    pub fn frontmost(&self) -> Option<&WindowInstance> {
        self.instances
            .iter()
            .filter(|instance| !instance.is_minimized)
            .max_by_key(|instance| instance.z_index)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut WindowInstance> {
        self.instances.iter_mut().find(|instance| instance.id == id)
    }
}

/// A request to change window state.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowAction {
    /// Open a window, or raise and unminimize it if already open.
    Open(AppId),
    /// Remove a window.
    Close(AppId),
    /// Raise and unminimize a window.
    Focus(AppId),
    /// Commit a new position.
    Move { id: AppId, position: Point },
    /// Commit a new size.
    Resize { id: AppId, size: Size },
    /// Hide a window while keeping it open.
    Minimize(AppId),
    /// Maximize, or restore a maximized window.
    ToggleMaximize(AppId),
    /// The viewport or user agent changed.
    UpdateEnvironment(DisplayEnvironment),
}

/// A change applied by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowEvent {
    Opened { id: AppId },
    /// Brought to the front, and unminimized if it was minimized.
    Raised { id: AppId },
    Closed { id: AppId },
    Minimized { id: AppId },
    Moved { id: AppId, position: Point },
    Resized { id: AppId, size: Size },
    Maximized { id: AppId },
    Restored { id: AppId },
    /// A move or resize took a window out of the maximized state.
    MaximizeEscaped { id: AppId },
    LayoutChanged { from: LayoutMode, to: LayoutMode },
    /// Geometry recomputed for the mobile layout.
    Reflowed { id: AppId },
}

impl WindowEvent {
    /// The window the event concerns, if any.
    pub fn id(&self) -> Option<&AppId> {
        match self {
            Self::Opened { id }
            | Self::Raised { id }
            | Self::Closed { id }
            | Self::Minimized { id }
            | Self::Moved { id, .. }
            | Self::Resized { id, .. }
            | Self::Maximized { id }
            | Self::Restored { id }
            | Self::MaximizeEscaped { id }
            | Self::Reflowed { id } => Some(id),
            Self::LayoutChanged { .. } => None,
        }
    }
}

/// Result of applying an action.
#[derive(Debug, Clone)]
pub struct Transition {
    pub snapshot: WindowSnapshot,
    pub events: Vec<WindowEvent>,
    changed: bool,
}

impl Transition {
    fn unchanged(snapshot: &WindowSnapshot) -> Self {
        Self {
            snapshot: snapshot.clone(),
            events: Vec::new(),
            changed: false,
        }
    }

    /// Whether the snapshot is identical to the previous one.
    ///
    /// A desktop viewport change updates the snapshot without producing
    /// events, so this is not the same as `events` being empty.
    pub fn is_noop(&self) -> bool {
        !self.changed
    }
}

/// Apply `action` to `state`.
///
/// Actions naming a window that is not open (or, for [`WindowAction::Open`],
/// not registered) produce an unchanged snapshot and no events.
pub fn reduce(
    registry: &WindowRegistry,
    config: &ShellConfig,
    state: &WindowSnapshot,
    action: WindowAction,
) -> Transition {
    let mut next = state.clone();
    let mut events = Vec::new();
    let next_z = state.max_z_index() + 1;

    match action {
        WindowAction::Open(id) => {
            let Some(descriptor) = registry.get(id.as_str()) else {
                tracing::trace!(target: targets::WINDOW, %id, "open ignored: not registered");
                return Transition::unchanged(state);
            };
            if let Some(instance) = next.get_mut(id.as_str()) {
                instance.z_index = next_z;
                instance.is_minimized = false;
                events.push(WindowEvent::Raised { id });
            } else {
                let (position, size) =
                    layout::initial_frame(config, &state.environment, descriptor, state.len());
                next.instances
                    .push(WindowInstance::new(id.clone(), position, next_z).with_size_override(size));
                events.push(WindowEvent::Opened { id });
            }
        }

        WindowAction::Close(id) => {
            let before = next.instances.len();
            next.instances.retain(|instance| instance.id != id);
            if next.instances.len() == before {
                return Transition::unchanged(state);
            }
            events.push(WindowEvent::Closed { id });
        }

        WindowAction::Focus(id) => {
            let Some(instance) = next.get_mut(id.as_str()) else {
                return Transition::unchanged(state);
            };
            instance.z_index = next_z;
            instance.is_minimized = false;
            events.push(WindowEvent::Raised { id });
        }

        WindowAction::Move { id, position } => {
            let Some(instance) = next.get_mut(id.as_str()) else {
                return Transition::unchanged(state);
            };
            instance.position = position;
            if escape_maximize(instance) {
                events.push(WindowEvent::MaximizeEscaped { id: id.clone() });
            }
            events.push(WindowEvent::Moved { id, position });
        }

        WindowAction::Resize { id, size } => {
            let Some(instance) = next.get_mut(id.as_str()) else {
                return Transition::unchanged(state);
            };
            instance.size_override = Some(size);
            if escape_maximize(instance) {
                events.push(WindowEvent::MaximizeEscaped { id: id.clone() });
            }
            events.push(WindowEvent::Resized { id, size });
        }

        WindowAction::Minimize(id) => {
            let Some(instance) = next.get_mut(id.as_str()) else {
                return Transition::unchanged(state);
            };
            if instance.is_minimized {
                return Transition::unchanged(state);
            }
            instance.is_minimized = true;
            events.push(WindowEvent::Minimized { id });
        }

        WindowAction::ToggleMaximize(id) => {
            let layout = state.layout;
            let viewport = state.environment.viewport;
            let descriptor = registry.get(id.as_str());
            let Some(instance) = next.get_mut(id.as_str()) else {
                return Transition::unchanged(state);
            };

            if instance.is_maximized {
                let restore = instance.restore_state.take().unwrap_or_else(|| instance.geometry());
                instance.position = restore.position;
                instance.size_override = restore.size_override;
                instance.is_maximized = false;
                instance.z_index = next_z;
                events.push(WindowEvent::Restored { id });
            } else {
                let (Some(viewport), Some(descriptor)) = (viewport, descriptor) else {
                    tracing::debug!(target: targets::WINDOW, %id, "maximize ignored: viewport unavailable");
                    return Transition::unchanged(state);
                };
                let (position, size) = layout::maximized_frame(config, layout, viewport, descriptor);
                instance.restore_state = Some(instance.geometry());
                instance.position = position;
                instance.size_override = Some(size);
                instance.is_maximized = true;
                instance.is_minimized = false;
                instance.z_index = next_z;
                events.push(WindowEvent::Maximized { id });
            }
        }

        WindowAction::UpdateEnvironment(environment) => {
            let from = state.layout;
            let to = environment.layout_mode(config);
            next.environment = environment;
            next.layout = to;

            if next.environment == state.environment && from == to {
                return Transition::unchanged(state);
            }
            if from != to {
                events.push(WindowEvent::LayoutChanged { from, to });
            }

            // A newly measured or resized mobile viewport reflows too.
            let viewport_changed = state.environment.viewport != environment.viewport;
            if let (LayoutMode::Mobile, Some(viewport)) = (to, environment.viewport)
                && (from != to || viewport_changed)
            {
                let (position, size) = layout::mobile_frame(config, viewport);
                for instance in &mut next.instances {
                    instance.position = position;
                    instance.size_override = Some(size);
                    instance.is_maximized = false;
                    instance.restore_state = None;
                    events.push(WindowEvent::Reflowed {
                        id: instance.id.clone(),
                    });
                }
            }
        }
    }

    Transition {
        snapshot: next,
        events,
        changed: true,
    }
}

/// Leave the maximized state after a manual move or resize.
fn escape_maximize(instance: &mut WindowInstance) -> bool {
    let was_maximized = instance.is_maximized;
    instance.is_maximized = false;
    instance.restore_state = None;
    was_maximized
}

//! The desktop shell.
//!
//! [`DesktopShell`] owns the [`WindowManager`] and routes shell gestures
//! (desktop icons, dock items, window title-bar buttons and content
//! activations) to it. Everything it cannot do itself, such as opening an
//! external link, is returned to the host as a [`ShellEffect`].

use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use url::Url;

use folio_desk_core::logging::targets;

use super::catalog::STARTUP_WINDOW;
use super::content::{LaunchRequest, Launcher};
use super::scene::DesktopScene;
use crate::window::{AppId, WindowManager};

/// The three title-bar buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrafficLight {
    Close,
    Minimize,
    /// Toggles maximize.
    Zoom,
}

/// A gesture on the shell surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// Single click on a desktop icon.
    IconSelected(AppId),
    /// Double click (or Enter) on a desktop icon.
    IconActivated(AppId),
    /// Click on the empty desktop background.
    DesktopClicked,
    /// Click on a dock item.
    DockClicked(AppId),
    /// Click on a title-bar button.
    TrafficLight { id: AppId, button: TrafficLight },
    /// Press anywhere on a window.
    WindowPressed(AppId),
    /// An item inside a window's content was activated.
    ContentActivated { id: AppId, item: String },
}

/// Work the host must carry out after handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEffect {
    /// Open a link in a new browser context.
    OpenExternal(Url),
}

/// The desktop shell: a window manager plus desktop selection state.
#[derive(Debug)]
pub struct DesktopShell {
    manager: WindowManager,
    selected_icon: Option<AppId>,
}

impl DesktopShell {
    /// Wrap a window manager without opening anything.
    pub fn new(manager: WindowManager) -> Self {
        Self {
            manager,
            selected_icon: None,
        }
    }

    /// Wrap a window manager and open the start-up window.
    pub fn start(manager: WindowManager) -> Self {
        let shell = Self::new(manager);
        tracing::info!(target: targets::SHELL, window = STARTUP_WINDOW, "desktop shell started");
        shell.manager.open(STARTUP_WINDOW);
        shell
    }

    pub fn manager(&self) -> &WindowManager {
        &self.manager
    }

    /// The desktop icon currently selected.
    pub fn selected_icon(&self) -> Option<&AppId> {
        self.selected_icon.as_ref()
    }

    /// Handle a shell gesture.
    pub fn handle(&mut self, event: ShellEvent) -> Vec<ShellEffect> {
        tracing::debug!(target: targets::SHELL, ?event, "shell event");
        match event {
            ShellEvent::IconSelected(id) => {
                // Touch layouts have no double click: a tap opens.
                if self.manager.layout_mode().is_mobile() {
                    return self.activate_icon(id);
                }
                self.selected_icon = Some(id);
                Vec::new()
            }
            ShellEvent::IconActivated(id) => self.activate_icon(id),
            ShellEvent::DesktopClicked => {
                self.selected_icon = None;
                Vec::new()
            }
            ShellEvent::DockClicked(id) => {
                self.manager.open(id);
                Vec::new()
            }
            ShellEvent::TrafficLight { id, button } => {
                match button {
                    TrafficLight::Close => self.manager.close(id),
                    TrafficLight::Minimize => self.manager.minimize(id),
                    TrafficLight::Zoom => self.manager.toggle_maximize(id),
                }
                Vec::new()
            }
            ShellEvent::WindowPressed(id) => {
                self.manager.focus(id);
                Vec::new()
            }
            ShellEvent::ContentActivated { id, item } => self.activate_content(&id, &item),
        }
    }

    /// Build the render model for the current state.
    pub fn scene<Tz>(&self, now: DateTime<Tz>) -> DesktopScene
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        DesktopScene::compose(&self.manager, self.selected_icon.as_ref(), now)
    }

    fn activate_icon(&mut self, id: AppId) -> Vec<ShellEffect> {
        let Some(descriptor) = self.manager.registry().get(id.as_str()) else {
            return Vec::new();
        };
        if let Some(url) = descriptor.external_link() {
            tracing::debug!(target: targets::SHELL, %id, %url, "icon opens external link");
            return vec![ShellEffect::OpenExternal(url.clone())];
        }
        self.manager.open(id);
        Vec::new()
    }

    fn activate_content(&mut self, id: &AppId, item: &str) -> Vec<ShellEffect> {
        if !self.manager.is_open(id.as_str()) {
            return Vec::new();
        }
        let Some(descriptor) = self.manager.registry().get(id.as_str()) else {
            return Vec::new();
        };
        let mut launcher = Launcher::new();
        if !descriptor.content().activate(item, &mut launcher) {
            tracing::debug!(target: targets::SHELL, %id, item, "content ignored activation");
            return Vec::new();
        }

        let mut effects = Vec::new();
        for request in launcher.into_requests() {
            match request {
                LaunchRequest::Open(target) => self.manager.open(target),
                LaunchRequest::OpenExternal(url) => effects.push(ShellEffect::OpenExternal(url)),
            }
        }
        effects
    }
}

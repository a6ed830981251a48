//! Render model of the desktop.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use folio_desk_core::PerfSpan;
use folio_desk_core::logging::span_names;

use crate::geometry::Rect;
use crate::window::{AppId, LauncherPlacement, LayoutMode, WindowDescriptor, WindowManager};

/// Name shown at the left of the menu bar.
pub const APP_NAME: &str = "Portfolio";

/// Menu titles shown on the desktop layout.
pub const MENU_TITLES: [&str; 6] = ["File", "Edit", "View", "Go", "Window", "Help"];

/// Menu bar clock format, e.g. `Mon 14:05`.
pub const CLOCK_FORMAT: &str = "%a %H:%M";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuBar {
    pub height: f32,
    pub app_name: String,
    /// Empty on the mobile layout.
    pub menus: Vec<String>,
    pub clock: String,
}

/// A launcher shown on the desktop or in the dock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LauncherItem {
    pub id: AppId,
    pub label: String,
    pub accent: Option<String>,
    /// Selected desktop icon.
    pub selected: bool,
    /// Dock marker for an open window.
    pub active: bool,
    /// Activating opens a link instead of a window.
    pub external: bool,
}

impl LauncherItem {
    fn new(descriptor: &WindowDescriptor) -> Self {
        Self {
            id: descriptor.id().clone(),
            label: descriptor.label().to_string(),
            accent: descriptor.accent().map(str::to_string),
            selected: false,
            active: false,
            external: descriptor.external_link().is_some(),
        }
    }
}

/// A visible window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowView {
    pub id: AppId,
    pub title: String,
    pub subtitle: String,
    pub component: String,
    pub frame: Rect,
    pub z_index: u64,
    pub is_maximized: bool,
    /// Topmost visible window.
    pub is_focused: bool,
}

/// Everything a host needs to draw one frame of the desktop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesktopScene {
    pub layout: LayoutMode,
    pub menu_bar: MenuBar,
    pub desktop_icons: Vec<LauncherItem>,
    pub dock: Vec<LauncherItem>,
    /// Back to front; minimized windows are left out.
    pub windows: Vec<WindowView>,
}

impl DesktopScene {
    /// Compose the scene from the manager's latest state.
    pub fn compose<Tz>(
        manager: &WindowManager,
        selected_icon: Option<&AppId>,
        now: DateTime<Tz>,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let _perf = PerfSpan::new(span_names::SCENE);
        let layout = manager.layout_mode();
        let config = manager.config();
        let registry = manager.registry();

        let menu_bar = MenuBar {
            height: config.chrome(layout).menu_bar_height,
            app_name: APP_NAME.to_string(),
            menus: if layout.is_mobile() {
                Vec::new()
            } else {
                MENU_TITLES.iter().map(|title| title.to_string()).collect()
            },
            clock: now.format(CLOCK_FORMAT).to_string(),
        };

        let desktop_icons = registry
            .with_placement(LauncherPlacement::Desktop)
            .map(|descriptor| LauncherItem {
                selected: selected_icon == Some(descriptor.id()),
                ..LauncherItem::new(descriptor)
            })
            .collect();

        let open = manager.open_ids();
        let dock = registry
            .with_placement(LauncherPlacement::Dock)
            .map(|descriptor| LauncherItem {
                active: open.contains(descriptor.id()),
                ..LauncherItem::new(descriptor)
            })
            .collect();

        let entries = manager.windows();
        let front = entries.last().map(|entry| entry.instance.id.clone());
        let fallback_height = config.window.fallback_height;
        let windows = entries
            .into_iter()
            .map(|entry| {
                let descriptor = &entry.descriptor;
                WindowView {
                    title: descriptor.title().to_string(),
                    subtitle: descriptor.subtitle().to_string(),
                    component: descriptor.content().component().to_string(),
                    frame: entry.frame(fallback_height),
                    z_index: entry.instance.z_index,
                    is_maximized: entry.instance.is_maximized,
                    is_focused: front.as_ref() == Some(&entry.instance.id),
                    id: entry.instance.id,
                }
            })
            .collect();

        Self {
            layout,
            menu_bar,
            desktop_icons,
            dock,
            windows,
        }
    }

    /// The view of one visible window.
    pub fn window(&self, id: &str) -> Option<&WindowView> {
        self.windows.iter().find(|view| view.id == id)
    }
}

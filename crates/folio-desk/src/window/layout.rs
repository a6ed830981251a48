//! Layout modes and window placement rules.
//!
//! Every geometric decision the window manager and the pointer controller
//! make lives here, as pure functions of the [`ShellConfig`], the current
//! [`DisplayEnvironment`] and the window in question.

use serde::{Deserialize, Serialize};

use super::descriptor::WindowDescriptor;
use crate::config::ShellConfig;
use crate::geometry::{Point, Size, clamp};

/// Which set of layout rules applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LayoutMode {
    /// Free-floating windows centered and cascaded in the viewport.
    #[default]
    Desktop,
    /// Full-width windows stacked below the menu bar, above the dock.
    Mobile,
}

impl LayoutMode {
    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }
}

/// What the shell knows about the display it renders to.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DisplayEnvironment {
    /// Viewport size, or `None` when it could not be measured.
    pub viewport: Option<Size>,
    /// Whether the host reports a mobile user agent.
    pub mobile_agent: bool,
}

impl DisplayEnvironment {
    /// An environment with a measured viewport.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Some(Size::new(width, height)),
            mobile_agent: false,
        }
    }

    /// An environment whose viewport could not be measured.
    pub fn unmeasured() -> Self {
        Self::default()
    }

    /// Mark the environment as a mobile user agent.
    pub fn with_mobile_agent(mut self, mobile_agent: bool) -> Self {
        self.mobile_agent = mobile_agent;
        self
    }

    /// The layout mode for this environment.
    ///
    /// Mobile when the agent reports itself as mobile or the viewport is
    /// narrower than the configured breakpoint.
    pub fn layout_mode(&self, config: &ShellConfig) -> LayoutMode {
        let narrow = self
            .viewport
            .is_some_and(|viewport| viewport.width < config.mobile_breakpoint);
        if self.mobile_agent || narrow {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }
}

/// Position and optional size override for a newly opened window.
///
/// `open_count` is the number of windows already open; it drives the
/// cascade offset on the desktop layout.
pub fn initial_frame(
    config: &ShellConfig,
    environment: &DisplayEnvironment,
    descriptor: &WindowDescriptor,
    open_count: usize,
) -> (Point, Option<Size>) {
    let Some(viewport) = environment.viewport else {
        return (descriptor.initial_position().unwrap_or(Point::ZERO), None);
    };

    if environment.layout_mode(config).is_mobile() {
        let (position, size) = mobile_frame(config, viewport);
        return (position, Some(size));
    }

    let size = descriptor.default_size().resolve(config.window.fallback_height);
    let cascade = config.placement.cascade_step
        * (open_count % config.placement.cascade_cycle.max(1)) as f32;
    let centered = Point::new(
        (viewport.width - size.width) / 2.0 + cascade,
        (viewport.height - size.height) / 2.0 + cascade,
    );

    let bounds = drag_bounds(config, LayoutMode::Desktop, Some(viewport), size);
    (bounds.clamp(centered), None)
}

/// Geometry of a window on the mobile layout.
///
/// Full viewport width at the workspace origin; the height is a fraction of
/// the viewport, bounded below by a minimum and above by the space left
/// between the menu bar and the dock.
pub fn mobile_frame(config: &ShellConfig, viewport: Size) -> (Point, Size) {
    let chrome = &config.mobile;
    let placement = &config.placement;
    let available = viewport.height - chrome.menu_bar_height - chrome.dock_reserve;
    let height = (viewport.height * placement.mobile_height_fraction)
        .max(placement.mobile_min_height)
        .min(available)
        .max(config.window.min_height);

    (
        Point::new(0.0, chrome.menu_bar_height),
        Size::new(viewport.width, height),
    )
}

/// Geometry of a maximized window.
///
/// Fills the workspace inside the chrome insets, floored at the configured
/// minimums. On the desktop layout the height never drops below the
/// descriptor's preferred height.
pub fn maximized_frame(
    config: &ShellConfig,
    layout: LayoutMode,
    viewport: Size,
    descriptor: &WindowDescriptor,
) -> (Point, Size) {
    let chrome = config.chrome(layout);
    let insets = chrome.insets();
    let inner = insets.inner_size(viewport);

    let width = inner.width.max(chrome.min_maximized_width);
    let available_height = inner.height.max(config.window.min_maximized_height);
    let height = match (layout, descriptor.default_size().height) {
        (LayoutMode::Desktop, Some(preferred)) => available_height.max(preferred),
        _ => available_height,
    };

    (insets.origin(), Size::new(width, height))
}

/// Area a dragged window's top-left corner may occupy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
}

impl DragBounds {
    /// Clamp a position into the bounds. There is no lower bound on y.
    pub fn clamp(&self, position: Point) -> Point {
        Point::new(
            clamp(position.x, self.min_x, self.max_x),
            position.y.max(self.min_y),
        )
    }
}

/// Drag bounds for a window of `size`.
///
/// Without a measured viewport only the left and top bounds apply.
pub fn drag_bounds(
    config: &ShellConfig,
    layout: LayoutMode,
    viewport: Option<Size>,
    size: Size,
) -> DragBounds {
    let chrome = config.chrome(layout);
    DragBounds {
        min_x: chrome.drag_min_x,
        max_x: viewport.map_or(f32::INFINITY, |viewport| {
            max_drag_x(chrome.drag_max_x_floor, viewport, size)
        }),
        min_y: chrome.menu_bar_height,
    }
}

/// Clamp a dragged window's position so its title bar stays reachable.
pub fn clamp_drag_position(
    config: &ShellConfig,
    layout: LayoutMode,
    viewport: Option<Size>,
    size: Size,
    position: Point,
) -> Point {
    drag_bounds(config, layout, viewport, size).clamp(position)
}

/// Smallest and largest sizes a resize gesture may produce.
pub fn resize_limits(config: &ShellConfig, layout: LayoutMode, viewport: Option<Size>) -> (Size, Size) {
    let min = config.window.min_size();
    let max = match viewport {
        Some(viewport) => {
            let inner = config.chrome(layout).insets().inner_size(viewport);
            Size::new(inner.width.max(min.width), inner.height.max(min.height))
        }
        None => Size::new(f32::INFINITY, f32::INFINITY),
    };
    (min, max)
}

fn max_drag_x(floor: Option<f32>, viewport: Size, size: Size) -> f32 {
    let max = viewport.width - size.width;
    match floor {
        Some(floor) => max.max(floor),
        None => max,
    }
}

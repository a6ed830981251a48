//! Shell configuration.
//!
//! `ShellConfig` gathers every chrome metric and threshold the window manager
//! and pointer controller use. The defaults reproduce the stock desktop look
//! (22px menu bar on desktop, 24px menu bar and an 80px dock on mobile); any
//! subset can be overridden from TOML:
//!
//! ```
//! use folio_desk::config::ShellConfig;
//!
//! let config = ShellConfig::from_toml_str(r#"
//! mobile_breakpoint = 600.0
//!
//! [window]
//! min_width = 260.0
//! "#)?;
//!
//! assert_eq!(config.mobile_breakpoint, 600.0);
//! assert_eq!(config.window.min_width, 260.0);
//! assert_eq!(config.window.min_height, 160.0);
//! # Ok::<(), folio_desk::Error>(())
//! ```

use std::path::Path;

use folio_desk_core::logging::targets;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};
use crate::geometry::{Insets, Size};
use crate::window::LayoutMode;

/// Chrome metrics for one layout mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeMetrics {
    /// Height of the menu bar; windows never go above it.
    pub menu_bar_height: f32,
    /// Left and right inset used by maximize and resize bounds.
    pub side_inset: f32,
    /// Space reserved at the bottom of the viewport for the dock.
    pub dock_reserve: f32,
    /// Floor for the maximized width.
    pub min_maximized_width: f32,
    /// Leftmost x a dragged window may reach.
    pub drag_min_x: f32,
    /// Floor for the rightmost x a dragged window may reach.
    ///
    /// `None` means the bound is exactly `viewport width - window width`.
    pub drag_max_x_floor: Option<f32>,
}

impl ChromeMetrics {
    /// Metrics for the desktop layout.
    pub fn desktop() -> Self {
        Self {
            menu_bar_height: 22.0,
            side_inset: 16.0,
            dock_reserve: 0.0,
            min_maximized_width: 480.0,
            drag_min_x: 8.0,
            drag_max_x_floor: Some(16.0),
        }
    }

    /// Metrics for the mobile layout.
    pub fn mobile() -> Self {
        Self {
            menu_bar_height: 24.0,
            side_inset: 0.0,
            dock_reserve: 80.0,
            min_maximized_width: 300.0,
            drag_min_x: 0.0,
            drag_max_x_floor: None,
        }
    }

    /// Workspace insets derived from these metrics.
    pub fn insets(&self) -> Insets {
        Insets::new(self.side_inset, self.menu_bar_height, self.dock_reserve)
    }
}

impl Default for ChromeMetrics {
    fn default() -> Self {
        Self::desktop()
    }
}

/// Keys present in a `[desktop]` or `[mobile]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ChromeOverrides {
    menu_bar_height: Option<f32>,
    side_inset: Option<f32>,
    dock_reserve: Option<f32>,
    min_maximized_width: Option<f32>,
    drag_min_x: Option<f32>,
    drag_max_x_floor: Option<Option<f32>>,
}

impl ChromeOverrides {
    fn apply(self, base: ChromeMetrics) -> ChromeMetrics {
        ChromeMetrics {
            menu_bar_height: self.menu_bar_height.unwrap_or(base.menu_bar_height),
            side_inset: self.side_inset.unwrap_or(base.side_inset),
            dock_reserve: self.dock_reserve.unwrap_or(base.dock_reserve),
            min_maximized_width: self.min_maximized_width.unwrap_or(base.min_maximized_width),
            drag_min_x: self.drag_min_x.unwrap_or(base.drag_min_x),
            drag_max_x_floor: self.drag_max_x_floor.unwrap_or(base.drag_max_x_floor),
        }
    }
}

// A partial `[mobile]` table falls back to the mobile metrics, not the desktop ones.
fn mobile_metrics<'de, D>(deserializer: D) -> std::result::Result<ChromeMetrics, D::Error>
where
    D: Deserializer<'de>,
{
    ChromeOverrides::deserialize(deserializer).map(|overrides| overrides.apply(ChromeMetrics::mobile()))
}

/// Limits applied to every window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowLimits {
    /// Smallest width a resize can produce.
    pub min_width: f32,
    /// Smallest height a resize can produce.
    pub min_height: f32,
    /// Floor for the maximized height.
    pub min_maximized_height: f32,
    /// Height assumed for descriptors whose height is automatic.
    pub fallback_height: f32,
    /// Horizontal margin kept when a west-side resize moves the left edge.
    pub edge_margin: f32,
}

impl Default for WindowLimits {
    fn default() -> Self {
        Self {
            min_width: 220.0,
            min_height: 160.0,
            min_maximized_height: 320.0,
            fallback_height: 420.0,
            edge_margin: 8.0,
        }
    }
}

impl WindowLimits {
    /// The minimum window size as a [`Size`].
    pub fn min_size(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }
}

/// Rules for placing newly opened windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Offset added on both axes per already-open window.
    pub cascade_step: f32,
    /// Number of windows after which the cascade wraps around.
    pub cascade_cycle: usize,
    /// Fraction of the viewport height used by windows on mobile.
    pub mobile_height_fraction: f32,
    /// Minimum window height on mobile before the available-space cap.
    pub mobile_min_height: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            cascade_step: 20.0,
            cascade_cycle: 10,
            mobile_height_fraction: 0.65,
            mobile_min_height: 400.0,
        }
    }
}

/// Pointer hit-testing thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    /// Edge distance that starts a resize with a precise pointer.
    pub hit_threshold: f32,
    /// Edge distance that starts a resize with a touch pointer.
    pub touch_hit_threshold: f32,
    /// Drag moves smaller than this are not previewed.
    pub drag_epsilon: f32,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            hit_threshold: 16.0,
            touch_hit_threshold: 44.0,
            drag_epsilon: 0.5,
        }
    }
}

/// Complete shell configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Viewports narrower than this use the mobile layout.
    pub mobile_breakpoint: f32,
    /// Chrome metrics for the desktop layout.
    pub desktop: ChromeMetrics,
    /// Chrome metrics for the mobile layout.
    #[serde(deserialize_with = "mobile_metrics")]
    pub mobile: ChromeMetrics,
    /// Window size limits.
    pub window: WindowLimits,
    /// Placement rules for new windows.
    pub placement: PlacementConfig,
    /// Pointer thresholds.
    pub pointer: PointerConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768.0,
            desktop: ChromeMetrics::desktop(),
            mobile: ChromeMetrics::mobile(),
            window: WindowLimits::default(),
            placement: PlacementConfig::default(),
            pointer: PointerConfig::default(),
        }
    }
}

impl ShellConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a configuration from TOML text.
    ///
    /// Keys that are absent keep their default values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: ShellConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::config_io(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loaded shell configuration");
        Ok(config)
    }

    /// Set the mobile breakpoint.
    pub fn with_mobile_breakpoint(mut self, breakpoint: f32) -> Self {
        self.mobile_breakpoint = breakpoint;
        self
    }

    /// Set the minimum window size.
    pub fn with_min_window_size(mut self, width: f32, height: f32) -> Self {
        self.window.min_width = width;
        self.window.min_height = height;
        self
    }

    /// Set the precise and touch hit thresholds.
    pub fn with_hit_thresholds(mut self, precise: f32, touch: f32) -> Self {
        self.pointer.hit_threshold = precise;
        self.pointer.touch_hit_threshold = touch;
        self
    }

    /// Chrome metrics for a layout mode.
    pub fn chrome(&self, layout: LayoutMode) -> &ChromeMetrics {
        match layout {
            LayoutMode::Desktop => &self.desktop,
            LayoutMode::Mobile => &self.mobile,
        }
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        fn positive(key: &str, value: f32) -> Result<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(Error::invalid_config(key, format!("must be a positive number, got {value}")))
            }
        }

        fn non_negative(key: &str, value: f32) -> Result<()> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(Error::invalid_config(key, format!("must be zero or more, got {value}")))
            }
        }

        positive("mobile_breakpoint", self.mobile_breakpoint)?;
        for (section, chrome) in [("desktop", &self.desktop), ("mobile", &self.mobile)] {
            non_negative(&format!("{section}.menu_bar_height"), chrome.menu_bar_height)?;
            non_negative(&format!("{section}.side_inset"), chrome.side_inset)?;
            non_negative(&format!("{section}.dock_reserve"), chrome.dock_reserve)?;
            positive(&format!("{section}.min_maximized_width"), chrome.min_maximized_width)?;
        }
        positive("window.min_width", self.window.min_width)?;
        positive("window.min_height", self.window.min_height)?;
        positive("window.min_maximized_height", self.window.min_maximized_height)?;
        positive("window.fallback_height", self.window.fallback_height)?;
        non_negative("window.edge_margin", self.window.edge_margin)?;
        non_negative("placement.cascade_step", self.placement.cascade_step)?;
        if self.placement.cascade_cycle == 0 {
            return Err(Error::invalid_config("placement.cascade_cycle", "must be at least 1"));
        }
        let fraction = self.placement.mobile_height_fraction;
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(Error::invalid_config(
                "placement.mobile_height_fraction",
                format!("must be in (0, 1], got {fraction}"),
            ));
        }
        positive("pointer.hit_threshold", self.pointer.hit_threshold)?;
        positive("pointer.touch_hit_threshold", self.pointer.touch_hit_threshold)?;
        non_negative("pointer.drag_epsilon", self.pointer.drag_epsilon)?;
        Ok(())
    }
}

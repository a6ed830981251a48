//! Window chrome hit-testing.
//!
//! Decides what a pointer over a window frame should do: resize from one of
//! its edges, drag the window, or leave the event to a window control. The
//! top edge is never a resize handle because it doubles as the drag handle.
//!
//! # Usage
//!
//! ```
//! use cursor_icon::CursorIcon;
//! use folio_desk::geometry::{Point, Rect};
//! use folio_desk::window::{ChromeHitTestResult, ChromeRegion, ResizeDirection, WindowChrome};
//!
//! let chrome = WindowChrome::new();
//! let frame = Rect::new(100.0, 100.0, 400.0, 300.0);
//!
//! let result = chrome.hit_test(Point::new(495.0, 395.0), frame, ChromeRegion::Body, false);
//! assert_eq!(result, ChromeHitTestResult::ResizeBorder(ResizeDirection::SouthEast));
//! assert_eq!(WindowChrome::cursor_for_result(result), CursorIcon::NwseResize);
//! ```

use cursor_icon::CursorIcon;

use crate::config::PointerConfig;
use crate::geometry::{Point, Rect};

/// Edge or corner a resize gesture follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeDirection {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeDirection {
    /// Whether the gesture moves the left edge.
    pub fn moves_west_edge(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    /// Whether the gesture moves the right edge.
    pub fn moves_east_edge(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    /// Whether the gesture moves the bottom edge.
    pub fn moves_south_edge(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    /// The cursor shown while hovering or resizing in this direction.
    pub fn cursor(self) -> CursorIcon {
        match self {
            Self::North | Self::South => CursorIcon::NsResize,
            Self::East | Self::West => CursorIcon::EwResize,
            Self::NorthEast | Self::SouthWest => CursorIcon::NeswResize,
            Self::NorthWest | Self::SouthEast => CursorIcon::NwseResize,
        }
    }
}

/// The part of the window the host reports the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChromeRegion {
    /// The title bar, outside its controls.
    TitleBar,
    /// The content area.
    #[default]
    Body,
    /// A traffic-light control (close, minimize, zoom).
    Control,
}

/// Result of hit testing a point against a window frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeHitTestResult {
    /// A window control; no gesture starts here.
    Control,
    /// A resize handle.
    ResizeBorder(ResizeDirection),
    /// The title bar.
    Caption,
    /// The content area.
    Client,
}

impl ChromeHitTestResult {
    /// Check if this result starts a resize.
    pub fn is_resize(&self) -> bool {
        matches!(self, Self::ResizeBorder(_))
    }

    /// Check if this result starts a drag.
    pub fn is_draggable(&self) -> bool {
        matches!(self, Self::Caption | Self::Client)
    }
}

/// Hit-test thresholds for window frames.
///
/// # Defaults
///
/// - Precise pointers: 16 logical pixels from an edge
/// - Touch pointers: 44 logical pixels from an edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowChrome {
    hit_threshold: f32,
    touch_hit_threshold: f32,
}

impl Default for WindowChrome {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowChrome {
    /// Create chrome with the default thresholds.
    pub fn new() -> Self {
        Self::from_config(&PointerConfig::default())
    }

    /// Create chrome with the thresholds from a pointer configuration.
    pub fn from_config(config: &PointerConfig) -> Self {
        Self {
            hit_threshold: config.hit_threshold,
            touch_hit_threshold: config.touch_hit_threshold,
        }
    }

    /// Set the edge distance for precise pointers.
    pub fn with_hit_threshold(mut self, threshold: f32) -> Self {
        self.hit_threshold = threshold;
        self
    }

    /// Set the edge distance for touch pointers.
    pub fn with_touch_hit_threshold(mut self, threshold: f32) -> Self {
        self.touch_hit_threshold = threshold;
        self
    }

    pub fn hit_threshold(&self) -> f32 {
        self.hit_threshold
    }

    pub fn touch_hit_threshold(&self) -> f32 {
        self.touch_hit_threshold
    }

    /// The resize handle under `point`, if any.
    ///
    /// Bottom corners take priority over single edges; the top edge is never
    /// reported. Points outside `frame` never hit.
    pub fn resize_direction(&self, point: Point, frame: Rect, touch: bool) -> Option<ResizeDirection> {
        if !frame.contains(point) {
            return None;
        }
        let threshold = if touch {
            self.touch_hit_threshold
        } else {
            self.hit_threshold
        };

        let near_left = point.x - frame.left() < threshold;
        let near_right = frame.right() - point.x < threshold;
        let near_bottom = frame.bottom() - point.y < threshold;

        match (near_bottom, near_left, near_right) {
            (true, true, _) => Some(ResizeDirection::SouthWest),
            (true, _, true) => Some(ResizeDirection::SouthEast),
            (true, _, _) => Some(ResizeDirection::South),
            (_, true, _) => Some(ResizeDirection::West),
            (_, _, true) => Some(ResizeDirection::East),
            _ => None,
        }
    }

    /// Classify a point over a window.
    ///
    /// Controls win over everything; resize handles win over the title bar.
    pub fn hit_test(&self, point: Point, frame: Rect, region: ChromeRegion, touch: bool) -> ChromeHitTestResult {
        if region == ChromeRegion::Control {
            return ChromeHitTestResult::Control;
        }
        if let Some(direction) = self.resize_direction(point, frame, touch) {
            return ChromeHitTestResult::ResizeBorder(direction);
        }
        match region {
            ChromeRegion::TitleBar => ChromeHitTestResult::Caption,
            _ => ChromeHitTestResult::Client,
        }
    }

    /// Get the cursor to display for a hit test result.
    pub fn cursor_for_result(result: ChromeHitTestResult) -> CursorIcon {
        match result {
            ChromeHitTestResult::ResizeBorder(direction) => direction.cursor(),
            ChromeHitTestResult::Control
            | ChromeHitTestResult::Caption
            | ChromeHitTestResult::Client => CursorIcon::Default,
        }
    }
}

//! Basic geometry types and bounds arithmetic.
//!
//! All coordinates are logical pixels in viewport space: the origin is the
//! top-left corner of the viewport, x grows to the right and y grows downward.
//! These types are shared by window placement, maximize geometry and the
//! drag/resize gestures.

use serde::{Deserialize, Serialize};

/// Clamp `value` into `[min, max]`.
///
/// Unlike [`f32::clamp`] this never panics: when the bounds cross
/// (`min > max`, which happens on viewports narrower than a window) the upper
/// bound wins. Window placement relies on that ordering.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Offset this point by a delta.
    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The delta from `origin` to this point.
    #[inline]
    pub fn delta_from(self, origin: Point) -> (f32, f32) {
        (self.x - origin.x, self.y - origin.y)
    }

    /// Whether both coordinates differ from `other` by less than `epsilon`.
    #[inline]
    pub fn approx_eq(self, other: Point, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A size in 2D space (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Check if the size has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Create a rectangle from an origin and a size.
    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Check if a point is inside the rectangle (edges inclusive).
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }
}

/// Space reserved around the workspace for persistent chrome.
///
/// `horizontal` applies to both the left and the right side.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insets {
    /// Left and right inset.
    pub horizontal: f32,
    /// Top inset (menu bar).
    pub top: f32,
    /// Bottom inset (dock).
    pub bottom: f32,
}

impl Insets {
    /// Create new insets.
    #[inline]
    pub const fn new(horizontal: f32, top: f32, bottom: f32) -> Self {
        Self {
            horizontal,
            top,
            bottom,
        }
    }

    /// The workspace origin: the top-left corner inside the insets.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.horizontal, self.top)
    }

    /// The size left inside `viewport` after removing the insets.
    ///
    /// May be negative on tiny viewports; callers apply their own floors.
    #[inline]
    pub fn inner_size(&self, viewport: Size) -> Size {
        Size::new(
            viewport.width - self.horizontal * 2.0,
            viewport.height - self.top - self.bottom,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_in_range() {
        assert_eq!(clamp(50.0, 8.0, 100.0), 50.0);
        assert_eq!(clamp(-3.0, 8.0, 100.0), 8.0);
        assert_eq!(clamp(250.0, 8.0, 100.0), 100.0);
    }

    #[test]
    fn test_clamp_crossed_bounds_upper_wins() {
        assert_eq!(clamp(5.0, 8.0, -20.0), -20.0);
    }

    #[test]
    fn test_clamp_unbounded_above() {
        assert_eq!(clamp(5000.0, 22.0, f32::INFINITY), 5000.0);
        assert_eq!(clamp(-5.0, 22.0, f32::INFINITY), 22.0);
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 300.0, 200.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.right(), 310.0);
        assert_eq!(rect.bottom(), 220.0);
        assert!(rect.contains(Point::new(310.0, 220.0)));
        assert!(!rect.contains(Point::new(311.0, 100.0)));
    }

    #[test]
    fn test_insets_inner_size() {
        let insets = Insets::new(16.0, 22.0, 0.0);
        assert_eq!(insets.origin(), Point::new(16.0, 22.0));
        assert_eq!(
            insets.inner_size(Size::new(1440.0, 900.0)),
            Size::new(1408.0, 878.0)
        );
    }

    #[test]
    fn test_point_delta_and_approx() {
        let start = Point::new(100.0, 100.0);
        let now = Point::new(130.0, 90.0);
        assert_eq!(now.delta_from(start), (30.0, -10.0));
        assert!(start.approx_eq(Point::new(100.3, 99.8), 0.5));
        assert!(!start.approx_eq(Point::new(101.0, 100.0), 0.5));
    }
}

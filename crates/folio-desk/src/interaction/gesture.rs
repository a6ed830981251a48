//! Gesture state for window drags and resizes.
//!
//! A gesture captures everything it needs when it begins (start point,
//! initial geometry, direction and bounds) and then maps pointer positions to
//! a preview frame without consulting the window manager again.

use crate::config::ShellConfig;
use crate::geometry::{Point, Rect, Size, clamp};
use crate::window::layout::{self, DragBounds, LayoutMode};
use crate::window::{AppId, ResizeDirection};

use super::pointer::PointerId;

/// Display state a gesture captures when it begins.
#[derive(Debug, Clone, Copy)]
pub struct GestureContext<'a> {
    pub config: &'a ShellConfig,
    pub layout: LayoutMode,
    pub viewport: Option<Size>,
}

/// Geometry to commit when a resize gesture ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeCommit {
    pub size: Size,
    /// New position, when the left edge moved.
    pub position: Option<Point>,
}

/// A window drag in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct DragGesture {
    window: AppId,
    pointer_id: PointerId,
    start: Point,
    initial_position: Point,
    latest_position: Point,
    size: Size,
    bounds: DragBounds,
    epsilon: f32,
}

impl DragGesture {
    /// Begin dragging `frame` from `start`.
    pub fn begin(
        context: GestureContext<'_>,
        window: AppId,
        pointer_id: PointerId,
        start: Point,
        frame: Rect,
    ) -> Self {
        let GestureContext {
            config,
            layout: mode,
            viewport,
        } = context;
        Self {
            window,
            pointer_id,
            start,
            initial_position: frame.origin,
            latest_position: frame.origin,
            size: frame.size,
            bounds: layout::drag_bounds(config, mode, viewport, frame.size),
            epsilon: config.pointer.drag_epsilon,
        }
    }

    /// Follow the pointer.
    ///
    /// Returns the new preview frame, or `None` when the clamped position
    /// moved less than the drag epsilon since the last preview.
    pub fn update(&mut self, pointer: Point) -> Option<Rect> {
        let (dx, dy) = pointer.delta_from(self.start);
        let next = self.bounds.clamp(self.initial_position.offset(dx, dy));
        if next.approx_eq(self.latest_position, self.epsilon) {
            return None;
        }
        self.latest_position = next;
        Some(self.frame())
    }

    /// The position to commit, if the window actually moved.
    pub fn commit(&self) -> Option<Point> {
        (self.latest_position != self.initial_position).then_some(self.latest_position)
    }

    pub fn window(&self) -> &AppId {
        &self.window
    }

    pub fn pointer_id(&self) -> PointerId {
        self.pointer_id
    }

    /// The current preview frame.
    pub fn frame(&self) -> Rect {
        Rect::from_origin_size(self.latest_position, self.size)
    }
}

/// A window resize in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeGesture {
    window: AppId,
    pointer_id: PointerId,
    direction: ResizeDirection,
    start: Point,
    initial: Rect,
    latest: Rect,
    min: Size,
    max: Size,
    edge_margin: f32,
    viewport_width: Option<f32>,
    full_width: bool,
}

impl ResizeGesture {
    /// Begin resizing `frame` in `direction` from `start`.
    pub fn begin(
        context: GestureContext<'_>,
        window: AppId,
        pointer_id: PointerId,
        direction: ResizeDirection,
        start: Point,
        frame: Rect,
    ) -> Self {
        let GestureContext {
            config,
            layout: mode,
            viewport,
        } = context;
        let (min, max) = layout::resize_limits(config, mode, viewport);
        Self {
            window,
            pointer_id,
            direction,
            start,
            initial: frame,
            latest: frame,
            min,
            max,
            edge_margin: config.window.edge_margin,
            viewport_width: viewport.map(|viewport| viewport.width),
            full_width: mode.is_mobile() && viewport.is_some(),
        }
    }

    /// Follow the pointer and return the new preview frame.
    ///
    /// The top edge never moves. West-side resizes keep the right edge in
    /// place unless that would push the left edge outside the margins. On
    /// the mobile layout the width stays pinned to the viewport.
    pub fn update(&mut self, pointer: Point) -> Rect {
        let (dx, dy) = pointer.delta_from(self.start);
        let initial = self.initial;
        let mut width = initial.width();
        let mut height = initial.height();
        let mut x = initial.left();

        if self.direction.moves_east_edge() {
            width = clamp(initial.width() + dx, self.min.width, self.max.width);
        } else if self.direction.moves_west_edge() {
            width = clamp(initial.width() - dx, self.min.width, self.max.width);
            x = initial.left() + (initial.width() - width);
            if let Some(viewport_width) = self.viewport_width {
                x = clamp(x, self.edge_margin, viewport_width - width - self.edge_margin);
            }
        }

        if self.direction.moves_south_edge() {
            height = clamp(initial.height() + dy, self.min.height, self.max.height);
        }

        if self.full_width
            && let Some(viewport_width) = self.viewport_width
        {
            width = viewport_width;
            x = 0.0;
        }

        self.latest = Rect::new(x, initial.top(), width, height);
        self.latest
    }

    /// The geometry to commit, or `None` when nothing changed.
    pub fn commit(&self) -> Option<ResizeCommit> {
        if self.latest == self.initial {
            return None;
        }
        Some(ResizeCommit {
            size: self.latest.size,
            position: (self.latest.origin != self.initial.origin).then_some(self.latest.origin),
        })
    }

    pub fn window(&self) -> &AppId {
        &self.window
    }

    pub fn pointer_id(&self) -> PointerId {
        self.pointer_id
    }

    pub fn direction(&self) -> ResizeDirection {
        self.direction
    }

    /// The current preview frame.
    pub fn frame(&self) -> Rect {
        self.latest
    }
}

/// The gesture a pointer-down started.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    Drag(DragGesture),
    Resize(ResizeGesture),
}

impl Gesture {
    pub fn window(&self) -> &AppId {
        match self {
            Self::Drag(drag) => drag.window(),
            Self::Resize(resize) => resize.window(),
        }
    }

    pub fn pointer_id(&self) -> PointerId {
        match self {
            Self::Drag(drag) => drag.pointer_id(),
            Self::Resize(resize) => resize.pointer_id(),
        }
    }

    /// Follow the pointer, returning a frame to preview if it changed.
    pub fn update(&mut self, pointer: Point) -> Option<Rect> {
        match self {
            Self::Drag(drag) => drag.update(pointer),
            Self::Resize(resize) => Some(resize.update(pointer)),
        }
    }

    pub fn is_drag(&self) -> bool {
        matches!(self, Self::Drag(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: Option<Size> = Some(Size::new(1440.0, 900.0));

    fn drag(frame: Rect) -> DragGesture {
        let config = ShellConfig::default();
        let context = GestureContext {
            config: &config,
            layout: LayoutMode::Desktop,
            viewport: DESKTOP,
        };
        DragGesture::begin(
            context,
            AppId::from("finder"),
            PointerId(1),
            Point::new(500.0, 150.0),
            frame,
        )
    }

    fn resize(direction: ResizeDirection, layout: LayoutMode, viewport: Option<Size>) -> ResizeGesture {
        let config = ShellConfig::default();
        let context = GestureContext {
            config: &config,
            layout,
            viewport,
        };
        ResizeGesture::begin(
            context,
            AppId::from("finder"),
            PointerId(1),
            direction,
            Point::new(400.0, 600.0),
            Rect::new(400.0, 100.0, 600.0, 500.0),
        )
    }

    #[test]
    fn test_drag_follows_pointer() {
        let mut gesture = drag(Rect::new(400.0, 100.0, 600.0, 500.0));
        let frame = gesture.update(Point::new(530.0, 190.0)).unwrap();
        assert_eq!(frame, Rect::new(430.0, 140.0, 600.0, 500.0));
        assert_eq!(gesture.commit(), Some(Point::new(430.0, 140.0)));
    }

    #[test]
    fn test_drag_skips_subpixel_moves() {
        let mut gesture = drag(Rect::new(400.0, 100.0, 600.0, 500.0));
        assert!(gesture.update(Point::new(500.2, 150.3)).is_none());
        assert_eq!(gesture.commit(), None);
    }

    #[test]
    fn test_drag_clamps_to_viewport() {
        let mut gesture = drag(Rect::new(400.0, 100.0, 600.0, 500.0));
        let frame = gesture.update(Point::new(2000.0, -400.0)).unwrap();
        assert_eq!(frame.origin, Point::new(840.0, 22.0));
    }

    #[test]
    fn test_drag_back_to_start_does_not_commit() {
        let mut gesture = drag(Rect::new(400.0, 100.0, 600.0, 500.0));
        gesture.update(Point::new(600.0, 250.0));
        gesture.update(Point::new(500.0, 150.0));
        assert_eq!(gesture.commit(), None);
    }

    #[test]
    fn test_resize_east_and_south() {
        let mut gesture = resize(ResizeDirection::SouthEast, LayoutMode::Desktop, DESKTOP);
        let frame = gesture.update(Point::new(450.0, 650.0));
        assert_eq!(frame, Rect::new(400.0, 100.0, 650.0, 550.0));
        assert_eq!(
            gesture.commit(),
            Some(ResizeCommit {
                size: Size::new(650.0, 550.0),
                position: None,
            })
        );
    }

    #[test]
    fn test_resize_west_keeps_right_edge() {
        let mut gesture = resize(ResizeDirection::West, LayoutMode::Desktop, DESKTOP);
        let frame = gesture.update(Point::new(300.0, 0.0));
        assert_eq!(frame, Rect::new(300.0, 100.0, 700.0, 500.0));
        assert_eq!(frame.right(), 1000.0);
        assert_eq!(
            gesture.commit(),
            Some(ResizeCommit {
                size: Size::new(700.0, 500.0),
                position: Some(Point::new(300.0, 100.0)),
            })
        );
    }

    #[test]
    fn test_resize_floor() {
        let mut gesture = resize(ResizeDirection::SouthWest, LayoutMode::Desktop, DESKTOP);
        let frame = gesture.update(Point::new(2000.0, -2000.0));
        assert_eq!(frame.size, Size::new(220.0, 160.0));
        assert_eq!(frame.right(), 1000.0);
    }

    #[test]
    fn test_resize_ceiling() {
        let mut gesture = resize(ResizeDirection::SouthEast, LayoutMode::Desktop, DESKTOP);
        let frame = gesture.update(Point::new(5000.0, 5000.0));
        assert_eq!(frame.size, Size::new(1408.0, 878.0));
    }

    #[test]
    fn test_resize_mobile_pins_width() {
        let viewport = Some(Size::new(390.0, 844.0));
        let mut gesture = resize(ResizeDirection::SouthEast, LayoutMode::Mobile, viewport);
        let frame = gesture.update(Point::new(500.0, 700.0));
        assert_eq!(frame.origin.x, 0.0);
        assert_eq!(frame.width(), 390.0);
        assert_eq!(frame.height(), 600.0);
    }

    #[test]
    fn test_resize_unchanged_has_no_commit() {
        let mut gesture = resize(ResizeDirection::South, LayoutMode::Desktop, DESKTOP);
        gesture.update(Point::new(400.0, 600.0));
        assert_eq!(gesture.commit(), None);
    }
}

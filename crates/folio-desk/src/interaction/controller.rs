//! The pointer interaction controller.
//!
//! [`PointerController`] turns raw pointer samples over a window into drag
//! and resize gestures. It follows a begin/update/end protocol:
//!
//! 1. [`pointer_down`](PointerController::pointer_down) classifies the hit,
//!    focuses the window, captures the pointer and attaches the host's move,
//!    up and cancel listeners.
//! 2. [`pointer_move`](PointerController::pointer_move) updates the gesture
//!    and stores a pending preview frame.
//!    [`frame_tick`](PointerController::frame_tick) hands at most one of them
//!    per animation frame to the host.
//! 3. [`pointer_up`](PointerController::pointer_up) commits the final
//!    geometry to the [`WindowManager`];
//!    [`pointer_cancel`](PointerController::pointer_cancel) discards it.
//!    Either way the capture is released and the listeners detached.

use cursor_icon::CursorIcon;
use folio_desk_core::PerfSpan;
use folio_desk_core::logging::{span_names, targets};

use crate::geometry::{Point, Rect};
use crate::window::{AppId, ChromeHitTestResult, ChromeRegion, WindowChrome, WindowManager};

use super::gesture::{DragGesture, Gesture, GestureContext, ResizeGesture};
use super::pointer::{PointerButton, PointerEvent, PointerId};

/// The surface a [`PointerController`] drives.
///
/// Every `capture_pointer` is followed by exactly one `release_pointer`, and
/// every `attach_listeners` by exactly one `detach_listeners`, before the
/// next gesture begins.
pub trait PointerHost {
    /// Route all further events of `pointer_id` to the window.
    fn capture_pointer(&mut self, pointer_id: PointerId);

    /// Stop routing events of `pointer_id` to the window.
    fn release_pointer(&mut self, pointer_id: PointerId);

    /// Start delivering global move, up and cancel events for `pointer_id`.
    fn attach_listeners(&mut self, pointer_id: PointerId);

    /// Stop delivering the events attached by `attach_listeners`.
    fn detach_listeners(&mut self, pointer_id: PointerId);

    /// Show `frame` for `window` without committing it.
    fn apply_preview(&mut self, window: &AppId, frame: Rect);

    /// Drop any preview of `window` and render its committed geometry.
    fn clear_preview(&mut self, window: &AppId);

    /// Show a cursor shape.
    fn set_cursor(&mut self, _cursor: CursorIcon) {}
}

/// Holds the latest value until the next animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameThrottle<T> {
    pending: Option<T>,
}

impl<T> Default for FrameThrottle<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> FrameThrottle<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pending value.
    pub fn schedule(&mut self, value: T) {
        self.pending = Some(value);
    }

    /// Take the pending value for this frame.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Drop the pending value.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Drives window drag and resize gestures for one [`PointerHost`].
#[derive(Debug)]
pub struct PointerController<H: PointerHost> {
    host: H,
    chrome: WindowChrome,
    gesture: Option<Gesture>,
    preview: FrameThrottle<Rect>,
    cursor: CursorIcon,
}

impl<H: PointerHost> PointerController<H> {
    /// Create a controller with the default hit-test thresholds.
    pub fn new(host: H) -> Self {
        Self::with_chrome(host, WindowChrome::new())
    }

    /// Create a controller with custom hit-test thresholds.
    pub fn with_chrome(host: H, chrome: WindowChrome) -> Self {
        Self {
            host,
            chrome,
            gesture: None,
            preview: FrameThrottle::new(),
            cursor: CursorIcon::Default,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn chrome(&self) -> &WindowChrome {
        &self.chrome
    }

    /// The gesture in progress.
    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// The cursor currently shown.
    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    // =========================================================================
    // Gesture Protocol
    // =========================================================================

    /// Handle a pointer press over window `id`.
    ///
    /// Starts a resize when the press lands on a resize handle, or a drag
    /// anywhere else outside the window controls. Presses with a non-primary
    /// button, on a control, on a window that is not open, or while another
    /// gesture is running start nothing. Returns whether a gesture started.
    pub fn pointer_down(
        &mut self,
        manager: &WindowManager,
        id: &str,
        region: ChromeRegion,
        event: PointerEvent,
    ) -> bool {
        if self.gesture.is_some() || event.button != PointerButton::Primary {
            return false;
        }
        let Some(frame) = manager.frame(id) else {
            return false;
        };

        let hit = self
            .chrome
            .hit_test(event.position, frame, region, event.kind.is_touch());
        let config = manager.config();
        let context = GestureContext {
            config,
            layout: manager.layout_mode(),
            viewport: manager.environment().viewport,
        };
        let window = AppId::from(id);

        let (gesture, cursor) = match hit {
            ChromeHitTestResult::Control => return false,
            ChromeHitTestResult::ResizeBorder(direction) => (
                Gesture::Resize(ResizeGesture::begin(
                    context,
                    window.clone(),
                    event.pointer_id,
                    direction,
                    event.position,
                    frame,
                )),
                direction.cursor(),
            ),
            ChromeHitTestResult::Caption | ChromeHitTestResult::Client => (
                Gesture::Drag(DragGesture::begin(
                    context,
                    window.clone(),
                    event.pointer_id,
                    event.position,
                    frame,
                )),
                CursorIcon::Grabbing,
            ),
        };

        manager.focus(window.clone());
        self.host.capture_pointer(event.pointer_id);
        self.host.attach_listeners(event.pointer_id);
        self.set_cursor(cursor);

        tracing::debug!(
            target: targets::POINTER,
            %window,
            pointer = event.pointer_id.0,
            ?hit,
            "gesture began"
        );
        self.gesture = Some(gesture);
        true
    }

    /// Handle a pointer move during a gesture.
    ///
    /// The resulting frame is held until the next [`frame_tick`](Self::frame_tick).
    pub fn pointer_move(&mut self, event: PointerEvent) {
        let Some(gesture) = self.gesture.as_mut() else {
            return;
        };
        if gesture.pointer_id() != event.pointer_id {
            return;
        }
        if let Some(frame) = gesture.update(event.position) {
            self.preview.schedule(frame);
        }
    }

    /// Flush the pending preview, if any, to the host.
    pub fn frame_tick(&mut self) {
        let Some(frame) = self.preview.take() else {
            return;
        };
        if let Some(gesture) = &self.gesture {
            tracing::trace!(target: targets::POINTER, window = %gesture.window(), ?frame, "preview");
            self.host.apply_preview(gesture.window(), frame);
        }
    }

    /// Finish the gesture and commit its geometry.
    ///
    /// A drag commits a move only if the position changed. A resize commits
    /// the new size, followed by a move when the left edge moved.
    pub fn pointer_up(&mut self, manager: &WindowManager, event: PointerEvent) {
        let Some(mut gesture) = self.take_gesture(event.pointer_id) else {
            return;
        };
        let _perf = PerfSpan::new(span_names::GESTURE);
        if let Some(frame) = gesture.update(event.position) {
            tracing::trace!(target: targets::POINTER, ?frame, "final sample");
        }

        match &gesture {
            Gesture::Drag(drag) => {
                if let Some(position) = drag.commit() {
                    manager.move_window(drag.window().clone(), position);
                }
            }
            Gesture::Resize(resize) => {
                if let Some(commit) = resize.commit() {
                    manager.resize(resize.window().clone(), commit.size);
                    if let Some(position) = commit.position {
                        manager.move_window(resize.window().clone(), position);
                    }
                }
            }
        }

        tracing::debug!(target: targets::POINTER, window = %gesture.window(), "gesture committed");
        self.finish(&gesture);
    }

    /// Abort the gesture without committing anything.
    pub fn pointer_cancel(&mut self, event: PointerEvent) {
        let Some(gesture) = self.take_gesture(event.pointer_id) else {
            return;
        };
        tracing::debug!(target: targets::POINTER, window = %gesture.window(), "gesture cancelled");
        self.finish(&gesture);
    }

    /// Cursor for a pointer hovering over window `id`.
    ///
    /// While a gesture runs the hover position is ignored and the gesture's
    /// cursor is kept.
    pub fn hover(
        &mut self,
        manager: &WindowManager,
        id: &str,
        region: ChromeRegion,
        position: Point,
        touch: bool,
    ) -> CursorIcon {
        if self.gesture.is_some() {
            return self.cursor;
        }
        let cursor = manager
            .frame(id)
            .map(|frame| {
                WindowChrome::cursor_for_result(self.chrome.hit_test(position, frame, region, touch))
            })
            .unwrap_or(CursorIcon::Default);
        self.set_cursor(cursor);
        cursor
    }

    fn take_gesture(&mut self, pointer_id: PointerId) -> Option<Gesture> {
        if self.gesture.as_ref()?.pointer_id() != pointer_id {
            return None;
        }
        self.gesture.take()
    }

    fn finish(&mut self, gesture: &Gesture) {
        self.preview.cancel();
        self.host.clear_preview(gesture.window());
        self.host.release_pointer(gesture.pointer_id());
        self.host.detach_listeners(gesture.pointer_id());
        self.set_cursor(CursorIcon::Default);
    }

    fn set_cursor(&mut self, cursor: CursorIcon) {
        if self.cursor != cursor {
            self.cursor = cursor;
            self.host.set_cursor(cursor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_throttle_keeps_latest() {
        let mut throttle = FrameThrottle::new();
        assert!(!throttle.is_pending());
        throttle.schedule(1);
        throttle.schedule(2);
        assert!(throttle.is_pending());
        assert_eq!(throttle.take(), Some(2));
        assert_eq!(throttle.take(), None);
    }

    #[test]
    fn test_frame_throttle_cancel() {
        let mut throttle = FrameThrottle::new();
        throttle.schedule("frame");
        throttle.cancel();
        assert_eq!(throttle.take(), None);
    }
}

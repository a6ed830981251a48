//! Pointer input events.

use crate::geometry::Point;

/// Identifier the host assigns to one pointer for the length of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// The kind of device behind a pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
    Pen,
}

impl PointerKind {
    /// Whether the pointer is imprecise enough to need larger hit targets.
    pub fn is_touch(self) -> bool {
        self == Self::Touch
    }
}

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum PointerButton {
    /// Primary button (left mouse button, touch contact, pen tip).
    #[default]
    Primary = 0,
    /// Secondary button (usually right).
    Secondary = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
    /// Additional button 1 (e.g., browser back).
    Back = 3,
    /// Additional button 2 (e.g., browser forward).
    Forward = 4,
}

/// A pointer down, move, up or cancel sample in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: PointerId,
    pub position: Point,
    pub kind: PointerKind,
    pub button: PointerButton,
}

impl PointerEvent {
    /// A primary-button event.
    pub fn new(pointer_id: u64, kind: PointerKind, x: f32, y: f32) -> Self {
        Self {
            pointer_id: PointerId(pointer_id),
            position: Point::new(x, y),
            kind,
            button: PointerButton::Primary,
        }
    }

    /// A primary-button mouse event.
    pub fn mouse(pointer_id: u64, x: f32, y: f32) -> Self {
        Self::new(pointer_id, PointerKind::Mouse, x, y)
    }

    /// A touch contact.
    pub fn touch(pointer_id: u64, x: f32, y: f32) -> Self {
        Self::new(pointer_id, PointerKind::Touch, x, y)
    }

    /// Set the button.
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    /// The same pointer at another position.
    pub fn moved_to(self, x: f32, y: f32) -> Self {
        Self {
            position: Point::new(x, y),
            ..self
        }
    }
}

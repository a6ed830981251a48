//! Pointer-driven window interaction.
//!
//! - [`PointerEvent`]: host-neutral pointer samples
//! - [`Gesture`]: the state of one drag or resize, from press to release
//! - [`PointerController`]: the begin/update/end protocol over a
//!   [`PointerHost`], committing results to the window manager

mod controller;
mod gesture;
mod pointer;

pub use controller::{FrameThrottle, PointerController, PointerHost};
pub use gesture::{DragGesture, Gesture, GestureContext, ResizeCommit, ResizeGesture};
pub use pointer::{PointerButton, PointerEvent, PointerId, PointerKind};

//! Seam to the input system.
//!
//! Raw event plumbing (window events, pointer capture) is the embedder's
//! business; the core reads a stateless per-frame snapshot of button state
//! and pointer movement.

/// Platform-agnostic pointer button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary (left) pointer button, drives rotation.
    Left,
    /// Middle pointer button (wheel click), drives pan/translate.
    Middle,
    /// Secondary (right) pointer button, drives zoom/scale.
    Right,
}

/// Per-frame input query interface.
///
/// Behavior in the core is level-triggered on this state, not
/// event-triggered: a held button with zero pointer movement is a no-op.
pub trait InputSource {
    /// Whether the given pointer button is currently held.
    fn button_down(&self, button: PointerButton) -> bool;

    /// Whether the drag modifier key (space in the reference UI) is held.
    fn modifier_down(&self) -> bool;

    /// Horizontal pointer movement since the previous frame, in pixels.
    fn pointer_dx(&self) -> f32;

    /// Vertical pointer movement since the previous frame, in pixels
    /// (positive = downward drag).
    fn pointer_dy(&self) -> f32;
}

/// Plain-struct [`InputSource`] for embedders that poll their windowing
/// layer once per frame and hand the result over.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    /// Left button held.
    pub left: bool,
    /// Middle button held.
    pub middle: bool,
    /// Right button held.
    pub right: bool,
    /// Drag modifier key held.
    pub modifier: bool,
    /// Horizontal pointer delta since last frame.
    pub dx: f32,
    /// Vertical pointer delta since last frame.
    pub dy: f32,
}

impl InputSource for InputSnapshot {
    fn button_down(&self, button: PointerButton) -> bool {
        match button {
            PointerButton::Left => self.left,
            PointerButton::Middle => self.middle,
            PointerButton::Right => self.right,
        }
    }

    fn modifier_down(&self) -> bool {
        self.modifier
    }

    fn pointer_dx(&self) -> f32 {
        self.dx
    }

    fn pointer_dy(&self) -> f32 {
        self.dy
    }
}

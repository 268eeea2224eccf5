use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// drives the arcball and the turntable spin. Coordinates are window
/// pixels with the origin at the top-left corner, as windowing systems
/// report them.
///
/// # Example
///
/// ```
/// use demoframe::camera::{ArcPolicy, Arcball, Handedness};
/// use demoframe::input::{InputEvent, InputProcessor, MouseButton};
/// use glam::Vec2;
///
/// let arcball = Arcball::new(
///     Vec2::new(320.0, 240.0),
///     300.0,
///     Handedness::Left,
///     ArcPolicy::DirectArc,
/// );
/// let mut input = InputProcessor::new(arcball, 480.0);
/// let _ = input.handle_event(InputEvent::CursorMoved { x: 320.0, y: 240.0 });
/// let _ = input.handle_event(InputEvent::MouseButton {
///     button: MouseButton::Left,
///     pressed: true,
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released at the last cursor position.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Drawable area changed size.
    Resized {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

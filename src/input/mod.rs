//! Input handling: event types and the processor that turns raw window
//! events into arcball gestures and turntable spin.

/// Platform-agnostic input events.
pub mod event;
/// Routes events to the orientation controls.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::InputProcessor;

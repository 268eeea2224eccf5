//! Routes raw pointer events to the orientation controls.
//!
//! The `InputProcessor` owns the transient input state (cursor position,
//! button state, turntable spin) and the [`Arcball`]. It is the only thing
//! that sits between window events and the transforms a demo reads back
//! each frame.

use glam::{Mat4, Vec2};

use super::event::{InputEvent, MouseButton};
use crate::camera::Arcball;

/// Pixels of horizontal drag per degree of turntable rotation.
const TURNTABLE_PIXELS_PER_DEGREE: f32 = 4.0;

/// Converts window events into arcball gestures and turntable spin.
///
/// Window coordinates grow downward; the arcball works in a Y-up frame, so
/// every point is flipped against the viewport height before it reaches
/// the controller.
#[derive(Debug, Clone)]
pub struct InputProcessor {
    arcball: Arcball,
    viewport_height: f32,
    /// Last cursor position in window coordinates.
    cursor: Vec2,
    /// Whether the primary mouse button is currently held.
    left_pressed: bool,
    /// Accumulated drag distance while the primary button is held.
    spin: Vec2,
}

impl InputProcessor {
    /// Wrap `arcball` for a viewport `viewport_height` pixels tall.
    #[must_use]
    pub fn new(arcball: Arcball, viewport_height: f32) -> Self {
        Self {
            arcball,
            viewport_height,
            cursor: Vec2::ZERO,
            left_pressed: false,
            spin: Vec2::ZERO,
        }
    }

    /// Feed one event. Returns `true` if the arcball orientation or the
    /// turntable spin changed.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let pos = Vec2::new(x, y);
                let delta = pos - self.cursor;
                self.cursor = pos;

                let before = self.arcball.orientation();
                self.arcball.rotate(self.flip(pos));
                let mut changed = self.arcball.orientation() != before;
                if self.left_pressed && delta != Vec2::ZERO {
                    self.spin += delta;
                    changed = true;
                }
                changed
            }
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed,
            } => {
                self.left_pressed = pressed;
                if pressed {
                    self.arcball.touch(self.flip(self.cursor));
                } else {
                    self.arcball.release();
                }
                false
            }
            InputEvent::MouseButton { .. } => false,
            InputEvent::Resized { width, height } => {
                log::debug!("viewport resized to {width}x{height}");
                self.viewport_height = height as f32;
                false
            }
        }
    }

    /// Rotation about Y from the accumulated horizontal drag.
    #[must_use]
    pub fn turntable(&self) -> Mat4 {
        Mat4::from_rotation_y(
            (-self.spin.x / TURNTABLE_PIXELS_PER_DEGREE).to_radians(),
        )
    }

    /// Snap the arcball back to identity and clear the spin.
    pub fn reset(&mut self) {
        self.arcball.reset();
        self.spin = Vec2::ZERO;
    }

    /// The controlled arcball.
    #[must_use]
    pub fn arcball(&self) -> &Arcball {
        &self.arcball
    }

    /// Accumulated drag distance in pixels.
    #[must_use]
    pub fn spin(&self) -> Vec2 {
        self.spin
    }

    /// Last cursor position in window coordinates.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Whether the primary button is held.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.left_pressed
    }

    fn flip(&self, pos: Vec2) -> Vec2 {
        Vec2::new(pos.x, self.viewport_height - pos.y)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::{ArcPolicy, Handedness};

    fn processor() -> InputProcessor {
        let arcball = Arcball::new(
            Vec2::new(320.0, 240.0),
            300.0,
            Handedness::Left,
            ArcPolicy::DirectArc,
        );
        InputProcessor::new(arcball, 480.0)
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::CursorMoved { x, y }
    }

    fn left(pressed: bool) -> InputEvent {
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        }
    }

    #[test]
    fn hover_does_not_rotate() {
        let mut input = processor();
        assert!(!input.handle_event(moved(100.0, 100.0)));
        assert!(!input.handle_event(moved(300.0, 200.0)));
        assert_eq!(input.arcball().transform(), Mat4::IDENTITY);
        assert_eq!(input.spin(), Vec2::ZERO);
    }

    #[test]
    fn horizontal_drag_rotates_about_y() {
        let mut input = processor();
        let _ = input.handle_event(moved(320.0, 240.0));
        let _ = input.handle_event(left(true));
        assert!(input.arcball().is_touched());
        // First move after the press only captures the drag start.
        assert!(!input.handle_event(moved(320.0, 240.0)));
        assert!(input.handle_event(moved(420.0, 240.0)));
        let _ = input.handle_event(left(false));

        let (axis, angle) = input.arcball().orientation().to_axis_angle();
        assert!(axis.abs_diff_eq(Vec3::NEG_Y, 1e-5));
        assert!(angle > 0.1);
        assert_eq!(input.spin(), Vec2::new(100.0, 0.0));
    }

    #[test]
    fn vertical_flip_uses_viewport_height() {
        let mut input = processor();
        let _ = input.handle_event(moved(320.0, 240.0));
        let _ = input.handle_event(left(true));
        let _ = input.handle_event(moved(320.0, 240.0));
        // Window y grows downward, so this drags "down" on the sphere.
        let _ = input.handle_event(moved(320.0, 340.0));
        let (axis, _) = input.arcball().orientation().to_axis_angle();
        assert!(axis.abs_diff_eq(Vec3::NEG_X, 1e-5), "{axis}");
    }

    #[test]
    fn press_outside_sphere_only_spins() {
        let mut input = processor();
        let _ = input.handle_event(moved(0.0, 0.0));
        let _ = input.handle_event(left(true));
        assert!(!input.arcball().is_touched());
        assert!(input.handle_event(moved(40.0, 0.0)));
        assert_eq!(input.arcball().transform(), Mat4::IDENTITY);
        let expected = Mat4::from_rotation_y((-10.0_f32).to_radians());
        assert!(input.turntable().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mut input = processor();
        let _ = input.handle_event(moved(320.0, 240.0));
        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        assert!(!input.arcball().is_touched());
        assert!(!input.is_pressed());
    }

    #[test]
    fn resize_changes_flip_not_center() {
        let mut input = processor();
        let _ = input.handle_event(InputEvent::Resized {
            width: 640,
            height: 1000,
        });
        assert_eq!(input.arcball().center(), Vec2::new(320.0, 240.0));
        // (320, 760) flips to the sphere center in the taller viewport.
        let _ = input.handle_event(moved(320.0, 760.0));
        let _ = input.handle_event(left(true));
        assert!(input.arcball().is_touched());
    }

    #[test]
    fn reset_clears_everything() {
        let mut input = processor();
        let _ = input.handle_event(moved(320.0, 240.0));
        let _ = input.handle_event(left(true));
        let _ = input.handle_event(moved(320.0, 240.0));
        let _ = input.handle_event(moved(400.0, 260.0));
        input.reset();
        assert_eq!(input.arcball().transform(), Mat4::IDENTITY);
        assert_eq!(input.turntable(), Mat4::IDENTITY);
    }
}

//! Time-driven rotation accumulator.

use glam::Mat4;

/// Angle that advances at a fixed rate with elapsed frame time.
///
/// Owned by whatever object it animates and advanced once per frame with
/// the time since the previous frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    angle_degrees: f32,
    /// Degrees per millisecond.
    speed: f32,
}

impl Spin {
    /// Start at zero degrees, turning `speed` degrees per millisecond.
    #[must_use]
    pub fn new(speed: f32) -> Self {
        Self {
            angle_degrees: 0.0,
            speed,
        }
    }

    /// Advance by `elapsed_ms` milliseconds. The angle wraps to
    /// `[0, 360)` so long sessions keep full precision.
    pub fn advance(&mut self, elapsed_ms: f32) {
        self.angle_degrees =
            (self.angle_degrees + elapsed_ms * self.speed).rem_euclid(360.0);
    }

    /// Current angle in degrees.
    #[must_use]
    pub fn degrees(&self) -> f32 {
        self.angle_degrees
    }

    /// Current angle in radians.
    #[must_use]
    pub fn radians(&self) -> f32 {
        self.angle_degrees.to_radians()
    }

    /// Rotation about Y by the current angle.
    #[must_use]
    pub fn yaw(&self) -> Mat4 {
        Mat4::from_rotation_y(self.radians())
    }

    /// Pitch, yaw and roll all by the current angle, applied in that
    /// order (X first).
    #[must_use]
    pub fn tumble(&self) -> Mat4 {
        let r = self.radians();
        Mat4::from_rotation_z(r)
            * Mat4::from_rotation_y(r)
            * Mat4::from_rotation_x(r)
    }
}

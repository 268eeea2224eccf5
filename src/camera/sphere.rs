//! Virtual sphere projection and the two rotation-between-vectors policies
//! used by the [`Arcball`](super::arcball::Arcball).

use glam::{Quat, Vec2, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shared tolerance for the degenerate-geometry checks.
pub const EPSILON: f32 = 1e-6;

/// Coordinate convention of the host's view space.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Handedness {
    /// OpenGL-style: the viewer looks down `-z`, the hemisphere bulges
    /// toward `+z`.
    #[default]
    Right,
    /// Vulkan/Direct3D-style: the viewer looks down `+z`, the hemisphere
    /// bulges toward `-z`.
    Left,
}

/// Strategy used to turn two projected sphere points into a rotation.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ArcPolicy {
    /// Shoemake's arcball: the raw `(from × to, from · to)` quaternion,
    /// which rotates by twice the arc angle.
    #[default]
    DirectArc,
    /// Trackball: the half-angle quaternion taking `from` onto `to` along
    /// the shortest arc, stable near 180°.
    ShortestArc,
}

impl ArcPolicy {
    /// Rotation carrying `from` toward `to` under this policy.
    #[must_use]
    pub fn rotation(self, from: Vec3, to: Vec3) -> Quat {
        match self {
            Self::DirectArc => direct_arc(from, to),
            Self::ShortestArc => shortest_arc(from, to),
        }
    }
}

/// Orthographically project a point of the unit disk onto the unit
/// hemisphere facing the viewer.
///
/// Points on or outside the disk boundary land on the equator.
#[must_use]
pub fn project_on_sphere(unit: Vec2, handedness: Handedness) -> Vec3 {
    let d2 = unit.length_squared();
    let p = if d2 < 1.0 {
        unit.extend((1.0 - d2).max(0.0).sqrt())
    } else {
        unit.normalize_or_zero().extend(0.0)
    };
    match handedness {
        Handedness::Right => p,
        Handedness::Left => Vec3::new(p.x, p.y, -p.z),
    }
}

/// Shoemake's arcball rotation between two unit vectors.
#[must_use]
pub fn direct_arc(from: Vec3, to: Vec3) -> Quat {
    let axis = from.cross(to);
    if axis.length() <= EPSILON {
        Quat::IDENTITY
    } else {
        Quat::from_xyzw(axis.x, axis.y, axis.z, from.dot(to))
    }
}

/// Shortest-arc rotation between two vectors.
///
/// Inputs need not be unit length. When they are nearly antipodal the
/// rotation axis is picked perpendicular to `from`.
#[must_use]
pub fn shortest_arc(from: Vec3, to: Vec3) -> Quat {
    let axis = from.cross(to);
    let q = Quat::from_xyzw(axis.x, axis.y, axis.z, from.dot(to));
    let q = if q.length_squared() > 0.0 { q.normalize() } else { q };
    // half angle
    let w = q.w + 1.0;
    let half = if w > EPSILON {
        Quat::from_xyzw(q.x, q.y, q.z, w)
    } else if from.z * from.z > from.x * from.x {
        Quat::from_xyzw(0.0, from.z, -from.y, w)
    } else {
        Quat::from_xyzw(from.y, -from.x, 0.0, w)
    };
    if half.length_squared() > 0.0 {
        half.normalize()
    } else {
        Quat::IDENTITY
    }
}

//! Arcball/trackball orientation controller.
//!
//! Pointer positions are mapped onto a virtual hemisphere of fixed screen
//! center and radius; the arc between the drag start and the current point
//! becomes an incremental rotation composed onto the orientation frozen at
//! the start of the drag. See K. Shoemake, "ARCBALL: A User Interface for
//! Specifying Three-Dimensional Orientation Using a Mouse" (1992).

use glam::{Mat4, Quat, Vec2, Vec3};

use super::sphere::{project_on_sphere, ArcPolicy, Handedness, EPSILON};

/// Upper bound for the `lg_segments` argument of [`Arcball::build_arc`].
pub const MAX_ARC_SEGMENTS_LOG2: u32 = 10;

/// Mouse-driven 3D orientation controller.
///
/// ```
/// use demoframe::camera::{ArcPolicy, Arcball, Handedness};
/// use glam::Vec2;
///
/// let mut arcball = Arcball::new(
///     Vec2::new(320.0, 240.0),
///     300.0,
///     Handedness::Left,
///     ArcPolicy::DirectArc,
/// );
/// arcball.touch(Vec2::new(320.0, 240.0));
/// arcball.rotate(Vec2::new(320.0, 240.0));
/// arcball.rotate(Vec2::new(420.0, 240.0));
/// arcball.release();
/// let rotation = arcball.transform();
/// # assert_ne!(rotation, glam::Mat4::IDENTITY);
/// ```
#[derive(Debug, Clone)]
pub struct Arcball {
    center: Vec2,
    radius: f32,
    handedness: Handedness,
    policy: ArcPolicy,

    touched: bool,
    started: bool,
    dragged: bool,
    /// Live rotation, `last * incremental`.
    current: Quat,
    /// Rotation frozen when the current drag started.
    last: Quat,
    drag_start: Vec2,
    proj_from: Vec3,
    proj_to: Vec3,
}

impl Arcball {
    /// Create a controller with identity orientation.
    #[must_use]
    pub fn new(
        center: Vec2,
        radius: f32,
        handedness: Handedness,
        policy: ArcPolicy,
    ) -> Self {
        Self {
            center,
            radius,
            handedness,
            policy,
            touched: false,
            started: false,
            dragged: false,
            current: Quat::IDENTITY,
            last: Quat::IDENTITY,
            drag_start: Vec2::ZERO,
            proj_from: Vec3::ZERO,
            proj_to: Vec3::ZERO,
        }
    }

    /// Create a controller using the shortest-arc (trackball) policy.
    #[must_use]
    pub fn trackball(center: Vec2, radius: f32, handedness: Handedness) -> Self {
        Self::new(center, radius, handedness, ArcPolicy::ShortestArc)
    }

    /// Pointer pressed at `pos`. Only points strictly inside the sphere's
    /// screen circle take hold of it.
    pub fn touch(&mut self, pos: Vec2) {
        if (pos - self.center).length_squared() < self.radius * self.radius {
            self.touched = true;
        }
    }

    /// Pointer released. The accumulated orientation is kept.
    pub fn release(&mut self) {
        if self.dragged {
            log::debug!("arcball drag ended at {:?}", self.current);
        }
        self.touched = false;
        self.started = false;
        self.dragged = false;
        self.proj_from = Vec3::ZERO;
        self.proj_to = Vec3::ZERO;
    }

    /// Pointer moved to `pos`. Call on every move, pressed or not.
    pub fn rotate(&mut self, pos: Vec2) {
        self.update(pos);
        if !self.dragged {
            return;
        }
        let unit_from = (self.drag_start - self.center) / self.radius;
        let unit_to = (pos - self.center) / self.radius;
        self.proj_from = project_on_sphere(unit_from, self.handedness);
        self.proj_to = project_on_sphere(unit_to, self.handedness);
        let incremental = self.policy.rotation(self.proj_from, self.proj_to);
        self.current = self.last * incremental;
    }

    /// Drop any gesture in progress and snap back to identity.
    pub fn reset(&mut self) {
        self.touched = false;
        self.started = false;
        self.dragged = false;
        self.current = Quat::IDENTITY;
        self.last = Quat::IDENTITY;
        self.proj_from = Vec3::ZERO;
        self.proj_to = Vec3::ZERO;
        log::debug!("arcball reset");
    }

    /// Rotation matrix of the current orientation.
    #[must_use]
    pub fn transform(&self) -> Mat4 {
        Mat4::from_quat(self.current)
    }

    /// Tessellate the great arc between the projected drag points into
    /// `2^lg_segments + 1` points, returned in unit-disk (XY) coordinates.
    ///
    /// With no drag in progress every point is the origin. `lg_segments`
    /// is clamped to [`MAX_ARC_SEGMENTS_LOG2`].
    #[must_use]
    pub fn build_arc(&self, lg_segments: u32) -> Vec<Vec2> {
        let lg_segments = lg_segments.min(MAX_ARC_SEGMENTS_LOG2);
        let a = self.proj_from;
        let mut b = self.proj_to;
        // Halve the arc lg_segments times to get the first chord point.
        for _ in 0..lg_segments {
            b += a;
            b = if b.length() < EPSILON {
                Vec3::ZERO
            } else {
                b.normalize()
            };
        }
        let segments = 1usize << lg_segments;
        let dp2 = a.dot(b) * 2.0;
        let mut arc = Vec::with_capacity(segments + 1);
        arc.push(self.proj_from);
        arc.push(b);
        for i in 2..segments {
            let next = arc[i - 1] * dp2 - arc[i - 2];
            arc.push(next);
        }
        arc.truncate(segments);
        arc.push(self.proj_to);
        arc.into_iter().map(Vec3::truncate).collect()
    }

    /// Screen-space center of the virtual sphere.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Screen-space radius of the virtual sphere.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Projection convention.
    #[must_use]
    pub fn handedness(&self) -> Handedness {
        self.handedness
    }

    /// Rotation policy chosen at construction.
    #[must_use]
    pub fn policy(&self) -> ArcPolicy {
        self.policy
    }

    /// Pointer is down inside the sphere.
    #[must_use]
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// A drag start point has been captured.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// A rotation is in progress.
    #[must_use]
    pub fn is_dragged(&self) -> bool {
        self.dragged
    }

    /// Current orientation.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.current
    }

    /// Projected drag start and current points; zero when not dragging.
    #[must_use]
    pub fn projected(&self) -> (Vec3, Vec3) {
        (self.proj_from, self.proj_to)
    }

    fn update(&mut self, pos: Vec2) {
        if !self.started && self.touched {
            self.drag_start = pos;
            self.last = self.current.normalize();
            self.started = true;
            log::debug!("arcball drag started at {pos}");
        } else if self.started {
            if self.touched {
                self.dragged = true;
            } else {
                self.started = false;
                self.dragged = false;
                self.proj_from = Vec3::ZERO;
                self.proj_to = Vec3::ZERO;
            }
        }
    }
}

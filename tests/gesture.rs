//! Integration tests for arcball gesture handling.

use demoframe::camera::{ArcPolicy, Arcball, Handedness};
use demoframe::options::Options;
use glam::{Mat4, Vec2, Vec3};

fn assert_rotation(m: Mat4) {
    assert!((m * m.transpose()).abs_diff_eq(Mat4::IDENTITY, 1e-4));
    assert!((m.determinant() - 1.0).abs() < 1e-4);
}

#[test]
fn horizontal_drag_on_left_handed_demo_sphere() {
    let mut arcball = Arcball::new(
        Vec2::new(320.0, 240.0),
        300.0,
        Handedness::Left,
        ArcPolicy::DirectArc,
    );
    assert_eq!(arcball.transform(), Mat4::IDENTITY);

    arcball.touch(Vec2::new(320.0, 240.0));
    arcball.rotate(Vec2::new(320.0, 240.0));
    assert_eq!(arcball.transform(), Mat4::IDENTITY);
    arcball.rotate(Vec2::new(420.0, 240.0));
    arcball.release();

    let m = arcball.transform();
    assert_rotation(m);
    assert_ne!(m, Mat4::IDENTITY);

    // 100 px at the equator of a 300 px sphere: asin(1/3) of arc, doubled.
    let (axis, angle) = arcball.orientation().to_axis_angle();
    assert!(axis.abs_diff_eq(Vec3::NEG_Y, 1e-4), "{axis}");
    let expected = 2.0 * (1.0_f32 / 3.0).asin();
    assert!((angle - expected).abs() < 1e-4, "{angle} vs {expected}");

    arcball.reset();
    assert_eq!(arcball.transform(), Mat4::IDENTITY);
}

#[test]
fn trackball_from_options_follows_the_pointer() {
    let mut options = Options::default();
    options.arcball.policy = ArcPolicy::ShortestArc;
    options.arcball.handedness = Handedness::Right;
    let mut arcball = options.build_arcball();

    let center = arcball.center();
    let from = center + Vec2::new(-60.0, 40.0);
    let to = center + Vec2::new(80.0, -30.0);
    arcball.touch(from);
    arcball.rotate(from);
    arcball.rotate(to);

    // A trackball carries the grabbed point exactly under the pointer.
    let (proj_from, proj_to) = arcball.projected();
    let moved = arcball.orientation() * proj_from;
    assert!(moved.abs_diff_eq(proj_to, 1e-5), "{moved} vs {proj_to}");
    assert_rotation(arcball.transform());
}

#[test]
fn separate_gestures_compose() {
    let mut arcball = Arcball::trackball(Vec2::ZERO, 100.0, Handedness::Right);
    let gestures = [
        (Vec2::ZERO, Vec2::new(50.0, 0.0)),
        (Vec2::ZERO, Vec2::new(0.0, 50.0)),
        (Vec2::new(-20.0, -20.0), Vec2::new(30.0, 10.0)),
    ];
    let mut expected = glam::Quat::IDENTITY;
    for (from, to) in gestures {
        arcball.touch(from);
        arcball.rotate(from);
        arcball.rotate(to);
        let (a, b) = arcball.projected();
        expected *= glam::Quat::from_rotation_arc(a, b);
        arcball.release();
        assert!(arcball.orientation().abs_diff_eq(expected, 1e-4));
    }
    assert_rotation(arcball.transform());
}

//! Transform tests
//!
//! Tests for:
//! - Default TRS state
//! - Euler angle (degrees) round trips
//! - World-space position/rotation resolution through the parent matrix
//! - Singular parents rejecting world-space writes

use std::f32::consts::FRAC_PI_2;

use glam::{Affine3A, Quat, Vec3};
use myth_oscillator::scene::transform::{euler_degrees_to_quat, quat_to_euler_degrees};
use myth_oscillator::scene::Transform;

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

fn quat_approx(a: Quat, b: Quat) -> bool {
    // q and -q describe the same rotation
    a.dot(b).abs() > 1.0 - 1e-6
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn transform_default_is_identity() {
    let t = Transform::new();
    assert_eq!(t.position, Vec3::ZERO);
    assert_eq!(t.rotation, Quat::IDENTITY);
    assert_eq!(t.scale, Vec3::ONE);
    assert_eq!(*t.parent_world_matrix(), Affine3A::IDENTITY);
}

// ============================================================================
// Euler angles
// ============================================================================

#[test]
fn euler_degrees_roundtrip() {
    let mut t = Transform::new();
    let euler = Vec3::new(20.0, 45.0, 30.0);
    t.set_euler_degrees(euler);
    assert!(vec3_approx(t.euler_degrees(), euler));
}

#[test]
fn euler_readback_is_wrapped_into_positive_range() {
    let mut t = Transform::new();
    t.set_euler_degrees(Vec3::new(0.0, -90.0, -30.0));
    assert!(vec3_approx(t.euler_degrees(), Vec3::new(0.0, 270.0, 330.0)));

    t.set_euler_degrees(Vec3::new(0.0, 180.0, 0.0));
    let euler = t.euler_degrees();
    assert!(approx_eq(euler.y, 180.0), "got {euler}");
    assert!(euler.x >= 0.0 && euler.z >= 0.0, "got {euler}");

    t.set_euler_degrees(Vec3::new(0.0, 360.0, 0.0));
    let euler = t.euler_degrees();
    assert!(euler.y.abs() < EPSILON || (euler.y - 360.0).abs() < EPSILON);
    assert!(euler.y < 360.0);
}

#[test]
fn euler_yaw_only_matches_axis_rotation() {
    let q = euler_degrees_to_quat(Vec3::new(0.0, 90.0, 0.0));
    assert!(quat_approx(q, Quat::from_rotation_y(FRAC_PI_2)));
}

#[test]
fn euler_applies_z_then_x_then_y() {
    let euler = Vec3::new(30.0, 60.0, 15.0);
    let expected = Quat::from_rotation_y(60f32.to_radians())
        * Quat::from_rotation_x(30f32.to_radians())
        * Quat::from_rotation_z(15f32.to_radians());
    assert!(quat_approx(euler_degrees_to_quat(euler), expected));
    assert!(vec3_approx(quat_to_euler_degrees(expected), euler));
}

// ============================================================================
// World space
// ============================================================================

#[test]
fn world_position_without_parent_equals_local() {
    let mut t = Transform::new();
    assert!(t.set_world_position(Vec3::new(3.0, 4.0, 5.0)));
    assert!(vec3_approx(t.position, Vec3::new(3.0, 4.0, 5.0)));
    assert!(vec3_approx(t.world_position(), t.position));
}

#[test]
fn world_position_resolves_through_translated_parent() {
    let mut t = Transform::new();
    t.set_parent_world_matrix(Affine3A::from_translation(Vec3::new(10.0, 0.0, 0.0)));

    t.set_world_position(Vec3::new(12.0, 1.0, 0.0));
    assert!(vec3_approx(t.position, Vec3::new(2.0, 1.0, 0.0)));
    assert!(vec3_approx(t.world_position(), Vec3::new(12.0, 1.0, 0.0)));
}

#[test]
fn world_position_resolves_through_scaled_rotated_parent() {
    let parent = Affine3A::from_scale_rotation_translation(
        Vec3::splat(2.0),
        Quat::from_rotation_y(FRAC_PI_2),
        Vec3::new(0.0, 1.0, 0.0),
    );
    let mut t = Transform::new();
    t.set_parent_world_matrix(parent);

    let target = Vec3::new(4.0, 3.0, -2.0);
    t.set_world_position(target);
    assert!(vec3_approx(t.world_position(), target));
    assert!(vec3_approx(parent.transform_point3(t.position), target));
}

#[test]
fn world_rotation_resolves_through_parent() {
    let mut t = Transform::new();
    t.set_parent_world_matrix(Affine3A::from_rotation_y(FRAC_PI_2));

    t.set_world_euler_degrees(Vec3::new(0.0, 90.0, 0.0));
    // Parent already supplies the 90 degree yaw
    assert!(quat_approx(t.rotation, Quat::IDENTITY));
    assert!(vec3_approx(t.world_euler_degrees(), Vec3::new(0.0, 90.0, 0.0)));
}

#[test]
fn singular_parent_rejects_world_writes() {
    let mut t = Transform::new();
    t.position = Vec3::new(1.0, 2.0, 3.0);
    t.rotation = Quat::from_rotation_x(0.5);
    t.set_parent_world_matrix(Affine3A::from_scale(Vec3::new(1.0, 0.0, 1.0)));
    assert!(!t.has_invertible_parent());

    assert!(!t.set_world_position(Vec3::new(5.0, 5.0, 5.0)));
    assert!(!t.set_world_euler_degrees(Vec3::new(0.0, 45.0, 0.0)));
    assert!(!t.set_world_rotation(Quat::from_rotation_y(1.0)));

    assert_eq!(t.position, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(t.rotation, Quat::from_rotation_x(0.5));
}

#[test]
fn non_finite_parent_rejects_world_writes() {
    let mut t = Transform::new();
    t.set_parent_world_matrix(Affine3A::from_translation(Vec3::new(f32::NAN, 0.0, 0.0)));
    assert!(!t.has_invertible_parent());
    assert!(!t.set_world_position(Vec3::ONE));
    assert_eq!(t.position, Vec3::ZERO);

    t.set_parent_world_matrix(Affine3A::from_scale(Vec3::splat(f32::INFINITY)));
    assert!(!t.set_world_position(Vec3::ONE));
    assert_eq!(t.position, Vec3::ZERO);
}

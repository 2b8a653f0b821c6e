use glam::{Affine3A, EulerRot, Quat, Vec3};

/// Transform component.
///
/// Holds the local position, rotation and scale (TRS) of an entity. The
/// parent's world matrix is supplied by the host so that world-space writes
/// can be resolved back into local space.
///
/// Euler angles are expressed in degrees and applied Z first, then X, then Y
/// (`EulerRot::YXZ` in glam terms). Readback is normalized into `[0, 360)`.
#[derive(Debug, Clone)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,

    parent_world: Affine3A,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            parent_world: Affine3A::IDENTITY,
        }
    }

    // ========================================================================
    // Euler angles (degrees)
    // ========================================================================

    /// Local rotation as Euler angles in degrees, each in `[0, 360)`.
    #[must_use]
    pub fn euler_degrees(&self) -> Vec3 {
        quat_to_euler_degrees(self.rotation)
    }

    /// Sets the local rotation from Euler angles in degrees.
    pub fn set_euler_degrees(&mut self, euler: Vec3) {
        self.rotation = euler_degrees_to_quat(euler);
    }

    /// World rotation as Euler angles in degrees, each in `[0, 360)`.
    #[must_use]
    pub fn world_euler_degrees(&self) -> Vec3 {
        quat_to_euler_degrees(self.world_rotation())
    }

    /// Sets the world rotation from Euler angles in degrees.
    ///
    /// Returns `false` and leaves the rotation untouched when the parent
    /// matrix cannot be inverted.
    pub fn set_world_euler_degrees(&mut self, euler: Vec3) -> bool {
        self.set_world_rotation(euler_degrees_to_quat(euler))
    }

    // ========================================================================
    // World-space access
    // ========================================================================

    /// Whether world-space writes can be resolved through the parent matrix.
    ///
    /// A parent collapsed on any axis (zero scale) or holding non-finite
    /// values has no inverse.
    #[must_use]
    pub fn has_invertible_parent(&self) -> bool {
        let det = self.parent_world.matrix3.determinant();
        det.is_finite() && det.abs() >= f32::MIN_POSITIVE && self.parent_world.translation.is_finite()
    }

    /// Position in world space.
    #[must_use]
    pub fn world_position(&self) -> Vec3 {
        self.parent_world.transform_point3(self.position)
    }

    /// Moves the entity so that its world position equals `position`.
    ///
    /// Returns `false` and leaves the position untouched when the parent
    /// matrix cannot be inverted.
    pub fn set_world_position(&mut self, position: Vec3) -> bool {
        if !self.has_invertible_parent() {
            return false;
        }
        self.position = self.parent_world.inverse().transform_point3(position);
        true
    }

    /// Rotation in world space.
    #[must_use]
    pub fn world_rotation(&self) -> Quat {
        self.parent_rotation() * self.rotation
    }

    /// Rotates the entity so that its world rotation equals `rotation`.
    ///
    /// Returns `false` and leaves the rotation untouched when the parent
    /// matrix cannot be inverted.
    pub fn set_world_rotation(&mut self, rotation: Quat) -> bool {
        if !self.has_invertible_parent() {
            return false;
        }
        self.rotation = (self.parent_rotation().inverse() * rotation).normalize();
        true
    }

    fn parent_rotation(&self) -> Quat {
        let (_, rotation, _) = self.parent_world.to_scale_rotation_translation();
        rotation
    }

    // ========================================================================
    // Parent
    // ========================================================================

    /// Sets the parent's world matrix (written by the host's hierarchy pass).
    pub fn set_parent_world_matrix(&mut self, mat: Affine3A) {
        self.parent_world = mat;
    }

    #[inline]
    #[must_use]
    pub fn parent_world_matrix(&self) -> &Affine3A {
        &self.parent_world
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts Euler degrees (Z, then X, then Y) into a quaternion.
#[must_use]
pub fn euler_degrees_to_quat(euler: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        euler.y.to_radians(),
        euler.x.to_radians(),
        euler.z.to_radians(),
    )
}

/// Inverse of [`euler_degrees_to_quat`], with every angle in `[0, 360)`.
#[must_use]
pub fn quat_to_euler_degrees(rotation: Quat) -> Vec3 {
    let (y, x, z) = rotation.to_euler(EulerRot::YXZ);
    Vec3::new(
        normalize_degrees(x.to_degrees()),
        normalize_degrees(y.to_degrees()),
        normalize_degrees(z.to_degrees()),
    )
}

/// Wraps an angle into `[0, 360)`; `-0` and values that round up to 360 map to 0.
#[must_use]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // `+ 0.0` turns -0 into 0
    if wrapped < 360.0 { wrapped + 0.0 } else { 0.0 }
}

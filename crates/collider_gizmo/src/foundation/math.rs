//! Math utilities and types
//!
//! Provides the math types the gizmo works in: 3D vectors, quaternion
//! rotations, and the parent transform (position, rotation, non-uniform
//! scale) that anchors a shape's local coordinates.

pub use nalgebra::{Quaternion, Unit, Vector3, Vector4};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type (used for RGBA colors in draw commands)
pub type Vec4 = Vector4<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Transform representing position, rotation, and scale
///
/// Read-only input to the geometry engine; supplied by the host scene graph.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors (may be non-uniform and negative)
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform with position and rotation
    #[must_use]
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Create a transform from full position, rotation, and scale
    #[must_use]
    pub fn from_parts(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Rotate a vector by this transform's rotation (no translation, no scale)
    #[must_use]
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        self.rotation * v
    }

    /// Rotate a vector by the inverse of this transform's rotation
    ///
    /// Expresses a world-space delta in the transform's local frame.
    #[must_use]
    pub fn inverse_rotate(&self, v: Vec3) -> Vec3 {
        self.rotation.inverse() * v
    }

    /// Apply this transform to a local-space point (scale, rotate, translate)
    #[must_use]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.position + self.rotation * point.component_mul(&self.scale)
    }
}

/// Math utility functions
///
/// Component-wise vector helpers the drag resolver leans on. Division does
/// not guard against zero scale components; the host supplies well-formed
/// transforms.
pub mod utils {
    use super::Vec3;

    /// Divide each component of `v` by the matching component of `by`
    #[must_use]
    pub fn component_div(v: Vec3, by: Vec3) -> Vec3 {
        Vec3::new(v.x / by.x, v.y / by.y, v.z / by.z)
    }

    /// Per-component sign of a vector, e.g. (32, -2, 0) -> (1, -1, 1)
    ///
    /// Zero maps to +1, matching the convention the negative-side handle
    /// test depends on for on-axis points.
    #[must_use]
    pub fn sign_vector(v: Vec3) -> Vec3 {
        Vec3::new(sign(v.x), sign(v.y), sign(v.z))
    }

    /// True if any component of the vector is strictly positive
    #[must_use]
    pub fn any_component_positive(v: Vec3) -> bool {
        v.x > 0.0 || v.y > 0.0 || v.z > 0.0
    }

    /// Largest component of a vector
    #[must_use]
    pub fn max_component(v: Vec3) -> f32 {
        v.x.max(v.y).max(v.z)
    }

    fn sign(x: f32) -> f32 {
        if x < 0.0 {
            -1.0
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::utils::{any_component_positive, component_div, max_component, sign_vector};
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_transform_point_applies_scale_then_rotation() {
        let rotation = Quat::from_axis_angle(&Vec3::y_axis(), std::f32::consts::FRAC_PI_2);
        let transform = Transform::from_parts(
            Vec3::new(1.0, 0.0, 0.0),
            rotation,
            Vec3::new(2.0, 1.0, 1.0),
        );

        // (1, 0, 0) scaled to (2, 0, 0), rotated 90 deg around Y to (0, 0, -2),
        // translated by (1, 0, 0).
        let world = transform.transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(world, Vec3::new(1.0, 0.0, -2.0), epsilon = 1e-5);
    }

    #[test]
    fn test_inverse_rotate_round_trip() {
        let rotation = Quat::from_axis_angle(
            &nalgebra::Unit::new_normalize(Vec3::new(1.0, 1.0, 0.0)),
            0.7,
        );
        let transform = Transform::from_position_rotation(Vec3::zeros(), rotation);

        let v = Vec3::new(0.3, -1.2, 4.0);
        let round_trip = transform.inverse_rotate(transform.rotate(v));
        assert_relative_eq!(round_trip, v, epsilon = EPSILON);
    }

    #[test]
    fn test_component_div() {
        let v = component_div(Vec3::new(4.0, 9.0, -2.0), Vec3::new(2.0, 3.0, 2.0));
        assert_relative_eq!(v, Vec3::new(2.0, 3.0, -1.0), epsilon = EPSILON);
    }

    #[test]
    fn test_sign_vector_zero_is_positive() {
        let v = sign_vector(Vec3::new(32.0, -2.0, 0.0));
        assert_eq!(v, Vec3::new(1.0, -1.0, 1.0));
    }

    #[test]
    fn test_any_component_positive() {
        assert!(any_component_positive(Vec3::new(-1.0, 0.0, 0.5)));
        assert!(!any_component_positive(Vec3::new(-1.0, 0.0, -0.5)));
    }

    #[test]
    fn test_max_component() {
        assert_relative_eq!(
            max_component(Vec3::new(1.0, 3.0, 2.0)),
            3.0,
            epsilon = EPSILON
        );
    }
}

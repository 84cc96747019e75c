//! Collider shape descriptors
//!
//! The persisted geometric parameters of the collider-like volumes the gizmo
//! edits. Descriptors are stored in LOCAL SPACE (unscaled units); the parent
//! transform is applied on-the-fly when handles are generated or drags are
//! resolved.

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;

/// Principal axis a capsule extends along
///
/// Maps the engine-style `direction` integer (0 = X, 1 = Y, 2 = Z).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapsuleAxis {
    /// Capsule extends along local X
    X,
    /// Capsule extends along local Y
    Y,
    /// Capsule extends along local Z
    Z,
}

impl CapsuleAxis {
    /// Unit vector of this axis in local space
    #[must_use]
    pub fn unit(self) -> Vec3 {
        match self {
            Self::X => Vec3::new(1.0, 0.0, 0.0),
            Self::Y => Vec3::new(0.0, 1.0, 0.0),
            Self::Z => Vec3::new(0.0, 0.0, 1.0),
        }
    }

    /// Scale factor along this axis, picked out of a parent scale vector
    #[must_use]
    pub fn scale_along(self, scale: Vec3) -> f32 {
        match self {
            Self::X => scale.x,
            Self::Y => scale.y,
            Self::Z => scale.z,
        }
    }

    /// Largest scale factor of the two axes perpendicular to this one
    #[must_use]
    pub fn max_perpendicular_scale(self, scale: Vec3) -> f32 {
        match self {
            Self::X => scale.y.max(scale.z),
            Self::Y => scale.x.max(scale.z),
            Self::Z => scale.x.max(scale.y),
        }
    }
}

/// Collider shape descriptor (stored in LOCAL SPACE)
///
/// Tagged union over the three editable shape kinds. Each variant carries the
/// fields the matching handle set mutates; `clamp_invariants` keeps them
/// visually sane after every edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeDescriptor {
    /// Axis-aligned box: local center and full size per axis
    Box {
        /// Local-space center offset
        center: Vec3,
        /// Full extent along each local axis
        size: Vec3,
    },
    /// Capsule: local center, radius, full height, and principal axis
    Capsule {
        /// Local-space center offset
        center: Vec3,
        /// Hemisphere radius
        radius: f32,
        /// Full height, hemispheres included
        height: f32,
        /// Axis the capsule extends along
        axis: CapsuleAxis,
    },
    /// Sphere: local center and radius
    Sphere {
        /// Local-space center offset
        center: Vec3,
        /// Sphere radius
        radius: f32,
    },
}

impl ShapeDescriptor {
    /// Creates a box descriptor from center and full size
    #[must_use]
    pub fn cuboid(center: Vec3, size: Vec3) -> Self {
        Self::Box { center, size }
    }

    /// Creates a capsule descriptor
    #[must_use]
    pub fn capsule(center: Vec3, radius: f32, height: f32, axis: CapsuleAxis) -> Self {
        Self::Capsule {
            center,
            radius,
            height,
            axis,
        }
    }

    /// Creates a sphere descriptor
    #[must_use]
    pub fn sphere(center: Vec3, radius: f32) -> Self {
        Self::Sphere { center, radius }
    }

    /// Local-space center of the shape
    #[must_use]
    pub fn center(&self) -> Vec3 {
        match self {
            Self::Box { center, .. } | Self::Capsule { center, .. } | Self::Sphere { center, .. } => {
                *center
            }
        }
    }

    /// Mutable access to the local-space center
    pub fn center_mut(&mut self) -> &mut Vec3 {
        match self {
            Self::Box { center, .. } | Self::Capsule { center, .. } | Self::Sphere { center, .. } => {
                center
            }
        }
    }

    /// Short kind name used in undo labels and log lines
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Box { .. } => "box",
            Self::Capsule { .. } => "capsule",
            Self::Sphere { .. } => "sphere",
        }
    }

    /// Enforce shape validity, unconditionally after every mutation
    ///
    /// Sizes, radii, and heights are replaced by their absolute values.
    /// For capsules, height is raised to `2 * radius` if smaller, then
    /// radius is lowered to `height / 2` if larger; height takes precedence.
    pub fn clamp_invariants(&mut self) {
        match self {
            Self::Box { size, .. } => {
                *size = Vec3::new(size.x.abs(), size.y.abs(), size.z.abs());
            }
            Self::Capsule { radius, height, .. } => {
                *radius = radius.abs();
                *height = height.abs();

                if *height < *radius * 2.0 {
                    *height = *radius * 2.0;
                }
                if *radius > *height / 2.0 {
                    *radius = *height / 2.0;
                }
            }
            Self::Sphere { radius, .. } => {
                *radius = radius.abs();
            }
        }
    }

    /// Copy of this descriptor with invariants enforced
    #[must_use]
    pub fn clamped(&self) -> Self {
        let mut shape = self.clone();
        shape.clamp_invariants();
        shape
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_box_clamp_never_negative() {
        let mut shape = ShapeDescriptor::cuboid(Vec3::zeros(), Vec3::new(-1.0, 2.0, -0.25));
        shape.clamp_invariants();

        let ShapeDescriptor::Box { size, .. } = shape else {
            panic!("expected a box");
        };
        assert!(size.x >= 0.0 && size.y >= 0.0 && size.z >= 0.0);
        assert_relative_eq!(size, Vec3::new(1.0, 2.0, 0.25), epsilon = 1e-6);
    }

    #[test]
    fn test_capsule_height_raised_to_twice_radius() {
        let mut shape = ShapeDescriptor::capsule(Vec3::zeros(), 1.0, 1.0, CapsuleAxis::Y);
        shape.clamp_invariants();

        let ShapeDescriptor::Capsule { radius, height, .. } = shape else {
            panic!("expected a capsule");
        };
        assert_relative_eq!(height, 2.0, epsilon = 1e-6);
        assert_relative_eq!(radius, 1.0, epsilon = 1e-6);
        assert!(height >= radius * 2.0);
    }

    #[test]
    fn test_capsule_clamp_holds_after_arbitrary_mutation() {
        for (radius, height) in [(3.0, 0.5), (0.1, 10.0), (-2.0, 1.0), (2.0, -1.0)] {
            let mut shape = ShapeDescriptor::capsule(Vec3::zeros(), radius, height, CapsuleAxis::X);
            shape.clamp_invariants();

            let ShapeDescriptor::Capsule { radius, height, .. } = shape else {
                panic!("expected a capsule");
            };
            assert!(radius >= 0.0);
            assert!(height >= radius * 2.0, "height {height} < 2 * radius {radius}");
        }
    }

    #[test]
    fn test_sphere_radius_abs() {
        let mut shape = ShapeDescriptor::sphere(Vec3::zeros(), -2.5);
        shape.clamp_invariants();
        let ShapeDescriptor::Sphere { radius, .. } = shape else {
            panic!("expected a sphere");
        };
        assert_relative_eq!(radius, 2.5, epsilon = 1e-6);
    }

    #[test]
    fn test_capsule_axis_perpendicular_scale() {
        let scale = Vec3::new(1.0, 2.0, 3.0);
        assert_relative_eq!(CapsuleAxis::X.max_perpendicular_scale(scale), 3.0);
        assert_relative_eq!(CapsuleAxis::Y.max_perpendicular_scale(scale), 3.0);
        assert_relative_eq!(CapsuleAxis::Z.max_perpendicular_scale(scale), 2.0);
        assert_relative_eq!(CapsuleAxis::Y.scale_along(scale), 2.0);
    }

    #[test]
    fn test_descriptor_serde_round_trip() {
        let shape = ShapeDescriptor::capsule(Vec3::new(0.5, 0.0, -1.0), 0.5, 2.0, CapsuleAxis::Z);
        let text = ron::to_string(&shape).expect("serialize");
        let back: ShapeDescriptor = ron::from_str(&text).expect("deserialize");
        assert_eq!(back, shape);
    }
}

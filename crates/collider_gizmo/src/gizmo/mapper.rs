//! World-position mapping
//!
//! Maps local handle offsets into world space. Capsule handle geometry is
//! authored in "axis = up" local space, so capsules get an extra fixed
//! rotation taking the up reference axis to the configured axis before the
//! parent rotation and translation are applied.

use crate::foundation::math::{Quat, Transform, Vec3};
use crate::shapes::ShapeDescriptor;

/// Rotation from the authoring frame to the shape's local frame
///
/// Identity for boxes and spheres; for capsules, the rotation taking local
/// up to the capsule's configured axis.
#[must_use]
pub fn axis_rotation(shape: &ShapeDescriptor) -> Quat {
    match shape {
        ShapeDescriptor::Capsule { axis, .. } => {
            Quat::rotation_between(&Vec3::y_axis(), &axis.unit()).unwrap_or_else(|| {
                // Up and axis are antiparallel only for a hypothetical -Y
                // axis, which CapsuleAxis cannot express; identity keeps the
                // function total anyway.
                Quat::from_axis_angle(&Vec3::x_axis(), std::f32::consts::PI)
            })
        }
        ShapeDescriptor::Box { .. } | ShapeDescriptor::Sphere { .. } => Quat::identity(),
    }
}

/// World-space position of the shape's center
///
/// The parent position plus the rotated, scaled local center.
#[must_use]
pub fn world_center(shape: &ShapeDescriptor, parent: &Transform) -> Vec3 {
    parent.transform_point(shape.center())
}

/// Map a local handle offset to its world-space position
///
/// Axis rotation (capsules), then parent rotation, then translation by the
/// shape's world-space center. Offsets come pre-scaled from
/// [`super::points::handle_points`], so no scale is applied here.
#[must_use]
pub fn world_handle_position(shape: &ShapeDescriptor, parent: &Transform, offset: Vec3) -> Vec3 {
    let aligned = axis_rotation(shape) * offset;
    parent.rotate(aligned) + world_center(shape, parent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gizmo::points::handle_points;
    use crate::shapes::CapsuleAxis;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_axis_rotation_identity_for_up_capsule() {
        let shape = ShapeDescriptor::capsule(Vec3::zeros(), 1.0, 4.0, CapsuleAxis::Y);
        let rotation = axis_rotation(&shape);
        assert_relative_eq!(rotation * Vec3::y(), Vec3::y(), epsilon = EPSILON);
    }

    #[test]
    fn test_x_axis_capsule_top_handle_lands_on_x() {
        let shape = ShapeDescriptor::capsule(Vec3::zeros(), 1.0, 4.0, CapsuleAxis::X);
        let parent = Transform::identity();
        let points = handle_points(&shape, parent.scale);

        // The +height handle is authored at (0, 2, 0); the axis rotation
        // must carry it onto +X.
        let world = world_handle_position(&shape, &parent, points[1].offset);
        assert_relative_eq!(world, Vec3::new(2.0, 0.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_world_center_includes_scaled_local_center() {
        let shape = ShapeDescriptor::sphere(Vec3::new(1.0, 0.0, 0.0), 1.0);
        let parent = Transform::from_parts(
            Vec3::new(10.0, 0.0, 0.0),
            Quat::identity(),
            Vec3::new(2.0, 2.0, 2.0),
        );
        assert_relative_eq!(
            world_center(&shape, &parent),
            Vec3::new(12.0, 0.0, 0.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_parent_rotation_applied_after_axis_rotation() {
        let shape = ShapeDescriptor::capsule(Vec3::zeros(), 1.0, 4.0, CapsuleAxis::X);
        let parent = Transform::from_position_rotation(
            Vec3::zeros(),
            Quat::from_axis_angle(&Vec3::y_axis(), std::f32::consts::FRAC_PI_2),
        );
        let points = handle_points(&shape, parent.scale);

        // +X in local space, rotated 90 deg around Y, ends up at -Z.
        let world = world_handle_position(&shape, &parent, points[1].offset);
        assert_relative_eq!(world, Vec3::new(0.0, 0.0, -2.0), epsilon = EPSILON);
    }
}

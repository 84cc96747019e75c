//! Handle point generation
//!
//! Computes the control points the user can grab for a given shape and parent
//! scale. Points are LOCAL offsets from the shape's center, pre-multiplied by
//! the parent scale so the handles sit on the shape's visual surface; they
//! are regenerated every frame and never persisted.

use crate::foundation::math::{utils::max_component, Vec3};
use crate::shapes::ShapeDescriptor;

/// Index of the center handle; always zero for every shape kind
pub const HANDLE_CENTER: usize = 0;

/// Number of handle points generated for every shape kind
pub const HANDLE_COUNT: usize = 7;

/// A single grabbable control point
///
/// `offset` is the local-space offset from the shape's center, already scaled
/// by the parent transform's scale factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandlePoint {
    /// Handle index; 0 is the center, 1-6 are per-axis feature handles
    pub index: usize,
    /// Local-space offset from the shape center
    pub offset: Vec3,
}

/// What a handle index manipulates for a given shape kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleRole {
    /// Moves the shape's center
    Center,
    /// Pulls a box face along its outward normal
    Face,
    /// Pulls a capsule end cap along the capsule axis
    Height,
    /// Adjusts a radius
    Radius,
}

/// Generate the ordered handle points for a shape
///
/// Always produces exactly [`HANDLE_COUNT`] points; pure in the descriptor
/// and parent scale.
#[must_use]
pub fn handle_points(shape: &ShapeDescriptor, parent_scale: Vec3) -> Vec<HandlePoint> {
    let offsets = match shape {
        ShapeDescriptor::Box { size, .. } => {
            let ex = (size / 2.0).component_mul(&parent_scale);
            axis_pair_offsets(ex.x, ex.y, ex.z)
        }
        ShapeDescriptor::Sphere { radius, .. } => {
            let rad = radius * max_component(parent_scale);
            axis_pair_offsets(rad, rad, rad)
        }
        ShapeDescriptor::Capsule {
            radius,
            height,
            axis,
            ..
        } => {
            // Authored in axis-up local space; the mapper rotates these to
            // the configured axis.
            let half_height = height / 2.0 * axis.scale_along(parent_scale);
            let rad = radius * axis.max_perpendicular_scale(parent_scale);
            [
                Vec3::zeros(),
                Vec3::new(0.0, half_height, 0.0),
                Vec3::new(0.0, -half_height, 0.0),
                Vec3::new(rad, 0.0, 0.0),
                Vec3::new(-rad, 0.0, 0.0),
                Vec3::new(0.0, 0.0, rad),
                Vec3::new(0.0, 0.0, -rad),
            ]
        }
    };

    offsets
        .into_iter()
        .enumerate()
        .map(|(index, offset)| HandlePoint { index, offset })
        .collect()
}

/// Classify a handle index for a shape kind
#[must_use]
pub fn handle_role(shape: &ShapeDescriptor, index: usize) -> HandleRole {
    if index == HANDLE_CENTER {
        return HandleRole::Center;
    }
    match shape {
        ShapeDescriptor::Box { .. } => HandleRole::Face,
        ShapeDescriptor::Capsule { .. } => {
            if index <= 2 {
                HandleRole::Height
            } else {
                HandleRole::Radius
            }
        }
        ShapeDescriptor::Sphere { .. } => HandleRole::Radius,
    }
}

/// Center plus antipodal pairs along X, Y, and Z
fn axis_pair_offsets(x: f32, y: f32, z: f32) -> [Vec3; HANDLE_COUNT] {
    [
        Vec3::zeros(),
        Vec3::new(x, 0.0, 0.0),
        Vec3::new(-x, 0.0, 0.0),
        Vec3::new(0.0, y, 0.0),
        Vec3::new(0.0, -y, 0.0),
        Vec3::new(0.0, 0.0, z),
        Vec3::new(0.0, 0.0, -z),
    ]
}

//! Frame layout: draw commands for the host
//!
//! The widget library that actually renders handles and reports drags is an
//! opaque external collaborator, so the engine emits plain draw data every
//! frame: dotted guide lines from the shape's center to each handle, and
//! handle caps with position, orientation, size, pick size, and color. The
//! host renders them and feeds clicks and drag deltas back in.

use crate::config::{EditorConfig, Palette};
use crate::foundation::math::{Quat, Transform, Vec3, Vec4};
use crate::shapes::ShapeDescriptor;

use super::mapper::{axis_rotation, world_center, world_handle_position};
use super::points::{handle_role, HandlePoint, HandleRole, HANDLE_CENTER};
use super::session::EditSession;

/// Ratio of the base view size used for slider and center handles
const SIZE_HANDLE_RATIO: f32 = 0.8;
/// Outward offset of the scale cube, in base view sizes
const SCALE_HANDLE_OFFSET: f32 = 1.5;
/// Outward offset of the radius slider sphere, in base view sizes
const RADIUS_HANDLE_OFFSET: f32 = 0.2;
/// Screen-space gap of dotted guide lines
const DOTTED_LINE_GAP: f32 = 0.2;

/// Per-frame handle sizes derived from a view-dependent base size
///
/// The host supplies the base size (its camera knows how large one screen
/// unit is at the handle's depth); the ratios match the editor's look.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleSizes {
    /// Slider length for size and center arrows
    pub size_handle: f32,
    /// Slider length for the center arrows
    pub center_handle: f32,
    /// Rectangle cap size for face and height handles
    pub square: f32,
    /// Cube cap size for center and scale handles
    pub cube: f32,
    /// Circle cap size for radius handles
    pub circle: f32,
    /// Sphere cap size for radius sliders
    pub sphere: f32,
    /// Dot cap size for collapsed (clickable) handles
    pub dot: f32,
}

impl HandleSizes {
    /// Compute all handle sizes from one base view size
    #[must_use]
    pub fn from_view_size(base: f32) -> Self {
        Self {
            size_handle: base * SIZE_HANDLE_RATIO,
            center_handle: base * SIZE_HANDLE_RATIO,
            square: base / 8.0,
            cube: base / 8.0,
            circle: base / 6.0,
            sphere: base / 6.0,
            dot: base / 32.0,
        }
    }
}

/// Handle cap geometry kinds the host knows how to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapKind {
    /// Outlined rectangle (face and height handles)
    Rectangle,
    /// Outlined circle (radius handles)
    Circle,
    /// Solid cube (center and scale handles)
    Cube,
    /// Solid sphere (radius slider grip)
    Sphere,
    /// Small dot (collapsed clickable handle)
    Dot,
    /// Arrow along the slide direction (pull and center sliders)
    Arrow,
}

/// One draw command for the host renderer
#[derive(Debug, Clone, PartialEq)]
pub enum GizmoDraw {
    /// Dotted guide line between two world points
    DottedLine {
        /// Line start in world space
        start: Vec3,
        /// Line end in world space
        end: Vec3,
        /// Screen-space gap between dots
        gap: f32,
        /// RGBA color
        color: Vec4,
    },
    /// A handle cap at a world position
    Cap {
        /// Handle index this cap belongs to (None for decorations)
        handle: Option<usize>,
        /// Cap geometry
        kind: CapKind,
        /// World-space position
        position: Vec3,
        /// Orientation of the cap
        rotation: Quat,
        /// Cap size
        size: f32,
        /// Clickable margin; zero for non-interactive decorations
        pick_size: f32,
        /// RGBA color
        color: Vec4,
    },
}

/// Compute the draw list for one frame
///
/// Pure in the descriptor, parent transform, point set, and selection state.
#[must_use]
pub fn frame_layout(
    shape: &ShapeDescriptor,
    parent: &Transform,
    points: &[HandlePoint],
    session: &EditSession,
    config: &EditorConfig,
    view_size: f32,
) -> Vec<GizmoDraw> {
    let sizes = HandleSizes::from_view_size(view_size);
    let palette = &config.palette;
    let center = world_center(shape, parent);
    let pick = config.pick_multiplier;

    let mut draws = Vec::new();
    for point in points {
        if skip_collapsed_sphere_handle(shape, point.index, config) {
            continue;
        }

        let position = world_handle_position(shape, parent, point.offset);
        let selected = session.is_selected(point.index);
        let always_active = !config.collapse_unselected_handles
            && matches!(shape, ShapeDescriptor::Box { .. });

        draws.push(GizmoDraw::DottedLine {
            start: center,
            end: position,
            gap: DOTTED_LINE_GAP,
            color: if selected || always_active {
                palette.selected
            } else {
                palette.uninteractable
            },
        });

        let role = handle_role(shape, point.index);
        if selected || (always_active && point.index != HANDLE_CENTER) {
            push_active_handle(
                &mut draws, shape, parent, session, point, role, position, center, &sizes, palette,
                view_size,
            );
        } else {
            push_inactive_handle(
                &mut draws, shape, parent, session, point, role, position, &sizes, palette, pick,
            );
        }
    }
    draws
}

/// Sphere option: draw only the center and +X handles when the all-sides
/// option is off
fn skip_collapsed_sphere_handle(
    shape: &ShapeDescriptor,
    index: usize,
    config: &EditorConfig,
) -> bool {
    matches!(shape, ShapeDescriptor::Sphere { .. })
        && !config.sphere_handles_on_all_sides
        && index > 1
}

fn push_active_handle(
    draws: &mut Vec<GizmoDraw>,
    shape: &ShapeDescriptor,
    parent: &Transform,
    session: &EditSession,
    point: &HandlePoint,
    role: HandleRole,
    position: Vec3,
    center: Vec3,
    sizes: &HandleSizes,
    palette: &Palette,
    view_size: f32,
) {
    let outward = outward_direction(position, center);
    match role {
        HandleRole::Center => {
            let pivot = session.pivot_mode.pivot_rotation(parent);
            for axis in [Vec3::x(), Vec3::y(), Vec3::z()] {
                draws.push(GizmoDraw::Cap {
                    handle: Some(point.index),
                    kind: CapKind::Arrow,
                    position,
                    rotation: look_rotation_or_identity(axis, pivot),
                    size: sizes.center_handle,
                    pick_size: sizes.center_handle,
                    color: palette.selected,
                });
            }
        }
        HandleRole::Face | HandleRole::Height => {
            let rotation = cap_rotation(shape, parent, point.offset);
            draws.push(GizmoDraw::Cap {
                handle: Some(point.index),
                kind: CapKind::Rectangle,
                position,
                rotation,
                size: sizes.square,
                pick_size: 0.0,
                color: palette.selected,
            });
            draws.push(GizmoDraw::Cap {
                handle: Some(point.index),
                kind: CapKind::Arrow,
                position,
                rotation,
                size: sizes.size_handle,
                pick_size: sizes.size_handle,
                color: palette.selected,
            });
            // Scale cube sits outward from the face handle.
            draws.push(GizmoDraw::Cap {
                handle: Some(point.index),
                kind: CapKind::Cube,
                position: position + outward * view_size * SCALE_HANDLE_OFFSET,
                rotation,
                size: sizes.cube,
                pick_size: sizes.cube,
                color: palette.selected,
            });
        }
        HandleRole::Radius => {
            let rotation = cap_rotation(shape, parent, point.offset);
            draws.push(GizmoDraw::Cap {
                handle: Some(point.index),
                kind: CapKind::Circle,
                position,
                rotation,
                size: sizes.circle,
                pick_size: 0.0,
                color: palette.selected,
            });
            draws.push(GizmoDraw::Cap {
                handle: Some(point.index),
                kind: CapKind::Sphere,
                position: position + outward * view_size * RADIUS_HANDLE_OFFSET,
                rotation,
                size: sizes.sphere,
                pick_size: sizes.sphere,
                color: palette.selected,
            });
        }
    }
}

fn push_inactive_handle(
    draws: &mut Vec<GizmoDraw>,
    shape: &ShapeDescriptor,
    parent: &Transform,
    session: &EditSession,
    point: &HandlePoint,
    role: HandleRole,
    position: Vec3,
    sizes: &HandleSizes,
    palette: &Palette,
    pick_multiplier: f32,
) {
    match role {
        HandleRole::Center => {
            draws.push(GizmoDraw::Cap {
                handle: Some(point.index),
                kind: CapKind::Cube,
                position,
                rotation: session.pivot_mode.pivot_rotation(parent),
                size: sizes.cube,
                pick_size: sizes.cube * pick_multiplier,
                color: palette.center_unselected,
            });
        }
        HandleRole::Face | HandleRole::Height => {
            let rotation = cap_rotation(shape, parent, point.offset);
            draws.push(GizmoDraw::Cap {
                handle: Some(point.index),
                kind: CapKind::Rectangle,
                position,
                rotation,
                size: sizes.square,
                pick_size: 0.0,
                color: palette.uninteractable,
            });
            draws.push(GizmoDraw::Cap {
                handle: Some(point.index),
                kind: CapKind::Dot,
                position,
                rotation,
                size: sizes.dot,
                pick_size: sizes.square * pick_multiplier,
                color: palette.unselected,
            });
        }
        HandleRole::Radius => {
            let rotation = cap_rotation(shape, parent, point.offset);
            draws.push(GizmoDraw::Cap {
                handle: Some(point.index),
                kind: CapKind::Circle,
                position,
                rotation,
                size: sizes.circle,
                pick_size: 0.0,
                color: palette.uninteractable,
            });
            draws.push(GizmoDraw::Cap {
                handle: Some(point.index),
                kind: CapKind::Dot,
                position,
                rotation,
                size: sizes.dot,
                pick_size: sizes.circle * pick_multiplier,
                color: palette.unselected,
            });
        }
    }
}

/// Handle cap orientation: look toward the point in the shape's frame
fn cap_rotation(shape: &ShapeDescriptor, parent: &Transform, offset: Vec3) -> Quat {
    look_rotation_or_identity(axis_rotation(shape) * offset, parent.rotation)
}

/// Look rotation toward `v` composed with `rotation`, or identity when `v`
/// is zero
fn look_rotation_or_identity(v: Vec3, rotation: Quat) -> Quat {
    if v == Vec3::zeros() {
        Quat::identity()
    } else {
        rotation * Quat::face_towards(&v, &Vec3::y())
    }
}

/// Unit direction from the shape's center toward a handle
fn outward_direction(position: Vec3, center: Vec3) -> Vec3 {
    let v = position - center;
    if v == Vec3::zeros() {
        Vec3::zeros()
    } else {
        v.normalize()
    }
}

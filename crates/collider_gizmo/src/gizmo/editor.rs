//! Per-frame editor surface
//!
//! The host drives [`ColliderEditor::frame`] once per scene-view tick with
//! whatever the widget layer reported for that frame (a click on a handle's
//! hit target, or one committed drag gesture). The editor applies selection
//! transitions, registers an undo label before any mutation, resolves the
//! gesture into clamped shape fields, writes them back, and hands the host
//! the draw list for the updated shape.

use thiserror::Error;

use crate::config::{ConfigError, EditorConfig};
use crate::foundation::math::Vec3;
use crate::history::UndoSink;
use crate::scene::SceneRegistry;
use crate::shapes::ShapeDescriptor;

use super::layout::{frame_layout, GizmoDraw};
use super::points::{handle_points, handle_role, HandleRole};
use super::resolver::{resolve_drag, DragGesture};
use super::session::EditSession;

/// Errors at the host-facing editor surface
///
/// Geometry itself is total; these cover host bookkeeping going stale.
#[derive(Error, Debug)]
pub enum GizmoError {
    /// A reported handle index is out of range for the current point set
    #[error("unknown handle index {index} (shape has {count} handles)")]
    UnknownHandle {
        /// The offending index
        index: usize,
        /// Number of handles the shape actually has
        count: usize,
    },

    /// The session's target no longer exists in the scene registry
    #[error("edit target no longer exists in the scene")]
    ObjectNotFound,

    /// Configuration error propagated to the editor surface
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// What the widget layer reported for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameInput {
    /// View-dependent base handle size at the shape's position
    pub view_size: f32,
    /// Handle whose hit target was clicked this frame
    pub clicked: Option<usize>,
    /// Committed drag gesture, if one ended this frame
    pub drag: Option<DragGesture>,
}

impl FrameInput {
    /// A frame with no interaction
    #[must_use]
    pub fn idle() -> Self {
        Self {
            view_size: 1.0,
            clicked: None,
            drag: None,
        }
    }

    /// A frame in which a handle's hit target was clicked
    #[must_use]
    pub fn click(handle: usize) -> Self {
        Self {
            clicked: Some(handle),
            ..Self::idle()
        }
    }

    /// A frame in which a drag gesture was committed
    #[must_use]
    pub fn drag(gesture: DragGesture) -> Self {
        Self {
            drag: Some(gesture),
            ..Self::idle()
        }
    }

    /// Set the view-dependent base handle size
    #[must_use]
    pub fn with_view_size(mut self, view_size: f32) -> Self {
        self.view_size = view_size;
        self
    }
}

/// Result of one editor frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    /// Draw commands for the host renderer, reflecting any mutation
    pub draws: Vec<GizmoDraw>,
    /// True if the shape descriptor was mutated this frame
    pub mutated: bool,
}

/// Axis selector for the center-reset operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterAxis {
    /// Zero the center's X component
    X,
    /// Zero the center's Y component
    Y,
    /// Zero the center's Z component
    Z,
}

/// Handle-based collider editor
///
/// Stateless apart from its configuration; all per-shape state lives in the
/// [`EditSession`] the host owns.
#[derive(Debug, Clone, Default)]
pub struct ColliderEditor {
    config: EditorConfig,
}

impl ColliderEditor {
    /// Create an editor with the given configuration
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self { config }
    }

    /// Current configuration
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Run one editor frame for a session
    ///
    /// Selection clicks are applied first, then at most one committed drag
    /// gesture: its undo label is registered with `undo` before the shape is
    /// mutated, the resolved and clamped descriptor is written back to the
    /// scene, and the returned draw list reflects the new shape.
    ///
    /// # Errors
    ///
    /// [`GizmoError::ObjectNotFound`] if the session's target is gone;
    /// [`GizmoError::UnknownHandle`] for out-of-range handle indices.
    pub fn frame(
        &self,
        session: &mut EditSession,
        scene: &mut SceneRegistry,
        input: &FrameInput,
        undo: &mut dyn UndoSink,
    ) -> Result<FrameOutput, GizmoError> {
        let object = scene.get(session.target).ok_or(GizmoError::ObjectNotFound)?;
        let parent = object.transform.clone();
        let shape = object.shape.clone();
        let points = handle_points(&shape, parent.scale);

        if let Some(clicked) = input.clicked {
            if clicked >= points.len() {
                return Err(GizmoError::UnknownHandle {
                    index: clicked,
                    count: points.len(),
                });
            }
            session.select(clicked);
        }

        let mut mutated = false;
        if let Some(gesture) = input.drag.as_ref().filter(|g| g.delta != Vec3::zeros()) {
            if gesture.handle >= points.len() {
                return Err(GizmoError::UnknownHandle {
                    index: gesture.handle,
                    count: points.len(),
                });
            }

            // Dragging a handle selects it; in always-active mode the host
            // reports drags on unselected handles too.
            let label = undo_label(&shape, gesture.handle);
            undo.record(session.target, &label, &shape);

            let resolved = resolve_drag(&shape, &parent, &points, gesture)?;
            session.select(gesture.handle);
            log::debug!(
                "{} (handle {}, delta {:?})",
                label,
                gesture.handle,
                gesture.delta
            );

            let object = scene
                .get_mut(session.target)
                .ok_or(GizmoError::ObjectNotFound)?;
            object.shape = resolved;
            mutated = true;
        }

        let object = scene.get(session.target).ok_or(GizmoError::ObjectNotFound)?;
        let points = handle_points(&object.shape, parent.scale);
        let draws = frame_layout(
            &object.shape,
            &parent,
            &points,
            session,
            &self.config,
            input.view_size,
        );
        Ok(FrameOutput { draws, mutated })
    }

    /// Zero one component of the shape's local center
    ///
    /// The inspector's "Center to 0" buttons. Registers an undo entry only
    /// if the component is actually non-zero. Returns whether a mutation
    /// happened.
    ///
    /// # Errors
    ///
    /// [`GizmoError::ObjectNotFound`] if the session's target is gone.
    pub fn recenter_axis(
        &self,
        session: &EditSession,
        scene: &mut SceneRegistry,
        axis: CenterAxis,
        undo: &mut dyn UndoSink,
    ) -> Result<bool, GizmoError> {
        let object = scene
            .get_mut(session.target)
            .ok_or(GizmoError::ObjectNotFound)?;

        let mut center = object.shape.center();
        match axis {
            CenterAxis::X => center.x = 0.0,
            CenterAxis::Y => center.y = 0.0,
            CenterAxis::Z => center.z = 0.0,
        }
        if center == object.shape.center() {
            return Ok(false);
        }

        let label = format!("Recenter {} on axis", object.shape.kind_name());
        let before = object.shape.clone();
        undo.record(session.target, &label, &before);

        *object.shape.center_mut() = center;
        log::debug!("{label}");
        Ok(true)
    }
}

/// Undo label for a drag on `handle`, naming the shape kind and operation
fn undo_label(shape: &ShapeDescriptor, handle: usize) -> String {
    match handle_role(shape, handle) {
        HandleRole::Center => format!("Move {} center", shape.kind_name()),
        HandleRole::Face => format!("Change {} size", shape.kind_name()),
        HandleRole::Height => format!("Change {} height", shape.kind_name()),
        HandleRole::Radius => format!("Change {} radius", shape.kind_name()),
    }
}

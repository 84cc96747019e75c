//! Editing session and selection state
//!
//! One `EditSession` exists per shape being edited, owned by the host UI and
//! discarded when editing is toggled off. There is no global "active shape":
//! the host decides which shape is being edited by which session it drives.

use crate::foundation::math::{Quat, Transform};
use crate::scene::ObjectKey;

use super::points::HANDLE_CENTER;

/// Pivot rotation mode for the center handle
///
/// Global orients the center handle to world axes; Local follows the parent
/// rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PivotMode {
    /// World-axis aligned center handle
    #[default]
    Global,
    /// Center handle follows the parent's rotation
    Local,
}

impl PivotMode {
    /// Rotation to orient the center handle with, for a given parent
    #[must_use]
    pub fn pivot_rotation(self, parent: &Transform) -> Quat {
        match self {
            Self::Global => Quat::identity(),
            Self::Local => parent.rotation,
        }
    }
}

/// Selection state for one edited shape
///
/// States are center-selected or handle-selected(index); clicking an
/// inactive handle's hit target is the only transition. Editing always
/// begins with the center handle selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    /// Scene object whose shape this session edits
    pub target: ObjectKey,
    /// Currently selected handle index
    selected_handle: usize,
    /// Pivot rotation mode for the center handle
    pub pivot_mode: PivotMode,
}

impl EditSession {
    /// Begin editing a shape; the center handle starts selected
    #[must_use]
    pub fn new(target: ObjectKey) -> Self {
        Self {
            target,
            selected_handle: HANDLE_CENTER,
            pivot_mode: PivotMode::default(),
        }
    }

    /// Currently selected handle index
    #[must_use]
    pub fn selected_handle(&self) -> usize {
        self.selected_handle
    }

    /// True if `index` is the selected handle
    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_handle == index
    }

    /// Move selection to a clicked handle
    pub fn select(&mut self, index: usize) {
        if index != self.selected_handle {
            log::trace!("handle selection moved to {index}");
            self.selected_handle = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;

    fn some_key() -> ObjectKey {
        let mut registry = crate::scene::SceneRegistry::new();
        registry.insert(crate::scene::SceneObject::new(
            Transform::identity(),
            crate::shapes::ShapeDescriptor::sphere(Vec3::zeros(), 1.0),
        ))
    }

    #[test]
    fn test_session_starts_with_center_selected() {
        let session = EditSession::new(some_key());
        assert_eq!(session.selected_handle(), HANDLE_CENTER);
        assert!(session.is_selected(HANDLE_CENTER));
    }

    #[test]
    fn test_click_moves_selection() {
        let mut session = EditSession::new(some_key());
        session.select(3);
        assert_eq!(session.selected_handle(), 3);
        assert!(!session.is_selected(HANDLE_CENTER));

        // Selection persists until the next click.
        session.select(3);
        assert_eq!(session.selected_handle(), 3);
    }

    #[test]
    fn test_pivot_rotation_modes() {
        let rotation = Quat::from_axis_angle(&Vec3::y_axis(), 1.0);
        let parent = Transform::from_position_rotation(Vec3::zeros(), rotation);

        assert_eq!(PivotMode::Global.pivot_rotation(&parent), Quat::identity());
        assert_eq!(PivotMode::Local.pivot_rotation(&parent), rotation);
    }
}

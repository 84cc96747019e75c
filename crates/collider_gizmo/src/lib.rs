//! # Collider Gizmo
//!
//! Handle-based editing for collider shapes (box, capsule, sphere).
//!
//! The crate is the geometry half of an interactive collider editor: the host
//! owns rendering, picking, and the mouse, and drives this crate once per
//! frame. In return it gets handle positions, resolved shape mutations, and a
//! list of draw commands for the current frame.
//!
//! ## Features
//!
//! - **Handle Points**: per-shape control points, regenerated every frame
//! - **Drag Resolution**: world-space gesture deltas mapped back into local
//!   center/size/radius/height fields, respecting parent rotation and scale
//! - **Shape Invariants**: non-negative sizes, capsule height/radius coupling
//! - **Edit Sessions**: explicit per-shape selection state, no globals
//! - **Undo Registration**: every committed mutation is labeled and recorded
//!   before it is applied
//!
//! ## Quick Start
//!
//! ```rust
//! use collider_gizmo::prelude::*;
//!
//! let mut scene = SceneRegistry::new();
//! let key = scene.insert(SceneObject::new(
//!     Transform::identity(),
//!     ShapeDescriptor::cuboid(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0)),
//! ));
//!
//! let mut session = EditSession::new(key);
//! let mut undo = UndoStack::new();
//! let editor = ColliderEditor::new(EditorConfig::default());
//!
//! // One host frame: drag the +X face handle outward by one unit.
//! let input = FrameInput::drag(DragGesture::pull(1, Vec3::new(1.0, 0.0, 0.0)));
//! let output = editor.frame(&mut session, &mut scene, &input, &mut undo)?;
//! assert!(!output.draws.is_empty());
//! # Ok::<(), collider_gizmo::GizmoError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod gizmo;
pub mod history;
pub mod scene;
pub mod shapes;

pub use config::{Config, ConfigError, EditorConfig};
pub use gizmo::editor::{CenterAxis, ColliderEditor, FrameInput, FrameOutput, GizmoError};
pub use gizmo::resolver::{DragGesture, DragKind};
pub use gizmo::session::{EditSession, PivotMode};
pub use history::{UndoSink, UndoStack};
pub use scene::{ObjectKey, SceneObject, SceneRegistry};
pub use shapes::{CapsuleAxis, ShapeDescriptor};

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{Config, EditorConfig},
        foundation::math::{Quat, Transform, Vec3},
        gizmo::{
            editor::{CenterAxis, ColliderEditor, FrameInput, FrameOutput, GizmoError},
            layout::{CapKind, GizmoDraw, HandleSizes},
            points::{handle_points, HandlePoint, HandleRole, HANDLE_CENTER},
            resolver::{resolve_drag, DragGesture, DragKind},
            session::{EditSession, PivotMode},
        },
        history::{UndoSink, UndoStack},
        scene::{ObjectKey, SceneObject, SceneRegistry},
        shapes::{CapsuleAxis, ShapeDescriptor},
    };
}

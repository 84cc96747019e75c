//! Undo registration
//!
//! Every committed field mutation is registered with a human-readable label
//! and a snapshot of the shape *before* the mutation is applied; the host's
//! history service (or the bundled [`UndoStack`]) can then restore it.

use crate::scene::{ObjectKey, SceneRegistry};
use crate::shapes::ShapeDescriptor;

/// Sink for undo registrations
///
/// Implemented by the host's undo/history service. `record` is called before
/// the mutation it describes is applied.
pub trait UndoSink {
    /// Register an upcoming mutation of `target`'s shape
    fn record(&mut self, target: ObjectKey, label: &str, before: &ShapeDescriptor);
}

/// One recorded undo entry
#[derive(Debug, Clone, PartialEq)]
pub struct UndoEntry {
    /// Object whose shape was mutated
    pub target: ObjectKey,
    /// Human-readable operation label
    pub label: String,
    /// Shape as it was before the mutation
    pub before: ShapeDescriptor,
}

/// Vec-backed undo stack
///
/// Suitable for tests, the demo app, and hosts without their own history
/// service.
#[derive(Debug, Default)]
pub struct UndoStack {
    entries: Vec<UndoEntry>,
}

impl UndoStack {
    /// Create an empty stack
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded entries, oldest first
    #[must_use]
    pub fn entries(&self) -> &[UndoEntry] {
        &self.entries
    }

    /// Labels of recorded entries, oldest first
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    /// Number of recorded entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pop the newest entry and restore its shape snapshot into the registry
    ///
    /// Returns the undone entry's label, or `None` if the stack is empty or
    /// the target no longer exists.
    pub fn undo(&mut self, registry: &mut SceneRegistry) -> Option<String> {
        let entry = self.entries.pop()?;
        let object = registry.get_mut(entry.target)?;
        object.shape = entry.before;
        log::debug!("undid '{}'", entry.label);
        Some(entry.label)
    }
}

impl UndoSink for UndoStack {
    fn record(&mut self, target: ObjectKey, label: &str, before: &ShapeDescriptor) {
        self.entries.push(UndoEntry {
            target,
            label: label.to_string(),
            before: before.clone(),
        });
    }
}

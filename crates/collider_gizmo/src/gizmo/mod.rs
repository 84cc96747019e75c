//! Collider handle geometry engine
//!
//! Everything runs synchronously inside the host's per-frame scene-editing
//! callback: generate handle points from the current descriptor, map them to
//! world space, resolve at most one committed drag gesture back into shape
//! fields, and emit draw commands for the host to render.

pub mod editor;
pub mod layout;
pub mod mapper;
pub mod points;
pub mod resolver;
pub mod session;

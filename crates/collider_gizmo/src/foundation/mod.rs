//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Math types and operations
//! - Component-wise vector helpers used by drag resolution

pub mod math;

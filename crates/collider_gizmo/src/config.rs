//! Configuration system
//!
//! Editor options that were compile-time statics in older iterations live
//! here, serializable to TOML or RON so hosts can persist user preferences.

pub use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec4;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Fails on unreadable files, parse errors, or unsupported extensions.
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Fails on serialization errors, unwritable paths, or unsupported
    /// extensions.
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// RGBA colors for gizmo draw commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Selected handles and their guide lines (cyan)
    pub selected: Vec4,
    /// Clickable collapsed handles (white)
    pub unselected: Vec4,
    /// Non-interactive decoration (gray)
    pub uninteractable: Vec4,
    /// The center cube when unselected (green)
    pub center_unselected: Vec4,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            selected: Vec4::new(0.0, 1.0, 1.0, 1.0),
            unselected: Vec4::new(1.0, 1.0, 1.0, 1.0),
            uninteractable: Vec4::new(0.5, 0.5, 0.5, 1.0),
            center_unselected: Vec4::new(0.0, 1.0, 0.0, 1.0),
        }
    }
}

/// Editor behavior and appearance options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Clickable margin multiplier applied to handle pick sizes
    pub pick_multiplier: f32,
    /// Collapse unselected box handles into dot buttons; when false, every
    /// box handle is drawn fully interactive and a drag selects it
    pub collapse_unselected_handles: bool,
    /// Draw sphere radius handles on all six sides, or just +X
    pub sphere_handles_on_all_sides: bool,
    /// Draw colors
    pub palette: Palette,
}

impl EditorConfig {
    /// Create a configuration with defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            pick_multiplier: 1.2,
            collapse_unselected_handles: true,
            sphere_handles_on_all_sides: true,
            palette: Palette::default(),
        }
    }

    /// Set the pick multiplier
    #[must_use]
    pub fn with_pick_multiplier(mut self, multiplier: f32) -> Self {
        self.pick_multiplier = multiplier;
        self
    }

    /// Set the collapse-unselected-handles option
    #[must_use]
    pub fn with_collapsed_handles(mut self, collapse: bool) -> Self {
        self.collapse_unselected_handles = collapse;
        self
    }

    /// Set the sphere all-sides option
    #[must_use]
    pub fn with_sphere_handles_on_all_sides(mut self, all_sides: bool) -> Self {
        self.sphere_handles_on_all_sides = all_sides;
        self
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for EditorConfig {}

//! Divider dimension configuration
//!
//! Thickness and insets come from the host's resource system once, at
//! controller construction. They are never re-read; a display swap means a
//! new controller.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Divider dimensions in physical pixels
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DividerConfig {
    /// Full thickness of the divider window, touch target included
    #[serde(default = "default_thickness")]
    pub thickness: i32,
    /// Inset between the touchable divider edge and the visible bar
    #[serde(default = "default_insets")]
    pub insets: i32,
}

fn default_thickness() -> i32 {
    48
}

fn default_insets() -> i32 {
    19
}

impl Default for DividerConfig {
    fn default() -> Self {
        Self {
            thickness: default_thickness(),
            insets: default_insets(),
        }
    }
}

impl DividerConfig {
    /// Parse from a YAML fragment provided by the host
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse divider configuration")
    }

    /// Width of the visible divider bar, with the touch insets removed
    pub fn content_width(&self) -> i32 {
        self.thickness - 2 * self.insets
    }
}

//! Gutter configuration.
//!
//! Settings are plain serde data so hosts can embed them in their own settings files. Missing
//! fields fall back to defaults.
//!
//! ```rust
//! use gutter_core::{GutterConfig, Severity, SeverityStyles, UnderflowWrap};
//!
//! let config = GutterConfig::from_json_str(r#"{
//!     "underflow_wrap": "last",
//!     "colorscheme": { "default_style": 0, "groups": { "gutter-error": 3 } }
//! }"#).unwrap();
//!
//! assert_eq!(config.underflow_wrap, UnderflowWrap::Last);
//! assert_eq!(config.colorscheme.style_for(Severity::Error), 3);
//! assert_eq!(config.colorscheme.style_for(Severity::Info), 0);
//! ```

use crate::navigation::{DEFAULT_UNDERFLOW_WRAP, UnderflowWrap};
use crate::style::Colorscheme;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while loading a [`GutterConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration was not valid JSON or did not match the expected shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Gutter settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GutterConfig {
    /// Where "previous message" lands when stepping back from the first message.
    pub underflow_wrap: UnderflowWrap,
    /// Styles for gutter markers.
    pub colorscheme: Colorscheme,
}

impl Default for GutterConfig {
    fn default() -> Self {
        Self {
            underflow_wrap: DEFAULT_UNDERFLOW_WRAP,
            colorscheme: Colorscheme::default(),
        }
    }
}

impl GutterConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize the configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

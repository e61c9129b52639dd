//! Gutter marker styles.
//!
//! The core never renders anything. Hosts resolve a [`StyleId`] per message through
//! [`SeverityStyles`] and map it to their own visual attributes.

use crate::message::Severity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A host-defined style identifier.
pub type StyleId = u32;

/// Looks up the gutter style for a severity.
pub trait SeverityStyles {
    /// Resolve the style for `severity`, falling back to a default style when none is registered.
    fn style_for(&self, severity: Severity) -> StyleId;
}

/// A colorscheme keyed by group name (`"gutter-info"`, `"gutter-warning"`, `"gutter-error"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Colorscheme {
    /// Style used when a group has no entry.
    pub default_style: StyleId,
    /// Registered styles by group name.
    pub groups: BTreeMap<String, StyleId>,
}

impl Colorscheme {
    /// Create an empty colorscheme that resolves everything to `default_style`.
    pub fn new(default_style: StyleId) -> Self {
        Self {
            default_style,
            groups: BTreeMap::new(),
        }
    }

    /// Register (or replace) the style for a group.
    pub fn set(&mut self, group: impl Into<String>, style: StyleId) {
        self.groups.insert(group.into(), style);
    }

    /// Builder-style variant of [`Colorscheme::set`].
    pub fn with(mut self, group: impl Into<String>, style: StyleId) -> Self {
        self.set(group, style);
        self
    }

    /// Look up a group by name.
    pub fn get(&self, group: &str) -> Option<StyleId> {
        self.groups.get(group).copied()
    }
}

impl SeverityStyles for Colorscheme {
    fn style_for(&self, severity: Severity) -> StyleId {
        self.get(severity.style_group())
            .unwrap_or(self.default_style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falls_back_to_default_style() {
        let scheme = Colorscheme::new(7).with("gutter-error", 1);
        assert_eq!(scheme.style_for(Severity::Error), 1);
        assert_eq!(scheme.style_for(Severity::Warning), 7);
        assert_eq!(scheme.style_for(Severity::Info), 7);
    }
}

//! Gutter message data model.
//!
//! A gutter message is an annotation drawn next to a buffer's line numbers: a linter warning, a
//! compiler error, an informational note. Every message records the producer that created it
//! (its *owner*) so producers can refresh their own output without touching anyone else's.

use crate::location::Location;
use crate::style::{SeverityStyles, StyleId};
use serde::{Deserialize, Serialize};

/// Gutter message severity levels, ordered by increasing importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message.
    Info,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
}

impl Severity {
    /// Colorscheme group name used to look up the gutter style for this severity.
    pub fn style_group(self) -> &'static str {
        match self {
            Severity::Info => "gutter-info",
            Severity::Warning => "gutter-warning",
            Severity::Error => "gutter-error",
        }
    }
}

/// A single gutter message.
///
/// Messages are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message text.
    pub text: String,
    /// Start of the span the message refers to.
    pub start: Location,
    /// End of the span the message refers to.
    pub end: Location,
    /// Message severity.
    pub severity: Severity,
    /// Identifier of the producer that created this message (e.g. `"clippy"`).
    pub owner: String,
}

impl Message {
    /// Create a message spanning `start..end`.
    pub fn new(
        owner: impl Into<String>,
        text: impl Into<String>,
        start: Location,
        end: Location,
        severity: Severity,
    ) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            severity,
            owner: owner.into(),
        }
    }

    /// Create a message anchored to a whole line.
    ///
    /// `line` is 1-based, as reported by most linters; it is stored zero-based. Line `0` is
    /// treated as the first line.
    pub fn at_line(
        owner: impl Into<String>,
        text: impl Into<String>,
        line: usize,
        severity: Severity,
    ) -> Self {
        let anchor = Location::whole_line(line.saturating_sub(1));
        Self::new(owner, text, anchor, anchor, severity)
    }

    /// Whether the message span covers the given zero-based line.
    pub fn covers_line(&self, line: usize) -> bool {
        let (first, last) = if self.start.line <= self.end.line {
            (self.start.line, self.end.line)
        } else {
            (self.end.line, self.start.line)
        };
        first <= line && line <= last
    }

    /// Resolve the gutter marker style for this message.
    pub fn style(&self, styles: &impl SeverityStyles) -> StyleId {
        styles.style_for(self.severity)
    }
}

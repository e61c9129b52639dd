//! Owner-scoped message navigation.
//!
//! # Overview
//!
//! "Go to next lint message" steps through the messages of a single owner. Each owner gets an
//! [`OwnerNavigation`]: a point-in-time snapshot of that owner's messages plus a cursor into it.
//!
//! Snapshots are *not* live views. Adding or clearing messages in the
//! [`MessageStore`](crate::MessageStore) leaves existing snapshots untouched; producers call
//! [`OwnerNavigationIndex::initialize_owner_navigation`] again once they finish a new batch.
//! This keeps the cursor stable while the user is stepping, even if other producers publish in
//! the meantime.
//!
//! # Wraparound
//!
//! Stepping past the last message wraps to the first one. Stepping back from the first message
//! is governed by [`UnderflowWrap`]; the default, [`DEFAULT_UNDERFLOW_WRAP`], lands on the
//! *first* message again rather than the last.
//!
//! # Example
//!
//! ```rust
//! use gutter_core::{Location, Message, MessageStore, OwnerNavigationIndex, Severity};
//!
//! let mut store = MessageStore::new();
//! store.add_message(Message::at_line("lint", "unused import", 2, Severity::Warning));
//! store.add_message(Message::at_line("lint", "missing docs", 7, Severity::Info));
//!
//! let mut index = OwnerNavigationIndex::new();
//! index.initialize_owner_navigation(&store, "lint");
//!
//! let jump = index.navigate_next("lint").unwrap();
//! assert_eq!(jump.location, Location::whole_line(1));
//! assert_eq!(jump.status_text(), "Jumped to message number 1");
//! ```

use crate::location::Location;
use crate::message::Message;
use crate::store::MessageStore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Where a backward step from the first message lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnderflowWrap {
    /// Stay on the first message (index 0).
    #[default]
    First,
    /// Wrap around to the last message.
    Last,
}

/// Underflow policy used unless configured otherwise.
///
/// Backward navigation from the first message lands on the first message again. This mirrors
/// long-standing behavior; switch to [`UnderflowWrap::Last`] through configuration to get a
/// symmetric wraparound.
pub const DEFAULT_UNDERFLOW_WRAP: UnderflowWrap = UnderflowWrap::First;

/// Navigation failures. The `Display` text is suitable for a status bar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Navigation was never initialized for the owner.
    #[error("No linting was done yet")]
    NotInitialized {
        /// The owner navigation was requested for.
        owner: String,
    },
    /// The owner's snapshot has no messages.
    #[error("The linting did not output messages")]
    NoMessages {
        /// The owner navigation was requested for.
        owner: String,
    },
}

/// A successful navigation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationJump {
    /// Where the caret should move (the message start).
    pub location: Location,
    /// Zero-based index of the message within the owner's snapshot.
    pub index: usize,
    /// The message jumped to.
    pub message: Arc<Message>,
}

impl NavigationJump {
    /// Human-readable, 1-based status text.
    pub fn status_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for NavigationJump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Jumped to message number {}", self.index + 1)
    }
}

/// Boolean-plus-status view of a navigation step, for hosts that only show a status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationOutcome {
    /// Whether the step succeeded.
    pub ok: bool,
    /// Target location on success.
    pub location: Option<Location>,
    /// Status text describing the result.
    pub status_text: String,
}

impl From<&Result<NavigationJump, NavigationError>> for NavigationOutcome {
    fn from(result: &Result<NavigationJump, NavigationError>) -> Self {
        match result {
            Ok(jump) => Self {
                ok: true,
                location: Some(jump.location),
                status_text: jump.status_text(),
            },
            Err(err) => Self {
                ok: false,
                location: None,
                status_text: err.to_string(),
            },
        }
    }
}

impl From<Result<NavigationJump, NavigationError>> for NavigationOutcome {
    fn from(result: Result<NavigationJump, NavigationError>) -> Self {
        Self::from(&result)
    }
}

/// Navigation state for one owner.
#[derive(Debug, Clone)]
pub struct OwnerNavigation {
    owner: String,
    snapshot: Vec<Arc<Message>>,
    /// `None` until the first step.
    cursor: Option<usize>,
}

impl OwnerNavigation {
    fn capture(store: &MessageStore, owner: &str) -> Self {
        Self {
            owner: owner.to_string(),
            snapshot: store.messages_for_owner(owner).cloned().collect(),
            cursor: None,
        }
    }

    /// The owner this state was built for.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The owner's messages at initialization time.
    pub fn snapshot(&self) -> &[Arc<Message>] {
        &self.snapshot
    }

    /// Current position in the snapshot, or `None` if no step has happened yet.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Number of messages in the snapshot.
    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    fn step(&mut self, forward: bool, underflow: UnderflowWrap) -> Option<usize> {
        let len = self.snapshot.len();
        if len == 0 {
            return None;
        }

        let next = if forward {
            match self.cursor {
                Some(k) if k + 1 < len => k + 1,
                // First step, or overflow past the last message.
                _ => 0,
            }
        } else {
            match self.cursor {
                Some(k) if k > 0 => k - 1,
                _ => match underflow {
                    UnderflowWrap::First => 0,
                    UnderflowWrap::Last => len - 1,
                },
            }
        };

        self.cursor = Some(next);
        Some(next)
    }
}

/// Per-buffer map from owner to [`OwnerNavigation`].
#[derive(Debug, Clone, Default)]
pub struct OwnerNavigationIndex {
    owners: HashMap<String, OwnerNavigation>,
    underflow_wrap: UnderflowWrap,
}

impl OwnerNavigationIndex {
    /// Create an empty index using [`DEFAULT_UNDERFLOW_WRAP`].
    pub fn new() -> Self {
        Self::with_underflow_wrap(DEFAULT_UNDERFLOW_WRAP)
    }

    /// Create an empty index with an explicit underflow policy.
    pub fn with_underflow_wrap(underflow_wrap: UnderflowWrap) -> Self {
        Self {
            owners: HashMap::new(),
            underflow_wrap,
        }
    }

    /// The active underflow policy.
    pub fn underflow_wrap(&self) -> UnderflowWrap {
        self.underflow_wrap
    }

    /// Change the underflow policy. Existing cursors are kept.
    pub fn set_underflow_wrap(&mut self, underflow_wrap: UnderflowWrap) {
        self.underflow_wrap = underflow_wrap;
    }

    /// Snapshot `owner`'s current messages and reset its cursor.
    ///
    /// Replaces any previous state for `owner`, discarding an in-progress navigation.
    pub fn initialize_owner_navigation(&mut self, store: &MessageStore, owner: &str) {
        let navigation = OwnerNavigation::capture(store, owner);
        log::debug!(
            "initialized navigation for {owner:?} with {} messages",
            navigation.len()
        );
        self.owners.insert(owner.to_string(), navigation);
    }

    /// Navigation state for `owner`, if initialized.
    pub fn navigation(&self, owner: &str) -> Option<&OwnerNavigation> {
        self.owners.get(owner)
    }

    /// Step `owner`'s cursor forward or backward and return the target.
    pub fn navigate_step(
        &mut self,
        owner: &str,
        forward: bool,
    ) -> Result<NavigationJump, NavigationError> {
        let underflow = self.underflow_wrap;
        let navigation = self
            .owners
            .get_mut(owner)
            .ok_or_else(|| NavigationError::NotInitialized {
                owner: owner.to_string(),
            })?;

        let index = navigation
            .step(forward, underflow)
            .ok_or_else(|| NavigationError::NoMessages {
                owner: owner.to_string(),
            })?;

        let message = Arc::clone(&navigation.snapshot[index]);
        log::debug!(
            "navigated {} for {owner:?} to message {index}",
            if forward { "forward" } else { "backward" }
        );

        Ok(NavigationJump {
            location: message.start,
            index,
            message,
        })
    }

    /// Step to the next message of `owner`.
    pub fn navigate_next(&mut self, owner: &str) -> Result<NavigationJump, NavigationError> {
        self.navigate_step(owner, true)
    }

    /// Step to the previous message of `owner`.
    pub fn navigate_previous(&mut self, owner: &str) -> Result<NavigationJump, NavigationError> {
        self.navigate_step(owner, false)
    }
}

//! Buffer-scoped gutter state.
//!
//! [`GutterBuffer`] owns a buffer's [`MessageStore`] together with its
//! [`OwnerNavigationIndex`], so every buffer has its own messages and its own navigation
//! cursors. It also tracks a version number and notifies subscribers about changes, so a
//! frontend can redraw the gutter only when needed.
//!
//! # Example
//!
//! ```rust
//! use gutter_core::{GutterBuffer, Message, Severity};
//!
//! let mut buffer = GutterBuffer::new();
//! buffer.subscribe(|change| {
//!     println!("Version {} -> {}: {:?}",
//!         change.old_version, change.new_version, change.change_type);
//! });
//!
//! buffer.clear_messages("lint");
//! buffer.add_message(Message::at_line("lint", "unused variable", 3, Severity::Warning));
//! buffer.initialize_owner_navigation("lint");
//!
//! let jump = buffer.navigate_next("lint").unwrap();
//! assert_eq!(jump.location.line, 2);
//! ```

use crate::config::GutterConfig;
use crate::message::Message;
use crate::navigation::{NavigationError, NavigationJump, OwnerNavigation, OwnerNavigationIndex};
use crate::store::MessageStore;
use crate::style::Colorscheme;

/// Gutter change type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GutterChangeType {
    /// Messages were added or removed
    MessagesChanged,
    /// An owner's navigation snapshot was (re)built
    NavigationInitialized,
    /// An owner's navigation cursor moved
    NavigationMoved,
}

/// Gutter change record
#[derive(Debug, Clone)]
pub struct GutterChange {
    /// Change type
    pub change_type: GutterChangeType,
    /// Old version number
    pub old_version: u64,
    /// New version number
    pub new_version: u64,
    /// Owner affected by the change, if it was owner-scoped.
    pub owner: Option<String>,
}

/// Gutter change callback function type
pub type GutterChangeCallback = Box<dyn FnMut(&GutterChange) + Send>;

/// Messages, navigation state and change notifications for one buffer.
pub struct GutterBuffer {
    store: MessageStore,
    navigation: OwnerNavigationIndex,
    colorscheme: Colorscheme,
    version: u64,
    callbacks: Vec<GutterChangeCallback>,
}

impl Default for GutterBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl GutterBuffer {
    /// Create an empty buffer with default settings.
    pub fn new() -> Self {
        Self::with_config(&GutterConfig::default())
    }

    /// Create an empty buffer from settings.
    pub fn with_config(config: &GutterConfig) -> Self {
        Self {
            store: MessageStore::new(),
            navigation: OwnerNavigationIndex::with_underflow_wrap(config.underflow_wrap),
            colorscheme: config.colorscheme.clone(),
            version: 0,
            callbacks: Vec::new(),
        }
    }

    /// Apply new settings. Messages and navigation cursors are kept.
    pub fn apply_config(&mut self, config: &GutterConfig) {
        self.navigation.set_underflow_wrap(config.underflow_wrap);
        self.colorscheme = config.colorscheme.clone();
    }

    /// The message store.
    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    /// The navigation index.
    pub fn navigation_index(&self) -> &OwnerNavigationIndex {
        &self.navigation
    }

    /// Navigation state for `owner`, if initialized.
    pub fn navigation(&self, owner: &str) -> Option<&OwnerNavigation> {
        self.navigation.navigation(owner)
    }

    /// Colorscheme used to style gutter markers.
    pub fn colorscheme(&self) -> &Colorscheme {
        &self.colorscheme
    }

    /// Current version number.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Subscribe to gutter changes.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&GutterChange) + Send + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    /// Append a message.
    pub fn add_message(&mut self, message: Message) {
        let owner = message.owner.clone();
        self.store.add_message(message);
        self.mark_changed(GutterChangeType::MessagesChanged, Some(owner));
    }

    /// Remove all messages of `owner`. Returns the number removed.
    ///
    /// Navigation snapshots are not touched; call
    /// [`initialize_owner_navigation`](Self::initialize_owner_navigation) to refresh them.
    pub fn clear_messages(&mut self, owner: &str) -> usize {
        let removed = self.store.clear_messages(owner);
        if removed > 0 {
            self.mark_changed(GutterChangeType::MessagesChanged, Some(owner.to_string()));
        }
        removed
    }

    /// Remove all messages.
    pub fn clear_all_messages(&mut self) {
        if self.store.is_empty() {
            return;
        }
        self.store.clear_all_messages();
        self.mark_changed(GutterChangeType::MessagesChanged, None);
    }

    /// Snapshot `owner`'s current messages for navigation.
    pub fn initialize_owner_navigation(&mut self, owner: &str) {
        self.navigation.initialize_owner_navigation(&self.store, owner);
        self.mark_changed(GutterChangeType::NavigationInitialized, Some(owner.to_string()));
    }

    /// Step `owner`'s navigation cursor.
    pub fn navigate_step(
        &mut self,
        owner: &str,
        forward: bool,
    ) -> Result<NavigationJump, NavigationError> {
        let jump = self.navigation.navigate_step(owner, forward)?;
        self.mark_changed(GutterChangeType::NavigationMoved, Some(owner.to_string()));
        Ok(jump)
    }

    /// Step to `owner`'s next message.
    pub fn navigate_next(&mut self, owner: &str) -> Result<NavigationJump, NavigationError> {
        self.navigate_step(owner, true)
    }

    /// Step to `owner`'s previous message.
    pub fn navigate_previous(&mut self, owner: &str) -> Result<NavigationJump, NavigationError> {
        self.navigate_step(owner, false)
    }

    fn mark_changed(&mut self, change_type: GutterChangeType, owner: Option<String>) {
        let old_version = self.version;
        self.version += 1;

        let change = GutterChange {
            change_type,
            old_version,
            new_version: self.version,
            owner,
        };
        for callback in &mut self.callbacks {
            callback(&change);
        }
    }
}

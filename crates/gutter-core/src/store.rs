//! Message store.
//!
//! [`MessageStore`] owns a buffer's single ordered list of gutter messages. Producers publish in
//! owner-sized batches: a linter re-run clears its previous output with
//! [`MessageStore::clear_messages`] and then adds the new messages. There is intentionally no way
//! to remove a single message.

use crate::message::Message;
use std::sync::Arc;

/// Insertion-ordered collection of gutter messages.
///
/// Messages are stored behind [`Arc`] so navigation snapshots can share them without copying.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    messages: Vec<Arc<Message>>,
}

impl MessageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the end of the store.
    pub fn add_message(&mut self, message: Message) {
        log::trace!(
            "add gutter message from {:?} at line {}",
            message.owner,
            message.start.line
        );
        self.messages.push(Arc::new(message));
    }

    /// Remove every message created by `owner`, preserving the order of the remainder.
    ///
    /// Returns the number of removed messages (zero when the owner had none).
    pub fn clear_messages(&mut self, owner: &str) -> usize {
        let before = self.messages.len();
        self.messages.retain(|m| m.owner != owner);
        let removed = before - self.messages.len();
        log::trace!("cleared {removed} gutter messages from {owner:?}");
        removed
    }

    /// Remove all messages.
    pub fn clear_all_messages(&mut self) {
        log::trace!("cleared all {} gutter messages", self.messages.len());
        self.messages.clear();
    }

    /// All messages in insertion order.
    pub fn messages(&self) -> &[Arc<Message>] {
        &self.messages
    }

    /// Iterate messages in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().map(|m| m.as_ref())
    }

    /// Number of stored messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages created by `owner`, in store order.
    pub fn messages_for_owner<'a>(
        &'a self,
        owner: &'a str,
    ) -> impl Iterator<Item = &'a Arc<Message>> + 'a {
        self.messages.iter().filter(move |m| m.owner == owner)
    }

    /// Messages whose span covers the zero-based `line`, in store order.
    pub fn messages_on_line(&self, line: usize) -> impl Iterator<Item = &Message> {
        self.iter().filter(move |m| m.covers_line(line))
    }

    /// The message a gutter should draw for `line`.
    ///
    /// Picks the highest severity; on ties the earliest inserted message wins.
    pub fn most_severe_on_line(&self, line: usize) -> Option<&Message> {
        self.messages_on_line(line)
            .fold(None, |best: Option<&Message>, m| match best {
                Some(b) if b.severity >= m.severity => Some(b),
                _ => Some(m),
            })
    }

    /// Distinct owners in order of first appearance.
    pub fn owners(&self) -> Vec<&str> {
        let mut owners: Vec<&str> = Vec::new();
        for m in &self.messages {
            if !owners.contains(&m.owner.as_str()) {
                owners.push(m.owner.as_str());
            }
        }
        owners
    }
}

//! Command Interface Layer
//!
//! Binds gutter operations to editor commands such as "go to next lint message".
//!
//! # Overview
//!
//! [`GutterCommandExecutor`] wraps a [`GutterBuffer`] and adds the two things a keybinding layer
//! needs on top of the core:
//!
//! - **Default owner**: navigation commands may omit the owner; the owner that most recently
//!   initialized navigation is used instead.
//! - **Caret movement**: a successful jump is handed to a [`CaretMover`], which relocates the
//!   edit caret in the host editor.
//!
//! # Example
//!
//! ```rust
//! use gutter_core::{
//!     CommandResult, GutterCommand, GutterCommandExecutor, Location, Message, Severity,
//! };
//!
//! let mut caret = Vec::new();
//! let mut executor = GutterCommandExecutor::new(|loc: Location| caret.push(loc));
//!
//! executor.execute(GutterCommand::AddMessage(
//!     Message::at_line("lint", "unused import", 4, Severity::Warning),
//! )).unwrap();
//! executor.execute(GutterCommand::InitializeNavigation { owner: "lint".to_string() }).unwrap();
//!
//! let result = executor.execute(GutterCommand::NextMessage { owner: None }).unwrap();
//! assert!(matches!(result, CommandResult::Jumped(_)));
//! drop(executor);
//! assert_eq!(caret, vec![Location::whole_line(3)]);
//! ```

use crate::buffer::GutterBuffer;
use crate::config::GutterConfig;
use crate::location::Location;
use crate::message::Message;
use crate::navigation::{NavigationError, NavigationJump};
use thiserror::Error;

/// Relocates the host editor's edit caret.
pub trait CaretMover {
    /// Move the caret to `location`.
    fn move_caret(&mut self, location: Location);
}

impl<F> CaretMover for F
where
    F: FnMut(Location),
{
    fn move_caret(&mut self, location: Location) {
        self(location)
    }
}

/// Gutter commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GutterCommand {
    /// Append a message.
    AddMessage(Message),
    /// Remove all messages of an owner.
    ClearMessages {
        /// Owner whose messages are removed.
        owner: String,
    },
    /// Remove all messages.
    ClearAllMessages,
    /// Snapshot an owner's messages for navigation and make it the active owner.
    InitializeNavigation {
        /// Owner to snapshot.
        owner: String,
    },
    /// Jump to the next message.
    NextMessage {
        /// Owner to navigate; `None` uses the last active owner.
        owner: Option<String>,
    },
    /// Jump to the previous message.
    PreviousMessage {
        /// Owner to navigate; `None` uses the last active owner.
        owner: Option<String>,
    },
}

/// Command execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Success, no return value
    Success,
    /// Messages were cleared
    Cleared {
        /// Number of removed messages.
        removed: usize,
    },
    /// The caret was moved to a message
    Jumped(NavigationJump),
}

/// Command error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Navigation failed for the resolved owner.
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    /// An ownerless navigation command arrived before any owner initialized navigation.
    #[error("No linting was done yet")]
    NoActiveOwner,
}

impl CommandError {
    /// Status text for the host's message line.
    pub fn status_text(&self) -> String {
        self.to_string()
    }
}

/// Executes [`GutterCommand`]s against a buffer.
pub struct GutterCommandExecutor<M: CaretMover> {
    buffer: GutterBuffer,
    caret: M,
    last_active_owner: Option<String>,
}

impl<M: CaretMover> GutterCommandExecutor<M> {
    /// Create an executor over an empty buffer.
    pub fn new(caret: M) -> Self {
        Self::with_buffer(GutterBuffer::new(), caret)
    }

    /// Create an executor over an empty buffer built from settings.
    pub fn with_config(config: &GutterConfig, caret: M) -> Self {
        Self::with_buffer(GutterBuffer::with_config(config), caret)
    }

    /// Create an executor over an existing buffer.
    pub fn with_buffer(buffer: GutterBuffer, caret: M) -> Self {
        Self {
            buffer,
            caret,
            last_active_owner: None,
        }
    }

    /// Get a reference to the buffer.
    pub fn buffer(&self) -> &GutterBuffer {
        &self.buffer
    }

    /// Get a reference to the caret mover.
    pub fn caret(&self) -> &M {
        &self.caret
    }

    /// The owner used by ownerless navigation commands.
    pub fn last_active_owner(&self) -> Option<&str> {
        self.last_active_owner.as_deref()
    }

    /// Execute a command.
    pub fn execute(&mut self, command: GutterCommand) -> Result<CommandResult, CommandError> {
        match command {
            GutterCommand::AddMessage(message) => {
                self.buffer.add_message(message);
                Ok(CommandResult::Success)
            }
            GutterCommand::ClearMessages { owner } => {
                let removed = self.buffer.clear_messages(&owner);
                Ok(CommandResult::Cleared { removed })
            }
            GutterCommand::ClearAllMessages => {
                let removed = self.buffer.store().len();
                self.buffer.clear_all_messages();
                Ok(CommandResult::Cleared { removed })
            }
            GutterCommand::InitializeNavigation { owner } => {
                self.initialize_owner_navigation(&owner);
                Ok(CommandResult::Success)
            }
            GutterCommand::NextMessage { owner } => self.execute_navigate(owner, true),
            GutterCommand::PreviousMessage { owner } => self.execute_navigate(owner, false),
        }
    }

    /// Snapshot `owner`'s messages and make it the default owner for ownerless navigation.
    ///
    /// Producers that finish a batch outside the command stream call this directly.
    pub fn initialize_owner_navigation(&mut self, owner: &str) {
        self.buffer.initialize_owner_navigation(owner);
        self.last_active_owner = Some(owner.to_string());
    }

    /// Execute commands in order, stopping at the first error.
    pub fn execute_batch(
        &mut self,
        commands: Vec<GutterCommand>,
    ) -> Result<Vec<CommandResult>, CommandError> {
        let mut results = Vec::with_capacity(commands.len());
        for command in commands {
            results.push(self.execute(command)?);
        }
        Ok(results)
    }

    fn execute_navigate(
        &mut self,
        owner: Option<String>,
        forward: bool,
    ) -> Result<CommandResult, CommandError> {
        let owner = owner
            .or_else(|| self.last_active_owner.clone())
            .ok_or(CommandError::NoActiveOwner)?;

        let jump = self.buffer.navigate_step(&owner, forward)?;
        self.caret.move_caret(jump.location);
        Ok(CommandResult::Jumped(jump))
    }
}

#![warn(missing_docs)]
//! Gutter Core - Headless Gutter Messages and Owner-Scoped Navigation
//!
//! # Overview
//!
//! `gutter-core` manages the messages drawn in an editor's gutter (linter warnings, compiler
//! errors, notes) and lets the user step through the messages of one producer at a time.
//! It does not render anything and does not move the caret itself; hosts provide those pieces
//! through [`SeverityStyles`] and [`CaretMover`].
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Command Interface (default owner, caret)   │  ← Keybinding API
//! ├─────────────────────────────────────────────┤
//! │  GutterBuffer (version + notifications)     │  ← Buffer State
//! ├─────────────────────────────────────────────┤
//! │  OwnerNavigationIndex (snapshot + cursor)   │  ← Navigation
//! ├─────────────────────────────────────────────┤
//! │  MessageStore (ordered messages)            │  ← Storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use gutter_core::{GutterBuffer, Location, Message, Severity};
//!
//! let mut buffer = GutterBuffer::new();
//!
//! // A linter publishes a fresh batch.
//! buffer.clear_messages("lint");
//! buffer.add_message(Message::at_line("lint", "unused variable", 2, Severity::Info));
//! buffer.add_message(Message::at_line("lint", "shadowed binding", 5, Severity::Warning));
//! buffer.initialize_owner_navigation("lint");
//!
//! // The user steps through them.
//! let jump = buffer.navigate_next("lint").unwrap();
//! assert_eq!(jump.location, Location::whole_line(1));
//! assert_eq!(jump.status_text(), "Jumped to message number 1");
//! ```
//!
//! # Module Description
//!
//! - [`location`] - Buffer locations
//! - [`message`] - Gutter messages and severities
//! - [`store`] - Ordered message storage
//! - [`navigation`] - Owner-scoped navigation snapshots and cursors
//! - [`style`] - Gutter marker style lookup
//! - [`buffer`] - Buffer-scoped state with change notifications
//! - [`commands`] - Command interface for keybindings
//! - [`config`] - Serializable settings

pub mod buffer;
pub mod commands;
pub mod config;
pub mod location;
pub mod message;
pub mod navigation;
pub mod store;
pub mod style;

pub use buffer::{GutterBuffer, GutterChange, GutterChangeCallback, GutterChangeType};
pub use commands::{CaretMover, CommandError, CommandResult, GutterCommand, GutterCommandExecutor};
pub use config::{ConfigError, GutterConfig};
pub use location::Location;
pub use message::{Message, Severity};
pub use navigation::{
    DEFAULT_UNDERFLOW_WRAP, NavigationError, NavigationJump, NavigationOutcome, OwnerNavigation,
    OwnerNavigationIndex, UnderflowWrap,
};
pub use store::MessageStore;
pub use style::{Colorscheme, SeverityStyles, StyleId};

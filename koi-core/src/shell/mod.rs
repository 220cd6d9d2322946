//! Top-level explorer state as an explicit state machine.
//!
//! [`update`] is pure: it applies one [`Message`] to [`AppState`] and returns
//! the [`Effect`] the caller must run. [`Session`] is the async driver that
//! runs effects against an injected catalog source and file sink.

pub mod messages;
pub mod session;
pub mod state;
pub mod update;

pub use messages::{Effect, Message};
pub use session::Session;
pub use state::{AppState, ResultsPanel};
pub use update::update;

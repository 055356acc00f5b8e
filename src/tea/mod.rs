//! The Elm Architecture (TEA) shell around the modal core.
//!
//! - `Model`: application state (core, blink, palette, notification)
//! - `Message`: inputs to the update function
//! - `Command`: side effects requested by the update function
//! - `update`: transforms the model, never performs I/O itself

pub mod command;
pub mod message;
pub mod model;
pub mod update;

pub use command::Command;
pub use message::Message;
pub use model::{Model, Notification, NotificationLevel};
pub use update::update;

pub mod blink;
pub mod clock;
pub mod config;
pub mod error;
pub mod log;
pub mod modal;
pub mod navbar;
pub mod panels;

// Decoupled game loop architecture
pub mod actors;
pub mod app;
pub mod render;
pub mod tea;
pub mod ui;

pub use error::{Error, Result};
pub use modal::{DemoTerminal, KeyInput, Mode};

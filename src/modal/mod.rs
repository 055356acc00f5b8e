//! Modal input core of the simulated terminal.
//!
//! - `mode`: the modes and the transition table (sole writer of the mode)
//! - `pending`: the single time-bounded follow-up slot
//! - `chord`: `Space` leader chords
//! - `command_line`: `:` one-key commands
//! - `startup`: the launch prompt on Welcome/Quit
//! - `dispatch`: `DemoTerminal`, the one place keys enter
//!
//! The core never reads a clock; callers pass `now` in.

pub mod chord;
pub mod command_line;
pub mod dispatch;
pub mod key;
pub mod mode;
pub mod pending;
pub mod startup;

pub use chord::ChordRecognizer;
pub use command_line::CommandLineHandler;
pub use dispatch::DemoTerminal;
pub use key::{Key, KeyInput, COMMAND_PREFIX, LEADER};
pub use mode::{next_mode, Mode, ModeStateMachine, Transition};
pub use pending::{PendingKind, PendingOperation};
pub use startup::{InputBuffer, StartupCommandMatcher};

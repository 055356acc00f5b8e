//! Simulated editor modes and the transition table between them.

/// The panel currently shown by the simulated terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Mode {
    #[default]
    Welcome,
    Quit,
    Dashboard,
    Editor,
    Explorer,
    Finder,
}

impl Mode {
    pub const ALL: [Mode; 6] = [
        Mode::Welcome,
        Mode::Quit,
        Mode::Dashboard,
        Mode::Editor,
        Mode::Explorer,
        Mode::Finder,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Welcome => "welcome",
            Mode::Quit => "quit",
            Mode::Dashboard => "dashboard",
            Mode::Editor => "editor",
            Mode::Explorer => "explorer",
            Mode::Finder => "finder",
        }
    }

    /// Welcome and Quit show the launch prompt instead of an editor panel.
    pub fn accepts_launch_line(&self) -> bool {
        matches!(self, Mode::Welcome | Mode::Quit)
    }
}

/// A recognized request to change mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A launch command was submitted on the startup line.
    Launch,
    /// `i` on the dashboard.
    Insert,
    /// Leader then `e`.
    ToggleExplorer,
    /// Leader then `/`.
    ToggleFinder,
    /// `:` then `q`.
    QuitCommand,
}

/// Pure transition table. `None` means the pair is a no-op.
pub fn next_mode(from: Mode, transition: Transition) -> Option<Mode> {
    use Mode::*;
    use Transition::*;

    match (from, transition) {
        (Welcome | Quit, Launch) => Some(Dashboard),
        (Dashboard, Insert) => Some(Editor),
        (Editor, ToggleExplorer) => Some(Explorer),
        (Explorer, ToggleExplorer) => Some(Editor),
        (Editor, ToggleFinder) => Some(Finder),
        (Finder, ToggleFinder) => Some(Editor),
        (Dashboard | Editor, QuitCommand) => Some(Quit),
        (Explorer | Finder, QuitCommand) => Some(Editor),
        _ => None,
    }
}

/// Sole owner and writer of the current mode.
#[derive(Debug, Default)]
pub struct ModeStateMachine {
    mode: Mode,
}

impl ModeStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Apply a transition and return the resulting mode (unchanged on no-op).
    pub fn apply(&mut self, transition: Transition) -> Mode {
        if let Some(next) = next_mode(self.mode, transition) {
            self.mode = next;
        }
        self.mode
    }
}

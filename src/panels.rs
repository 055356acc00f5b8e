//! Static content shown for each mode.
//!
//! Editor views are drawn from ANSI text art. Built-in art ships with the
//! binary; a panels directory may override any of it with `<mode>.ans`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::modal::Mode;
use crate::{dlog_debug, dlog_warn, Error, Result};

const DASHBOARD_ART: &str = "\x1b[35m
   ███████╗██╗  ██╗██╗   ██╗██╗███╗   ███╗
   ██╔════╝██║ ██╔╝██║   ██║██║████╗ ████║
   █████╗  █████╔╝ ██║   ██║██║██╔████╔██║
   ██╔══╝  ██╔═██╗ ╚██╗ ██╔╝██║██║╚██╔╝██║
   ██║     ██║  ██╗ ╚████╔╝ ██║██║ ╚═╝ ██║
   ╚═╝     ╚═╝  ╚═╝  ╚═══╝  ╚═╝╚═╝     ╚═╝\x1b[0m

        \x1b[36m  Find file\x1b[0m            \x1b[90mSPC f f\x1b[0m
        \x1b[36m  Recent files\x1b[0m         \x1b[90mSPC f r\x1b[0m
        \x1b[36m  New file\x1b[0m             \x1b[90mi\x1b[0m
        \x1b[36m  Settings\x1b[0m             \x1b[90mSPC f c\x1b[0m
        \x1b[36m  Quit\x1b[0m                 \x1b[90m:q\x1b[0m
";

const EDITOR_ART: &str = "\x1b[90m  1 \x1b[35mlocal\x1b[0m M = {}
\x1b[90m  2\x1b[0m
\x1b[90m  3 \x1b[35mfunction\x1b[0m M.\x1b[34msetup\x1b[0m(opts)
\x1b[90m  4 \x1b[0m  opts = opts \x1b[35mor\x1b[0m {}
\x1b[90m  5 \x1b[0m  vim.opt.number = \x1b[33mtrue\x1b[0m
\x1b[90m  6 \x1b[0m  vim.opt.relativenumber = \x1b[33mtrue\x1b[0m
\x1b[90m  7 \x1b[0m  vim.g.mapleader = \x1b[32m\" \"\x1b[0m
\x1b[90m  8 \x1b[35mend\x1b[0m
\x1b[90m  9\x1b[0m
\x1b[90m 10 \x1b[35mreturn\x1b[0m M
\x1b[90m  ~\x1b[0m
\x1b[90m  ~\x1b[0m
\x1b[42;30m NORMAL \x1b[0m\x1b[100m init.lua \x1b[0m                               \x1b[90mlua  10:1\x1b[0m
";

const EXPLORER_ART: &str = "\x1b[34m  fkvim\x1b[0m                 \x1b[90m│\x1b[0m  1 local M = {}
\x1b[34m  ├─  lua\x1b[0m             \x1b[90m│\x1b[0m  2
\x1b[34m  │  ├─  plugins\x1b[0m      \x1b[90m│\x1b[0m  3 function M.setup(opts)
\x1b[0m  │  │  ├─ lsp.lua\x1b[0m     \x1b[90m│\x1b[0m  4   opts = opts or {}
\x1b[0m  │  │  └─ ui.lua\x1b[0m      \x1b[90m│\x1b[0m  5   vim.opt.number = true
\x1b[33m  │  └─ init.lua\x1b[0m       \x1b[90m│\x1b[0m  6 end
\x1b[0m  ├─ README.md\x1b[0m          \x1b[90m│\x1b[0m
\x1b[0m  └─ LICENSE\x1b[0m            \x1b[90m│\x1b[0m
\x1b[44;30m EXPLORER \x1b[0m
";

const FINDER_ART: &str = "
   \x1b[35m╭─ Find Files ──────────────────────────────╮\x1b[0m
   \x1b[35m│\x1b[0m \x1b[36m>\x1b[0m init                                      \x1b[35m│\x1b[0m
   \x1b[35m├───────────────────────────────────────────┤\x1b[0m
   \x1b[35m│\x1b[0m \x1b[7m lua/init.lua                             \x1b[0m\x1b[35m│\x1b[0m
   \x1b[35m│\x1b[0m   lua/plugins/init.lua                    \x1b[35m│\x1b[0m
   \x1b[35m│\x1b[0m   after/plugin/init.vim                   \x1b[35m│\x1b[0m
   \x1b[35m│\x1b[0m                                           \x1b[35m│\x1b[0m
   \x1b[35m╰──────────────────────────────────────── 3/42╯\x1b[0m
";

pub const WELCOME_TITLE: &str = "Welcome to FKvim Interactive Demo";
pub const QUIT_TITLE: &str = "FKvim exited. Thanks for trying the demo.";

/// One entry of the per-mode hint strip: keys pressed in order, then what
/// they do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub keys: &'static [&'static str],
    pub action: &'static str,
}

pub fn hints(mode: Mode) -> &'static [Hint] {
    const DASHBOARD: &[Hint] = &[
        Hint {
            keys: &["i"],
            action: "enter editor mode",
        },
        Hint {
            keys: &[":", "q"],
            action: "quit",
        },
    ];
    const EDITOR: &[Hint] = &[
        Hint {
            keys: &["Space", "e"],
            action: "file explorer",
        },
        Hint {
            keys: &["Space", "/"],
            action: "fuzzy finder",
        },
        Hint {
            keys: &[":", "q"],
            action: "quit",
        },
    ];
    const EXPLORER: &[Hint] = &[
        Hint {
            keys: &["Space", "e"],
            action: "back to editor",
        },
        Hint {
            keys: &[":", "q"],
            action: "return to editor",
        },
    ];
    const FINDER: &[Hint] = &[
        Hint {
            keys: &["Space", "/"],
            action: "back to editor",
        },
        Hint {
            keys: &[":", "q"],
            action: "return to editor",
        },
    ];
    const PROMPT: &[Hint] = &[Hint {
        keys: &["Enter"],
        action: "run command",
    }];

    match mode {
        Mode::Welcome | Mode::Quit => PROMPT,
        Mode::Dashboard => DASHBOARD,
        Mode::Editor => EDITOR,
        Mode::Explorer => EXPLORER,
        Mode::Finder => FINDER,
    }
}

/// ANSI art for the four editor views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panels {
    dashboard: String,
    editor: String,
    explorer: String,
    finder: String,
}

impl Default for Panels {
    fn default() -> Self {
        Self {
            dashboard: DASHBOARD_ART.to_string(),
            editor: EDITOR_ART.to_string(),
            explorer: EXPLORER_ART.to_string(),
            finder: FINDER_ART.to_string(),
        }
    }
}

/// ANSI art is often saved in a legacy code page; bytes that are not UTF-8
/// are replaced rather than rejected.
fn decode_art(path: &Path, bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            dlog_warn!("Panel {} is not UTF-8, decoding lossily", path.display());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

impl Panels {
    /// Built-ins, overridden by `<mode>.ans` files from `dir` when given.
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        let mut panels = Self::default();
        let Some(dir) = dir else {
            return Ok(panels);
        };

        fs::read_dir(dir).map_err(|source| Error::Panels {
            path: dir.to_path_buf(),
            source,
        })?;

        for (mode, slot) in [
            (Mode::Dashboard, &mut panels.dashboard),
            (Mode::Editor, &mut panels.editor),
            (Mode::Explorer, &mut panels.explorer),
            (Mode::Finder, &mut panels.finder),
        ] {
            let path = dir.join(format!("{}.ans", mode.name()));
            match fs::read(&path) {
                Ok(bytes) => {
                    dlog_debug!("Panel override loaded: {}", path.display());
                    *slot = decode_art(&path, bytes);
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    dlog_debug!("No panel override at {}", path.display());
                }
                Err(source) => return Err(Error::PanelFile { path, source }),
            }
        }
        Ok(panels)
    }

    /// `None` for the prompt modes, which render a text form instead.
    pub fn art(&self, mode: Mode) -> Option<&str> {
        match mode {
            Mode::Welcome | Mode::Quit => None,
            Mode::Dashboard => Some(&self.dashboard),
            Mode::Editor => Some(&self.editor),
            Mode::Explorer => Some(&self.explorer),
            Mode::Finder => Some(&self.finder),
        }
    }
}

//! The launch prompt shown on the Welcome and Quit screens.

use super::mode::Transition;

/// Text typed on the launch prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

#[derive(Debug, Clone)]
pub struct StartupCommandMatcher {
    commands: Vec<String>,
    buffer: InputBuffer,
}

impl StartupCommandMatcher {
    /// Commands are normalized once; blank entries are dropped.
    pub fn new<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let commands = commands
            .into_iter()
            .map(|c| c.as_ref().trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .collect();
        Self {
            commands,
            buffer: InputBuffer::default(),
        }
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn buffer(&self) -> &InputBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut InputBuffer {
        &mut self.buffer
    }

    pub fn matches(&self, line: &str) -> bool {
        let line = line.trim().to_lowercase();
        self.commands.iter().any(|c| *c == line)
    }

    /// Submit the current line. On a match the buffer is cleared; otherwise
    /// it is kept verbatim so the user can correct it.
    pub fn submit(&mut self) -> Option<Transition> {
        if self.matches(self.buffer.as_str()) {
            self.buffer.clear();
            Some(Transition::Launch)
        } else {
            None
        }
    }
}

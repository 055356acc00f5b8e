//! Side effects returned by `update` and executed by the logic thread.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Hand a navigation link to the system opener.
    OpenLink { url: String },

    /// Leave the application.
    Quit,
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("No home directory")]
    NoHomeDir,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Panels directory unreadable: {path}: {source}")]
    Panels {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Panel file unreadable: {path}: {source}")]
    PanelFile {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logic thread failed: {0}")]
    TaskJoin(String),
}

pub type Result<T> = std::result::Result<T, Error>;

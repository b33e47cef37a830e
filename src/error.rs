//! Error type for the fallible edges of the crate.
//!
//! Window-manager operations themselves never fail: unknown ids and missing
//! handles degrade to no-ops. Only document construction, configuration and
//! terminal I/O can return an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WmError {
    #[error("terminal i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("window id must not be empty")]
    EmptyWindowId,
    #[error("window `{0}` is declared more than once")]
    DuplicateWindow(String),
    #[error("tab `{tab}` is declared more than once in window `{window}`")]
    DuplicateTab { window: String, tab: String },
    #[error("launcher entry `{0}` does not name a window")]
    UnknownLauncherEntry(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T, E = WmError> = std::result::Result<T, E>;

//! Error types for terminal output

use std::io;

use crate::terminfo::TermInfoError;

/// Error type for terminal operations
#[derive(Debug, thiserror::Error)]
pub enum TtyError {
    #[error("Failed to write to terminal: {0}")]
    Write(#[source] io::Error),

    #[error("Short write: {written} of {expected} bytes")]
    ShortWrite { written: usize, expected: usize },

    #[error("Failed to get window size: {0}")]
    WindowSize(#[source] nix::Error),

    #[error("Invalid terminal size: {cols}x{rows}")]
    InvalidSize { cols: usize, rows: usize },

    #[error("Not running in a terminal")]
    NotATerminal,

    #[error("Could not get terminal settings: {0}")]
    GetAttr(#[source] nix::Error),

    #[error("Could not set terminal settings: {0}")]
    SetAttr(#[source] nix::Error),

    #[error("Cursor is on the first row, there is no previous line")]
    NoPreviousLine,

    #[error("Terminfo error: {0}")]
    Terminfo(#[from] TermInfoError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for terminal operations
pub type TtyResult<T> = Result<T, TtyError>;

//! Terminfo access
//!
//! The capability registry only needs a handful of string capabilities and
//! one number from the terminal description. This module provides:
//! - `TermInfo`, the lookup interface the registry consumes
//! - `Database`, a handle backed either by the system terminfo database or
//!   by a builtin table for the detected terminal family
//! - parameter expansion for templated capabilities (`cup`, `setaf`, ...)

mod builtin;
mod compiled;
mod expand;
mod family;

pub use builtin::Builtin;
pub use compiled::Compiled;
pub use expand::expand;
pub use family::{from_builtin, is_term_family, Family};
pub use terminfo_lean::locate::{locate, search_directories};

use crate::caps::CapBytes;

/// String capabilities the registry reads
///
/// Discriminants are the positions in the standard terminfo string table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringCap {
    CarriageReturn = 2,
    ClearScreen = 5,
    ClrEol = 6,
    ClrEos = 7,
    CursorAddress = 10,
    CursorDown = 11,
    CursorHome = 12,
    CursorInvisible = 13,
    CursorLeft = 14,
    CursorNormal = 16,
    CursorRight = 17,
    CursorUp = 19,
    ExitAttributeMode = 39,
    KeyDc = 59,
    KeyNpage = 81,
    KeyPpage = 82,
    Newline = 103,
    RestoreCursor = 126,
    SaveCursor = 128,
    ClrBol = 269,
    SetAForeground = 359,
    SetABackground = 360,
}

impl StringCap {
    /// Index in the compiled string table
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short terminfo name (as used by `infocmp`)
    pub fn name(self) -> &'static str {
        match self {
            StringCap::CarriageReturn => "cr",
            StringCap::ClearScreen => "clear",
            StringCap::ClrEol => "el",
            StringCap::ClrEos => "ed",
            StringCap::CursorAddress => "cup",
            StringCap::CursorDown => "cud1",
            StringCap::CursorHome => "home",
            StringCap::CursorInvisible => "civis",
            StringCap::CursorLeft => "cub1",
            StringCap::CursorNormal => "cnorm",
            StringCap::CursorRight => "cuf1",
            StringCap::CursorUp => "cuu1",
            StringCap::ExitAttributeMode => "sgr0",
            StringCap::KeyDc => "kdch1",
            StringCap::KeyNpage => "knp",
            StringCap::KeyPpage => "kpp",
            StringCap::Newline => "nel",
            StringCap::RestoreCursor => "rc",
            StringCap::SaveCursor => "sc",
            StringCap::ClrBol => "el1",
            StringCap::SetAForeground => "setaf",
            StringCap::SetABackground => "setab",
        }
    }
}

/// Numeric capabilities the registry reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumCap {
    Columns = 0,
    Lines = 2,
    MaxColors = 13,
}

impl NumCap {
    /// Index in the compiled number table
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short terminfo name
    pub fn name(self) -> &'static str {
        match self {
            NumCap::Columns => "cols",
            NumCap::Lines => "lines",
            NumCap::MaxColors => "colors",
        }
    }
}

/// Lookup interface over a terminal description
pub trait TermInfo {
    /// Name of the entry (e.g. `xterm-256color` or `builtin_xterm`)
    fn name(&self) -> &str;

    /// Get a string capability; `None` when absent or cancelled
    fn get_str(&self, cap: StringCap) -> Option<CapBytes<'_>>;

    /// Get a numeric capability; `None` when absent
    fn get_num(&self, cap: NumCap) -> Option<i32>;
}

/// Error type for terminfo operations
#[derive(Debug, thiserror::Error)]
pub enum TermInfoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid terminfo entry: {0}")]
    Parse(String),

    #[error("Cannot expand capability: {0}")]
    Expand(String),
}

/// Where a `Database` came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Compiled entry from the system terminfo directories
    System,
    /// Builtin table for a terminal family
    Builtin(Family),
}

/// A terminfo handle: system entry when available, builtin otherwise
#[derive(Debug, Clone)]
pub enum Database {
    System(Compiled),
    Builtin(Builtin),
}

impl Database {
    /// Resolve the database for the `TERM` environment variable
    pub fn from_env() -> Self {
        let term = std::env::var("TERM").ok();
        Self::from_term(term.as_deref())
    }

    /// Resolve the database for a terminal type name
    ///
    /// The system terminfo directories are searched first; when no entry
    /// exists (or it cannot be read) the builtin table for the name's family
    /// is used. A missing or empty name selects the generic ANSI family.
    pub fn from_term(term: Option<&str>) -> Self {
        if let Some(name) = term.filter(|name| !name.is_empty()) {
            match Compiled::from_name(name) {
                Ok(Some(entry)) => {
                    tracing::debug!(term = name, entry = entry.name(), "using system terminfo");
                    return Database::System(entry);
                }
                Ok(None) => {
                    tracing::debug!(term = name, "no system terminfo entry");
                }
                Err(e) => {
                    tracing::warn!(term = name, error = %e, "unreadable system terminfo entry");
                }
            }
        }
        Self::builtin(term)
    }

    /// Use the builtin table for a terminal type name, skipping the system lookup
    pub fn builtin(term: Option<&str>) -> Self {
        let (builtin, name) = from_builtin(term);
        tracing::debug!(term = term.unwrap_or(""), builtin = name, "using builtin terminfo");
        Database::Builtin(builtin)
    }

    /// Where the entry came from
    pub fn source(&self) -> Source {
        match self {
            Database::System(_) => Source::System,
            Database::Builtin(builtin) => Source::Builtin(builtin.family()),
        }
    }
}

impl TermInfo for Database {
    fn name(&self) -> &str {
        match self {
            Database::System(entry) => entry.name(),
            Database::Builtin(builtin) => builtin.name(),
        }
    }

    fn get_str(&self, cap: StringCap) -> Option<CapBytes<'_>> {
        match self {
            Database::System(entry) => entry.get_str(cap),
            Database::Builtin(builtin) => builtin.get_str(cap),
        }
    }

    fn get_num(&self, cap: NumCap) -> Option<i32> {
        match self {
            Database::System(entry) => entry.get_num(cap),
            Database::Builtin(builtin) => builtin.get_num(cap),
        }
    }
}

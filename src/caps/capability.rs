//! Capability values
//!
//! A capability is a logical terminal operation paired with the bytes that
//! perform it on the active terminal. The bytes either come from the
//! terminfo database (and borrow from it) or are a literal fallback with
//! process lifetime.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Logical capability kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapKind {
    // Keys
    Backspace,
    Delete,
    Newline,
    PageUp,
    PageDown,

    // Screen
    ClearScreen,
    ClearToEos,

    // Cursor
    CursorHome,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorShow,
    CursorHide,
    CursorSave,
    CursorRestore,
    CursorAddress,

    // Line
    LineClearToEol,
    LineClearToBol,
    LineGotoBol,

    // Colors
    ColorReset,
    ColorSet,
    ColorBgSet,
}

impl CapKind {
    /// Every kind, in registry order
    pub const ALL: [CapKind; 23] = [
        CapKind::Backspace,
        CapKind::Delete,
        CapKind::Newline,
        CapKind::PageUp,
        CapKind::PageDown,
        CapKind::ClearScreen,
        CapKind::ClearToEos,
        CapKind::CursorHome,
        CapKind::CursorLeft,
        CapKind::CursorRight,
        CapKind::CursorUp,
        CapKind::CursorDown,
        CapKind::CursorShow,
        CapKind::CursorHide,
        CapKind::CursorSave,
        CapKind::CursorRestore,
        CapKind::CursorAddress,
        CapKind::LineClearToEol,
        CapKind::LineClearToBol,
        CapKind::LineGotoBol,
        CapKind::ColorReset,
        CapKind::ColorSet,
        CapKind::ColorBgSet,
    ];

    /// Whether the sequence is a parameterized template rather than
    /// something that can be written as-is
    pub fn is_parameterized(self) -> bool {
        matches!(
            self,
            CapKind::CursorAddress | CapKind::ColorSet | CapKind::ColorBgSet
        )
    }
}

/// Capability bytes, either borrowed from a terminfo handle or static
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum CapBytes<'a> {
    /// Owned by the terminfo database, valid while it lives
    Borrowed(&'a [u8]),
    /// A literal with process lifetime (fallbacks, builtin tables)
    Static(&'static [u8]),
}

impl<'a> CapBytes<'a> {
    /// The empty sequence, meaning "unsupported"
    pub const EMPTY: CapBytes<'static> = CapBytes::Static(b"");

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &'a [u8] {
        match *self {
            CapBytes::Borrowed(b) => b,
            CapBytes::Static(b) => b,
        }
    }

    /// Whether the bytes come from a static literal
    pub fn is_static(&self) -> bool {
        matches!(self, CapBytes::Static(_))
    }
}

impl Deref for CapBytes<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for CapBytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = if self.is_static() { "Static" } else { "Borrowed" };
        write!(f, "{}({:?})", tag, self.as_bytes().escape_ascii().to_string())
    }
}

/// A capability: kind plus the bytes that perform it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability<'a> {
    kind: CapKind,
    bytes: CapBytes<'a>,
}

impl<'a> Capability<'a> {
    /// Create a capability from its kind and bytes
    pub fn new(kind: CapKind, bytes: CapBytes<'a>) -> Self {
        Self { kind, bytes }
    }

    /// Create an unsupported (empty) capability
    pub fn empty(kind: CapKind) -> Self {
        Self {
            kind,
            bytes: CapBytes::EMPTY,
        }
    }

    /// Get the capability kind
    pub fn kind(&self) -> CapKind {
        self.kind
    }

    /// Get the bytes to write
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes.as_bytes()
    }

    /// Get the tagged bytes
    pub fn raw(&self) -> CapBytes<'a> {
        self.bytes
    }

    /// Length of the sequence in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the capability is unsupported on this terminal
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

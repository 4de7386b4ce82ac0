//! Literal fallback sequences
//!
//! Used when the terminfo entry lacks a capability. Capabilities without a
//! literal here (colors, absolute addressing) stay empty instead.

use super::CapKind;

// Keys
pub const BACKSPACE: &[u8] = b"\x08 \x08";
pub const DELETE: &[u8] = b" \x08";
pub const NEWLINE: &[u8] = b"\n";
pub const PAGE_UP: &[u8] = b"\x1b[5~";
pub const PAGE_DOWN: &[u8] = b"\x1b[6~";

// Screen
pub const CLEAR_SCREEN: &[u8] = b"\x1b[2J";
pub const CLEAR_TO_EOS: &[u8] = b"\x1b[J";

// Cursor
pub const CURSOR_HOME: &[u8] = b"\x1b[H";
pub const CURSOR_RIGHT: &[u8] = b"\x1b[1C";
pub const CURSOR_LEFT: &[u8] = b"\x1b[1D";
pub const CURSOR_UP: &[u8] = b"\x1b[1A";
pub const CURSOR_DOWN: &[u8] = b"\x1b[1B";
pub const CURSOR_SAVE: &[u8] = b"\x1b7";
pub const CURSOR_RESTORE: &[u8] = b"\x1b8";
pub const CURSOR_HIDE: &[u8] = b"\x1b[?25l";
pub const CURSOR_SHOW: &[u8] = b"\x1b[?25h";

// Line
pub const CLEAR_TO_EOL: &[u8] = b"\x1b[K";
pub const CLEAR_TO_BOL: &[u8] = b"\x1b[1K";
pub const GOTO_BOL: &[u8] = b"\r";

// Colors
pub const COLOR_RESET: &[u8] = b"\x1b[0m";

/// The fallback literal for a capability, if it has one
pub fn literal(kind: CapKind) -> Option<&'static [u8]> {
    let bytes = match kind {
        CapKind::Backspace => BACKSPACE,
        CapKind::Delete => DELETE,
        CapKind::Newline => NEWLINE,
        CapKind::PageUp => PAGE_UP,
        CapKind::PageDown => PAGE_DOWN,
        CapKind::ClearScreen => CLEAR_SCREEN,
        CapKind::ClearToEos => CLEAR_TO_EOS,
        CapKind::CursorHome => CURSOR_HOME,
        CapKind::CursorLeft => CURSOR_LEFT,
        CapKind::CursorRight => CURSOR_RIGHT,
        CapKind::CursorUp => CURSOR_UP,
        CapKind::CursorDown => CURSOR_DOWN,
        CapKind::CursorShow => CURSOR_SHOW,
        CapKind::CursorHide => CURSOR_HIDE,
        CapKind::CursorSave => CURSOR_SAVE,
        CapKind::CursorRestore => CURSOR_RESTORE,
        CapKind::LineClearToEol => CLEAR_TO_EOL,
        CapKind::LineClearToBol => CLEAR_TO_BOL,
        CapKind::LineGotoBol => GOTO_BOL,
        CapKind::ColorReset => COLOR_RESET,
        CapKind::CursorAddress | CapKind::ColorSet | CapKind::ColorBgSet => return None,
    };
    Some(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_fallback_for_parameterized() {
        for kind in CapKind::ALL {
            assert_eq!(literal(kind).is_none(), kind.is_parameterized(), "{:?}", kind);
        }
    }

    #[test]
    fn test_fallbacks_are_non_empty() {
        for kind in CapKind::ALL {
            if let Some(bytes) = literal(kind) {
                assert!(!bytes.is_empty(), "{:?}", kind);
            }
        }
    }
}

//! Terminal input modes
//!
//! Non-canonical mode delivers input byte by byte without echo. The original
//! settings are kept by a guard and put back when it is restored or dropped.

use std::io::{self, IsTerminal, Read, Write};

use nix::sys::termios::{
    tcgetattr, tcsetattr, ControlFlags, InputFlags, LocalFlags, SetArg, SpecialCharacterIndices,
    Termios,
};
use serde::{Deserialize, Serialize};

use crate::core::Coordinates;
use crate::error::{TtyError, TtyResult};

/// Device status report asking for the cursor position
const POSITION_REQUEST: &[u8] = b"\x1b[6n";
/// Longest position reply accepted
const POSITION_REPLY_MAX: usize = 32;
/// How long to wait for each reply byte, in tenths of a second
const POSITION_REPLY_TIMEOUT: u8 = 5;

/// How stdin delivers input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Line by line with echo; the terminal is left as it is
    Canonical,
    /// Byte by byte without echo or signal keys
    #[default]
    NonCanonical,
}

/// Holds the stdin settings from before a mode change
#[derive(Debug)]
pub struct ModeGuard {
    original: Termios,
    restored: bool,
}

impl ModeGuard {
    /// Switch stdin to `mode`
    ///
    /// Returns `None` for canonical mode, which changes nothing.
    pub fn enter(mode: InputMode) -> TtyResult<Option<Self>> {
        match mode {
            InputMode::Canonical => Ok(None),
            InputMode::NonCanonical => Self::non_canonical().map(Some),
        }
    }

    fn non_canonical() -> TtyResult<Self> {
        if !io::stdin().is_terminal() {
            return Err(TtyError::NotATerminal);
        }

        let original = tcgetattr(io::stdin()).map_err(TtyError::GetAttr)?;
        let mut raw = original.clone();
        make_non_canonical(&mut raw);
        tcsetattr(io::stdin(), SetArg::TCSAFLUSH, &raw).map_err(TtyError::SetAttr)?;

        tracing::debug!("stdin switched to non-canonical mode");
        Ok(Self {
            original,
            restored: false,
        })
    }

    /// Put the original settings back
    pub fn restore(&mut self) -> TtyResult<()> {
        if self.restored {
            return Ok(());
        }
        tcsetattr(io::stdin(), SetArg::TCSANOW, &self.original).map_err(TtyError::SetAttr)?;
        self.restored = true;
        tracing::debug!("stdin settings restored");
        Ok(())
    }
}

impl Drop for ModeGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::warn!("Failed to restore terminal settings: {}", e);
        }
    }
}

/// Apply the non-canonical flags to a copy of the settings
pub fn make_non_canonical(termios: &mut Termios) {
    termios.input_flags &= !(InputFlags::BRKINT
        | InputFlags::ICRNL
        | InputFlags::INPCK
        | InputFlags::ISTRIP
        | InputFlags::IXON);
    termios.local_flags &=
        !(LocalFlags::ECHO | LocalFlags::ICANON | LocalFlags::IEXTEN | LocalFlags::ISIG);
    termios.input_flags |= InputFlags::IUTF8;
    termios.control_flags |= ControlFlags::CS8;
    termios.control_chars[SpecialCharacterIndices::VMIN as usize] = 1;
    termios.control_chars[SpecialCharacterIndices::VTIME as usize] = 0;
}

/// Make reads return after a short wait even when nothing arrives
pub fn with_reply_timeout(termios: &Termios) -> Termios {
    let mut timed = termios.clone();
    timed.control_chars[SpecialCharacterIndices::VMIN as usize] = 0;
    timed.control_chars[SpecialCharacterIndices::VTIME as usize] = POSITION_REPLY_TIMEOUT;
    timed
}

/// Ask the terminal where the cursor is
///
/// Needs non-canonical stdin so the reply can be read without a newline.
/// Returns `None` when the reply cannot be understood or the terminal does
/// not answer in time.
pub fn query_position() -> TtyResult<Option<Coordinates>> {
    let settings = tcgetattr(io::stdin()).map_err(TtyError::GetAttr)?;
    tcsetattr(io::stdin(), SetArg::TCSANOW, &with_reply_timeout(&settings))
        .map_err(TtyError::SetAttr)?;

    let reply = read_position_reply();
    tcsetattr(io::stdin(), SetArg::TCSANOW, &settings).map_err(TtyError::SetAttr)?;
    let reply = reply?;

    let pos = parse_position_reply(&reply);
    tracing::debug!(reply = %reply.escape_ascii(), pos = ?pos, "cursor position reply");
    Ok(pos)
}

fn read_position_reply() -> TtyResult<Vec<u8>> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(POSITION_REQUEST)?;
    stdout.flush()?;
    drop(stdout);

    let mut stdin = io::stdin().lock();
    let mut reply = Vec::with_capacity(POSITION_REPLY_MAX);
    let mut byte = [0u8; 1];
    while reply.len() < POSITION_REPLY_MAX {
        if stdin.read(&mut byte)? == 0 {
            break;
        }
        reply.push(byte[0]);
        if byte[0] == b'R' {
            break;
        }
    }
    Ok(reply)
}

/// Parse a `CSI row ; col R` reply into zero-indexed coordinates
pub fn parse_position_reply(reply: &[u8]) -> Option<Coordinates> {
    let body = reply.strip_prefix(b"\x1b[")?.strip_suffix(b"R")?;
    let body = std::str::from_utf8(body).ok()?;
    let (row, col) = body.split_once(';')?;
    let row: usize = row.parse().ok()?;
    let col: usize = col.parse().ok()?;
    if row == 0 || col == 0 {
        return None;
    }
    Some(Coordinates::new(col - 1, row - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position_reply() {
        assert_eq!(
            parse_position_reply(b"\x1b[12;40R"),
            Some(Coordinates::new(39, 11))
        );
        assert_eq!(parse_position_reply(b"\x1b[1;1R"), Some(Coordinates::origin()));
    }

    #[test]
    fn test_parse_malformed_position_reply() {
        assert_eq!(parse_position_reply(b""), None);
        assert_eq!(parse_position_reply(b"12;40R"), None);
        assert_eq!(parse_position_reply(b"\x1b[12;40"), None);
        assert_eq!(parse_position_reply(b"\x1b[12R"), None);
        assert_eq!(parse_position_reply(b"\x1b[a;bR"), None);
        assert_eq!(parse_position_reply(b"\x1b[0;5R"), None);
    }

    #[test]
    fn test_reply_timeout_settings() {
        // SAFETY: termios is plain data; all-zero is a valid value
        let zeroed: nix::libc::termios = unsafe { std::mem::zeroed() };
        let mut raw = Termios::from(zeroed);
        make_non_canonical(&mut raw);
        let timed = with_reply_timeout(&raw);
        assert_eq!(timed.control_chars[SpecialCharacterIndices::VMIN as usize], 0);
        assert_eq!(
            timed.control_chars[SpecialCharacterIndices::VTIME as usize],
            POSITION_REPLY_TIMEOUT
        );
        assert_eq!(timed.local_flags, raw.local_flags);
        assert_eq!(raw.control_chars[SpecialCharacterIndices::VMIN as usize], 1);
    }

    #[test]
    fn test_canonical_mode_changes_nothing() {
        assert!(ModeGuard::enter(InputMode::Canonical).unwrap().is_none());
    }

    #[test]
    fn test_input_mode_serde_names() {
        assert_eq!(
            serde_json::to_string(&InputMode::NonCanonical).unwrap(),
            "\"non_canonical\""
        );
        let mode: InputMode = serde_json::from_str("\"canonical\"").unwrap();
        assert_eq!(mode, InputMode::Canonical);
    }
}

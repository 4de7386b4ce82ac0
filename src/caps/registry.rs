//! The capability registry, built once per `Tty`

use serde::{Deserialize, Serialize};

use super::{fallback, CapBytes, CapKind, Capability};
use crate::terminfo::{NumCap, StringCap, TermInfo};

/// How "go to end of previous line" is performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrevEolStrategy {
    /// One absolute cursor-address sequence
    Direct,
    /// Cursor-up followed by repeated cursor-right
    Relative,
}

/// Resolved capabilities for one terminal
///
/// Byte sequences borrow from the terminfo handle the registry was built
/// from, so the registry cannot outlive it.
#[derive(Debug, Clone)]
pub struct Capabilities<'a> {
    caps: [Capability<'a>; CapKind::ALL.len()],
    color_max: i32,
    prev_eol: Option<PrevEolStrategy>,
}

impl<'a> Capabilities<'a> {
    /// Resolve every capability from a terminfo handle
    ///
    /// With `include_advanced` the strategy for multi-step operations is
    /// computed as well.
    pub fn init(ti: &'a dyn TermInfo, include_advanced: bool) -> Self {
        let caps = CapKind::ALL.map(|kind| resolve(ti, kind));
        let color_max = ti.get_num(NumCap::MaxColors).unwrap_or(0);

        let prev_eol = include_advanced.then(|| {
            if caps[CapKind::CursorAddress as usize].is_empty() {
                PrevEolStrategy::Relative
            } else {
                PrevEolStrategy::Direct
            }
        });

        tracing::debug!(
            terminfo = ti.name(),
            color_max,
            prev_eol = ?prev_eol,
            "capabilities resolved"
        );

        Self {
            caps,
            color_max,
            prev_eol,
        }
    }

    /// Get the capability for a kind
    pub fn get(&self, kind: CapKind) -> Capability<'a> {
        self.caps[kind as usize]
    }

    /// Whether the terminal supports the capability
    pub fn supports(&self, kind: CapKind) -> bool {
        !self.get(kind).is_empty()
    }

    /// Number of colors the terminal reports; 0 or less means none
    pub fn color_max(&self) -> i32 {
        self.color_max
    }

    /// Strategy chosen for going to the previous line's end, if advanced
    /// capabilities were resolved
    pub fn prev_eol(&self) -> Option<PrevEolStrategy> {
        self.prev_eol
    }

    /// Iterate over all capabilities in registry order
    pub fn iter(&self) -> impl Iterator<Item = &Capability<'a>> {
        self.caps.iter()
    }
}

/// Terminfo entry consulted for a kind
///
/// Backspace has none: the erase sequence is always the literal.
fn terminfo_cap(kind: CapKind) -> Option<StringCap> {
    let cap = match kind {
        CapKind::Backspace => return None,
        CapKind::Delete => StringCap::KeyDc,
        CapKind::Newline => StringCap::Newline,
        CapKind::PageUp => StringCap::KeyPpage,
        CapKind::PageDown => StringCap::KeyNpage,
        CapKind::ClearScreen => StringCap::ClearScreen,
        CapKind::ClearToEos => StringCap::ClrEos,
        CapKind::CursorHome => StringCap::CursorHome,
        CapKind::CursorLeft => StringCap::CursorLeft,
        CapKind::CursorRight => StringCap::CursorRight,
        CapKind::CursorUp => StringCap::CursorUp,
        CapKind::CursorDown => StringCap::CursorDown,
        CapKind::CursorShow => StringCap::CursorNormal,
        CapKind::CursorHide => StringCap::CursorInvisible,
        CapKind::CursorSave => StringCap::SaveCursor,
        CapKind::CursorRestore => StringCap::RestoreCursor,
        CapKind::CursorAddress => StringCap::CursorAddress,
        CapKind::LineClearToEol => StringCap::ClrEol,
        CapKind::LineClearToBol => StringCap::ClrBol,
        CapKind::LineGotoBol => StringCap::CarriageReturn,
        CapKind::ColorReset => StringCap::ExitAttributeMode,
        CapKind::ColorSet => StringCap::SetAForeground,
        CapKind::ColorBgSet => StringCap::SetABackground,
    };
    Some(cap)
}

fn resolve<'a>(ti: &'a dyn TermInfo, kind: CapKind) -> Capability<'a> {
    let found = terminfo_cap(kind)
        .and_then(|cap| ti.get_str(cap))
        .filter(|bytes| !bytes.is_empty());

    match (found, fallback::literal(kind)) {
        (Some(bytes), _) => Capability::new(kind, bytes),
        (None, Some(literal)) => {
            tracing::trace!(?kind, "using fallback literal");
            Capability::new(kind, CapBytes::Static(literal))
        }
        (None, None) => {
            tracing::trace!(?kind, "unsupported");
            Capability::empty(kind)
        }
    }
}

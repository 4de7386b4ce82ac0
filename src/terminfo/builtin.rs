//! Builtin terminal descriptions
//!
//! Compact per-family capability tables used when the system has no
//! terminfo entry for the current terminal. Each table only carries the
//! capabilities the registry reads.

use super::{Family, NumCap, StringCap, TermInfo};
use crate::caps::CapBytes;

type Entry = (StringCap, &'static [u8]);

/// xterm style indexed color: 0-7 via 3x, 8-15 via 9x, the rest via 38;5
const XTERM_SETAF: &[u8] = b"\x1b[%?%p1%{8}%<%t3%p1%d%e%p1%{16}%<%t9%p1%{8}%-%d%e38;5;%p1%d%;m";
const XTERM_SETAB: &[u8] = b"\x1b[%?%p1%{8}%<%t4%p1%d%e%p1%{16}%<%t10%p1%{8}%-%d%e48;5;%p1%d%;m";
const CUP: &[u8] = b"\x1b[%i%p1%d;%p2%dH";

static XTERM: &[Entry] = &[
    (StringCap::CarriageReturn, b"\r"),
    (StringCap::ClearScreen, b"\x1b[H\x1b[2J"),
    (StringCap::ClrEol, b"\x1b[K"),
    (StringCap::ClrEos, b"\x1b[J"),
    (StringCap::ClrBol, b"\x1b[1K"),
    (StringCap::CursorAddress, CUP),
    (StringCap::CursorDown, b"\n"),
    (StringCap::CursorHome, b"\x1b[H"),
    (StringCap::CursorInvisible, b"\x1b[?25l"),
    (StringCap::CursorNormal, b"\x1b[?12l\x1b[?25h"),
    (StringCap::CursorLeft, b"\x08"),
    (StringCap::CursorRight, b"\x1b[C"),
    (StringCap::CursorUp, b"\x1b[A"),
    (StringCap::ExitAttributeMode, b"\x1b(B\x1b[m"),
    (StringCap::KeyDc, b"\x1b[3~"),
    (StringCap::KeyNpage, b"\x1b[6~"),
    (StringCap::KeyPpage, b"\x1b[5~"),
    (StringCap::Newline, b"\x1bE"),
    (StringCap::RestoreCursor, b"\x1b8"),
    (StringCap::SaveCursor, b"\x1b7"),
    (StringCap::SetAForeground, XTERM_SETAF),
    (StringCap::SetABackground, XTERM_SETAB),
];

// screen and tmux move up with reverse index
static SCREEN: &[Entry] = &[
    (StringCap::CarriageReturn, b"\r"),
    (StringCap::ClearScreen, b"\x1b[H\x1b[J"),
    (StringCap::ClrEol, b"\x1b[K"),
    (StringCap::ClrEos, b"\x1b[J"),
    (StringCap::ClrBol, b"\x1b[1K"),
    (StringCap::CursorAddress, CUP),
    (StringCap::CursorDown, b"\n"),
    (StringCap::CursorHome, b"\x1b[H"),
    (StringCap::CursorInvisible, b"\x1b[?25l"),
    (StringCap::CursorNormal, b"\x1b[34h\x1b[?25h"),
    (StringCap::CursorLeft, b"\x08"),
    (StringCap::CursorRight, b"\x1b[C"),
    (StringCap::CursorUp, b"\x1bM"),
    (StringCap::ExitAttributeMode, b"\x1b[m\x0f"),
    (StringCap::KeyDc, b"\x1b[3~"),
    (StringCap::KeyNpage, b"\x1b[6~"),
    (StringCap::KeyPpage, b"\x1b[5~"),
    (StringCap::Newline, b"\x1bE"),
    (StringCap::RestoreCursor, b"\x1b8"),
    (StringCap::SaveCursor, b"\x1b7"),
    (StringCap::SetAForeground, XTERM_SETAF),
    (StringCap::SetABackground, XTERM_SETAB),
];

static TMUX: &[Entry] = &[
    (StringCap::CarriageReturn, b"\r"),
    (StringCap::ClearScreen, b"\x1b[H\x1b[J"),
    (StringCap::ClrEol, b"\x1b[K"),
    (StringCap::ClrEos, b"\x1b[J"),
    (StringCap::ClrBol, b"\x1b[1K"),
    (StringCap::CursorAddress, CUP),
    (StringCap::CursorDown, b"\n"),
    (StringCap::CursorHome, b"\x1b[H"),
    (StringCap::CursorInvisible, b"\x1b[?25l"),
    (StringCap::CursorNormal, b"\x1b[34h\x1b[?25h"),
    (StringCap::CursorLeft, b"\x08"),
    (StringCap::CursorRight, b"\x1b[C"),
    (StringCap::CursorUp, b"\x1bM"),
    (StringCap::ExitAttributeMode, b"\x1b(B\x1b[m"),
    (StringCap::KeyDc, b"\x1b[3~"),
    (StringCap::KeyNpage, b"\x1b[6~"),
    (StringCap::KeyPpage, b"\x1b[5~"),
    (StringCap::Newline, b"\x1bE"),
    (StringCap::RestoreCursor, b"\x1b8"),
    (StringCap::SaveCursor, b"\x1b7"),
    (StringCap::SetAForeground, XTERM_SETAF),
    (StringCap::SetABackground, XTERM_SETAB),
];

static RXVT: &[Entry] = &[
    (StringCap::CarriageReturn, b"\r"),
    (StringCap::ClearScreen, b"\x1b[H\x1b[2J"),
    (StringCap::ClrEol, b"\x1b[K"),
    (StringCap::ClrEos, b"\x1b[J"),
    (StringCap::ClrBol, b"\x1b[1K"),
    (StringCap::CursorAddress, CUP),
    (StringCap::CursorDown, b"\n"),
    (StringCap::CursorHome, b"\x1b[H"),
    (StringCap::CursorInvisible, b"\x1b[?25l"),
    (StringCap::CursorNormal, b"\x1b[?25h"),
    (StringCap::CursorLeft, b"\x08"),
    (StringCap::CursorRight, b"\x1b[C"),
    (StringCap::CursorUp, b"\x1b[A"),
    (StringCap::ExitAttributeMode, b"\x1b[m\x0f"),
    (StringCap::KeyDc, b"\x1b[3~"),
    (StringCap::KeyNpage, b"\x1b[6~"),
    (StringCap::KeyPpage, b"\x1b[5~"),
    (StringCap::Newline, b"\x1bE"),
    (StringCap::RestoreCursor, b"\x1b8"),
    (StringCap::SaveCursor, b"\x1b7"),
    (StringCap::SetAForeground, b"\x1b[38;5;%p1%dm"),
    (StringCap::SetABackground, b"\x1b[48;5;%p1%dm"),
];

static PUTTY: &[Entry] = &[
    (StringCap::CarriageReturn, b"\r"),
    (StringCap::ClearScreen, b"\x1b[H\x1b[J"),
    (StringCap::ClrEol, b"\x1b[K"),
    (StringCap::ClrEos, b"\x1b[J"),
    (StringCap::ClrBol, b"\x1b[1K"),
    (StringCap::CursorAddress, CUP),
    (StringCap::CursorDown, b"\x1bD"),
    (StringCap::CursorHome, b"\x1b[H"),
    (StringCap::CursorInvisible, b"\x1b[?25l"),
    (StringCap::CursorNormal, b"\x1b[?25h"),
    (StringCap::CursorLeft, b"\x08"),
    (StringCap::CursorRight, b"\x1b[C"),
    (StringCap::CursorUp, b"\x1bM"),
    (StringCap::ExitAttributeMode, b"\x1b[m\x0f"),
    (StringCap::KeyDc, b"\x1b[3~"),
    (StringCap::KeyNpage, b"\x1b[6~"),
    (StringCap::KeyPpage, b"\x1b[5~"),
    (StringCap::Newline, b"\r\n"),
    (StringCap::RestoreCursor, b"\x1b8"),
    (StringCap::SaveCursor, b"\x1b7"),
    (StringCap::SetAForeground, XTERM_SETAF),
    (StringCap::SetABackground, XTERM_SETAB),
];

static LINUX: &[Entry] = &[
    (StringCap::CarriageReturn, b"\r"),
    (StringCap::ClearScreen, b"\x1b[H\x1b[J"),
    (StringCap::ClrEol, b"\x1b[K"),
    (StringCap::ClrEos, b"\x1b[J"),
    (StringCap::ClrBol, b"\x1b[1K"),
    (StringCap::CursorAddress, CUP),
    (StringCap::CursorDown, b"\n"),
    (StringCap::CursorHome, b"\x1b[H"),
    (StringCap::CursorInvisible, b"\x1b[?25l\x1b[?1c"),
    (StringCap::CursorNormal, b"\x1b[?25h\x1b[?0c"),
    (StringCap::CursorLeft, b"\x08"),
    (StringCap::CursorRight, b"\x1b[C"),
    (StringCap::CursorUp, b"\x1b[A"),
    (StringCap::ExitAttributeMode, b"\x1b[m\x0f"),
    (StringCap::KeyDc, b"\x1b[3~"),
    (StringCap::KeyNpage, b"\x1b[6~"),
    (StringCap::KeyPpage, b"\x1b[5~"),
    (StringCap::Newline, b"\r\n"),
    (StringCap::RestoreCursor, b"\x1b8"),
    (StringCap::SaveCursor, b"\x1b7"),
    (StringCap::SetAForeground, b"\x1b[3%p1%{8}%m%d%?%p1%{7}%>%t;1%e;22%;m"),
    (StringCap::SetABackground, b"\x1b[4%p1%{8}%m%d%?%p1%{7}%>%t;5%e;25%;m"),
];

static INTERIX: &[Entry] = &[
    (StringCap::CarriageReturn, b"\r"),
    (StringCap::ClearScreen, b"\x1b[2J"),
    (StringCap::ClrEol, b"\x1b[K"),
    (StringCap::ClrEos, b"\x1b[J"),
    (StringCap::CursorAddress, CUP),
    (StringCap::CursorDown, b"\x1b[B"),
    (StringCap::CursorHome, b"\x1b[H"),
    (StringCap::CursorLeft, b"\x08"),
    (StringCap::CursorRight, b"\x1b[C"),
    (StringCap::CursorUp, b"\x1b[A"),
    (StringCap::ExitAttributeMode, b"\x1b[0m"),
    (StringCap::KeyNpage, b"\x1b[T"),
    (StringCap::KeyPpage, b"\x1b[S"),
    (StringCap::RestoreCursor, b"\x1b[u"),
    (StringCap::SaveCursor, b"\x1b[s"),
    (StringCap::SetAForeground, b"\x1b[3%p1%dm"),
    (StringCap::SetABackground, b"\x1b[4%p1%dm"),
];

static ITERM: &[Entry] = &[
    (StringCap::CarriageReturn, b"\r"),
    (StringCap::ClearScreen, b"\x1b[H\x1b[J"),
    (StringCap::ClrEol, b"\x1b[K"),
    (StringCap::ClrEos, b"\x1b[J"),
    (StringCap::ClrBol, b"\x1b[1K"),
    (StringCap::CursorAddress, CUP),
    (StringCap::CursorDown, b"\n"),
    (StringCap::CursorHome, b"\x1b[H"),
    (StringCap::CursorInvisible, b"\x1b[?25l"),
    (StringCap::CursorNormal, b"\x1b[?25h"),
    (StringCap::CursorLeft, b"\x08"),
    (StringCap::CursorRight, b"\x1b[C"),
    (StringCap::CursorUp, b"\x1b[A"),
    (StringCap::ExitAttributeMode, b"\x1b[m"),
    (StringCap::KeyDc, b"\x1b[3~"),
    (StringCap::KeyNpage, b"\x1b[6~"),
    (StringCap::KeyPpage, b"\x1b[5~"),
    (StringCap::RestoreCursor, b"\x1b8"),
    (StringCap::SaveCursor, b"\x1b7"),
    (StringCap::SetAForeground, XTERM_SETAF),
    (StringCap::SetABackground, XTERM_SETAB),
];

static ST: &[Entry] = &[
    (StringCap::CarriageReturn, b"\r"),
    (StringCap::ClearScreen, b"\x1b[H\x1b[2J"),
    (StringCap::ClrEol, b"\x1b[K"),
    (StringCap::ClrEos, b"\x1b[J"),
    (StringCap::ClrBol, b"\x1b[1K"),
    (StringCap::CursorAddress, CUP),
    (StringCap::CursorDown, b"\n"),
    (StringCap::CursorHome, b"\x1b[H"),
    (StringCap::CursorInvisible, b"\x1b[?25l"),
    (StringCap::CursorNormal, b"\x1b[?12l\x1b[?25h"),
    (StringCap::CursorLeft, b"\x08"),
    (StringCap::CursorRight, b"\x1b[C"),
    (StringCap::CursorUp, b"\x1b[A"),
    (StringCap::ExitAttributeMode, b"\x1b[0m"),
    (StringCap::KeyDc, b"\x1b[3~"),
    (StringCap::KeyNpage, b"\x1b[6~"),
    (StringCap::KeyPpage, b"\x1b[5~"),
    (StringCap::RestoreCursor, b"\x1b8"),
    (StringCap::SaveCursor, b"\x1b7"),
    (StringCap::SetAForeground, XTERM_SETAF),
    (StringCap::SetABackground, XTERM_SETAB),
];

static VTE: &[Entry] = &[
    (StringCap::CarriageReturn, b"\r"),
    (StringCap::ClearScreen, b"\x1b[H\x1b[2J"),
    (StringCap::ClrEol, b"\x1b[K"),
    (StringCap::ClrEos, b"\x1b[J"),
    (StringCap::ClrBol, b"\x1b[1K"),
    (StringCap::CursorAddress, CUP),
    (StringCap::CursorDown, b"\n"),
    (StringCap::CursorHome, b"\x1b[H"),
    (StringCap::CursorInvisible, b"\x1b[?25l"),
    (StringCap::CursorNormal, b"\x1b[?25h"),
    (StringCap::CursorLeft, b"\x08"),
    (StringCap::CursorRight, b"\x1b[C"),
    (StringCap::CursorUp, b"\x1b[A"),
    (StringCap::ExitAttributeMode, b"\x1b(B\x1b[0m"),
    (StringCap::KeyDc, b"\x1b[3~"),
    (StringCap::KeyNpage, b"\x1b[6~"),
    (StringCap::KeyPpage, b"\x1b[5~"),
    (StringCap::Newline, b"\x1bE"),
    (StringCap::RestoreCursor, b"\x1b8"),
    (StringCap::SaveCursor, b"\x1b7"),
    (StringCap::SetAForeground, XTERM_SETAF),
    (StringCap::SetABackground, XTERM_SETAB),
];

static CYGWIN: &[Entry] = &[
    (StringCap::CarriageReturn, b"\r"),
    (StringCap::ClearScreen, b"\x1b[H\x1b[J"),
    (StringCap::ClrEol, b"\x1b[K"),
    (StringCap::ClrEos, b"\x1b[J"),
    (StringCap::ClrBol, b"\x1b[1K"),
    (StringCap::CursorAddress, CUP),
    (StringCap::CursorDown, b"\n"),
    (StringCap::CursorHome, b"\x1b[H"),
    (StringCap::CursorLeft, b"\x08"),
    (StringCap::CursorRight, b"\x1b[C"),
    (StringCap::CursorUp, b"\x1b[A"),
    (StringCap::ExitAttributeMode, b"\x1b[0;10m"),
    (StringCap::KeyDc, b"\x1b[3~"),
    (StringCap::KeyNpage, b"\x1b[6~"),
    (StringCap::KeyPpage, b"\x1b[5~"),
    (StringCap::RestoreCursor, b"\x1b8"),
    (StringCap::SaveCursor, b"\x1b7"),
    (StringCap::SetAForeground, b"\x1b[3%p1%dm"),
    (StringCap::SetABackground, b"\x1b[4%p1%dm"),
];

static WIN32CON: &[Entry] = &[
    (StringCap::CarriageReturn, b"\r"),
    (StringCap::ClearScreen, b"\x1b[H\x1b[J"),
    (StringCap::ClrEol, b"\x1b[K"),
    (StringCap::ClrEos, b"\x1b[J"),
    (StringCap::CursorAddress, CUP),
    (StringCap::CursorDown, b"\n"),
    (StringCap::CursorHome, b"\x1b[H"),
    (StringCap::CursorInvisible, b"\x1b[?25l"),
    (StringCap::CursorNormal, b"\x1b[?25h"),
    (StringCap::CursorLeft, b"\x08"),
    (StringCap::CursorRight, b"\x1b[C"),
    (StringCap::CursorUp, b"\x1b[A"),
    (StringCap::ExitAttributeMode, b"\x1b[0m"),
    (StringCap::SetAForeground, b"\x1b[%?%p1%{8}%<%t3%p1%d%e9%p1%{8}%-%d%;m"),
    (StringCap::SetABackground, b"\x1b[%?%p1%{8}%<%t4%p1%d%e10%p1%{8}%-%d%;m"),
];

static CONEMU: &[Entry] = &[
    (StringCap::CarriageReturn, b"\r"),
    (StringCap::ClearScreen, b"\x1b[H\x1b[2J"),
    (StringCap::ClrEol, b"\x1b[K"),
    (StringCap::ClrEos, b"\x1b[J"),
    (StringCap::ClrBol, b"\x1b[1K"),
    (StringCap::CursorAddress, CUP),
    (StringCap::CursorDown, b"\n"),
    (StringCap::CursorHome, b"\x1b[H"),
    (StringCap::CursorInvisible, b"\x1b[?25l"),
    (StringCap::CursorNormal, b"\x1b[?25h"),
    (StringCap::CursorLeft, b"\x08"),
    (StringCap::CursorRight, b"\x1b[C"),
    (StringCap::CursorUp, b"\x1b[A"),
    (StringCap::ExitAttributeMode, b"\x1b[0m"),
    (StringCap::KeyDc, b"\x1b[3~"),
    (StringCap::KeyNpage, b"\x1b[6~"),
    (StringCap::KeyPpage, b"\x1b[5~"),
    (StringCap::RestoreCursor, b"\x1b8"),
    (StringCap::SaveCursor, b"\x1b7"),
    (StringCap::SetAForeground, XTERM_SETAF),
    (StringCap::SetABackground, XTERM_SETAB),
];

static VTPCON: &[Entry] = &[
    (StringCap::CarriageReturn, b"\r"),
    (StringCap::ClearScreen, b"\x1b[H\x1b[J"),
    (StringCap::ClrEol, b"\x1b[K"),
    (StringCap::ClrEos, b"\x1b[J"),
    (StringCap::ClrBol, b"\x1b[1K"),
    (StringCap::CursorAddress, CUP),
    (StringCap::CursorDown, b"\n"),
    (StringCap::CursorHome, b"\x1b[H"),
    (StringCap::CursorInvisible, b"\x1b[?25l"),
    (StringCap::CursorNormal, b"\x1b[?25h"),
    (StringCap::CursorLeft, b"\x08"),
    (StringCap::CursorRight, b"\x1b[C"),
    (StringCap::CursorUp, b"\x1b[A"),
    (StringCap::ExitAttributeMode, b"\x1b[0m"),
    (StringCap::RestoreCursor, b"\x1b8"),
    (StringCap::SaveCursor, b"\x1b7"),
    (StringCap::SetAForeground, b"\x1b[38;5;%p1%dm"),
    (StringCap::SetABackground, b"\x1b[48;5;%p1%dm"),
];

static ANSI: &[Entry] = &[
    (StringCap::CarriageReturn, b"\r"),
    (StringCap::ClearScreen, b"\x1b[H\x1b[J"),
    (StringCap::ClrEol, b"\x1b[K"),
    (StringCap::ClrEos, b"\x1b[J"),
    (StringCap::CursorAddress, CUP),
    (StringCap::CursorDown, b"\x1b[B"),
    (StringCap::CursorHome, b"\x1b[H"),
    (StringCap::CursorLeft, b"\x1b[D"),
    (StringCap::CursorRight, b"\x1b[C"),
    (StringCap::CursorUp, b"\x1b[A"),
    (StringCap::ExitAttributeMode, b"\x1b[0;10m"),
    (StringCap::SetAForeground, b"\x1b[3%p1%dm"),
    (StringCap::SetABackground, b"\x1b[4%p1%dm"),
];

/// Builtin description for one terminal family
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    family: Family,
    strings: &'static [Entry],
    colors: i32,
}

impl Builtin {
    /// Get the builtin description for a family
    pub fn for_family(family: Family) -> Self {
        let (strings, colors) = match family {
            Family::Xterm => (XTERM, 256),
            Family::Screen => (SCREEN, 256),
            Family::Tmux => (TMUX, 256),
            Family::Rxvt => (RXVT, 256),
            Family::Putty => (PUTTY, 256),
            Family::Linux => (LINUX, 16),
            Family::Interix => (INTERIX, 8),
            Family::Iterm => (ITERM, 256),
            Family::St => (ST, 256),
            Family::Vte => (VTE, 256),
            Family::Cygwin => (CYGWIN, 8),
            Family::Win32Con => (WIN32CON, 16),
            Family::ConEmu => (CONEMU, 256),
            Family::VtpCon => (VTPCON, 256),
            Family::Ansi => (ANSI, 8),
        };
        Self {
            family,
            strings,
            colors,
        }
    }

    /// Get the family this description belongs to
    pub fn family(&self) -> Family {
        self.family
    }
}

impl TermInfo for Builtin {
    fn name(&self) -> &str {
        self.family.builtin_name()
    }

    fn get_str(&self, cap: StringCap) -> Option<CapBytes<'_>> {
        self.strings
            .iter()
            .find(|(c, _)| *c == cap)
            .map(|&(_, bytes)| CapBytes::Static(bytes))
    }

    fn get_num(&self, cap: NumCap) -> Option<i32> {
        match cap {
            NumCap::MaxColors => Some(self.colors),
            NumCap::Columns | NumCap::Lines => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_family_has_cursor_addressing() {
        for family in Family::MATCHABLE.into_iter().chain([Family::Ansi]) {
            let builtin = Builtin::for_family(family);
            assert!(
                builtin.get_str(StringCap::CursorAddress).is_some(),
                "{} lacks cup",
                family
            );
        }
    }

    #[test]
    fn test_builtin_bytes_are_static() {
        let builtin = Builtin::for_family(Family::Screen);
        let up = builtin.get_str(StringCap::CursorUp).unwrap();
        assert!(up.is_static());
        assert_eq!(up.as_bytes(), b"\x1bM");
    }

    #[test]
    fn test_missing_entries() {
        let ansi = Builtin::for_family(Family::Ansi);
        assert!(ansi.get_str(StringCap::ClrBol).is_none());
        assert!(ansi.get_str(StringCap::SaveCursor).is_none());
        assert_eq!(ansi.get_num(NumCap::MaxColors), Some(8));
        assert_eq!(ansi.get_num(NumCap::Columns), None);
    }
}

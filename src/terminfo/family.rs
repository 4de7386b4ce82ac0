//! Terminal family selection
//!
//! Classifies a `TERM` value into one of the known terminal families so a
//! builtin description can stand in when the system has no terminfo entry.

use super::Builtin;

/// Known terminal families, in matching priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Xterm,
    Screen,
    Tmux,
    Rxvt,
    Putty,
    Linux,
    Interix,
    Iterm,
    St,
    Vte,
    Cygwin,
    Win32Con,
    ConEmu,
    VtpCon,
    /// Generic ANSI terminal, selected when nothing else matches
    Ansi,
}

impl Family {
    /// Families that can be matched by name, in priority order
    pub const MATCHABLE: [Family; 14] = [
        Family::Xterm,
        Family::Screen,
        Family::Tmux,
        Family::Rxvt,
        Family::Putty,
        Family::Linux,
        Family::Interix,
        Family::Iterm,
        Family::St,
        Family::Vte,
        Family::Cygwin,
        Family::Win32Con,
        Family::ConEmu,
        Family::VtpCon,
    ];

    /// Name prefixes that select this family
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Family::Xterm => &["xterm"],
            Family::Screen => &["screen"],
            Family::Tmux => &["tmux"],
            Family::Rxvt => &["rxvt"],
            Family::Putty => &["putty"],
            Family::Linux => &["linux"],
            Family::Interix => &["interix"],
            Family::Iterm => &["iterm", "iterm2", "iTerm.app", "iTerm2.app"],
            Family::St => &["st"],
            Family::Vte => &["gnome", "vte"],
            Family::Cygwin => &["cygwin"],
            Family::Win32Con => &["win32con"],
            Family::ConEmu => &["conemu"],
            Family::VtpCon => &["vtpcon"],
            Family::Ansi => &[],
        }
    }

    /// Canonical family name
    pub fn name(self) -> &'static str {
        match self {
            Family::Xterm => "xterm",
            Family::Screen => "screen",
            Family::Tmux => "tmux",
            Family::Rxvt => "rxvt",
            Family::Putty => "putty",
            Family::Linux => "linux",
            Family::Interix => "interix",
            Family::Iterm => "iterm",
            Family::St => "st",
            Family::Vte => "vte",
            Family::Cygwin => "cygwin",
            Family::Win32Con => "win32con",
            Family::ConEmu => "conemu",
            Family::VtpCon => "vtpcon",
            Family::Ansi => "ansi",
        }
    }

    /// Name of the builtin description for this family
    pub fn builtin_name(self) -> &'static str {
        match self {
            Family::Xterm => "builtin_xterm",
            Family::Screen => "builtin_screen",
            Family::Tmux => "builtin_tmux",
            Family::Rxvt => "builtin_rxvt",
            Family::Putty => "builtin_putty",
            Family::Linux => "builtin_linux",
            Family::Interix => "builtin_interix",
            Family::Iterm => "builtin_iterm",
            Family::St => "builtin_st",
            Family::Vte => "builtin_vte",
            Family::Cygwin => "builtin_cygwin",
            Family::Win32Con => "builtin_win32con",
            Family::ConEmu => "builtin_conemu",
            Family::VtpCon => "builtin_vtpcon",
            Family::Ansi => "builtin_ansi",
        }
    }

    /// Classify a terminal type name; first match in priority order wins
    pub fn detect(term: Option<&str>) -> Family {
        Family::MATCHABLE
            .into_iter()
            .find(|family| {
                family
                    .aliases()
                    .iter()
                    .any(|alias| is_term_family(term, alias))
            })
            .unwrap_or(Family::Ansi)
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Check whether `term` belongs to `family`
///
/// `term` must start with `family` and the next byte must be the end of the
/// name, `-` or `.`. The dot lets names like `screen.xterm` join the screen
/// family.
pub fn is_term_family(term: Option<&str>, family: &str) -> bool {
    let Some(term) = term else {
        return false;
    };
    match term.as_bytes().strip_prefix(family.as_bytes()) {
        Some(rest) => matches!(rest.first(), None | Some(b'-') | Some(b'.')),
        None => false,
    }
}

/// Select the builtin description for a terminal type name
///
/// Returns the handle and the builtin entry name (`builtin_<family>`).
pub fn from_builtin(term: Option<&str>) -> (Builtin, &'static str) {
    let family = Family::detect(term);
    (Builtin::for_family(family), family.builtin_name())
}

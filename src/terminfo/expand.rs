//! Parameter expansion for templated capabilities
//!
//! The `%` stack machine is `terminfo-lean`'s. Printf widths and precisions
//! longer than three digits are refused before expanding.

use terminfo_lean::expand::{ExpandContext, Parameter};

use super::TermInfoError;

/// Most digits accepted in a printf width or precision
const MAX_WIDTH_DIGITS: usize = 3;

/// Expand a capability template with numeric parameters
///
/// Variables start fresh on every call.
pub fn expand(template: &[u8], params: &[i32]) -> Result<Vec<u8>, TermInfoError> {
    check_widths(template)?;

    let params: Vec<Parameter> = params.iter().map(|&p| Parameter::from(p)).collect();
    let mut context = ExpandContext::default();
    context
        .expand(template, &params)
        .map_err(|e| TermInfoError::Expand(e.to_string()))
}

/// Reject `%` conversions whose width or precision has too many digits
fn check_widths(template: &[u8]) -> Result<(), TermInfoError> {
    let mut i = 0;
    while i < template.len() {
        if template[i] != b'%' {
            i += 1;
            continue;
        }
        i += 1;
        if template.get(i) == Some(&b'%') {
            i += 1;
            continue;
        }

        if template.get(i) == Some(&b':') {
            i += 1;
        }
        while matches!(template.get(i), Some(b'-' | b'+' | b'#' | b' ')) {
            i += 1;
        }

        let width = count_digits(template, &mut i);
        let precision = if template.get(i) == Some(&b'.') {
            i += 1;
            count_digits(template, &mut i)
        } else {
            0
        };
        if width > MAX_WIDTH_DIGITS || precision > MAX_WIDTH_DIGITS {
            return Err(TermInfoError::Expand("width out of range".to_string()));
        }
    }
    Ok(())
}

fn count_digits(template: &[u8], i: &mut usize) -> usize {
    let start = *i;
    while template.get(*i).is_some_and(u8::is_ascii_digit) {
        *i += 1;
    }
    *i - start
}

#[cfg(test)]
mod tests {
    use super::*;

    const XTERM_SETAF: &[u8] =
        b"\x1b[%?%p1%{8}%<%t3%p1%d%e%p1%{16}%<%t9%p1%{8}%-%d%e38;5;%p1%d%;m";

    #[test]
    fn test_cursor_address() {
        let out = expand(b"\x1b[%i%p1%d;%p2%dH", &[5, 10]).unwrap();
        assert_eq!(out, b"\x1b[6;11H");
    }

    #[test]
    fn test_xterm_setaf() {
        assert_eq!(expand(XTERM_SETAF, &[1]).unwrap(), b"\x1b[31m");
        assert_eq!(expand(XTERM_SETAF, &[9]).unwrap(), b"\x1b[91m");
        assert_eq!(expand(XTERM_SETAF, &[200]).unwrap(), b"\x1b[38;5;200m");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(expand(b"\x1b[H", &[]).unwrap(), b"\x1b[H");
        assert_eq!(expand(b"100%%", &[]).unwrap(), b"100%");
    }

    #[test]
    fn test_huge_width_is_refused() {
        assert!(matches!(
            expand(b"%p1%99999999999999999999999d", &[1]),
            Err(TermInfoError::Expand(_))
        ));
        assert!(matches!(
            expand(b"%p1%:-999999999d", &[1]),
            Err(TermInfoError::Expand(_))
        ));
        assert!(matches!(
            expand(b"%p1%.12345d", &[1]),
            Err(TermInfoError::Expand(_))
        ));
    }

    #[test]
    fn test_check_widths_accepts_ordinary_templates() {
        for template in [
            &b"%p1%03d"[..],
            b"%p1%:-4d|",
            b"%{255}%d",
            b"%'A'%c",
            b"100%%99",
            XTERM_SETAF,
        ] {
            assert!(check_widths(template).is_ok(), "{:?}", template.escape_ascii().to_string());
        }
    }
}

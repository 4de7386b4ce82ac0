//! System terminfo entries
//!
//! Locating and parsing compiled entries is done by `terminfo-lean`. The
//! parsed capabilities are copied out of the file buffer so the entry owns
//! the bytes the registry borrows.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use terminfo_lean::parse::parse as parse_terminfo;

use super::{NumCap, StringCap, TermInfo, TermInfoError};
use crate::caps::CapBytes;

/// A terminfo entry read from the system database
#[derive(Debug, Clone)]
pub struct Compiled {
    name: String,
    numbers: HashMap<String, i32>,
    strings: HashMap<String, Vec<u8>>,
}

impl Compiled {
    /// Parse the compiled entry for terminal `name`
    pub fn parse(name: &str, bytes: &[u8]) -> Result<Self, TermInfoError> {
        let entry = parse_terminfo(bytes).map_err(|e| TermInfoError::Parse(e.to_string()))?;

        let numbers = entry
            .numbers
            .iter()
            .map(|(cap, value)| (cap.to_string(), i32::from(*value)))
            .collect();
        let strings = entry
            .strings
            .iter()
            .map(|(cap, value)| (cap.to_string(), value.to_vec()))
            .collect();

        Ok(Self {
            name: name.to_string(),
            numbers,
            strings,
        })
    }

    /// Read and parse an entry file
    pub fn from_path(name: &str, path: impl AsRef<Path>) -> Result<Self, TermInfoError> {
        let bytes = fs::read(path.as_ref())?;
        Self::parse(name, &bytes)
    }

    /// Find and parse the entry for a terminal name
    ///
    /// `Ok(None)` means the name is unusable as a file name or no search
    /// directory has an entry for it.
    pub fn from_name(name: &str) -> Result<Option<Self>, TermInfoError> {
        if name.is_empty() || name.contains('/') || name.starts_with('.') {
            return Ok(None);
        }
        match terminfo_lean::locate::locate(name) {
            Ok(path) => Self::from_path(name, path).map(Some),
            Err(e) => {
                tracing::trace!(term = name, error = %e, "terminfo entry not located");
                Ok(None)
            }
        }
    }
}

impl TermInfo for Compiled {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_str(&self, cap: StringCap) -> Option<CapBytes<'_>> {
        self.strings
            .get(cap.name())
            .map(|bytes| CapBytes::Borrowed(bytes.as_slice()))
    }

    fn get_num(&self, cap: NumCap) -> Option<i32> {
        self.numbers.get(cap.name()).copied().filter(|&n| n >= 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a legacy (`0o432`) entry with the given numbers and strings
    fn build_entry(names: &str, numbers: &[i16], strings: &[Option<&[u8]>]) -> Vec<u8> {
        let mut names_bytes = names.as_bytes().to_vec();
        names_bytes.push(0);
        let bools = [1u8, 0, 1];

        let mut table = Vec::new();
        let mut offsets = Vec::new();
        for s in strings {
            match s {
                Some(bytes) => {
                    offsets.push(table.len() as i16);
                    table.extend_from_slice(bytes);
                    table.push(0);
                }
                None => offsets.push(-1),
            }
        }

        let mut out = Vec::new();
        for v in [
            0o432,
            names_bytes.len() as i16,
            bools.len() as i16,
            numbers.len() as i16,
            offsets.len() as i16,
            table.len() as i16,
        ] {
            out.extend_from_slice(&v.to_le_bytes());
        }
        out.extend_from_slice(&names_bytes);
        out.extend_from_slice(&bools);
        if (names_bytes.len() + bools.len()) % 2 == 1 {
            out.push(0);
        }
        for n in numbers {
            out.extend_from_slice(&n.to_le_bytes());
        }
        for o in offsets {
            out.extend_from_slice(&o.to_le_bytes());
        }
        out.extend_from_slice(&table);
        out
    }

    fn sample_entry() -> Vec<u8> {
        let mut strings: Vec<Option<&[u8]>> = vec![None; 20];
        strings[StringCap::CarriageReturn.index()] = Some(b"\r");
        strings[StringCap::CursorAddress.index()] = Some(b"\x1b[%i%p1%d;%p2%dH");
        strings[StringCap::CursorUp.index()] = Some(b"\x1b[A");
        let mut numbers = vec![-1i16; 14];
        numbers[NumCap::Columns.index()] = 80;
        numbers[NumCap::MaxColors.index()] = 8;
        build_entry("vt-test|test terminal", &numbers, &strings)
    }

    #[test]
    fn test_parse_entry() {
        let entry = Compiled::parse("vt-test", &sample_entry()).unwrap();
        assert_eq!(entry.name(), "vt-test");
        assert_eq!(entry.get_num(NumCap::Columns), Some(80));
        assert_eq!(entry.get_num(NumCap::Lines), None);
        assert_eq!(entry.get_num(NumCap::MaxColors), Some(8));
        assert_eq!(
            entry.get_str(StringCap::CursorUp).map(|b| b.as_bytes()),
            Some(&b"\x1b[A"[..])
        );
        assert_eq!(
            entry.get_str(StringCap::CursorAddress).map(|b| b.as_bytes()),
            Some(&b"\x1b[%i%p1%d;%p2%dH"[..])
        );
        assert!(entry.get_str(StringCap::ClearScreen).is_none());
        assert!(entry.get_str(StringCap::SetAForeground).is_none());
    }

    #[test]
    fn test_entry_bytes_are_borrowed() {
        let entry = Compiled::parse("vt-test", &sample_entry()).unwrap();
        let up = entry.get_str(StringCap::CursorUp).unwrap();
        assert!(!up.is_static());
    }

    #[test]
    fn test_garbage_is_a_parse_error() {
        assert!(matches!(
            Compiled::parse("junk", b"not a terminfo entry"),
            Err(TermInfoError::Parse(_))
        ));
        assert!(matches!(
            Compiled::parse("junk", &[]),
            Err(TermInfoError::Parse(_))
        ));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vt-test");
        fs::write(&path, sample_entry()).unwrap();

        let entry = Compiled::from_path("vt-test", &path).unwrap();
        assert_eq!(entry.get_num(NumCap::Columns), Some(80));

        assert!(matches!(
            Compiled::from_path("vt-test", dir.path().join("missing")),
            Err(TermInfoError::Io(_))
        ));
    }

    #[test]
    fn test_unusable_names_are_not_looked_up() {
        for name in ["", "../xterm", "x/xterm", ".hidden"] {
            assert!(Compiled::from_name(name).unwrap().is_none(), "{:?}", name);
        }
    }
}

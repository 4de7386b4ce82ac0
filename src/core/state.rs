//! Cursor position state machine
//!
//! `TermState` mirrors where the terminal's cursor sits after every write.
//! It is updated in one of two ways: after plain printable text has been
//! written (`advance_by_print`), or after a capability's bytes have been
//! written (`advance_by_capability`).
//!
//! The position always stays inside the screen: `pos.x < size.x` and
//! `pos.y < size.y`. A write that ends exactly on the right margin wraps to
//! column 0 of the next row in the same call, and rows never advance past
//! the last one (there is no scrollback emulation).

use serde::{Deserialize, Serialize};

use super::Coordinates;
use crate::caps::CapKind;
use crate::error::{TtyError, TtyResult};

/// Tracked terminal state: cursor, size, saved cursor and prompt anchor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermState {
    /// Current cursor position
    pos: Coordinates,
    /// Screen size in columns (`x`) and rows (`y`)
    size: Coordinates,
    /// Position captured by the last cursor-save
    saved_pos: Coordinates,
    /// Caller-defined anchor, e.g. where a prompt starts
    start: Coordinates,
}

impl TermState {
    /// Create a state for a screen of the given size with the cursor at the origin
    ///
    /// Both dimensions must be non-zero.
    pub fn new(size: Coordinates) -> TtyResult<Self> {
        if size.x == 0 || size.y == 0 {
            return Err(TtyError::InvalidSize {
                cols: size.x,
                rows: size.y,
            });
        }
        Ok(Self {
            pos: Coordinates::origin(),
            size,
            saved_pos: Coordinates::origin(),
            start: Coordinates::origin(),
        })
    }

    /// Get the cursor position
    pub fn pos(&self) -> Coordinates {
        self.pos
    }

    /// Get the screen size
    pub fn size(&self) -> Coordinates {
        self.size
    }

    /// Get the last saved cursor position
    pub fn saved_pos(&self) -> Coordinates {
        self.saved_pos
    }

    /// Get the prompt anchor
    pub fn start(&self) -> Coordinates {
        self.start
    }

    /// Anchor the current position as the start (e.g. right after a prompt)
    pub fn set_start(&mut self) {
        self.start = self.pos;
    }

    /// Last addressable column
    pub fn last_col(&self) -> usize {
        self.size.x - 1
    }

    /// Last addressable row
    pub fn last_row(&self) -> usize {
        self.size.y - 1
    }

    /// Place the cursor, clamping to the screen
    pub fn set_pos(&mut self, pos: Coordinates) {
        self.pos = pos;
        self.normalize();
    }

    /// Reset everything but the size
    pub fn reset(&mut self) {
        self.pos = Coordinates::origin();
        self.saved_pos = Coordinates::origin();
        self.start = Coordinates::origin();
    }

    /// Advance after `count` printable columns were written
    ///
    /// Text that reaches or crosses the right margin continues on the
    /// following rows. The row is pinned to the last one once the bottom is
    /// reached.
    pub fn advance_by_print(&mut self, count: usize) {
        if count == 0 {
            return;
        }

        let end = self.pos.x.saturating_add(count);
        if end < self.size.x {
            self.pos.x = end;
            return;
        }

        let rows = end / self.size.x;
        self.pos.y = self.pos.y.saturating_add(rows).min(self.last_row());
        self.pos.x = end % self.size.x;
    }

    /// Move to column 0 of the next row, staying on the last row at the bottom
    pub fn line_feed(&mut self) {
        self.pos.x = 0;
        self.pos.y = (self.pos.y + 1).min(self.last_row());
    }

    /// Apply the cursor effect of a capability that was just written
    pub fn advance_by_capability(&mut self, kind: CapKind) {
        match kind {
            CapKind::Backspace | CapKind::CursorLeft => {
                self.pos.x = self.pos.x.saturating_sub(1);
            }
            CapKind::CursorRight => {
                self.pos.x += 1;
            }
            CapKind::CursorUp => {
                self.pos.y = self.pos.y.saturating_sub(1);
            }
            CapKind::CursorDown => {
                self.pos.y += 1;
            }
            CapKind::CursorHome => {
                self.pos = Coordinates::origin();
            }
            CapKind::CursorSave => {
                self.saved_pos = self.pos;
            }
            CapKind::CursorRestore => {
                self.pos = self.saved_pos;
            }
            CapKind::Newline => {
                self.line_feed();
            }
            CapKind::LineGotoBol => {
                self.pos.x = 0;
            }
            CapKind::Delete
            | CapKind::PageUp
            | CapKind::PageDown
            | CapKind::ClearScreen
            | CapKind::ClearToEos
            | CapKind::CursorShow
            | CapKind::CursorHide
            | CapKind::CursorAddress
            | CapKind::LineClearToEol
            | CapKind::LineClearToBol
            | CapKind::ColorReset
            | CapKind::ColorSet
            | CapKind::ColorBgSet => {}
        }

        self.normalize();
    }

    /// Move to the last column of the previous row
    pub fn goto_prev_eol(&mut self) -> TtyResult<()> {
        if self.pos.y == 0 {
            return Err(TtyError::NoPreviousLine);
        }
        self.pos.y -= 1;
        self.pos.x = self.last_col();
        Ok(())
    }

    /// Columns between the cursor and the right margin
    pub fn cols_to_eol(&self) -> usize {
        self.last_col() - self.pos.x
    }

    // Horizontal and vertical deltas saturate at the screen edges, the same
    // way terminals treat cuf1/cud1 at the margins.
    fn normalize(&mut self) {
        self.pos.x = self.pos.x.min(self.last_col());
        self.pos.y = self.pos.y.min(self.last_row());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_171x46() -> TermState {
        TermState::new(Coordinates::new(171, 46)).unwrap()
    }

    #[test]
    fn test_new_rejects_empty_size() {
        assert!(matches!(
            TermState::new(Coordinates::new(0, 46)),
            Err(TtyError::InvalidSize { cols: 0, rows: 46 })
        ));
        assert!(TermState::new(Coordinates::new(80, 0)).is_err());
    }

    #[test]
    fn test_print_zero_is_noop() {
        let mut state = state_171x46();
        state.set_pos(Coordinates::new(12, 3));
        state.advance_by_print(0);
        assert_eq!(state.pos(), Coordinates::new(12, 3));
    }

    #[test]
    fn test_print_linear_advance() {
        let mut state = state_171x46();
        state.advance_by_print(5);
        assert_eq!(state.pos(), Coordinates::new(5, 0));
    }

    #[test]
    fn test_print_wrap_on_exact_fit() {
        let mut state = state_171x46();
        state.set_pos(Coordinates::new(166, 0));
        state.advance_by_print(5);
        assert_eq!(state.pos(), Coordinates::new(0, 1));

        let mut state = state_171x46();
        state.set_pos(Coordinates::new(166, 0));
        state.advance_by_print(6);
        assert_eq!(state.pos(), Coordinates::new(1, 1));
    }

    #[test]
    fn test_print_single_char_at_last_column() {
        let mut state = state_171x46();
        state.set_pos(Coordinates::new(170, 4));
        state.advance_by_print(1);
        assert_eq!(state.pos(), Coordinates::new(0, 5));
    }

    #[test]
    fn test_print_multiple_rows() {
        let mut state = state_171x46();
        // 2.5 screen widths from column 0
        state.advance_by_print(171 * 2 + 85);
        assert_eq!(state.pos(), Coordinates::new(85, 2));
    }

    #[test]
    fn test_print_clamps_at_bottom() {
        let mut state = state_171x46();
        state.advance_by_print(171 * 46 + 2);
        assert_eq!(state.pos().y, 45);
        assert_eq!(state.pos().x, 2);
    }

    #[test]
    fn test_newline_at_bottom_stays_on_last_row() {
        let mut state = state_171x46();
        state.set_pos(Coordinates::new(30, 45));
        state.advance_by_capability(CapKind::Newline);
        assert_eq!(state.pos(), Coordinates::new(0, 45));
        state.advance_by_capability(CapKind::Newline);
        assert_eq!(state.pos(), Coordinates::new(0, 45));
    }

    #[test]
    fn test_set_pos_clamps() {
        let mut state = state_171x46();
        state.set_pos(Coordinates::new(500, 500));
        assert_eq!(state.pos(), Coordinates::new(170, 45));
    }

    #[test]
    fn test_capability_deltas() {
        let mut state = state_171x46();
        state.set_pos(Coordinates::new(10, 10));

        state.advance_by_capability(CapKind::Backspace);
        assert_eq!(state.pos(), Coordinates::new(9, 10));

        state.advance_by_capability(CapKind::CursorLeft);
        assert_eq!(state.pos(), Coordinates::new(8, 10));

        state.advance_by_capability(CapKind::CursorRight);
        assert_eq!(state.pos(), Coordinates::new(9, 10));

        state.advance_by_capability(CapKind::CursorUp);
        assert_eq!(state.pos(), Coordinates::new(9, 9));

        state.advance_by_capability(CapKind::CursorDown);
        assert_eq!(state.pos(), Coordinates::new(9, 10));

        state.advance_by_capability(CapKind::LineGotoBol);
        assert_eq!(state.pos(), Coordinates::new(0, 10));

        state.advance_by_capability(CapKind::CursorHome);
        assert_eq!(state.pos(), Coordinates::origin());
    }

    #[test]
    fn test_capability_deltas_saturate_at_edges() {
        let mut state = state_171x46();
        state.advance_by_capability(CapKind::CursorUp);
        state.advance_by_capability(CapKind::CursorLeft);
        state.advance_by_capability(CapKind::Backspace);
        assert_eq!(state.pos(), Coordinates::origin());

        state.set_pos(Coordinates::new(170, 45));
        state.advance_by_capability(CapKind::CursorRight);
        state.advance_by_capability(CapKind::CursorDown);
        assert_eq!(state.pos(), Coordinates::new(170, 45));
    }

    #[test]
    fn test_non_moving_capabilities() {
        let mut state = state_171x46();
        state.set_pos(Coordinates::new(7, 3));
        for kind in [
            CapKind::ClearScreen,
            CapKind::ClearToEos,
            CapKind::LineClearToEol,
            CapKind::LineClearToBol,
            CapKind::ColorReset,
            CapKind::CursorHide,
            CapKind::CursorShow,
        ] {
            state.advance_by_capability(kind);
        }
        assert_eq!(state.pos(), Coordinates::new(7, 3));
    }

    #[test]
    fn test_save_restore() {
        let mut state = state_171x46();
        state.set_pos(Coordinates::new(42, 17));
        state.advance_by_capability(CapKind::CursorSave);
        state.advance_by_capability(CapKind::CursorHome);
        state.advance_by_print(300);
        state.advance_by_capability(CapKind::CursorRestore);
        assert_eq!(state.pos(), Coordinates::new(42, 17));
        assert_eq!(state.saved_pos(), Coordinates::new(42, 17));
    }

    #[test]
    fn test_goto_prev_eol() {
        let mut state = state_171x46();
        state.set_pos(Coordinates::new(0, 16));
        state.goto_prev_eol().unwrap();
        assert_eq!(state.pos(), Coordinates::new(170, 15));
    }

    #[test]
    fn test_goto_prev_eol_on_first_row() {
        let mut state = state_171x46();
        state.set_pos(Coordinates::new(4, 0));
        assert!(matches!(state.goto_prev_eol(), Err(TtyError::NoPreviousLine)));
        assert_eq!(state.pos(), Coordinates::new(4, 0));
    }

    #[test]
    fn test_start_anchor() {
        let mut state = state_171x46();
        state.advance_by_print(8);
        state.set_start();
        state.advance_by_print(3);
        assert_eq!(state.start(), Coordinates::new(8, 0));
        state.reset();
        assert_eq!(state.start(), Coordinates::origin());
        assert_eq!(state.size(), Coordinates::new(171, 46));
    }
}

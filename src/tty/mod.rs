//! Terminal output with cursor tracking
//!
//! `Tty` is the context object every output goes through. Each operation
//! performs exactly one transfer per sequence and then updates the tracked
//! position from what was written. A failed or short transfer returns an
//! error and leaves the position untouched.
//!
//! Most operations come in three flavors:
//! - plain (`write`, `print`, `send`, ...) go to the `Tty`'s own writer
//! - `_to` variants go to any `io::Write`
//! - `_fd` variants go to a raw descriptor with a single `write(2)`

mod mode;
mod sink;
mod size;

pub use mode::{
    make_non_canonical, parse_position_reply, query_position, with_reply_timeout, InputMode,
    ModeGuard,
};
pub use sink::FdWriter;
pub use size::{window_size, window_size_of};

use std::fmt;
use std::io::{self, Stdout, Write};
use std::os::fd::BorrowedFd;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{Config, PrevEolMode, DEFAULT_ERROR_COLOR};
use crate::caps::{CapKind, Capabilities, Capability, PrevEolStrategy};
use crate::core::{Coordinates, TermState};
use crate::error::{TtyError, TtyResult};
use crate::terminfo::{expand, TermInfo};

/// Terminal output context
///
/// Owns the tracked state and the writer; borrows the terminfo handle the
/// capabilities were resolved from.
pub struct Tty<'db, W: Write = Stdout> {
    caps: Capabilities<'db>,
    state: TermState,
    out: W,
    prev_eol: PrevEolMode,
    error_color: u8,
    mode: Option<ModeGuard>,
}

impl<'db> Tty<'db, Stdout> {
    /// Set up output on stdout
    ///
    /// Queries the window size, resolves capabilities from `db`, then
    /// switches stdin to the configured input mode. In non-canonical mode
    /// the real cursor position is asked for when `query_position` is set.
    pub fn init(db: &'db dyn TermInfo, config: &Config) -> TtyResult<Self> {
        let size = window_size()?;
        let caps = Capabilities::init(db, config.advanced_caps);
        let mut tty = Tty::new(caps, size, io::stdout())?
            .with_prev_eol(config.prev_eol)
            .with_error_color(config.error_color);

        tty.mode = ModeGuard::enter(config.input_mode)?;
        if tty.mode.is_some() && config.query_position {
            match query_position() {
                Ok(Some(pos)) => tty.state.set_pos(pos),
                Ok(None) => tracing::debug!("no usable cursor position reply"),
                Err(e) => tracing::warn!("Failed to query cursor position: {}", e),
            }
        }

        tracing::info!(size = %size, pos = %tty.position(), "tty initialized");
        Ok(tty)
    }
}

impl<'db, W: Write> Tty<'db, W> {
    /// Create a context over any writer with a fixed size
    ///
    /// The input mode is left alone. Both dimensions must be non-zero.
    pub fn new(caps: Capabilities<'db>, size: Coordinates, out: W) -> TtyResult<Self> {
        Ok(Self {
            caps,
            state: TermState::new(size)?,
            out,
            prev_eol: PrevEolMode::default(),
            error_color: DEFAULT_ERROR_COLOR,
            mode: None,
        })
    }

    /// Choose how `goto_prev_eol` moves
    pub fn with_prev_eol(mut self, prev_eol: PrevEolMode) -> Self {
        self.prev_eol = prev_eol;
        self
    }

    /// Choose the palette index for `print_error` labels
    pub fn with_error_color(mut self, color: u8) -> Self {
        self.error_color = color;
        self
    }

    /// Flush output and restore the input mode
    pub fn deinit(mut self) -> TtyResult<()> {
        self.out.flush().map_err(TtyError::Write)?;
        if let Some(mut guard) = self.mode.take() {
            guard.restore()?;
        }
        Ok(())
    }

    // --- state ---

    /// Tracked cursor position
    pub fn position(&self) -> Coordinates {
        self.state.pos()
    }

    /// Screen size
    pub fn size(&self) -> Coordinates {
        self.state.size()
    }

    /// Prompt anchor
    pub fn start(&self) -> Coordinates {
        self.state.start()
    }

    /// Anchor the current position (e.g. right after printing a prompt)
    pub fn set_start(&mut self) {
        self.state.set_start();
    }

    /// Tracked state
    pub fn state(&self) -> &TermState {
        &self.state
    }

    /// Resolved capabilities
    pub fn caps(&self) -> &Capabilities<'db> {
        &self.caps
    }

    /// Get the underlying writer
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Take the underlying writer back
    pub fn into_writer(mut self) -> W {
        if let Some(mut guard) = self.mode.take() {
            if let Err(e) = guard.restore() {
                tracing::warn!("Failed to restore terminal settings: {}", e);
            }
        }
        self.out
    }

    // --- raw writes ---

    /// Write bytes assumed to be printable, one column each
    ///
    /// Every byte counts as a column, so multi-byte UTF-8 text advances too
    /// far here; send text through `print`, `puts` or `put_char` instead.
    pub fn write(&mut self, bytes: &[u8]) -> TtyResult<()> {
        write_bytes(&mut self.state, &mut self.out, bytes)
    }

    /// Write bytes then a newline
    pub fn writeln(&mut self, bytes: &[u8]) -> TtyResult<()> {
        write_bytes(&mut self.state, &mut self.out, bytes)?;
        self.send(CapKind::Newline)
    }

    /// Write one character
    ///
    /// Advances by the character's display width; control characters do not
    /// move the tracked cursor.
    pub fn put_char(&mut self, c: char) -> TtyResult<()> {
        let mut buf = [0u8; 4];
        let encoded = c.encode_utf8(&mut buf);
        transfer(&mut self.out, encoded.as_bytes())?;
        self.state.advance_by_print(c.width().unwrap_or(0));
        Ok(())
    }

    /// Write text followed by a literal `\n` in one transfer
    pub fn puts(&mut self, text: &str) -> TtyResult<()> {
        let mut line = Vec::with_capacity(text.len() + 1);
        line.extend_from_slice(text.as_bytes());
        line.push(b'\n');
        transfer(&mut self.out, &line)?;
        self.state.advance_by_print(text.width());
        self.state.line_feed();
        Ok(())
    }

    // --- formatted prints ---

    /// Print formatted text, advancing by its display width
    ///
    /// Use with `format_args!`.
    pub fn print(&mut self, args: fmt::Arguments<'_>) -> TtyResult<()> {
        print_text(&mut self.state, &mut self.out, &args.to_string())
    }

    /// Print formatted text then a newline
    pub fn println(&mut self, args: fmt::Arguments<'_>) -> TtyResult<()> {
        self.print(args)?;
        self.send(CapKind::Newline)
    }

    // --- capabilities ---

    /// Write a capability and apply its cursor effect
    ///
    /// Unsupported (empty) capabilities are skipped, and so are parameterized
    /// kinds: their templates only make sense expanded, through `color_set`,
    /// `color_bg_set` or `move_to`.
    pub fn send(&mut self, kind: CapKind) -> TtyResult<()> {
        let cap = self.caps.get(kind);
        send_cap(&mut self.state, &mut self.out, cap)
    }

    /// Send a capability `n` times, stopping at the first failure
    pub fn send_n(&mut self, kind: CapKind, n: usize) -> TtyResult<()> {
        let cap = self.caps.get(kind);
        for _ in 0..n {
            send_cap(&mut self.state, &mut self.out, cap)?;
        }
        Ok(())
    }

    /// Save the cursor position (terminal and tracked)
    pub fn save_cursor(&mut self) -> TtyResult<()> {
        self.send(CapKind::CursorSave)
    }

    /// Restore the saved cursor position (terminal and tracked)
    pub fn restore_cursor(&mut self) -> TtyResult<()> {
        self.send(CapKind::CursorRestore)
    }

    /// Move to an absolute position with cursor addressing
    ///
    /// The target is clamped to the screen. A no-op when the terminal has no
    /// cursor addressing.
    pub fn move_to(&mut self, pos: Coordinates) -> TtyResult<()> {
        let cup = self.caps.get(CapKind::CursorAddress);
        if cup.is_empty() {
            return Ok(());
        }
        let target = Coordinates::new(
            pos.x.min(self.state.last_col()),
            pos.y.min(self.state.last_row()),
        );
        let seq = expand(cup.bytes(), &[param(target.y), param(target.x)])?;
        transfer(&mut self.out, &seq)?;
        self.state.set_pos(target);
        Ok(())
    }

    // --- colors ---

    /// Set the foreground color from the palette
    ///
    /// A no-op when the terminal has no colors.
    pub fn color_set(&mut self, color: i32) -> TtyResult<()> {
        set_color(&self.caps, &mut self.out, CapKind::ColorSet, color)
    }

    /// Set the background color from the palette
    pub fn color_bg_set(&mut self, color: i32) -> TtyResult<()> {
        set_color(&self.caps, &mut self.out, CapKind::ColorBgSet, color)
    }

    /// Reset colors and attributes
    pub fn color_reset(&mut self) -> TtyResult<()> {
        self.send(CapKind::ColorReset)
    }

    // --- advanced ---

    /// Strategy `goto_prev_eol` will use
    pub fn prev_eol_strategy(&self) -> PrevEolStrategy {
        let direct = self.caps.supports(CapKind::CursorAddress);
        match self.prev_eol {
            PrevEolMode::Relative => PrevEolStrategy::Relative,
            PrevEolMode::Advisory => match self.caps.prev_eol() {
                Some(PrevEolStrategy::Direct) if direct => PrevEolStrategy::Direct,
                _ => PrevEolStrategy::Relative,
            },
            PrevEolMode::Direct if direct => PrevEolStrategy::Direct,
            PrevEolMode::Direct => PrevEolStrategy::Relative,
        }
    }

    /// Move to the last column of the previous row
    ///
    /// Fails with `NoPreviousLine` on the first row; nothing is written then.
    pub fn goto_prev_eol(&mut self) -> TtyResult<()> {
        let pos = self.state.pos();
        if pos.y == 0 {
            return Err(TtyError::NoPreviousLine);
        }

        match self.prev_eol_strategy() {
            PrevEolStrategy::Direct => {
                let cup = self.caps.get(CapKind::CursorAddress);
                let seq = expand(cup.bytes(), &[param(pos.y - 1), param(self.state.last_col())])?;
                transfer(&mut self.out, &seq)?;
                self.state.goto_prev_eol()
            }
            PrevEolStrategy::Relative => {
                self.send(CapKind::CursorUp)?;
                let cols = self.state.cols_to_eol();
                self.send_n(CapKind::CursorRight, cols)
            }
        }
    }

    /// Step back onto the previous line when the cursor sits at column 0
    ///
    /// Moves to the previous line's end and clears to the end of the screen.
    /// Returns whether the cursor moved.
    pub fn y_adjust(&mut self) -> TtyResult<bool> {
        if self.state.pos().x != 0 {
            return Ok(false);
        }
        self.goto_prev_eol()?;
        self.send(CapKind::ClearToEos)?;
        Ok(true)
    }

    // --- other writers ---

    /// `write` to another writer
    pub fn write_to<S: Write + ?Sized>(&mut self, sink: &mut S, bytes: &[u8]) -> TtyResult<()> {
        write_bytes(&mut self.state, sink, bytes)
    }

    /// `writeln` to another writer
    pub fn writeln_to<S: Write + ?Sized>(&mut self, sink: &mut S, bytes: &[u8]) -> TtyResult<()> {
        write_bytes(&mut self.state, sink, bytes)?;
        self.send_to(sink, CapKind::Newline)
    }

    /// `print` to another writer
    pub fn print_to<S: Write + ?Sized>(
        &mut self,
        sink: &mut S,
        args: fmt::Arguments<'_>,
    ) -> TtyResult<()> {
        print_text(&mut self.state, sink, &args.to_string())
    }

    /// `println` to another writer
    pub fn println_to<S: Write + ?Sized>(
        &mut self,
        sink: &mut S,
        args: fmt::Arguments<'_>,
    ) -> TtyResult<()> {
        self.print_to(sink, args)?;
        self.send_to(sink, CapKind::Newline)
    }

    /// `send` to another writer
    pub fn send_to<S: Write + ?Sized>(&mut self, sink: &mut S, kind: CapKind) -> TtyResult<()> {
        send_cap(&mut self.state, sink, self.caps.get(kind))
    }

    /// `send_n` to another writer
    pub fn send_n_to<S: Write + ?Sized>(
        &mut self,
        sink: &mut S,
        kind: CapKind,
        n: usize,
    ) -> TtyResult<()> {
        let cap = self.caps.get(kind);
        for _ in 0..n {
            send_cap(&mut self.state, sink, cap)?;
        }
        Ok(())
    }

    /// `color_set` to another writer
    pub fn color_set_to<S: Write + ?Sized>(&mut self, sink: &mut S, color: i32) -> TtyResult<()> {
        set_color(&self.caps, sink, CapKind::ColorSet, color)
    }

    /// `color_bg_set` to another writer
    pub fn color_bg_set_to<S: Write + ?Sized>(
        &mut self,
        sink: &mut S,
        color: i32,
    ) -> TtyResult<()> {
        set_color(&self.caps, sink, CapKind::ColorBgSet, color)
    }

    /// `write` to a raw descriptor
    pub fn write_fd(&mut self, fd: BorrowedFd<'_>, bytes: &[u8]) -> TtyResult<()> {
        self.write_to(&mut FdWriter::new(fd), bytes)
    }

    /// `writeln` to a raw descriptor
    pub fn writeln_fd(&mut self, fd: BorrowedFd<'_>, bytes: &[u8]) -> TtyResult<()> {
        self.writeln_to(&mut FdWriter::new(fd), bytes)
    }

    /// `print` to a raw descriptor
    pub fn print_fd(&mut self, fd: BorrowedFd<'_>, args: fmt::Arguments<'_>) -> TtyResult<()> {
        self.print_to(&mut FdWriter::new(fd), args)
    }

    /// `println` to a raw descriptor
    pub fn println_fd(&mut self, fd: BorrowedFd<'_>, args: fmt::Arguments<'_>) -> TtyResult<()> {
        self.println_to(&mut FdWriter::new(fd), args)
    }

    /// `send` to a raw descriptor
    pub fn send_fd(&mut self, fd: BorrowedFd<'_>, kind: CapKind) -> TtyResult<()> {
        self.send_to(&mut FdWriter::new(fd), kind)
    }

    /// `send_n` to a raw descriptor
    pub fn send_n_fd(&mut self, fd: BorrowedFd<'_>, kind: CapKind, n: usize) -> TtyResult<()> {
        self.send_n_to(&mut FdWriter::new(fd), kind, n)
    }

    /// Print `msg: err` to stderr with the label in the error color
    pub fn print_error(&mut self, msg: &str, err: &dyn fmt::Display) -> TtyResult<()> {
        let mut stderr = io::stderr();
        self.print_error_to(&mut stderr, msg, err)
    }

    /// `print_error` to another writer
    pub fn print_error_to<S: Write + ?Sized>(
        &mut self,
        sink: &mut S,
        msg: &str,
        err: &dyn fmt::Display,
    ) -> TtyResult<()> {
        self.color_set_to(sink, i32::from(self.error_color))?;
        self.print_to(sink, format_args!("{}: ", msg))?;
        self.send_to(sink, CapKind::ColorReset)?;
        self.print_to(sink, format_args!("{}", err))?;
        self.send_to(sink, CapKind::Newline)
    }
}

impl<W: Write> fmt::Debug for Tty<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tty")
            .field("state", &self.state)
            .field("prev_eol", &self.prev_eol)
            .field("raw_mode", &self.mode.is_some())
            .finish_non_exhaustive()
    }
}

/// One `write` call; anything short of the full buffer is an error
fn transfer<S: Write + ?Sized>(sink: &mut S, bytes: &[u8]) -> TtyResult<()> {
    if bytes.is_empty() {
        return Ok(());
    }
    let written = sink.write(bytes).map_err(TtyError::Write)?;
    if written != bytes.len() {
        return Err(TtyError::ShortWrite {
            written,
            expected: bytes.len(),
        });
    }
    sink.flush().map_err(TtyError::Write)
}

fn write_bytes<S: Write + ?Sized>(state: &mut TermState, sink: &mut S, bytes: &[u8]) -> TtyResult<()> {
    transfer(sink, bytes)?;
    state.advance_by_print(bytes.len());
    Ok(())
}

fn print_text<S: Write + ?Sized>(state: &mut TermState, sink: &mut S, text: &str) -> TtyResult<()> {
    transfer(sink, text.as_bytes())?;
    state.advance_by_print(text.width());
    Ok(())
}

fn send_cap<S: Write + ?Sized>(state: &mut TermState, sink: &mut S, cap: Capability<'_>) -> TtyResult<()> {
    if cap.is_empty() || cap.kind().is_parameterized() {
        return Ok(());
    }
    transfer(sink, cap.bytes())?;
    state.advance_by_capability(cap.kind());
    Ok(())
}

fn set_color<S: Write + ?Sized>(
    caps: &Capabilities<'_>,
    sink: &mut S,
    kind: CapKind,
    color: i32,
) -> TtyResult<()> {
    let cap = caps.get(kind);
    if caps.color_max() <= 0 || cap.is_empty() {
        return Ok(());
    }
    let seq = expand(cap.bytes(), &[color])?;
    transfer(sink, &seq)
}

fn param(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caps::CapBytes;
    use crate::terminfo::{Database, NumCap, StringCap};

    struct EmptyTermInfo;

    impl TermInfo for EmptyTermInfo {
        fn name(&self) -> &str {
            "empty"
        }

        fn get_str(&self, _cap: StringCap) -> Option<CapBytes<'_>> {
            None
        }

        fn get_num(&self, _cap: NumCap) -> Option<i32> {
            None
        }
    }

    /// Accepts at most `limit` bytes per write
    struct ShortWriter {
        limit: usize,
        data: Vec<u8>,
    }

    impl Write for ShortWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let n = buf.len().min(self.limit);
            self.data.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn xterm_tty(db: &Database) -> Tty<'_, Vec<u8>> {
        let caps = Capabilities::init(db, true);
        Tty::new(caps, Coordinates::new(171, 46), Vec::new()).unwrap()
    }

    #[test]
    fn test_write_advances_and_emits() {
        let db = Database::builtin(Some("xterm"));
        let mut tty = xterm_tty(&db);
        tty.write(b"hello").unwrap();
        assert_eq!(tty.position(), Coordinates::new(5, 0));
        assert_eq!(tty.writer(), b"hello");
    }

    #[test]
    fn test_print_counts_display_width() {
        let db = Database::builtin(Some("xterm"));
        let mut tty = xterm_tty(&db);
        tty.print(format_args!("{}", "日本")).unwrap();
        assert_eq!(tty.position(), Coordinates::new(4, 0));
        tty.write("é".as_bytes()).unwrap();
        assert_eq!(tty.position(), Coordinates::new(6, 0));
    }

    #[test]
    fn test_short_write_keeps_position() {
        let ti = EmptyTermInfo;
        let caps = Capabilities::init(&ti, true);
        let sink = ShortWriter {
            limit: 2,
            data: Vec::new(),
        };
        let mut tty = Tty::new(caps, Coordinates::new(80, 24), sink).unwrap();

        assert!(matches!(
            tty.write(b"hello"),
            Err(TtyError::ShortWrite {
                written: 2,
                expected: 5
            })
        ));
        assert_eq!(tty.position(), Coordinates::origin());

        assert!(tty.send(CapKind::CursorDown).is_err());
        assert_eq!(tty.position(), Coordinates::origin());

        tty.write(b"hi").unwrap();
        assert_eq!(tty.position(), Coordinates::new(2, 0));
    }

    #[test]
    fn test_colors_expand_or_skip() {
        let db = Database::builtin(Some("xterm-256color"));
        let mut tty = xterm_tty(&db);
        tty.color_set(1).unwrap();
        tty.color_bg_set(10).unwrap();
        assert_eq!(tty.writer(), b"\x1b[31m\x1b[102m");
        assert_eq!(tty.position(), Coordinates::origin());

        let ti = EmptyTermInfo;
        let caps = Capabilities::init(&ti, true);
        let mut plain = Tty::new(caps, Coordinates::new(80, 24), Vec::new()).unwrap();
        plain.color_set(1).unwrap();
        plain.color_bg_set(1).unwrap();
        assert!(plain.writer().is_empty());
    }

    #[test]
    fn test_goto_prev_eol_relative_bytes() {
        let ti = EmptyTermInfo;
        let caps = Capabilities::init(&ti, true);
        let mut tty = Tty::new(caps, Coordinates::new(4, 3), Vec::new()).unwrap();
        tty.send(CapKind::Newline).unwrap();
        tty.write(b"a").unwrap();
        tty.goto_prev_eol().unwrap();
        assert_eq!(tty.position(), Coordinates::new(3, 0));
        assert_eq!(
            tty.into_writer(),
            b"\na\x1b[1A\x1b[1C\x1b[1C".to_vec()
        );
    }

    #[test]
    fn test_goto_prev_eol_direct_bytes() {
        let db = Database::builtin(Some("xterm"));
        let caps = Capabilities::init(&db, true);
        let mut tty = Tty::new(caps, Coordinates::new(80, 24), Vec::new())
            .unwrap()
            .with_prev_eol(PrevEolMode::Advisory);
        tty.move_to(Coordinates::new(10, 5)).unwrap();
        assert_eq!(tty.position(), Coordinates::new(10, 5));
        tty.goto_prev_eol().unwrap();
        assert_eq!(tty.position(), Coordinates::new(79, 4));
        assert_eq!(tty.into_writer(), b"\x1b[6;11H\x1b[5;80H".to_vec());
    }

    #[test]
    fn test_goto_prev_eol_direct_without_cup_is_relative() {
        let ti = EmptyTermInfo;
        let caps = Capabilities::init(&ti, true);
        let tty = Tty::new(caps, Coordinates::new(80, 24), Vec::new())
            .unwrap()
            .with_prev_eol(PrevEolMode::Direct);
        assert_eq!(tty.prev_eol_strategy(), PrevEolStrategy::Relative);
    }

    #[test]
    fn test_goto_prev_eol_first_row_writes_nothing() {
        let db = Database::builtin(Some("xterm"));
        let mut tty = xterm_tty(&db);
        assert!(matches!(tty.goto_prev_eol(), Err(TtyError::NoPreviousLine)));
        assert!(tty.writer().is_empty());
    }

    #[test]
    fn test_y_adjust() {
        let db = Database::builtin(Some("xterm"));
        let mut tty = xterm_tty(&db);
        tty.write(b"abc").unwrap();
        assert!(!tty.y_adjust().unwrap());

        tty.send(CapKind::Newline).unwrap();
        assert!(tty.y_adjust().unwrap());
        assert_eq!(tty.position(), Coordinates::new(170, 0));
    }

    #[test]
    fn test_puts_and_put_char() {
        let db = Database::builtin(Some("xterm"));
        let mut tty = xterm_tty(&db);
        tty.put_char('x').unwrap();
        assert_eq!(tty.position(), Coordinates::new(1, 0));
        tty.puts("hello").unwrap();
        assert_eq!(tty.position(), Coordinates::new(0, 1));
        assert_eq!(tty.writer(), b"xhello\n");
    }

    #[test]
    fn test_unsupported_send_is_noop() {
        let ti = EmptyTermInfo;
        let caps = Capabilities::init(&ti, true);
        let mut tty = Tty::new(caps, Coordinates::new(80, 24), Vec::new()).unwrap();
        tty.send(CapKind::ColorSet).unwrap();
        tty.move_to(Coordinates::new(5, 5)).unwrap();
        assert!(tty.writer().is_empty());
        assert_eq!(tty.position(), Coordinates::origin());
    }

    #[test]
    fn test_parameterized_send_writes_nothing() {
        let db = Database::builtin(Some("xterm-256color"));
        let mut tty = xterm_tty(&db);
        tty.write(b"ab").unwrap();
        tty.send(CapKind::CursorAddress).unwrap();
        tty.send(CapKind::ColorSet).unwrap();
        tty.send_n(CapKind::ColorBgSet, 3).unwrap();

        let mut sink = Vec::new();
        tty.send_to(&mut sink, CapKind::CursorAddress).unwrap();
        tty.send_n_to(&mut sink, CapKind::ColorSet, 2).unwrap();

        assert!(sink.is_empty());
        assert_eq!(tty.writer(), b"ab");
        assert_eq!(tty.position(), Coordinates::new(2, 0));
    }

    #[test]
    fn test_print_error_to_sink() {
        let db = Database::builtin(Some("xterm-256color"));
        let mut tty = xterm_tty(&db);
        let mut sink = Vec::new();
        let err = io::Error::new(io::ErrorKind::Other, "boom");
        tty.print_error_to(&mut sink, "open", &err).unwrap();
        assert_eq!(
            sink,
            b"\x1b[38;5;196mopen: \x1b(B\x1b[mboom\x1bE".to_vec()
        );
        assert_eq!(tty.position(), Coordinates::new(0, 1));
        assert!(tty.writer().is_empty());
    }
}

//! Window size query

use std::io;
use std::os::fd::{AsFd, AsRawFd, BorrowedFd};

use nix::libc;

use crate::core::Coordinates;
use crate::error::{TtyError, TtyResult};

/// Get the size of the terminal attached to stdout
pub fn window_size() -> TtyResult<Coordinates> {
    let stdout = io::stdout();
    window_size_of(stdout.as_fd())
}

/// Get the size of the terminal behind a descriptor
///
/// Columns go in `x` and rows in `y`. A terminal reporting zero on either
/// axis is an error.
pub fn window_size_of(fd: BorrowedFd<'_>) -> TtyResult<Coordinates> {
    let mut winsize = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };

    // SAFETY: TIOCGWINSZ is a valid ioctl for getting window size
    let result = unsafe { libc::ioctl(fd.as_raw_fd(), libc::TIOCGWINSZ, &mut winsize) };
    if result < 0 {
        return Err(TtyError::WindowSize(nix::errno::Errno::last()));
    }

    let cols = usize::from(winsize.ws_col);
    let rows = usize::from(winsize.ws_row);
    if cols == 0 || rows == 0 {
        return Err(TtyError::InvalidSize { cols, rows });
    }
    Ok(Coordinates::new(cols, rows))
}

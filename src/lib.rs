//! Mochi TTY Library
//!
//! Terminal output that always knows where the cursor is. Capabilities are
//! resolved from terminfo (or a builtin table for the terminal family, with
//! literal fallbacks), and every write updates a tracked cursor position.
//!
//! - `core`: Coordinates and the position state machine
//! - `caps`: Capability values, fallbacks, and the registry
//! - `terminfo`: Terminfo lookup, family detection, parameter expansion
//! - `tty`: The output context (`Tty`), input modes, window size
//! - `app`: Configuration and logging setup
//!
//! ```no_run
//! use mochi_tty::{CapKind, Config, Tty};
//!
//! let config = Config::load_or_default();
//! let db = config.database();
//! let mut tty = Tty::init(&db, &config)?;
//! tty.send(CapKind::ClearScreen)?;
//! tty.send(CapKind::CursorHome)?;
//! tty.println(format_args!("at {}", tty.position()))?;
//! tty.deinit()?;
//! # Ok::<(), mochi_tty::TtyError>(())
//! ```

pub mod app;
pub mod caps;
pub mod core;
pub mod error;
pub mod terminfo;
pub mod tty;

pub use app::Config;
pub use caps::{CapKind, Capabilities, Capability};
pub use crate::core::{Coordinates, TermState};
pub use error::{TtyError, TtyResult};
pub use terminfo::{Database, TermInfo};
pub use tty::{InputMode, Tty};

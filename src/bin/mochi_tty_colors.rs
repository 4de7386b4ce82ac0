//! Mochi TTY Colors
//!
//! Fills the screen row by row with background colors from the 256-color
//! palette, then waits for a key.

use std::io::{self, Read};
use std::process::ExitCode;

use mochi_tty::app::init_logging;
use mochi_tty::{CapKind, Config, Tty, TtyResult};

/// First color of the 6x6x6 cube
const FIRST_COLOR: i32 = 16;

fn main() -> ExitCode {
    init_logging();

    let config = Config::load_or_default();
    let db = config.database();
    let mut tty = match Tty::init(&db, &config) {
        Ok(tty) => tty,
        Err(e) => {
            eprintln!("mochi-tty-colors: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = run(&mut tty);
    let deinit = tty.deinit();

    match result.and(deinit) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mochi-tty-colors: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(tty: &mut Tty<'_>) -> TtyResult<()> {
    if tty.caps().color_max() <= 0 {
        tty.println(format_args!("terminal reports no colors"))?;
        return Ok(());
    }

    tty.send(CapKind::ClearScreen)?;
    tty.send(CapKind::CursorHome)?;

    let size = tty.size();
    let max = tty.caps().color_max();
    // the last cell would scroll the screen, leave it blank
    for y in 0..size.y {
        let color = (FIRST_COLOR + y as i32) % max;
        tty.color_bg_set(color)?;
        let cols = if y + 1 == size.y { size.x - 1 } else { size.x };
        tty.write(&vec![b' '; cols])?;
    }
    tty.color_reset()?;

    let mut byte = [0u8; 1];
    io::stdin().read_exact(&mut byte)?;
    tty.send(CapKind::CursorHome)?;
    tty.send(CapKind::ClearScreen)
}

//! Mochi TTY REPL
//!
//! A tiny prompt: typed characters are echoed with tracked positions,
//! backspace erases across line boundaries, Enter starts a new prompt and
//! `q` quits.

use std::io::{self, Read};
use std::process::ExitCode;

use mochi_tty::app::init_logging;
use mochi_tty::{CapKind, Config, Tty, TtyResult};

const PROMPT: &[u8] = b"mochi > ";
const DEL: u8 = 127;

fn main() -> ExitCode {
    init_logging();

    let config = Config::load_or_default();
    let db = config.database();
    let mut tty = match Tty::init(&db, &config) {
        Ok(tty) => tty,
        Err(e) => {
            eprintln!("mochi-tty-repl: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = run(&mut tty);
    let deinit = tty.deinit();

    match result.and(deinit) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mochi-tty-repl: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn prompt(tty: &mut Tty<'_>) -> TtyResult<()> {
    tty.write(PROMPT)?;
    tty.set_start();
    Ok(())
}

fn run(tty: &mut Tty<'_>) -> TtyResult<()> {
    tty.send(CapKind::ClearScreen)?;
    tty.send(CapKind::CursorHome)?;
    prompt(tty)?;

    let mut stdin = io::stdin().lock();
    let mut byte = [0u8; 1];
    while stdin.read(&mut byte)? > 0 {
        match byte[0] {
            DEL | 0x08 => backspace(tty)?,
            b'q' => break,
            b'\r' | b'\n' => {
                tty.send(CapKind::Newline)?;
                prompt(tty)?;
            }
            b if b.is_ascii_graphic() || b == b' ' => tty.put_char(char::from(b))?,
            _ => {}
        }
    }

    tty.send(CapKind::Newline)
}

fn backspace(tty: &mut Tty<'_>) -> TtyResult<()> {
    if tty.position() == tty.start() {
        return Ok(());
    }
    // clearing to the end of the screen already erased the cell under the cursor
    if tty.y_adjust()? {
        return Ok(());
    }
    tty.send(CapKind::Backspace)
}

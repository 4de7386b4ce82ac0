//! Mochi TTY Demo
//!
//! Walks through the output operations and prints the tracked cursor
//! position along the way. Press any key to exit.

use std::io::{self, Read};
use std::process::ExitCode;

use mochi_tty::app::{init_logging, PrevEolMode};
use mochi_tty::terminfo::TermInfo;
use mochi_tty::{CapKind, Config, InputMode, Tty, TtyResult};

fn main() -> ExitCode {
    init_logging();

    let mut config = Config::load_or_default();

    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-t" | "--term" => {
                i += 1;
                if i < args.len() {
                    config.term = Some(args[i].clone());
                }
            },
            "-c" | "--canonical" => {
                config.input_mode = InputMode::Canonical;
            },
            "-d" | "--direct" => {
                config.prev_eol = PrevEolMode::Direct;
            },
            "-h" | "--help" => {
                print_help();
                return ExitCode::SUCCESS;
            },
            other => {
                eprintln!("Unknown argument: {}", other);
                print_help();
                return ExitCode::FAILURE;
            },
        }
        i += 1;
    }

    let db = config.database();
    let mut tty = match Tty::init(&db, &config) {
        Ok(tty) => tty,
        Err(e) => {
            eprintln!("mochi-tty-demo: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = run(&mut tty, db.name(), config.input_mode);
    if let Err(e) = &result {
        // best effort, the terminal may be what failed
        let _ = tty.print_error("mochi-tty-demo", e);
    }
    let deinit = tty.deinit();

    match result.and(deinit) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn print_help() {
    eprintln!(
        r#"Mochi TTY Demo

USAGE:
    mochi-tty-demo [OPTIONS]

OPTIONS:
    -t, --term <NAME>   Terminal type to use instead of $TERM
    -c, --canonical     Leave stdin in canonical mode
    -d, --direct        Use cursor addressing for previous-line moves
    -h, --help          Show this help

Set RUST_LOG=debug to see how capabilities were resolved."#
    );
}

fn run(tty: &mut Tty<'_>, terminfo: &str, mode: InputMode) -> TtyResult<()> {
    tty.send(CapKind::ClearScreen)?;
    tty.send(CapKind::CursorHome)?;
    tty.puts("Cleared the screen")?;
    tty.println(format_args!(
        "terminfo {}, {} colors, size {}",
        terminfo,
        tty.caps().color_max(),
        tty.size()
    ))?;

    tty.print(format_args!("hello from the demo"))?;
    tty.send_n(CapKind::Backspace, 4)?;
    tty.println(format_args!(" <- four backspaces, now at {}", tty.position()))?;

    tty.send_n(CapKind::CursorDown, 2)?;
    tty.send(CapKind::LineGotoBol)?;
    tty.puts("two rows further down")?;

    tty.print(format_args!("hello world"))?;
    tty.send_n(CapKind::CursorLeft, 6)?;
    tty.send(CapKind::LineClearToEol)?;
    tty.send(CapKind::Newline)?;

    tty.print(format_args!("hello world"))?;
    tty.send_n(CapKind::CursorLeft, 6)?;
    tty.send(CapKind::LineClearToBol)?;
    tty.send(CapKind::Newline)?;

    tty.color_set(1)?;
    tty.color_bg_set(10)?;
    tty.print(format_args!("colored"))?;
    tty.color_reset()?;
    tty.send(CapKind::Newline)?;

    tty.save_cursor()?;
    tty.send(CapKind::CursorHome)?;
    tty.send_n(CapKind::CursorRight, 40)?;
    tty.print(format_args!("[written from home]"))?;
    tty.restore_cursor()?;
    tty.println(format_args!("restored to {}", tty.position()))?;

    tty.println(format_args!("previous-line strategy: {:?}", tty.prev_eol_strategy()))?;
    tty.goto_prev_eol()?;
    tty.send(CapKind::CursorLeft)?;
    tty.write(b"<")?;
    tty.send(CapKind::LineGotoBol)?;
    tty.send(CapKind::Newline)?;

    tty.print(format_args!("position before the key press: {}", tty.position()))?;
    if mode == InputMode::NonCanonical {
        let mut byte = [0u8; 1];
        io::stdin().read_exact(&mut byte)?;
    }
    tty.send(CapKind::Newline)
}

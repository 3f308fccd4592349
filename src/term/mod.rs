/*!
## Rust Terminal Module

The console side of the calculator. Reads lines, hands them to the
runtime, prints errors and the stack.

*/

extern crate env_logger;
extern crate log;
use crate::mach::{Event, Runtime};
use log::{debug, warn};
use std::borrow::Cow;
use std::io::{BufRead, IsTerminal, Write};

mod editor;

pub const PROMPT: &str = "> ";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    /// Prompt before each line and print the stack after it.
    Interactive,
    /// No prompts; print the stack once at end of input.
    Batch,
}

impl Mode {
    /// No arguments is interactive, a lone `-b` is batch.
    /// Anything else is not a mode at all.
    pub fn from_args<I>(args: I) -> Option<Mode>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        match args.as_slice() {
            [] => Some(Mode::Interactive),
            [flag] if flag == "-b" => Some(Mode::Batch),
            _ => None,
        }
    }
}

pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
    let mode = match Mode::from_args(std::env::args().skip(1)) {
        Some(mode) => mode,
        None => {
            debug!("unrecognized arguments, exiting");
            return;
        }
    };
    debug!("starting in {:?} mode", mode);
    let result = if mode == Mode::Interactive && std::io::stdin().is_terminal() {
        editor::main_loop()
    } else {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let mut output = stdout.lock();
        run(mode, stdin.lock(), &mut output)
    };
    if let Err(error) = result {
        warn!("console failed: {}", error);
        eprintln!("{}", error);
    }
}

/// Runs a whole session over plain streams.
pub fn run<R, W>(mode: Mode, mut input: R, output: &mut W) -> std::io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut runtime = Runtime::new();
    let mut buf: Vec<u8> = Vec::new();

    'session: loop {
        if mode == Mode::Interactive {
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(strip_line_end(&buf));
        if let Cow::Owned(_) = line {
            debug!("line is not valid UTF-8");
        }
        runtime.enter(&line);
        loop {
            match runtime.execute() {
                Event::Stopped => break,
                Event::Error(error) => writeln!(output, "{}", error)?,
                Event::Quit => break 'session,
            }
        }
        if mode == Mode::Interactive {
            print_stack(&runtime, output)?;
        }
    }
    match mode {
        Mode::Interactive if runtime.is_quit() => {}
        Mode::Interactive => writeln!(output)?,
        Mode::Batch => print_stack(&runtime, output)?,
    }
    output.flush()
}

fn strip_line_end(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}

fn print_stack<W: Write>(runtime: &Runtime, output: &mut W) -> std::io::Result<()> {
    for val in runtime.render() {
        writeln!(output, "{}", val)?;
    }
    Ok(())
}

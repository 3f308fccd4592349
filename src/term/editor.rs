extern crate ansi_term;
extern crate linefeed;
use super::PROMPT;
use crate::lang::Line;
use crate::mach::{Event, Runtime};
use ansi_term::Style;
use linefeed::{Interface, ReadResult, Signal};

/// Interactive session on a terminal, with line editing and history.
pub fn main_loop() -> std::io::Result<()> {
    let interface = Interface::new("rpn")?;
    interface.set_prompt(PROMPT)?;
    interface.set_report_signal(Signal::Interrupt, true);
    let mut runtime = Runtime::new();

    loop {
        let string = match interface.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(Signal::Interrupt) => {
                interface.set_buffer("")?;
                interface.lock_reader().cancel_read_line()?;
                continue;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        runtime.enter(&string);
        if !Line::new(&string).is_empty() {
            interface.add_history_unique(string);
        }
        loop {
            match runtime.execute() {
                Event::Stopped => break,
                Event::Error(error) => {
                    interface.write_fmt(format_args!(
                        "{}\n",
                        Style::new().bold().paint(error.to_string())
                    ))?;
                }
                Event::Quit => return Ok(()),
            }
        }
        for val in runtime.render() {
            interface.write_fmt(format_args!("{}\n", val))?;
        }
    }
    interface.write_fmt(format_args!("\n"))?;
    Ok(())
}

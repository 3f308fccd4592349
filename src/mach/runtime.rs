use super::{Operation, Stack};
use crate::lang::token::{Command, Operator};
use crate::lang::{Error, Line};
use log::{debug, trace};
use std::collections::VecDeque;

type Result<T> = std::result::Result<T, Error>;

/// ## Calculator runtime
///
/// Owns the operand stack for the whole session. Lines are entered
/// with `enter` and anything the console must report is collected
/// as `Event`s, drained one at a time with `execute`.

#[derive(Debug, Default)]
pub struct Runtime {
    stack: Stack<f64>,
    events: VecDeque<Event>,
    quit: bool,
}

#[derive(Debug, PartialEq)]
pub enum Event {
    Error(Error),
    Stopped,
    Quit,
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    /// Run every token of the line, left to right.
    /// A token that fails to classify abandons the rest of the line;
    /// whatever ran before it stays applied.
    pub fn enter(&mut self, s: &str) {
        if self.quit {
            return;
        }
        let line = Line::new(s);
        trace!("entered {:?}", line.to_string());
        for command in line.commands() {
            let command = match command {
                Ok(command) => command,
                Err(error) => {
                    debug!("{:?} in {:?}", error, s);
                    self.events.push_back(Event::Error(error));
                    break;
                }
            };
            trace!("command {}", command);
            if let Err(error) = self.exec(command) {
                debug!("{:?} at {}", error, command);
                self.events.push_back(Event::Error(error));
            }
            if self.quit {
                break;
            }
        }
    }

    /// Next event for the console. `Stopped` means ready for another line.
    pub fn execute(&mut self) -> Event {
        match self.events.pop_front() {
            Some(event) => event,
            None if self.quit => Event::Quit,
            None => Event::Stopped,
        }
    }

    pub fn exec(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Number(val) => self.stack.push(val),
            Command::Operator(op, times) => self.apply(op, times)?,
            Command::Drop => {
                self.stack.pop();
            }
            Command::Clear => self.stack.clear(),
            Command::Quit => self.quit = true,
        }
        Ok(())
    }

    /// Applies `op` to the top two values `times` times.
    /// Zero means until one value remains, counted once up front.
    /// Stops quietly when the stack runs short. Division by zero
    /// stops too, leaving both operands consumed.
    pub fn apply(&mut self, op: Operator, times: u32) -> Result<()> {
        let times = match times {
            0 => self.stack.len().saturating_sub(1),
            n => n as usize,
        };
        for _ in 0..times {
            let (lhs, rhs) = match self.stack.pop_2() {
                Some(pair) => pair,
                None => {
                    trace!("stack underflow applying {}", op);
                    break;
                }
            };
            let val = Operation::binary(op, lhs, rhs)?;
            self.stack.push(val);
        }
        Ok(())
    }

    pub fn is_quit(&self) -> bool {
        self.quit
    }

    pub fn stack(&self) -> &Stack<f64> {
        &self.stack
    }

    pub fn render(&self) -> Vec<String> {
        self.stack.render()
    }
}

/*!
## Rust Machine Module

This Rust module holds the operand stack and executes calculator commands.

*/

mod operation;
mod runtime;
mod stack;

pub use operation::Operation;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;

#[cfg(test)]
mod tests;

/*!
# Rust Language Module

This Rust module splits console lines into tokens and classifies
each token as a number, an operator or a control word.

*/

pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod lex;
mod line;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::classify;
pub use lex::lex;
pub use line::Line;

pub mod token;

//! # RPN
//!
//! A Reverse Polish Notation calculator for the console.
//!
//! Numbers are pushed on a stack and operators consume the top two
//! values. Run the executable and type a line of tokens.
//! ```text
//! > 1 2 3 4
//! 1.000000
//! 2.000000
//! 3.000000
//! 4.000000
//! > 3+
//! 10.000000
//! ```
//!
//! * `+ - * /` apply once. `y x -` is `y - x`.
//! * `3+` applies three times. `0+` applies until one value is left.
//! * `-5` and `+2.5` are signed numbers, not operators.
//! * `drop` removes the top value, `clear` empties the stack, `quit` exits.
//!
//! Start with `-b` for batch mode: no prompt, and the stack is
//! printed once when input ends.
//! ```text
//! $ echo "2 3 * 4 +" | rpn -b
//! 10.000000
//! ```

pub mod lang;
pub mod mach;
pub mod term;

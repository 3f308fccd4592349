use super::token::*;
use super::{Column, Error};

type Result<T> = std::result::Result<T, Error>;

/// Split a line into its whitespace delimited tokens.
/// Each token carries its byte range within the line.
pub fn lex(s: &str) -> Vec<(Column, &str)> {
    let mut tokens = vec![];
    let mut start: Option<usize> = None;
    for (index, ch) in s.char_indices() {
        if is_rpn_whitespace(ch) {
            if let Some(begin) = start.take() {
                tokens.push((begin..index, &s[begin..index]));
            }
        } else if start.is_none() {
            start = Some(index);
        }
    }
    if let Some(begin) = start {
        tokens.push((begin..s.len(), &s[begin..]));
    }
    tokens
}

/// Turn a single token into a command.
///
/// The checks run in a fixed order and the first match wins:
/// control words, then a leading `+`/`-` (an operator or a signed number),
/// then a leading `*`/`/`, then plain numbers and the `N<op>` repeat shorthand.
pub fn classify(s: &str) -> Result<Command> {
    let first = match s.chars().next() {
        Some(ch) => ch,
        None => return Err(error!(SyntaxError; "EMPTY TOKEN")),
    };
    if let Some(word) = Word::from_string(s) {
        return Ok(word.into());
    }
    if let Some(op) = Operator::from_char(first) {
        if s.len() == 1 {
            return Ok(Command::Operator(op, 1));
        }
        return match op {
            Operator::Add | Operator::Sub if is_decimal(&s[1..]) => number(s),
            Operator::Add | Operator::Sub => Err(error!(SyntaxError; "INVALID SIGNED NUMBER")),
            Operator::Mul | Operator::Div => {
                Err(error!(SyntaxError; "UNEXPECTED CHARACTERS AFTER OPERATOR"))
            }
        };
    }
    if is_decimal(s) {
        return number(s);
    }
    repeated(s)
}

fn is_rpn_whitespace(c: char) -> bool {
    c.is_whitespace()
}

fn is_rpn_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Digits with at most one decimal point and at least one digit.
fn is_decimal(s: &str) -> bool {
    let mut digits = 0;
    let mut decimal = false;
    for ch in s.chars() {
        if ch == '.' && !decimal {
            decimal = true;
            continue;
        }
        if !is_rpn_digit(ch) {
            return false;
        }
        digits += 1;
    }
    digits > 0
}

fn is_integer(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_rpn_digit)
}

fn number(s: &str) -> Result<Command> {
    match s.parse::<f64>() {
        Ok(n) => Ok(Command::Number(n)),
        Err(_) => Err(error!(SyntaxError; "INVALID NUMBER")),
    }
}

fn repeated(s: &str) -> Result<Command> {
    let last = match s.chars().last() {
        Some(ch) => ch,
        None => return Err(error!(SyntaxError; "EMPTY TOKEN")),
    };
    let op = match Operator::from_char(last) {
        Some(op) => op,
        None => return Err(error!(SyntaxError; "UNRECOGNIZED TOKEN")),
    };
    let prefix = &s[..s.len() - 1];
    if !is_integer(prefix) {
        return Err(error!(SyntaxError; "INVALID REPEAT COUNT"));
    }
    match prefix.parse::<u32>() {
        Ok(times) => Ok(Command::Operator(op, times)),
        Err(_) => Err(error!(SyntaxError; "REPEAT COUNT TOO LARGE")),
    }
}

#[cfg(test)]
#[path = "tests/lex_test.rs"]
mod tests;

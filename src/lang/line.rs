use super::lex::*;
use super::token::*;
use super::{Column, Error};

/// One line of console input, split into tokens.
#[derive(Debug, PartialEq)]
pub struct Line {
    tokens: Vec<(Column, String)>,
}

impl Line {
    pub fn new(s: &str) -> Line {
        Line {
            tokens: lex(s)
                .into_iter()
                .map(|(column, token)| (column, token.to_string()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Classify each token in order. Errors carry the column of their token.
    pub fn commands(&self) -> impl Iterator<Item = Result<Command, Error>> + '_ {
        self.tokens
            .iter()
            .map(|(column, token)| classify(token).map_err(|error| error.in_column(column)))
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s: Vec<&str> = self.tokens.iter().map(|(_, s)| s.as_str()).collect();
        write!(f, "{}", s.join(" "))
    }
}

#[cfg(test)]
#[path = "tests/line_test.rs"]
mod tests;

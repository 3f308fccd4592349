use std::collections::HashMap;

thread_local!(
    static STRING_TO_WORD: HashMap<&'static str, Word> =
        Word::ALL.iter().map(|w| (w.as_str(), *w)).collect();
);

/// A fully classified token, ready for the machine.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Command {
    Number(f64),
    Operator(Operator, u32),
    Drop,
    Clear,
    Quit,
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Command::*;
        match self {
            Number(n) => write!(f, "{}", n),
            Operator(op, 1) => write!(f, "{}", op),
            Operator(op, times) => write!(f, "{}{}", times, op),
            Drop => write!(f, "{}", Word::Drop),
            Clear => write!(f, "{}", Word::Clear),
            Quit => write!(f, "{}", Word::Quit),
        }
    }
}

impl From<Word> for Command {
    fn from(word: Word) -> Command {
        match word {
            Word::Drop => Command::Drop,
            Word::Clear => Command::Clear,
            Word::Quit => Command::Quit,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Word {
    Drop,
    Clear,
    Quit,
}

impl Word {
    pub const ALL: [Word; 3] = [Word::Quit, Word::Drop, Word::Clear];

    pub fn from_string(s: &str) -> Option<Word> {
        STRING_TO_WORD.with(|stw| stw.get(s).copied())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Word::Drop => "drop",
            Word::Clear => "clear",
            Word::Quit => "quit",
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Operator> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Add => write!(f, "+"),
            Sub => write!(f, "-"),
            Mul => write!(f, "*"),
            Div => write!(f, "/"),
        }
    }
}

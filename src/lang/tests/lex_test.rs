use super::super::ErrorCode;
use super::*;

fn code(s: &str) -> Option<ErrorCode> {
    classify(s).err().map(|e| e.code())
}

#[test]
fn test_words() {
    assert_eq!(classify("drop"), Ok(Command::Drop));
    assert_eq!(classify("clear"), Ok(Command::Clear));
    assert_eq!(classify("quit"), Ok(Command::Quit));
    assert_eq!(code("DROP"), Some(ErrorCode::SyntaxError));
    assert_eq!(code("dropx"), Some(ErrorCode::SyntaxError));
}

#[test]
fn test_single_operators() {
    assert_eq!(classify("+"), Ok(Command::Operator(Operator::Add, 1)));
    assert_eq!(classify("-"), Ok(Command::Operator(Operator::Sub, 1)));
    assert_eq!(classify("*"), Ok(Command::Operator(Operator::Mul, 1)));
    assert_eq!(classify("/"), Ok(Command::Operator(Operator::Div, 1)));
}

#[test]
fn test_signed_numbers() {
    assert_eq!(classify("+5"), Ok(Command::Number(5.0)));
    assert_eq!(classify("-5"), Ok(Command::Number(-5.0)));
    assert_eq!(classify("-2.5"), Ok(Command::Number(-2.5)));
    assert_eq!(classify("-.5"), Ok(Command::Number(-0.5)));
    assert_eq!(code("+x"), Some(ErrorCode::SyntaxError));
    assert_eq!(code("--5"), Some(ErrorCode::SyntaxError));
    assert_eq!(code("-1.2.3"), Some(ErrorCode::SyntaxError));
    assert_eq!(code("-."), Some(ErrorCode::SyntaxError));
}

#[test]
fn test_no_signed_mul_div() {
    assert_eq!(code("*3"), Some(ErrorCode::SyntaxError));
    assert_eq!(code("/3"), Some(ErrorCode::SyntaxError));
    assert_eq!(code("**"), Some(ErrorCode::SyntaxError));
}

#[test]
fn test_numbers() {
    assert_eq!(classify("42"), Ok(Command::Number(42.0)));
    assert_eq!(classify("3.25"), Ok(Command::Number(3.25)));
    assert_eq!(classify("5."), Ok(Command::Number(5.0)));
    assert_eq!(classify(".5"), Ok(Command::Number(0.5)));
    assert_eq!(classify("007"), Ok(Command::Number(7.0)));
    assert_eq!(code("."), Some(ErrorCode::SyntaxError));
    assert_eq!(code("1.2.3"), Some(ErrorCode::SyntaxError));
    assert_eq!(code("1e5"), Some(ErrorCode::SyntaxError));
    assert_eq!(code("inf"), Some(ErrorCode::SyntaxError));
}

#[test]
fn test_repeated_operators() {
    assert_eq!(classify("3+"), Ok(Command::Operator(Operator::Add, 3)));
    assert_eq!(classify("2-"), Ok(Command::Operator(Operator::Sub, 2)));
    assert_eq!(classify("10*"), Ok(Command::Operator(Operator::Mul, 10)));
    assert_eq!(classify("4/"), Ok(Command::Operator(Operator::Div, 4)));
    assert_eq!(classify("0+"), Ok(Command::Operator(Operator::Add, 0)));
    assert_eq!(code("1.5+"), Some(ErrorCode::SyntaxError));
    assert_eq!(code("x+"), Some(ErrorCode::SyntaxError));
    assert_eq!(code("3%"), Some(ErrorCode::SyntaxError));
    assert_eq!(code("3++"), Some(ErrorCode::SyntaxError));
    assert_eq!(code("99999999999+"), Some(ErrorCode::SyntaxError));
}

#[test]
fn test_empty_token() {
    assert_eq!(code(""), Some(ErrorCode::SyntaxError));
}

#[test]
fn test_lex() {
    assert_eq!(lex("1 2  +"), vec![(0..1, "1"), (2..3, "2"), (5..6, "+")]);
    assert_eq!(lex("\t3+ drop\r"), vec![(1..3, "3+"), (4..8, "drop")]);
    assert!(lex("").is_empty());
    assert!(lex("   ").is_empty());
}

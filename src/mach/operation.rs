use crate::error;
use crate::lang::token::Operator;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    /// Applies `op` as `lhs op rhs`, where `rhs` was the top of the stack.
    pub fn binary(op: Operator, lhs: f64, rhs: f64) -> Result<f64> {
        match op {
            Operator::Add => Operation::sum(lhs, rhs),
            Operator::Sub => Operation::subtract(lhs, rhs),
            Operator::Mul => Operation::multiply(lhs, rhs),
            Operator::Div => Operation::divide(lhs, rhs),
        }
    }

    pub fn sum(lhs: f64, rhs: f64) -> Result<f64> {
        Ok(rhs + lhs)
    }

    pub fn subtract(lhs: f64, rhs: f64) -> Result<f64> {
        Ok(lhs - rhs)
    }

    pub fn multiply(lhs: f64, rhs: f64) -> Result<f64> {
        Ok(rhs * lhs)
    }

    pub fn divide(lhs: f64, rhs: f64) -> Result<f64> {
        if rhs == 0.0 {
            Err(error!(DivisionByZero))
        } else {
            Ok(lhs / rhs)
        }
    }
}

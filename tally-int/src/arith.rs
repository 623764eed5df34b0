//! Plain arithmetic commands

use num_bigint::BigInt;
use num_traits::Zero;
use tally_command::{Command, ExecContext, Outcome};
use tally_core::{Block, CalcError};

pub(crate) fn parse_operand(token: &str) -> Result<BigInt, CalcError> {
    token
        .parse::<BigInt>()
        .map_err(|_| CalcError::ParseNumber(token.to_string()))
}

/// `+ n` adds a decimal literal to the current result.
pub struct IntAdd;

impl Command<BigInt> for IntAdd {
    fn try_exec(
        &self,
        tokens: &[String],
        block: &Block,
        current: &BigInt,
        _ctx: &mut ExecContext<'_>,
    ) -> Outcome<BigInt> {
        if !block.is_single() || tokens.len() != 2 || tokens[0] != "+" {
            return Outcome::Skip;
        }
        parse_operand(&tokens[1]).map(|v| current + v).into()
    }
}

/// `- n` subtracts a decimal literal from the current result.
pub struct IntSub;

impl Command<BigInt> for IntSub {
    fn try_exec(
        &self,
        tokens: &[String],
        block: &Block,
        current: &BigInt,
        _ctx: &mut ExecContext<'_>,
    ) -> Outcome<BigInt> {
        if !block.is_single() || tokens.len() != 2 || tokens[0] != "-" {
            return Outcome::Skip;
        }
        parse_operand(&tokens[1]).map(|v| current - v).into()
    }
}

/// `* n` and `/ n` in one command. Division truncates toward zero;
/// dividing by zero is a fault.
pub struct IntMulDiv;

impl Command<BigInt> for IntMulDiv {
    fn try_exec(
        &self,
        tokens: &[String],
        block: &Block,
        current: &BigInt,
        _ctx: &mut ExecContext<'_>,
    ) -> Outcome<BigInt> {
        if !block.is_single() || tokens.len() != 2 {
            return Outcome::Skip;
        }
        match tokens[0].as_str() {
            "*" => parse_operand(&tokens[1]).map(|v| current * v).into(),
            "/" => match parse_operand(&tokens[1]) {
                Ok(v) if v.is_zero() => Outcome::Failed(CalcError::DivisionByZero),
                Ok(v) => Outcome::Applied(current / v),
                Err(err) => Outcome::Failed(err),
            },
            _ => Outcome::Skip,
        }
    }
}

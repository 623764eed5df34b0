//! Arithmetic with variable operands

use num_bigint::BigInt;
use num_traits::Zero;
use tally_command::{Command, ExecContext, Memory, Outcome};
use tally_core::{Block, CalcError};

use crate::arith::parse_operand;

/// `op operand` where `op` is one of `+ - * /` and the operand is a
/// stored variable name or a decimal literal. Variable lookup wins;
/// an operand that is neither is a reported parse fault.
///
/// The memo calculator registers this in place of the plain
/// `IntAdd`/`IntSub`/`IntMulDiv` commands.
pub struct ArithWithMemory {
    mem: Memory<BigInt>,
}

impl ArithWithMemory {
    pub fn new(mem: Memory<BigInt>) -> Self {
        Self { mem }
    }

    fn eval(&self, token: &str) -> Result<BigInt, CalcError> {
        if let Some(value) = self.mem.get(token) {
            return Ok(value);
        }
        parse_operand(token)
    }
}

impl Command<BigInt> for ArithWithMemory {
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
        if !matches!(tokens[0].as_str(), "+" | "-" | "*" | "/") {
            return Outcome::Skip;
        }
        let operand = match self.eval(&tokens[1]) {
            Ok(value) => value,
            Err(err) => return Outcome::Failed(err),
        };
        match tokens[0].as_str() {
            "+" => Outcome::Applied(current + &operand),
            "-" => Outcome::Applied(current - &operand),
            "*" => Outcome::Applied(current * &operand),
            "/" if operand.is_zero() => Outcome::Failed(CalcError::DivisionByZero),
            _ => Outcome::Applied(current / &operand),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::tokenize;

    fn exec(command: &ArithWithMemory, line: &str, current: i64) -> Outcome<BigInt> {
        let block = Block::single(line);
        let tokens = tokenize(block.header());
        let mut sink = Vec::new();
        let mut ctx = ExecContext { out: &mut sink };
        command.try_exec(&tokens, &block, &BigInt::from(current), &mut ctx)
    }

    #[test]
    fn test_literal_operand() {
        let cmd = ArithWithMemory::new(Memory::new());
        match exec(&cmd, "+ 10", 0) {
            Outcome::Applied(v) => assert_eq!(v, BigInt::from(10)),
            other => panic!("expected Applied, got {other:?}"),
        }
    }

    #[test]
    fn test_variable_operand() {
        let mem = Memory::new();
        mem.set("x", BigInt::from(10));
        let cmd = ArithWithMemory::new(mem);
        match exec(&cmd, "* x", 4) {
            Outcome::Applied(v) => assert_eq!(v, BigInt::from(40)),
            other => panic!("expected Applied, got {other:?}"),
        }
    }

    #[test]
    fn test_variable_shadows_literal_parse() {
        // A variable named like a number resolves as the variable.
        let mem = Memory::new();
        mem.set("2", BigInt::from(100));
        let cmd = ArithWithMemory::new(mem);
        match exec(&cmd, "+ 2", 0) {
            Outcome::Applied(v) => assert_eq!(v, BigInt::from(100)),
            other => panic!("expected Applied, got {other:?}"),
        }
    }

    #[test]
    fn test_unresolvable_operand_is_a_fault() {
        let cmd = ArithWithMemory::new(Memory::new());
        assert!(matches!(
            exec(&cmd, "+ ghost", 0),
            Outcome::Failed(CalcError::ParseNumber(_))
        ));
    }

    #[test]
    fn test_divide_by_zero_variable() {
        let mem = Memory::new();
        mem.set("z", BigInt::from(0));
        let cmd = ArithWithMemory::new(mem);
        assert!(matches!(
            exec(&cmd, "/ z", 5),
            Outcome::Failed(CalcError::DivisionByZero)
        ));
    }
}

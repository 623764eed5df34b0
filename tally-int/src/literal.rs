//! Literal entry and negation

use num_bigint::BigInt;
use tally_command::{Command, ExecContext, Outcome};
use tally_core::Block;

/// A single decimal literal on a line of its own becomes the current
/// result. A token that does not parse is declined, not a fault:
/// parseability is this command's shape test.
pub struct IntValue;

impl Command<BigInt> for IntValue {
    fn try_exec(
        &self,
        tokens: &[String],
        block: &Block,
        _current: &BigInt,
        _ctx: &mut ExecContext<'_>,
    ) -> Outcome<BigInt> {
        if !block.is_single() || tokens.len() != 1 {
            return Outcome::Skip;
        }
        match tokens[0].parse::<BigInt>() {
            Ok(value) => Outcome::Applied(value),
            Err(_) => Outcome::Skip,
        }
    }
}

/// `neg` flips the sign of the current result.
pub struct IntNeg;

impl Command<BigInt> for IntNeg {
    fn try_exec(
        &self,
        tokens: &[String],
        block: &Block,
        current: &BigInt,
        _ctx: &mut ExecContext<'_>,
    ) -> Outcome<BigInt> {
        if block.is_single() && tokens.len() == 1 && tokens[0] == "neg" {
            Outcome::Applied(-current)
        } else {
            Outcome::Skip
        }
    }
}

//! Command trait and outcome

use std::io::Write;
use tally_core::{Block, CalcError};

/// Side channel a command may write user-facing text to besides the
/// result itself (variable listings and the like). It is the same
/// stream the calculator renders results on.
pub struct ExecContext<'a> {
    pub out: &'a mut dyn Write,
}

/// What one command decided about one block.
///
/// `Skip` and `Failed` are deliberately distinct: a command that does
/// not recognize the block's shape skips it so the next command gets a
/// look, while a command that matched but could not compute reports a
/// fault and ends the dispatch for this block.
#[derive(Debug)]
pub enum Outcome<R> {
    /// The block matched and produced a new result.
    Applied(R),
    /// The block matched this command's shape, but the operation faulted.
    Failed(CalcError),
    /// The block is not this command's shape.
    Skip,
}

impl<R> From<Result<R, CalcError>> for Outcome<R> {
    fn from(result: Result<R, CalcError>) -> Self {
        match result {
            Ok(value) => Outcome::Applied(value),
            Err(err) => Outcome::Failed(err),
        }
    }
}

/// One operation of a calculator.
///
/// `tokens` is the tokenized header line; body lines are handed over
/// untokenized in `block` for the command to interpret. Commands never
/// see each other; registration order decides who is asked first.
pub trait Command<R> {
    fn try_exec(
        &self,
        tokens: &[String],
        block: &Block,
        current: &R,
        ctx: &mut ExecContext<'_>,
    ) -> Outcome<R>;
}

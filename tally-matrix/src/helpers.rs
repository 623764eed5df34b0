//! Shared command-matching helpers

use tally_command::Memory;
use tally_core::{Block, CalcError};

use crate::Matrix;

/// True when the block is a single line holding exactly `word`.
pub(crate) fn is_word(tokens: &[String], block: &Block, word: &str) -> bool {
    block.is_single() && tokens.len() == 1 && tokens[0] == word
}

/// Parse a construction size (`eye k`, `zero k`).
pub(crate) fn parse_size(token: &str) -> Result<usize, CalcError> {
    token
        .parse::<usize>()
        .map_err(|_| CalcError::ParseNumber(token.to_string()))
}

/// Resolve the operand of a two-form matrix command named `name`:
/// either a multi-line block literal (`name :` plus rows) or a stored
/// variable (`name var`). `None` means the block has neither shape.
pub(crate) fn operand(
    tokens: &[String],
    block: &Block,
    name: &str,
    mem: &Memory<Matrix>,
) -> Option<Result<Matrix, CalcError>> {
    if !block.is_single() && tokens.len() == 1 && tokens[0] == name {
        return Some(Matrix::parse_rows(block.body()));
    }
    if block.is_single() && tokens.len() == 2 && tokens[0] == name {
        return Some(
            mem.get(&tokens[1])
                .ok_or_else(|| CalcError::UnknownVariable(tokens[1].clone())),
        );
    }
    None
}

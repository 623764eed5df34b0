//! Matrix entry and stock constructions

use tally_command::{Command, ExecContext, Outcome};
use tally_core::Block;

use crate::helpers::{is_word, parse_size};
use crate::Matrix;

/// `mat :` followed by tab-indented rows replaces the current result
/// with the entered matrix.
pub struct MatrixValue;

impl Command<Matrix> for MatrixValue {
    fn try_exec(
        &self,
        tokens: &[String],
        block: &Block,
        _current: &Matrix,
        _ctx: &mut ExecContext<'_>,
    ) -> Outcome<Matrix> {
        if block.is_single() || tokens.len() != 1 || tokens[0] != "mat" {
            return Outcome::Skip;
        }
        Matrix::parse_rows(block.body()).into()
    }
}

/// `eye k`: the k×k identity matrix.
pub struct IdentityCmd;

impl Command<Matrix> for IdentityCmd {
    fn try_exec(
        &self,
        tokens: &[String],
        block: &Block,
        _current: &Matrix,
        _ctx: &mut ExecContext<'_>,
    ) -> Outcome<Matrix> {
        if !block.is_single() || tokens.len() != 2 || tokens[0] != "eye" {
            return Outcome::Skip;
        }
        parse_size(&tokens[1]).map(Matrix::identity).into()
    }
}

/// `zero k`: the k×k zero matrix.
pub struct ZeroCmd;

impl Command<Matrix> for ZeroCmd {
    fn try_exec(
        &self,
        tokens: &[String],
        block: &Block,
        _current: &Matrix,
        _ctx: &mut ExecContext<'_>,
    ) -> Outcome<Matrix> {
        if !block.is_single() || tokens.len() != 2 || tokens[0] != "zero" {
            return Outcome::Skip;
        }
        parse_size(&tokens[1]).map(|k| Matrix::zeros(k, k)).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::{tokenize, CalcError};

    fn exec<C: Command<Matrix>>(command: &C, block: Block) -> Outcome<Matrix> {
        let tokens = tokenize(block.header());
        let mut sink = Vec::new();
        let mut ctx = ExecContext { out: &mut sink };
        command.try_exec(&tokens, &block, &Matrix::zeros(2, 2), &mut ctx)
    }

    #[test]
    fn test_matrix_value() {
        let block = Block::with_body("mat ", vec!["2 3 4".to_string(), "5 6 7".to_string()]);
        match exec(&MatrixValue, block) {
            Outcome::Applied(m) => {
                assert_eq!((m.rows(), m.cols()), (2, 3));
                assert_eq!(m.get(0, 2), 4.0);
            }
            other => panic!("expected Applied, got {other:?}"),
        }
    }

    #[test]
    fn test_matrix_value_needs_a_body() {
        assert!(matches!(
            exec(&MatrixValue, Block::single("mat")),
            Outcome::Skip
        ));
    }

    #[test]
    fn test_matrix_value_bad_number_is_a_fault() {
        let block = Block::with_body("mat ", vec!["1 oops".to_string()]);
        assert!(matches!(
            exec(&MatrixValue, block),
            Outcome::Failed(CalcError::ParseNumber(_))
        ));
    }

    #[test]
    fn test_eye() {
        match exec(&IdentityCmd, Block::single("eye 3")) {
            Outcome::Applied(m) => assert_eq!(m, Matrix::identity(3)),
            other => panic!("expected Applied, got {other:?}"),
        }
    }

    #[test]
    fn test_zero() {
        match exec(&ZeroCmd, Block::single("zero 2")) {
            Outcome::Applied(m) => assert_eq!(m, Matrix::zeros(2, 2)),
            other => panic!("expected Applied, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_size_is_a_fault() {
        assert!(matches!(
            exec(&IdentityCmd, Block::single("eye two")),
            Outcome::Failed(CalcError::ParseNumber(_))
        ));
    }
}

//! Calculator faults
//!
//! A `CalcError` is raised by a command that matched its block shape but
//! could not produce a result. The dispatcher reports it and keeps the
//! current result; it never aborts the read loop.

use thiserror::Error;

/// Fault raised by a matched command.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("invalid number: {0:?}")]
    ParseNumber(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("unknown variable: {0}")]
    UnknownVariable(String),

    #[error("size mismatch: {lhs_rows}x{lhs_cols} vs {rhs_rows}x{rhs_cols}")]
    ShapeMismatch {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    #[error("{rows}x{cols} matrix is not square")]
    NotSquare { rows: usize, cols: usize },

    #[error("matrix is not regular")]
    NotRegular,

    #[error("matrix row {row} has {got} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error("matrix block has no rows")]
    EmptyMatrix,

    #[error("{rows}x{cols} is not an augmented system (needs one extra column)")]
    NotAugmented { rows: usize, cols: usize },
}

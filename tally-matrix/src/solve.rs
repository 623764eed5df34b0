//! Augmented-system solver

use nalgebra::DMatrix;
use tally_command::{Command, ExecContext, Outcome};
use tally_core::{Block, CalcError};

use crate::helpers::is_word;
use crate::Matrix;

impl Matrix {
    /// Treat the matrix as an augmented system (`m` rows, `m + 1`
    /// columns), split off the constant column, and solve through the
    /// coefficient inverse. A singular coefficient matrix is a fault.
    pub fn solve_augmented(&self) -> Result<Matrix, CalcError> {
        if self.cols() != self.rows() + 1 {
            return Err(CalcError::NotAugmented {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        let m = self.rows();
        let mut coeff = DMatrix::zeros(m, m);
        let mut constants = DMatrix::zeros(m, 1);
        for i in 0..m {
            for j in 0..m {
                coeff[(i, j)] = self.data[(i, j)];
            }
            constants[(i, 0)] = self.data[(i, m)];
        }
        let coeff = Matrix { data: coeff };
        if coeff.is_singular() {
            return Err(CalcError::NotRegular);
        }
        coeff.inverse()?.mul(&Matrix { data: constants })
    }
}

/// `equation`: solve the current result as an augmented system; the
/// solution column vector becomes the new result.
pub struct SolveCmd;

impl Command<Matrix> for SolveCmd {
    fn try_exec(
        &self,
        tokens: &[String],
        block: &Block,
        current: &Matrix,
        _ctx: &mut ExecContext<'_>,
    ) -> Outcome<Matrix> {
        if !is_word(tokens, block, "equation") {
            return Outcome::Skip;
        }
        current.solve_augmented().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat(rows: &[&str]) -> Matrix {
        let body: Vec<String> = rows.iter().map(|r| r.to_string()).collect();
        Matrix::parse_rows(&body).unwrap()
    }

    #[test]
    fn test_solve_diagonal_system() {
        // 2x = 4, 2y = 6
        let aug = mat(&["2 0 4", "0 2 6"]);
        let x = aug.solve_augmented().unwrap();
        assert_eq!((x.rows(), x.cols()), (2, 1));
        assert!((x.get(0, 0) - 2.0).abs() < 1e-9);
        assert!((x.get(1, 0) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_solve_coupled_system() {
        // x + y = 3, x - y = 1  =>  x = 2, y = 1
        let aug = mat(&["1 1 3", "1 -1 1"]);
        let x = aug.solve_augmented().unwrap();
        assert!((x.get(0, 0) - 2.0).abs() < 1e-9);
        assert!((x.get(1, 0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_solve_rejects_wrong_shape() {
        assert!(matches!(
            Matrix::identity(2).solve_augmented(),
            Err(CalcError::NotAugmented { .. })
        ));
        assert!(matches!(
            mat(&["1 2 3 4"]).solve_augmented(),
            Err(CalcError::NotAugmented { .. })
        ));
    }

    #[test]
    fn test_solve_rejects_singular_coefficients() {
        let aug = mat(&["1 1 2", "1 1 3"]);
        assert!(matches!(
            aug.solve_augmented(),
            Err(CalcError::NotRegular)
        ));
    }
}

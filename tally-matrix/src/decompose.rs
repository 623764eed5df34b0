//! Elimination kernel
//!
//! Gauss-Jordan inverse, triangular factors, determinant, and the LR
//! eigenvalue iteration. None of these pivot: rows are never swapped,
//! so a zero pivot divides through and the non-finite values propagate
//! into the result.

use nalgebra::DMatrix;
use tally_command::{Command, ExecContext, Outcome};
use tally_core::{Block, CalcError};
use tracing::debug;

use crate::helpers::is_word;
use crate::Matrix;

/// Iteration cap for the LR eigenvalue loop.
const LR_MAX_ITERATIONS: usize = 1000;

/// Convergence bound on the summed magnitude of below-diagonal entries.
const LR_TOLERANCE: f64 = 1e-11;

impl Matrix {
    fn check_square(&self) -> Result<usize, CalcError> {
        if !self.is_square() {
            return Err(CalcError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(self.rows())
    }

    /// Gauss-Jordan inverse without pivoting.
    ///
    /// Each pivot row is normalized by its diagonal element in both the
    /// working copy and the identity-seeded accumulator, then
    /// eliminated from every other row. After the last pivot the
    /// accumulator holds the inverse.
    pub fn inverse(&self) -> Result<Matrix, CalcError> {
        let n = self.check_square()?;
        let mut work = self.data.clone();
        let mut inv = DMatrix::identity(n, n);
        for i in 0..n {
            let norm = 1.0 / work[(i, i)];
            for j in 0..n {
                work[(i, j)] *= norm;
                inv[(i, j)] *= norm;
            }
            for j in 0..n {
                if j == i {
                    continue;
                }
                let factor = work[(j, i)];
                for k in 0..n {
                    work[(j, k)] -= work[(i, k)] * factor;
                    inv[(j, k)] -= inv[(i, k)] * factor;
                }
            }
        }
        Ok(Matrix { data: inv })
    }

    /// Upper-triangular factor by forward elimination.
    pub fn upper_triangular(&self) -> Result<Matrix, CalcError> {
        let n = self.check_square()?;
        let mut work = self.data.clone();
        for i in 0..n {
            for j in (i + 1)..n {
                let factor = work[(j, i)] / work[(i, i)];
                for k in 0..n {
                    work[(j, k)] -= work[(i, k)] * factor;
                }
            }
        }
        Ok(Matrix { data: work })
    }

    /// Lower-triangular factor, derived as `self * upper⁻¹` from the
    /// factorization `self = lower * upper`.
    pub fn lower_triangular(&self) -> Result<Matrix, CalcError> {
        let upper = self.upper_triangular()?;
        let inv = upper.inverse()?;
        self.mul(&inv)
    }

    /// Product of the upper-triangular factor's diagonal. A non-square
    /// matrix reports `0.0`, and the product short-circuits on an
    /// exactly-zero diagonal entry before elimination breakdown can
    /// turn it into NaN. Doubles as the regularity test.
    pub fn determinant(&self) -> f64 {
        if !self.is_square() {
            return 0.0;
        }
        let upper = match self.upper_triangular() {
            Ok(u) => u,
            Err(_) => return 0.0,
        };
        let mut det = 1.0;
        for i in 0..self.rows() {
            let d = upper.data[(i, i)];
            if d == 0.0 {
                return 0.0;
            }
            det *= d;
        }
        det
    }

    /// Exact-zero determinant test, no epsilon.
    pub fn is_singular(&self) -> bool {
        self.determinant() == 0.0
    }

    /// Eigenvalue approximation by LR iteration.
    ///
    /// Factor into lower and upper, recombine as `U * L`, and repeat
    /// until the below-diagonal mass falls under `LR_TOLERANCE` or the
    /// cap is hit; the diagonal of the converged matrix comes back as a
    /// diagonal matrix. Converges only when the iteration is well
    /// behaved (real eigenvalues of distinct magnitude, nonsingular
    /// leading minors); there is no divergence safeguard beyond the cap.
    pub fn eigenvalues(&self) -> Result<Matrix, CalcError> {
        let n = self.check_square()?;
        let mut iterate = self.clone();
        for _ in 0..LR_MAX_ITERATIONS {
            let lower = iterate.lower_triangular()?;
            let upper = iterate.upper_triangular()?;
            iterate = upper.mul(&lower)?;
            let mut below = 0.0;
            for j in 1..n {
                for k in 0..j {
                    below += iterate.data[(j, k)].abs();
                }
            }
            if below < LR_TOLERANCE {
                break;
            }
        }
        let mut diag = DMatrix::zeros(n, n);
        for i in 0..n {
            diag[(i, i)] = iterate.data[(i, i)];
        }
        Ok(Matrix { data: diag })
    }
}

/// `inv`: invert the current result after a regularity check. A
/// singular matrix reports "not regular" and the current result
/// survives unchanged.
pub struct InverseCmd;

impl Command<Matrix> for InverseCmd {
    fn try_exec(
        &self,
        tokens: &[String],
        block: &Block,
        current: &Matrix,
        _ctx: &mut ExecContext<'_>,
    ) -> Outcome<Matrix> {
        if !is_word(tokens, block, "inv") {
            return Outcome::Skip;
        }
        let det = current.determinant();
        debug!(determinant = det, "inv");
        if current.is_singular() {
            return Outcome::Failed(CalcError::NotRegular);
        }
        current.inverse().into()
    }
}

/// `umat`: the upper-triangular factor of the current result.
pub struct UpperCmd;

impl Command<Matrix> for UpperCmd {
    fn try_exec(
        &self,
        tokens: &[String],
        block: &Block,
        current: &Matrix,
        _ctx: &mut ExecContext<'_>,
    ) -> Outcome<Matrix> {
        if !is_word(tokens, block, "umat") {
            return Outcome::Skip;
        }
        current.upper_triangular().into()
    }
}

/// `lmat`: the lower-triangular factor of the current result.
pub struct LowerCmd;

impl Command<Matrix> for LowerCmd {
    fn try_exec(
        &self,
        tokens: &[String],
        block: &Block,
        current: &Matrix,
        _ctx: &mut ExecContext<'_>,
    ) -> Outcome<Matrix> {
        if !is_word(tokens, block, "lmat") {
            return Outcome::Skip;
        }
        current.lower_triangular().into()
    }
}

/// `eigen`: diagonal matrix of approximate eigenvalues.
pub struct EigenCmd;

impl Command<Matrix> for EigenCmd {
    fn try_exec(
        &self,
        tokens: &[String],
        block: &Block,
        current: &Matrix,
        _ctx: &mut ExecContext<'_>,
    ) -> Outcome<Matrix> {
        if !is_word(tokens, block, "eigen") {
            return Outcome::Skip;
        }
        current.eigenvalues().into()
    }
}

//! Element-wise and product operations, and their commands

use tally_command::{Command, ExecContext, Memory, Outcome};
use tally_core::{Block, CalcError};

use crate::helpers::operand;
use crate::Matrix;

impl Matrix {
    fn check_same_shape(&self, rhs: &Matrix) -> Result<(), CalcError> {
        if self.rows() != rhs.rows() || self.cols() != rhs.cols() {
            return Err(CalcError::ShapeMismatch {
                lhs_rows: self.rows(),
                lhs_cols: self.cols(),
                rhs_rows: rhs.rows(),
                rhs_cols: rhs.cols(),
            });
        }
        Ok(())
    }

    /// Element-wise sum.
    pub fn add(&self, rhs: &Matrix) -> Result<Matrix, CalcError> {
        self.check_same_shape(rhs)?;
        Ok(Matrix {
            data: &self.data + &rhs.data,
        })
    }

    /// Element-wise difference.
    pub fn sub(&self, rhs: &Matrix) -> Result<Matrix, CalcError> {
        self.check_same_shape(rhs)?;
        Ok(Matrix {
            data: &self.data - &rhs.data,
        })
    }

    /// Scalar multiple.
    pub fn scale(&self, a: f64) -> Matrix {
        Matrix {
            data: &self.data * a,
        }
    }

    /// Matrix product; `self.cols` must equal `rhs.rows`.
    pub fn mul(&self, rhs: &Matrix) -> Result<Matrix, CalcError> {
        if self.cols() != rhs.rows() {
            return Err(CalcError::ShapeMismatch {
                lhs_rows: self.rows(),
                lhs_cols: self.cols(),
                rhs_rows: rhs.rows(),
                rhs_cols: rhs.cols(),
            });
        }
        Ok(Matrix {
            data: &self.data * &rhs.data,
        })
    }
}

/// `add :` with rows, or `add var`.
pub struct MatAdd {
    mem: Memory<Matrix>,
}

impl MatAdd {
    pub fn new(mem: Memory<Matrix>) -> Self {
        Self { mem }
    }
}

impl Command<Matrix> for MatAdd {
    fn try_exec(
        &self,
        tokens: &[String],
        block: &Block,
        current: &Matrix,
        _ctx: &mut ExecContext<'_>,
    ) -> Outcome<Matrix> {
        match operand(tokens, block, "add", &self.mem) {
            Some(Ok(v)) => current.add(&v).into(),
            Some(Err(err)) => Outcome::Failed(err),
            None => Outcome::Skip,
        }
    }
}

/// `sub :` with rows, or `sub var`.
pub struct MatSub {
    mem: Memory<Matrix>,
}

impl MatSub {
    pub fn new(mem: Memory<Matrix>) -> Self {
        Self { mem }
    }
}

impl Command<Matrix> for MatSub {
    fn try_exec(
        &self,
        tokens: &[String],
        block: &Block,
        current: &Matrix,
        _ctx: &mut ExecContext<'_>,
    ) -> Outcome<Matrix> {
        match operand(tokens, block, "sub", &self.mem) {
            Some(Ok(v)) => current.sub(&v).into(),
            Some(Err(err)) => Outcome::Failed(err),
            None => Outcome::Skip,
        }
    }
}

/// `mul :` with rows, or `mul var`.
pub struct MatMul {
    mem: Memory<Matrix>,
}

impl MatMul {
    pub fn new(mem: Memory<Matrix>) -> Self {
        Self { mem }
    }
}

impl Command<Matrix> for MatMul {
    fn try_exec(
        &self,
        tokens: &[String],
        block: &Block,
        current: &Matrix,
        _ctx: &mut ExecContext<'_>,
    ) -> Outcome<Matrix> {
        match operand(tokens, block, "mul", &self.mem) {
            Some(Ok(v)) => current.mul(&v).into(),
            Some(Err(err)) => Outcome::Failed(err),
            None => Outcome::Skip,
        }
    }
}

/// `div :` with rows, or `div var`: multiply by the operand's inverse.
/// The operand's regularity is not checked; a singular divisor feeds
/// non-finite values through, as the elimination kernel does.
pub struct MatDiv {
    mem: Memory<Matrix>,
}

impl MatDiv {
    pub fn new(mem: Memory<Matrix>) -> Self {
        Self { mem }
    }
}

impl Command<Matrix> for MatDiv {
    fn try_exec(
        &self,
        tokens: &[String],
        block: &Block,
        current: &Matrix,
        _ctx: &mut ExecContext<'_>,
    ) -> Outcome<Matrix> {
        match operand(tokens, block, "div", &self.mem) {
            Some(Ok(v)) => v.inverse().and_then(|w| current.mul(&w)).into(),
            Some(Err(err)) => Outcome::Failed(err),
            None => Outcome::Skip,
        }
    }
}

/// `smul a` scales the current result by a real scalar.
pub struct ScalarMul;

impl Command<Matrix> for ScalarMul {
    fn try_exec(
        &self,
        tokens: &[String],
        block: &Block,
        current: &Matrix,
        _ctx: &mut ExecContext<'_>,
    ) -> Outcome<Matrix> {
        if !block.is_single() || tokens.len() != 2 || tokens[0] != "smul" {
            return Outcome::Skip;
        }
        match tokens[1].parse::<f64>() {
            Ok(a) => Outcome::Applied(current.scale(a)),
            Err(_) => Outcome::Failed(CalcError::ParseNumber(tokens[1].clone())),
        }
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
    fn test_add_elementwise() {
        let a = mat(&["1 2", "3 4"]);
        let b = mat(&["10 20", "30 40"]);
        assert_eq!(a.add(&b).unwrap(), mat(&["11 22", "33 44"]));
    }

    #[test]
    fn test_add_shape_mismatch() {
        let a = mat(&["1 2"]);
        let b = mat(&["1 2", "3 4"]);
        assert!(matches!(a.add(&b), Err(CalcError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_sub() {
        let a = mat(&["3 3", "5 7"]);
        let b = mat(&["1 0", "1 0"]);
        assert_eq!(a.sub(&b).unwrap(), mat(&["2 3", "4 7"]));
    }

    #[test]
    fn test_scale() {
        let a = mat(&["1 -2"]);
        assert_eq!(a.scale(2.0), mat(&["2 -4"]));
    }

    #[test]
    fn test_mul_shapes() {
        let a = mat(&["1 2 3", "4 5 6"]);
        let b = mat(&["1", "0", "1"]);
        let c = a.mul(&b).unwrap();
        assert_eq!((c.rows(), c.cols()), (2, 1));
        assert_eq!(c.get(0, 0), 4.0);
        assert_eq!(c.get(1, 0), 10.0);
        assert!(matches!(b.mul(&a), Err(CalcError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_mul_identity() {
        let a = mat(&["1 2", "3 4"]);
        assert_eq!(a.mul(&Matrix::identity(2)).unwrap(), a);
    }
}

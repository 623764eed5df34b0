//! Matrix value type

use std::fmt;

use nalgebra::DMatrix;
use tally_core::CalcError;

/// A dense real matrix; the result type of the matrix calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub(crate) data: DMatrix<f64>,
}

impl Matrix {
    /// The m×n zero matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: DMatrix::zeros(rows, cols),
        }
    }

    /// The k×k identity matrix.
    pub fn identity(n: usize) -> Self {
        Self {
            data: DMatrix::identity(n, n),
        }
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[(row, col)]
    }

    /// Parse the body lines of a matrix block: whitespace-separated
    /// real numbers, one matrix row per line. The first row fixes the
    /// column count.
    pub fn parse_rows(rows: &[String]) -> Result<Self, CalcError> {
        if rows.is_empty() {
            return Err(CalcError::EmptyMatrix);
        }
        let mut parsed: Vec<Vec<f64>> = Vec::with_capacity(rows.len());
        let mut width = None;
        for (index, line) in rows.iter().enumerate() {
            let mut row = Vec::new();
            for token in line.split_whitespace() {
                let value = token
                    .parse::<f64>()
                    .map_err(|_| CalcError::ParseNumber(token.to_string()))?;
                row.push(value);
            }
            match width {
                None => width = Some(row.len()),
                Some(expected) if expected != row.len() => {
                    return Err(CalcError::RaggedRow {
                        row: index,
                        got: row.len(),
                        expected,
                    });
                }
                Some(_) => {}
            }
            parsed.push(row);
        }
        let cols = width.unwrap_or(0);
        let data = DMatrix::from_fn(parsed.len(), cols, |i, j| parsed[i][j]);
        Ok(Self { data })
    }
}

impl fmt::Display for Matrix {
    /// One bracketed row per line, elements in 8-character fields with
    /// three decimals:
    ///
    /// ```text
    /// [   2.000    3.000    4.000]
    /// [   5.000    6.000    7.000]
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for j in 0..self.cols() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:8.3}", self.data[(i, j)])?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

//! Tally Matrix - dense real matrices
//!
//! The result type of the matrix calculator and its commands:
//! - Construction (`mat :` literals, `eye`, `zero`)
//! - Algebra (`add`, `sub`, `mul`, `div`, `smul`)
//! - Elimination kernel (`inv`, `umat`, `lmat`, `eigen`, `equation`)
//!
//! The kernel eliminates without pivoting throughout. Rows are never
//! swapped to dodge a zero or small pivot; where that breaks down the
//! non-finite values propagate into the result rather than being
//! detected mid-elimination.

mod construct;
mod decompose;
mod helpers;
mod ops;
mod solve;
mod types;

pub use construct::{IdentityCmd, MatrixValue, ZeroCmd};
pub use decompose::{EigenCmd, InverseCmd, LowerCmd, UpperCmd};
pub use ops::{MatAdd, MatDiv, MatMul, MatSub, ScalarMul};
pub use solve::SolveCmd;
pub use types::Matrix;

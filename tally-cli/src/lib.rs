//! Wiring for the calculator binaries
//!
//! Each binary pairs a fixed, ordered command list with standard input
//! and an initial result. The lists live here so the end-to-end tests
//! can drive exactly what the binaries run.

use num_bigint::BigInt;
use tally_command::{CommandSet, Empty, LoadStore, Memory, ShowVars};
use tally_int::{ArithWithMemory, IntAdd, IntMulDiv, IntNeg, IntSub, IntValue};
use tally_matrix::{
    EigenCmd, IdentityCmd, InverseCmd, LowerCmd, MatAdd, MatDiv, MatMul, MatSub, Matrix,
    MatrixValue, ScalarMul, SolveCmd, UpperCmd, ZeroCmd,
};

/// Stderr logging for the binaries; `RUST_LOG` overrides the `info`
/// default.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Command list of the plain integer calculator.
pub fn int_commands() -> CommandSet<BigInt> {
    CommandSet::new()
        .with(Empty)
        .with(IntValue)
        .with(IntAdd)
        .with(IntSub)
        .with(IntMulDiv)
        .with(IntNeg)
}

/// Command list of the integer calculator with variable memory.
pub fn memo_commands(mem: Memory<BigInt>) -> CommandSet<BigInt> {
    CommandSet::new()
        .with(Empty)
        .with(IntValue)
        .with(IntNeg)
        .with(ArithWithMemory::new(mem.clone()))
        .with(LoadStore::new(mem.clone()))
        .with(ShowVars::new(mem))
}

/// Command list of the matrix calculator.
pub fn matrix_commands(mem: Memory<Matrix>) -> CommandSet<Matrix> {
    CommandSet::new()
        .with(Empty)
        .with(MatrixValue)
        .with(IdentityCmd)
        .with(ZeroCmd)
        .with(MatAdd::new(mem.clone()))
        .with(ScalarMul)
        .with(MatSub::new(mem.clone()))
        .with(MatMul::new(mem.clone()))
        .with(MatDiv::new(mem.clone()))
        .with(InverseCmd)
        .with(UpperCmd)
        .with(LowerCmd)
        .with(EigenCmd)
        .with(SolveCmd)
        .with(LoadStore::new(mem.clone()))
        .with(ShowVars::new(mem))
}

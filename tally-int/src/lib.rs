//! Tally Int - integer calculator commands
//!
//! Commands whose result type is `num_bigint::BigInt`: literal entry,
//! negation, plain arithmetic, and the memory-aware arithmetic variant
//! used by the memo calculator.

mod arith;
mod literal;
mod memo;

pub use arith::{IntAdd, IntMulDiv, IntSub};
pub use literal::{IntNeg, IntValue};
pub use memo::ArithWithMemory;

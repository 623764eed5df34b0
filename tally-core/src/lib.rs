//! Tally Core - Fundamental types
//!
//! This crate provides the types shared by every calculator variant:
//! - `tokenize`: header-line tokenization
//! - `Block` / `BlockReader`: one logical input unit and the reader
//!   that assembles blocks from a line source
//! - `CalcError`: the fault vocabulary commands report with

mod block;
mod error;
mod token;

pub use block::{Block, BlockReader, BLOCK_MARKER};
pub use error::CalcError;
pub use token::tokenize;

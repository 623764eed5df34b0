//! Tally Command - the operation contract
//!
//! A calculator is an ordered list of commands. Each command inspects
//! one block and either claims it, producing a new result, or declines
//! it. This crate provides the trait, the three-state outcome that
//! replaces a null sentinel, the ordered `CommandSet`, the shared
//! variable `Memory`, and the commands every calculator variant uses
//! (blank input, load/store, variable listing).

mod builtin;
mod command;
mod memory;
mod registry;

pub use builtin::{Empty, LoadStore, ShowVars};
pub use command::{Command, ExecContext, Outcome};
pub use memory::Memory;
pub use registry::{CommandSet, Dispatch};

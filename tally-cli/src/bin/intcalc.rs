//! Integer calculator over standard input.

use std::io::{self, IsTerminal};

use num_bigint::BigInt;
use tally_core::BlockReader;
use tally_repl::Calculator;

fn main() {
    tally_cli::init_tracing();
    let interactive = io::stdin().is_terminal();
    let reader = BlockReader::new(io::stdin().lock()).interactive(interactive);
    let calculator = Calculator::new(reader, tally_cli::int_commands(), io::stdout());
    calculator.run(BigInt::from(0));
}

//! Matrix calculator over standard input.

use std::io::{self, IsTerminal};

use tally_command::Memory;
use tally_core::BlockReader;
use tally_matrix::Matrix;
use tally_repl::Calculator;

fn main() {
    tally_cli::init_tracing();
    let mem = Memory::new();
    let interactive = io::stdin().is_terminal();
    let reader = BlockReader::new(io::stdin().lock()).interactive(interactive);
    let calculator = Calculator::new(reader, tally_cli::matrix_commands(mem), io::stdout());
    calculator.run(Matrix::zeros(2, 2));
}

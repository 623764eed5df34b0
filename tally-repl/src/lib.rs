//! Tally REPL - the calculator loop
//!
//! A `Calculator` holds a block reader, an ordered command list, and
//! the single current result. It reads blocks until the input source is
//! exhausted, dispatches each one, and renders every new result on its
//! output stream. Faults and unrecognized blocks go to the diagnostics
//! channel and never end the loop.

use std::fmt::Display;
use std::io::{BufRead, Write};

use tally_command::{CommandSet, Dispatch, ExecContext};
use tally_core::{tokenize, BlockReader};
use tracing::warn;

pub struct Calculator<R, In, Out> {
    reader: BlockReader<In>,
    commands: CommandSet<R>,
    out: Out,
}

impl<R, In, Out> Calculator<R, In, Out>
where
    R: Display,
    In: BufRead,
    Out: Write,
{
    pub fn new(reader: BlockReader<In>, commands: CommandSet<R>, out: Out) -> Self {
        Self {
            reader,
            commands,
            out,
        }
    }

    /// Run until the input source is exhausted; returns the final
    /// result. The initial result is displayed before the first block
    /// is read.
    pub fn run(mut self, initial: R) -> R {
        let mut current = initial;
        self.show(&current);
        while let Some(block) = self.reader.next_block() {
            let tokens = tokenize(block.header());
            let verdict = {
                let mut ctx = ExecContext { out: &mut self.out };
                self.commands.dispatch(&tokens, &block, &current, &mut ctx)
            };
            match verdict {
                Dispatch::Applied(next) => {
                    current = next;
                    self.show(&current);
                }
                Dispatch::Failed(err) => {
                    warn!(header = block.header(), "command failed: {err}");
                }
                Dispatch::Unrecognized => {
                    warn!("unknown command: {:?}", block.header());
                }
            }
        }
        current
    }

    fn show(&mut self, result: &R) {
        let _ = writeln!(self.out, "{result}");
        let _ = self.out.flush();
    }
}

//! Ordered command list and dispatch

use crate::{Command, ExecContext, Outcome};
use tally_core::{Block, CalcError};

/// Verdict of one dispatch pass over the whole command list.
#[derive(Debug)]
pub enum Dispatch<R> {
    Applied(R),
    Failed(CalcError),
    /// Every registered command skipped the block.
    Unrecognized,
}

/// The ordered set of commands a calculator dispatches against.
///
/// More specific matchers must be registered before catch-alls; the set
/// performs no shape inference of its own.
pub struct CommandSet<R> {
    commands: Vec<Box<dyn Command<R>>>,
}

impl<R> CommandSet<R> {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Append a command; earlier registrations are asked first.
    pub fn with(mut self, command: impl Command<R> + 'static) -> Self {
        self.commands.push(Box::new(command));
        self
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Ask each command in registration order; the first that does not
    /// skip settles the block.
    pub fn dispatch(
        &self,
        tokens: &[String],
        block: &Block,
        current: &R,
        ctx: &mut ExecContext<'_>,
    ) -> Dispatch<R> {
        for command in &self.commands {
            match command.try_exec(tokens, block, current, ctx) {
                Outcome::Applied(next) => return Dispatch::Applied(next),
                Outcome::Failed(err) => return Dispatch::Failed(err),
                Outcome::Skip => {}
            }
        }
        Dispatch::Unrecognized
    }
}

impl<R> Default for CommandSet<R> {
    fn default() -> Self {
        Self::new()
    }
}

//! Commands shared by every calculator variant

use std::fmt::Display;
use std::io::Write;

use crate::{Command, ExecContext, Memory, Outcome};
use tally_core::{Block, CalcError};

/// Accepts a blank line and keeps the current result.
///
/// A blank line tokenizes to a single empty token, which is the shape
/// this command matches.
pub struct Empty;

impl<R: Clone> Command<R> for Empty {
    fn try_exec(
        &self,
        tokens: &[String],
        block: &Block,
        current: &R,
        _ctx: &mut ExecContext<'_>,
    ) -> Outcome<R> {
        if block.is_single() && tokens.len() == 1 && tokens[0].is_empty() {
            Outcome::Applied(current.clone())
        } else {
            Outcome::Skip
        }
    }
}

/// `store name` saves the current result under `name` and leaves it
/// unchanged; `load name` makes the stored value current. Loading a
/// name that was never stored is a fault, reported and recoverable.
pub struct LoadStore<R> {
    mem: Memory<R>,
}

impl<R> LoadStore<R> {
    pub fn new(mem: Memory<R>) -> Self {
        Self { mem }
    }
}

impl<R: Clone> Command<R> for LoadStore<R> {
    fn try_exec(
        &self,
        tokens: &[String],
        block: &Block,
        current: &R,
        _ctx: &mut ExecContext<'_>,
    ) -> Outcome<R> {
        if !block.is_single() || tokens.len() != 2 {
            return Outcome::Skip;
        }
        match tokens[0].as_str() {
            "load" => match self.mem.get(&tokens[1]) {
                Some(value) => Outcome::Applied(value),
                None => Outcome::Failed(CalcError::UnknownVariable(tokens[1].clone())),
            },
            "store" => {
                self.mem.set(&tokens[1], current.clone());
                Outcome::Applied(current.clone())
            }
            _ => Outcome::Skip,
        }
    }
}

/// `show` lists every stored variable on the calculator output and
/// keeps the current result. Multi-line values are indented one space
/// under their name.
pub struct ShowVars<R> {
    mem: Memory<R>,
}

impl<R> ShowVars<R> {
    pub fn new(mem: Memory<R>) -> Self {
        Self { mem }
    }
}

impl<R: Clone + Display> Command<R> for ShowVars<R> {
    fn try_exec(
        &self,
        tokens: &[String],
        block: &Block,
        current: &R,
        ctx: &mut ExecContext<'_>,
    ) -> Outcome<R> {
        if !(block.is_single() && tokens.len() == 1 && tokens[0] == "show") {
            return Outcome::Skip;
        }
        for (name, value) in self.mem.entries() {
            let rendered = value.to_string();
            if rendered.contains('\n') {
                let _ = writeln!(ctx.out, "{name} =");
                for line in rendered.lines() {
                    let _ = writeln!(ctx.out, " {line}");
                }
            } else {
                let _ = writeln!(ctx.out, "{name} = {rendered}");
            }
        }
        Outcome::Applied(current.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::tokenize;

    fn exec<R: Clone, C: Command<R>>(command: &C, line: &str, current: &R) -> (Outcome<R>, String) {
        let block = Block::single(line);
        let tokens = tokenize(block.header());
        let mut sink = Vec::new();
        let outcome = {
            let mut ctx = ExecContext { out: &mut sink };
            command.try_exec(&tokens, &block, current, &mut ctx)
        };
        (outcome, String::from_utf8(sink).unwrap())
    }

    #[test]
    fn test_empty_matches_blank_line() {
        let (outcome, _) = exec(&Empty, "", &5i64);
        assert!(matches!(outcome, Outcome::Applied(5)));
        let (outcome, _) = exec(&Empty, "   ", &5i64);
        assert!(matches!(outcome, Outcome::Applied(5)));
    }

    #[test]
    fn test_empty_skips_words() {
        let (outcome, _) = exec(&Empty, "neg", &5i64);
        assert!(matches!(outcome, Outcome::Skip));
    }

    #[test]
    fn test_store_then_load() {
        let mem = Memory::new();
        let cmd = LoadStore::new(mem.clone());
        let (outcome, _) = exec(&cmd, "store x", &10i64);
        assert!(matches!(outcome, Outcome::Applied(10)));
        let (outcome, _) = exec(&cmd, "load x", &0i64);
        assert!(matches!(outcome, Outcome::Applied(10)));
    }

    #[test]
    fn test_load_unknown_is_a_fault() {
        let cmd: LoadStore<i64> = LoadStore::new(Memory::new());
        let (outcome, _) = exec(&cmd, "load ghost", &0i64);
        assert!(matches!(
            outcome,
            Outcome::Failed(CalcError::UnknownVariable(_))
        ));
    }

    #[test]
    fn test_show_lists_sorted() {
        let mem = Memory::new();
        mem.set("y", 20i64);
        mem.set("x", 10i64);
        let cmd = ShowVars::new(mem);
        let (outcome, listing) = exec(&cmd, "show", &20i64);
        assert!(matches!(outcome, Outcome::Applied(20)));
        assert_eq!(listing, "x = 10\ny = 20\n");
    }

    #[test]
    fn test_show_indents_multiline_values() {
        let mem = Memory::new();
        mem.set("m", "[1]\n[2]".to_string());
        let cmd = ShowVars::new(mem);
        let (_, listing) = exec(&cmd, "show", &String::new());
        assert_eq!(listing, "m =\n [1]\n [2]\n");
    }
}

//! Input blocks and the block reader
//!
//! A block is one logical input unit: a single line, or a header line
//! ending in `:` followed by tab-indented continuation lines up to a
//! blank-line terminator.

use std::io::{self, BufRead, Write};
use tracing::warn;

/// Trailing marker that opens a multi-line block.
pub const BLOCK_MARKER: char = ':';

/// One logical input unit.
///
/// Line 0 is the header (stored with the block marker stripped); any
/// further lines are the body. A block without the marker on its header
/// is always a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    lines: Vec<String>,
}

impl Block {
    /// A one-line block.
    pub fn single(header: impl Into<String>) -> Self {
        Self {
            lines: vec![header.into()],
        }
    }

    /// A header plus continuation lines (tabs already stripped).
    pub fn with_body(header: impl Into<String>, body: Vec<String>) -> Self {
        let mut lines = vec![header.into()];
        lines.extend(body);
        Self { lines }
    }

    pub fn header(&self) -> &str {
        &self.lines[0]
    }

    pub fn body(&self) -> &[String] {
        &self.lines[1..]
    }

    pub fn is_single(&self) -> bool {
        self.lines.len() == 1
    }
}

/// Assembles blocks from a buffered line source.
///
/// In interactive mode the reader prints `>> ` before a header line and
/// `.. ` before each continuation line, the way a terminal session
/// expects; otherwise nothing is written.
pub struct BlockReader<R> {
    input: R,
    interactive: bool,
}

impl<R: BufRead> BlockReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            interactive: false,
        }
    }

    /// Enable terminal prompts.
    pub fn interactive(mut self, on: bool) -> Self {
        self.interactive = on;
        self
    }

    /// Pull the next block from the input source.
    ///
    /// `None` means the source is exhausted before a header line could
    /// be read. A read error ends the input the same way rather than
    /// aborting the calculator.
    pub fn next_block(&mut self) -> Option<Block> {
        let mut header = self.read_line(">> ")?;
        if header.starts_with('\t') {
            warn!("unexpected tab in header line: {header:?}");
            header.clear();
        }
        match header.strip_suffix(BLOCK_MARKER) {
            Some(stripped) => {
                let header = stripped.to_string();
                let mut body = Vec::new();
                // One leading tab per continuation line is the indent;
                // further tabs are content. The first line without a tab
                // terminates the block and is consumed. End-of-input
                // terminates silently.
                while let Some(line) = self.read_line(".. ") {
                    match line.strip_prefix('\t') {
                        Some(content) => body.push(content.to_string()),
                        None => {
                            if !line.is_empty() {
                                warn!("ignoring extra line: {line:?}");
                            }
                            break;
                        }
                    }
                }
                Some(Block::with_body(header, body))
            }
            None => Some(Block::single(header)),
        }
    }

    fn read_line(&mut self, prompt: &str) -> Option<String> {
        if self.interactive {
            print!("{prompt}");
            io::stdout().flush().ok();
        }
        let mut buf = String::new();
        match self.input.read_line(&mut buf) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                while buf.ends_with('\n') || buf.ends_with('\r') {
                    buf.pop();
                }
                Some(buf)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(input: &str) -> BlockReader<Cursor<Vec<u8>>> {
        BlockReader::new(Cursor::new(input.as_bytes().to_vec()))
    }

    #[test]
    fn test_single_line_block() {
        let mut r = reader("eye 2\n");
        assert_eq!(r.next_block(), Some(Block::single("eye 2")));
        assert_eq!(r.next_block(), None);
    }

    #[test]
    fn test_multi_line_block() {
        let mut r = reader("X :\n\ta\n\tb\n\n");
        let block = r.next_block().unwrap();
        assert_eq!(block.header(), "X ");
        assert_eq!(block.body(), ["a", "b"]);
        assert_eq!(r.next_block(), None);
    }

    #[test]
    fn test_extra_leading_tabs_are_content() {
        let mut r = reader("mat :\n\t\t1 2\n\n");
        let block = r.next_block().unwrap();
        assert_eq!(block.body(), ["\t1 2"]);
    }

    #[test]
    fn test_nonblank_terminator_is_consumed() {
        let mut r = reader("mat :\n\t1 2\nstray\nnext\n");
        let block = r.next_block().unwrap();
        assert_eq!(block.body(), ["1 2"]);
        // "stray" terminated the block and is gone; "next" is a fresh header.
        assert_eq!(r.next_block(), Some(Block::single("next")));
    }

    #[test]
    fn test_tab_in_header_becomes_empty_block() {
        let mut r = reader("\toops\n");
        assert_eq!(r.next_block(), Some(Block::single("")));
    }

    #[test]
    fn test_eof_during_continuation() {
        let mut r = reader("mat :\n\t1 2");
        let block = r.next_block().unwrap();
        assert_eq!(block.body(), ["1 2"]);
        assert_eq!(r.next_block(), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(reader("").next_block(), None);
    }
}

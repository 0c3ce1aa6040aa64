//! Line-based terminal interface.

use std::io::{BufRead, Write};

use super::{GameEvent, Interface};
use crate::error::{PigError, Result};

/// Text shown when asking for a decision.
pub const PROMPT: &str = "Do you want to roll again (r) or hold (h)? ";

/// Reads answers line by line from `input` and writes text to `output`.
pub struct ConsoleInterface<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleInterface<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the underlying reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl ConsoleInterface<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Interface over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Interface for ConsoleInterface<R, W> {
    fn show(&mut self, event: &GameEvent) -> Result<()> {
        writeln!(self.output, "{event}")?;
        Ok(())
    }

    fn read_decision(&mut self) -> Result<String> {
        write!(self.output, "{PROMPT}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(PigError::InputClosed);
        }

        // Only the line terminator is stripped; " h" is still invalid
        if line.ends_with(b"\n") {
            line.pop();
            if line.ends_with(b"\r") {
                line.pop();
            }
        }

        // Bytes that are not UTF-8 become replacement characters and are
        // rejected like any other bad answer
        Ok(String::from_utf8_lossy(&line).into_owned())
    }
}

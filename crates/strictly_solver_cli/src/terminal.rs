//! Line-oriented console shared by the game loop and human players.

use anyhow::{Context, Result, bail};
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Borrowed input and output streams.
pub struct Terminal<'a> {
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
}

impl<'a> Terminal<'a> {
    /// Wraps the given streams.
    pub fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
        Self { input, output }
    }

    /// Writes a line.
    pub fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.output, "{}", message).context("Failed to write output")
    }

    /// Prints a prompt and reads one line, without its line ending.
    ///
    /// Fails once input is exhausted.
    pub fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            bail!("Input closed");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

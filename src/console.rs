// Interactive console IO

use eyre::{Context, Result, eyre};
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// Line-oriented console handle shared by every interactive operation.
///
/// Operations receive this handle explicitly instead of reaching for
/// process-global readline state, so tests can drive them with in-memory
/// buffers.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    /// Console bound to the process stdin/stdout
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print a prompt and block until one line of input arrives.
    ///
    /// The trailing newline is stripped; the rest of the answer is returned
    /// verbatim. A closed input stream is an error.
    pub fn ask_question(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut answer = String::new();
        let read = self
            .reader
            .read_line(&mut answer)
            .context("Failed to read from input")?;
        if read == 0 {
            return Err(eyre!("Input stream closed"));
        }

        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Write one full line of output
    pub fn say(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    /// Overwrite the current line in place, for progress-style output
    pub fn status(&mut self, text: impl std::fmt::Display) -> Result<()> {
        write!(self.writer, "\r{}", text)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Consume the console and hand back its writer, for test inspection
    pub fn into_writer(self) -> W {
        self.writer
    }
}

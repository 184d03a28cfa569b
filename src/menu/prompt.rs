//! Line-oriented prompting with re-prompt loops
//!
//! `Prompter` wraps any `BufRead`/`Write` pair so the menu can run against a
//! terminal or an in-memory script. Every read returns `Ok(None)` at end of
//! input, letting callers unwind cleanly instead of spinning on an empty
//! stream.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Prompt writer and line reader
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Direct access to the output, for multi-line rendering
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the prompter and return the underlying reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write one line of output
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    /// Print `prompt` without a newline and read one line
    ///
    /// The line terminator (`\n` or `\r\n`) is stripped; all other
    /// characters, including surrounding spaces, are kept.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(line))` - A line was read
    /// * `Ok(None)` - End of input
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Read until the trimmed line parses as `T`
    ///
    /// Prints `invalid` after every line that fails to parse, then prompts
    /// again.
    pub fn read_parsed<T: FromStr>(&mut self, prompt: &str, invalid: &str) -> io::Result<Option<T>> {
        self.read_validated(prompt, invalid, |_| Ok(()))
    }

    /// Read until the trimmed line parses as `T` and passes `check`
    ///
    /// A parse failure prints `invalid`; a failed check prints the message
    /// returned by `check`. Either way the prompt is repeated.
    pub fn read_validated<T, F>(
        &mut self,
        prompt: &str,
        invalid: &str,
        check: F,
    ) -> io::Result<Option<T>>
    where
        T: FromStr,
        F: Fn(&T) -> Result<(), String>,
    {
        self.read_with(prompt, |text| {
            let value = text.parse::<T>().map_err(|_| invalid.to_string())?;
            check(&value)?;
            Ok(value)
        })
    }

    /// Read until `parse` accepts the trimmed line
    ///
    /// Every rejection message returned by `parse` is printed before the
    /// prompt is repeated.
    pub fn read_with<T, F>(&mut self, prompt: &str, parse: F) -> io::Result<Option<T>>
    where
        F: Fn(&str) -> Result<T, String>,
    {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };

            match parse(line.trim()) {
                Ok(value) => return Ok(Some(value)),
                Err(message) => self.say(message)?,
            }
        }
    }
}

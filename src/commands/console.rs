//! Line-oriented prompt/response I/O for the interactive commands

use std::io::{self, BufRead, Write};

/// Prompts on a writer and reads trimmed lines from a reader
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console over the process stdin/stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a prompt and read one line
    ///
    /// Returns `None` at end of input (Ctrl+D).
    ///
    /// # Errors
    /// Returns an error if writing the prompt or reading the line fails.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Prompt until `parse` accepts the line, printing each rejection
    ///
    /// Returns `None` at end of input.
    ///
    /// # Errors
    /// Returns an error on I/O failure.
    pub fn prompt_until<T, E, F>(&mut self, prompt: &str, mut parse: F) -> io::Result<Option<T>>
    where
        E: std::fmt::Display,
        F: FnMut(&str) -> Result<T, E>,
    {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };

            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.output, "Incorrect input. {e}. Try once more.")?,
            }
        }
    }

    /// Writer for free-form output
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the console, returning the writer
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn prompt_trims_lines() {
        let mut console = console("  hello \n");
        assert_eq!(console.prompt("Say").unwrap(), Some("hello".to_string()));

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "Say: ");
    }

    #[test]
    fn prompt_reports_end_of_input() {
        let mut console = console("");
        assert_eq!(console.prompt("Say").unwrap(), None);
    }

    #[test]
    fn prompt_until_retries() {
        let mut console = console("x\n0\n7\n");
        let value = console
            .prompt_until("Number", |s| match s.parse::<u8>() {
                Ok(0) => Err("zero".to_string()),
                Ok(n) => Ok(n),
                Err(e) => Err(e.to_string()),
            })
            .unwrap();
        assert_eq!(value, Some(7));

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output.matches("Try once more").count(), 2);
    }

    #[test]
    fn prompt_until_stops_at_end_of_input() {
        let mut console = console("bad\n");
        let value = console
            .prompt_until("Number", |s| s.parse::<u8>())
            .unwrap();
        assert_eq!(value, None);
    }
}

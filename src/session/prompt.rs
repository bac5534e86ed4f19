use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Line-oriented prompting over any reader/writer pair.
///
/// Every prompt returns `None` once the input is exhausted, so callers can
/// end a loop cleanly on Ctrl-D or a closed pipe.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line of output.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write output")
    }

    /// Prompt user with a message and return their trimmed input.
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt with a default value. Returns the default if input is empty.
    pub fn prompt_with_default(&mut self, message: &str, default: &str) -> Result<Option<String>> {
        let input = if default.is_empty() {
            self.prompt(&format!("{}: ", message))?
        } else {
            self.prompt(&format!("{} [{}]: ", message, default))?
        };
        Ok(input.map(|s| if s.is_empty() { default.to_string() } else { s }))
    }

    /// Prompt with a yes/no question, asking again on unrecognised input.
    pub fn prompt_yes_no(&mut self, message: &str, default_yes: bool) -> Result<Option<bool>> {
        let hint = if default_yes { "Y/n" } else { "y/N" };
        loop {
            let Some(input) = self.prompt(&format!("{} [{}]: ", message, hint))? else {
                return Ok(None);
            };
            match input.to_lowercase().as_str() {
                "" => return Ok(Some(default_yes)),
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                _ => self.say("  Please answer y or n.")?,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

//! Line-based prompts.

use std::io::{BufRead, Write};

use anyhow::Result;

/// Reads answers from `input` and writes questions to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Where questions and results are written.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Ask a question and read one line, without its line terminator.
    ///
    /// Returns `None` at end of input.
    pub fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\r', '\n']);
        Ok(Some(trimmed.to_string()))
    }

    /// Ask a yes/no question until the answer is `y`, `n` or empty.
    ///
    /// Case is ignored and an empty answer means `default`. Returns `None`
    /// at end of input.
    pub fn confirm(&mut self, question: &str, default: bool) -> Result<Option<bool>> {
        loop {
            let Some(answer) = self.ask(question)? else {
                return Ok(None);
            };
            match parse_yes_no(&answer, default) {
                Some(choice) => return Ok(Some(choice)),
                None => writeln!(self.output, "Please enter y or n.\n")?,
            }
        }
    }
}

/// `y`/`n` in any case, or empty for `default`. Anything else is `None`.
pub fn parse_yes_no(answer: &str, default: bool) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        "" => Some(default),
        _ => None,
    }
}

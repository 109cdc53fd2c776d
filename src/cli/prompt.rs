//! Validated console input
//!
//! Reads primitive values from a line-based reader, re-prompting until the
//! input parses. End of input is reported as `None` so the caller can end the
//! session cleanly.

use std::io::{BufRead, Write};

use crate::error::TrackerResult;
use crate::models::Amount;

/// Shown when a number was expected but something else was entered
pub const RETRY_NUMBER: &str = "Invalid input. Please enter a number: ";

/// Line-based prompter over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer used for prompts and messages
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Read one line without its line ending; `None` at end of input
    pub fn read_line(&mut self) -> TrackerResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(&['\n', '\r'][..]);
        Ok(Some(trimmed.to_string()))
    }

    fn show(&mut self, prompt: &str) -> TrackerResult<()> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(())
    }

    /// Prompt for free text (may be empty)
    pub fn prompt_string(&mut self, prompt: &str) -> TrackerResult<Option<String>> {
        self.show(prompt)?;
        self.read_line()
    }

    /// Prompt until the input parses as an amount
    pub fn prompt_amount(&mut self, prompt: &str) -> TrackerResult<Option<Amount>> {
        self.prompt_parsed(prompt, |line| Amount::parse(line).ok())
    }

    /// Prompt until the input parses as a whole number
    pub fn prompt_number(&mut self, prompt: &str) -> TrackerResult<Option<usize>> {
        self.prompt_parsed(prompt, |line| line.trim().parse().ok())
    }

    fn prompt_parsed<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> TrackerResult<Option<T>> {
        self.show(prompt)?;
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(value) = parse(&line) {
                return Ok(Some(value));
            }
            self.show(RETRY_NUMBER)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(p: &Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.output.clone()).unwrap()
    }

    #[test]
    fn test_prompt_amount_retries_until_valid() {
        let mut p = prompter("abc\n\n12.50\n");
        let amount = p.prompt_amount("Amount: ").unwrap();

        assert_eq!(amount, Some(Amount::new(12.5)));
        assert_eq!(
            written(&p),
            format!("Amount: {}{}", RETRY_NUMBER, RETRY_NUMBER)
        );
    }

    #[test]
    fn test_prompt_amount_accepts_negative() {
        let mut p = prompter("-3\n");
        assert_eq!(p.prompt_amount("> ").unwrap(), Some(Amount::new(-3.0)));
    }

    #[test]
    fn test_prompt_number() {
        let mut p = prompter("x\n 4 \n");
        assert_eq!(p.prompt_number("Choice: ").unwrap(), Some(4));
    }

    #[test]
    fn test_eof_returns_none() {
        let mut p = prompter("oops\n");
        assert_eq!(p.prompt_number("Choice: ").unwrap(), None);

        let mut p = prompter("");
        assert_eq!(p.prompt_string("Text: ").unwrap(), None);
    }

    #[test]
    fn test_prompt_string_strips_line_ending() {
        let mut p = prompter("weekly groceries\r\n\n");
        assert_eq!(
            p.prompt_string("Desc: ").unwrap(),
            Some("weekly groceries".to_string())
        );
        assert_eq!(p.prompt_string("Desc: ").unwrap(), Some(String::new()));
    }
}

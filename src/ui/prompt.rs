use std::io::{BufRead, Write};
use std::num::NonZeroU32;

use tracing::debug;

use crate::error::PromptError;

use super::menu::MenuChoice;

const MENU_RETRY: &str = "Invalid input. Please choose a number between 1 and 4: ";
const QUANTITY_RETRY: &str = "Invalid input. Please enter a positive integer: ";

/// Line-oriented question/answer adapter over any input source and output
/// sink, so the menu can be driven by a terminal or by a scripted buffer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    max_attempts: Option<u32>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// `max_attempts` bounds consecutive invalid answers to one question;
    /// `None` keeps asking until the input closes.
    pub fn new(input: R, output: W, max_attempts: Option<u32>) -> Self {
        Self {
            input,
            output,
            max_attempts,
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Ask for a free-form line. Empty answers are accepted as-is; only the
    /// line terminator is stripped.
    pub fn line(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.show(prompt)?;
        self.next_line()
    }

    /// Ask for a strictly positive integer, re-asking on anything else. The
    /// question is shown again after each complaint.
    pub fn positive(&mut self, prompt: &str) -> Result<NonZeroU32, PromptError> {
        self.ask(prompt, QUANTITY_RETRY, true, |answer| {
            answer.parse::<NonZeroU32>().ok()
        })
    }

    /// Ask for a main menu entry. The menu itself is printed by the caller.
    pub fn menu_choice(&mut self, prompt: &str) -> Result<MenuChoice, PromptError> {
        self.ask(prompt, MENU_RETRY, false, MenuChoice::parse)
    }

    /// Blank answers are skipped silently and do not count as attempts.
    fn ask<T>(
        &mut self,
        prompt: &str,
        retry: &str,
        repeat_prompt: bool,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, PromptError> {
        self.show(prompt)?;
        let mut failures = 0u32;
        loop {
            let answer = self.next_line()?;
            let answer = answer.trim();
            if answer.is_empty() {
                continue;
            }
            if let Some(value) = parse(answer) {
                return Ok(value);
            }

            failures += 1;
            debug!(answer, failures, "rejected answer");
            if let Some(max) = self.max_attempts {
                if failures >= max {
                    return Err(PromptError::TooManyAttempts(max));
                }
            }
            self.show(retry)?;
            if repeat_prompt {
                self.show(prompt)?;
            }
        }
    }

    fn show(&mut self, prompt: &str) -> Result<(), PromptError> {
        write!(self.output, "{prompt}").map_err(PromptError::Write)?;
        self.output.flush().map_err(PromptError::Write)
    }

    fn next_line(&mut self) -> Result<String, PromptError> {
        let mut buf = String::new();
        let read = self
            .input
            .read_line(&mut buf)
            .map_err(PromptError::Read)?;
        if read == 0 {
            return Err(PromptError::Closed);
        }
        let trimmed_len = buf.trim_end_matches(['\r', '\n']).len();
        buf.truncate(trimmed_len);
        Ok(buf)
    }
}

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::{InventoryError, PromptError};
use crate::inventory::{Inventory, Outcome};

use super::menu::MenuChoice;
use super::prompt::Prompter;
use super::terminal::{paint, Tone};

const WELCOME: &str = "Welcome to the Library System.";
const FAREWELL: &str = "Exiting Library System. Goodbye!";
const MENU_TITLE: &str = "======== Library Menu ========";
const MENU_PROMPT: &str = "Choose an option: ";
const TITLE_PROMPT: &str = "Enter book title: ";

/// One interactive run of the menu against a borrowed inventory. The session
/// owns the input and output handles; dropping it releases them.
pub struct Session<'a, R, W> {
    inventory: &'a mut Inventory,
    prompter: Prompter<R, W>,
    settings: Settings,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(inventory: &'a mut Inventory, input: R, output: W, settings: Settings) -> Self {
        Self {
            inventory,
            prompter: Prompter::new(input, output, settings.max_attempts),
            settings,
        }
    }

    /// Drive the menu until the user picks Exit or the input runs out. Only
    /// I/O failures on the underlying handles are returned as errors.
    pub fn run(&mut self) -> Result<()> {
        info!("session started");
        self.say(WELCOME)?;

        loop {
            self.show_menu()?;
            let choice = match self.prompter.menu_choice(MENU_PROMPT) {
                Ok(choice) => choice,
                Err(err) => {
                    self.interrupted(err)?;
                    break;
                }
            };
            debug!(choice = choice.number(), "menu choice");

            let gathered = match choice {
                MenuChoice::Add => self.add_book(),
                MenuChoice::Borrow => self.borrow_book(),
                MenuChoice::Return => self.return_book(),
                MenuChoice::Exit => break,
            };
            match gathered {
                Ok(result) => self.report(result)?,
                Err(PromptError::TooManyAttempts(_)) => {
                    self.say_styled("Operation cancelled.", Tone::Notice)?;
                }
                Err(err) => {
                    self.interrupted(err)?;
                    break;
                }
            }
        }

        self.say(FAREWELL)?;
        info!(titles = self.inventory.len(), "session finished");
        Ok(())
    }

    fn add_book(&mut self) -> Result<Result<Outcome, InventoryError>, PromptError> {
        self.header("=== Add a New Book ===")?;
        let title = self.prompter.line(TITLE_PROMPT)?;
        let author = self.prompter.line("Enter book author: ")?;
        let quantity = self.prompter.positive("Enter quantity: ")?;
        Ok(Ok(self.inventory.add_or_update(&title, &author, quantity)))
    }

    fn borrow_book(&mut self) -> Result<Result<Outcome, InventoryError>, PromptError> {
        self.header("=== Borrow a Book ===")?;
        let title = self.prompter.line(TITLE_PROMPT)?;
        let quantity = self.prompter.positive("Enter number of books to borrow: ")?;
        Ok(self.inventory.borrow(&title, quantity))
    }

    fn return_book(&mut self) -> Result<Result<Outcome, InventoryError>, PromptError> {
        self.header("=== Return a Book ===")?;
        let title = self.prompter.line(TITLE_PROMPT)?;
        let quantity = self.prompter.positive("Enter number of books to return: ")?;
        Ok(self.inventory.return_copies(&title, quantity))
    }

    /// Wind down after a prompt gave up. End of input and an exhausted menu
    /// bound end the session quietly; I/O errors propagate.
    fn interrupted(&mut self, err: PromptError) -> Result<()> {
        match err {
            PromptError::Read(source) => Err(source).context("failed to read user input"),
            PromptError::Write(source) => Err(source).context("failed to write output"),
            PromptError::Closed => {
                info!("input closed");
                // The last prompt left the cursor mid-line.
                writeln!(self.prompter.output()).context("failed to write output")
            }
            PromptError::TooManyAttempts(max) => {
                info!(max, "too many invalid menu answers");
                writeln!(self.prompter.output()).context("failed to write output")
            }
        }
    }

    fn report(&mut self, result: Result<Outcome, InventoryError>) -> Result<()> {
        match result {
            Ok(outcome) => self.say_styled(&outcome.to_string(), Tone::Success),
            Err(err) => self.say_styled(&format!("Error: {err}"), Tone::Error),
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        let out = self.prompter.output();
        writeln!(out).context("failed to write menu")?;
        writeln!(out, "{MENU_TITLE}").context("failed to write menu")?;
        for choice in MenuChoice::ALL {
            writeln!(out, "{}. {}", choice.number(), choice.label())
                .context("failed to write menu")?;
        }
        Ok(())
    }

    fn header(&mut self, text: &str) -> Result<(), PromptError> {
        writeln!(self.prompter.output(), "\n{text}").map_err(PromptError::Write)
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.prompter.output(), "{line}").context("failed to write output")
    }

    fn say_styled(&mut self, line: &str, tone: Tone) -> Result<()> {
        let painted = paint(line, tone, self.settings.color);
        self.say(&painted)
    }
}

//! Command-line flags and the plain settings value the session consumes.

use std::io::{self, IsTerminal};

use clap::Parser;

/// Filter used when neither `RUST_LOG` nor `--log-level` is given. Kept quiet
/// so diagnostics stay out of the way of the menu.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Interactive inventory tracker for a small book catalogue.
#[derive(Debug, Parser)]
#[command(name = "library-inventory", version, about)]
pub struct Cli {
    /// Print outcome lines without colour.
    #[arg(long, env = "LIBRARY_NO_COLOR")]
    pub no_color: bool,

    /// Give up on a prompt after this many invalid answers in a row.
    #[arg(long, env = "LIBRARY_MAX_ATTEMPTS", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: Option<u32>,

    /// Tracing filter used when RUST_LOG is unset (e.g. `info`, `library_inventory=debug`).
    #[arg(long, env = "LIBRARY_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_level: String,
}

/// Runtime knobs for the menu session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub color: bool,
    /// `None` keeps re-prompting until a valid answer or end of input.
    pub max_attempts: Option<u32>,
}

impl Cli {
    /// Resolve the flags against the current terminal. Colour is only enabled
    /// when stdout is a terminal.
    pub fn settings(&self) -> Settings {
        Settings {
            color: !self.no_color && io::stdout().is_terminal(),
            max_attempts: self.max_attempts,
        }
    }
}

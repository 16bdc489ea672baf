//! Binary entry point: parse flags, start logging, and run the menu against a
//! fresh in-memory inventory until the user exits.
use std::io;

use clap::Parser;
use library_inventory::{logging, Cli, Inventory, Session};

/// Returning normally (status 0) is the only exit path besides an I/O failure
/// on the terminal, which `anyhow` reports on stderr.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let mut inventory = Inventory::new();
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    Session::new(&mut inventory, stdin, stdout, cli.settings()).run()
}

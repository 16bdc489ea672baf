use std::io::{self, BufReader, Cursor, Read, Write};

use library_inventory::{Inventory, Session, Settings};

fn run_script(inventory: &mut Inventory, script: &str, max_attempts: Option<u32>) -> String {
    let mut output = Vec::new();
    let settings = Settings {
        color: false,
        max_attempts,
    };
    Session::new(inventory, Cursor::new(script), &mut output, settings)
        .run()
        .unwrap();
    String::from_utf8(output).unwrap()
}

fn quantity(inventory: &Inventory, title: &str) -> u32 {
    inventory.get(title).unwrap().quantity()
}

#[test]
fn dune_walkthrough_through_the_menu() {
    let mut inventory = Inventory::new();
    let script = "1\nDune\nHerbert\n3\n\
                  2\nDune\n5\n\
                  2\nDune\n2\n\
                  3\nDune\n4\n\
                  2\nUnknown\n1\n\
                  4\n";
    let transcript = run_script(&mut inventory, script, None);

    assert!(transcript.starts_with("Welcome to the Library System.\n"));
    assert!(transcript
        .contains("Successfully added/updated book: \"Dune\" by Herbert (Quantity: 3)\n"));
    assert!(transcript.contains("Error: Not enough copies available to borrow.\n"));
    assert!(transcript.contains("Successfully borrowed 2 copy(s) of \"Dune\".\n"));
    assert!(transcript.contains("Successfully returned 4 copy(s) of \"Dune\".\n"));
    assert!(transcript.contains("Error: Book not found in library.\n"));
    assert!(transcript.ends_with("Exiting Library System. Goodbye!\n"));

    assert_eq!(quantity(&inventory, "Dune"), 5);
    assert_eq!(inventory.len(), 1);
}

#[test]
fn menu_and_flow_prompts_are_shown() {
    let mut inventory = Inventory::new();
    let transcript = run_script(&mut inventory, "1\nEmma\nAusten\n2\n4\n", None);

    let menu = "\n======== Library Menu ========\n\
                1. Add Books\n\
                2. Borrow Books\n\
                3. Return Books\n\
                4. Exit\n\
                Choose an option: ";
    assert_eq!(transcript.matches(menu).count(), 2);
    assert!(transcript.contains(
        "\n=== Add a New Book ===\nEnter book title: Enter book author: Enter quantity: "
    ));
}

#[test]
fn invalid_menu_answers_are_reprompted() {
    let mut inventory = Inventory::new();
    let transcript = run_script(&mut inventory, "0\nfive\n5\n4\n", None);

    assert_eq!(
        transcript
            .matches("Invalid input. Please choose a number between 1 and 4: ")
            .count(),
        3
    );
    assert!(transcript.ends_with("Exiting Library System. Goodbye!\n"));
}

#[test]
fn invalid_quantities_are_reprompted() {
    let mut inventory = Inventory::new();
    let transcript = run_script(&mut inventory, "1\nEmma\nAusten\nmany\n0\n-2\n2\n4\n", None);

    assert_eq!(
        transcript
            .matches("Invalid input. Please enter a positive integer: ")
            .count(),
        3
    );
    assert_eq!(quantity(&inventory, "Emma"), 2);
}

#[test]
fn restock_keeps_first_author() {
    let mut inventory = Inventory::new();
    let transcript = run_script(
        &mut inventory,
        "1\nEmma\nJane Austen\n1\n1\nEmma\nSomebody\n2\n4\n",
        None,
    );

    assert!(transcript
        .contains("Successfully added/updated book: \"Emma\" by Jane Austen (Quantity: 3)\n"));
    assert_eq!(inventory.get("Emma").unwrap().author(), "Jane Austen");
}

#[test]
fn empty_title_and_author_are_accepted() {
    let mut inventory = Inventory::new();
    let transcript = run_script(&mut inventory, "1\n\n\n1\n4\n", None);

    assert!(transcript.contains("Successfully added/updated book: \"\" by  (Quantity: 1)\n"));
    assert_eq!(quantity(&inventory, ""), 1);
}

#[test]
fn end_of_input_ends_the_session() {
    let mut inventory = Inventory::new();
    let transcript = run_script(&mut inventory, "1\nDune\nHerbert\n", None);

    assert!(inventory.is_empty());
    assert!(transcript.ends_with("Enter quantity: \nExiting Library System. Goodbye!\n"));
}

#[test]
fn attempt_bound_cancels_the_operation() {
    let mut inventory = Inventory::new();
    let transcript = run_script(
        &mut inventory,
        "1\nDune\nHerbert\nx\ny\n1\nDune\nHerbert\n2\n4\n",
        Some(2),
    );

    assert_eq!(transcript.matches("Operation cancelled.\n").count(), 1);
    assert_eq!(quantity(&inventory, "Dune"), 2);
}

#[test]
fn attempt_bound_at_the_menu_ends_the_session() {
    let mut inventory = Inventory::new();
    let transcript = run_script(&mut inventory, "9\n9\n9\n1\n", Some(3));

    assert!(transcript.ends_with("\nExiting Library System. Goodbye!\n"));
    assert!(!transcript.contains("=== Add a New Book ==="));
}

#[test]
fn inventory_outlives_the_session() {
    let mut inventory = Inventory::new();
    run_script(&mut inventory, "1\nDune\nHerbert\n3\n4\n", None);
    run_script(&mut inventory, "2\nDune\n1\n4\n", None);

    assert_eq!(quantity(&inventory, "Dune"), 2);
}

#[test]
fn quantity_question_is_repeated_after_complaint() {
    let mut inventory = Inventory::new();
    let transcript = run_script(&mut inventory, "1\nDune\nHerbert\nabc\n3\n4\n", None);

    assert!(transcript.contains(
        "Enter quantity: Invalid input. Please enter a positive integer: Enter quantity: \
         Successfully added/updated book"
    ));
    assert_eq!(quantity(&inventory, "Dune"), 3);
}

#[test]
fn blank_menu_lines_are_ignored() {
    let mut inventory = Inventory::new();
    let transcript = run_script(&mut inventory, "\n  \n4\n", None);

    assert!(!transcript.contains("Invalid input"));
    assert!(transcript.ends_with("Exiting Library System. Goodbye!\n"));
}

/// Accepts writes until `trigger` shows up in a chunk, then fails.
struct BrokenPipeAt {
    trigger: &'static str,
}

impl Write for BrokenPipeAt {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if String::from_utf8_lossy(buf).contains(self.trigger) {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout went away"));
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct FailingInput;

impl Read for FailingInput {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "terminal detached"))
    }
}

fn quiet() -> Settings {
    Settings {
        color: false,
        max_attempts: None,
    }
}

#[test]
fn failed_prompt_write_is_reported_as_write_error() {
    let mut inventory = Inventory::new();
    let output = BrokenPipeAt {
        trigger: "Choose an option: ",
    };
    let err = Session::new(&mut inventory, Cursor::new("4\n"), output, quiet())
        .run()
        .unwrap_err();

    assert_eq!(err.to_string(), "failed to write output");
    let source = err.downcast_ref::<io::Error>().unwrap();
    assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn failed_header_write_is_reported_as_write_error() {
    let mut inventory = Inventory::new();
    let output = BrokenPipeAt {
        trigger: "=== Borrow a Book ===",
    };
    let err = Session::new(&mut inventory, Cursor::new("2\nDune\n1\n"), output, quiet())
        .run()
        .unwrap_err();

    assert_eq!(err.to_string(), "failed to write output");
}

#[test]
fn failed_read_is_reported_as_read_error() {
    let mut inventory = Inventory::new();
    let err = Session::new(
        &mut inventory,
        BufReader::new(FailingInput),
        Vec::new(),
        quiet(),
    )
    .run()
    .unwrap_err();

    assert_eq!(err.to_string(), "failed to read user input");
    let source = err.downcast_ref::<io::Error>().unwrap();
    assert_eq!(source.kind(), io::ErrorKind::Other);
}

//! Text front-end: the numbered menu, the prompt adapter, and the session loop
//! that wires them to an [`Inventory`](crate::Inventory).

mod menu;
mod prompt;
mod session;
mod terminal;

pub use menu::MenuChoice;
pub use prompt::Prompter;
pub use session::Session;

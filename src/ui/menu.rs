/// Entries of the main menu, numbered as the user types them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Borrow,
    Return,
    Exit,
}

impl MenuChoice {
    pub(crate) const ALL: [MenuChoice; 4] = [
        MenuChoice::Add,
        MenuChoice::Borrow,
        MenuChoice::Return,
        MenuChoice::Exit,
    ];

    /// Map the typed answer (already trimmed) to a menu entry. Anything other
    /// than the digits 1 through 4 is rejected.
    pub fn parse(input: &str) -> Option<Self> {
        match input.parse::<u8>().ok()? {
            1 => Some(MenuChoice::Add),
            2 => Some(MenuChoice::Borrow),
            3 => Some(MenuChoice::Return),
            4 => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::Borrow => 2,
            MenuChoice::Return => 3,
            MenuChoice::Exit => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Books",
            MenuChoice::Borrow => "Borrow Books",
            MenuChoice::Return => "Return Books",
            MenuChoice::Exit => "Exit",
        }
    }
}

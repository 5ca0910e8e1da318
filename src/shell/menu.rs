/// Menu banner printed before every prompt.
pub const MENU: &str = "\n--- Electronics Inventory Management ---\n\
1. Add Component\n\
2. Display Components\n\
3. Remove Last Added Component\n\
4. Display Components in Order (Queue)\n\
5. Exit";

pub const PROMPT: &str = "Choose an option: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Display,
    RemoveLast,
    DisplayOrdered,
    Exit,
}

impl MenuChoice {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Add),
            2 => Some(Self::Display),
            3 => Some(Self::RemoveLast),
            4 => Some(Self::DisplayOrdered),
            5 => Some(Self::Exit),
            _ => None,
        }
    }

    /// Parses a raw menu token; anything that is not 1..=5 is `None`.
    pub fn parse(token: &str) -> Option<Self> {
        token.parse::<i64>().ok().and_then(Self::from_code)
    }
}

//! Interactive menu loop over one [`Inventory`].

/// Token and line reader for terminal input.
pub mod input;
/// Menu text and choice parsing.
pub mod menu;

use std::{
    fmt,
    io::{self, BufRead, Write},
    str::FromStr,
};

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::{
    component::ComponentDraft,
    config::{ConfigError, ShellConfig},
    inventory::{Inventory, InventoryError},
    render,
    types::{ComponentId, Quantity},
};

use self::{
    input::InputReader,
    menu::{MENU, MenuChoice, PROMPT},
};

/// Fatal shell failures; everything else is reported inline and the loop continues.
#[derive(Debug)]
pub enum ShellError {
    /// Terminal read or write failed.
    Io(io::Error),
    /// Configuration could not be loaded.
    Config(ConfigError),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "terminal i/o failed: {err}"),
            Self::Config(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for ShellError {}

impl From<io::Error> for ShellError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ConfigError> for ShellError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

/// Result alias for shell operations.
pub type ShellResult<T> = Result<T, ShellError>;

/// Whether the menu loop should keep going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Show the menu again.
    Continue,
    /// Leave the loop.
    Stop,
}

/// Menu-driven session reading from `R` and writing to `W`.
pub struct Shell<R, W> {
    input: InputReader<R>,
    out: W,
    inventory: Inventory,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a session with an empty inventory.
    pub fn new(input: R, out: W, config: ShellConfig) -> Self {
        Self {
            input: InputReader::new(input),
            out,
            inventory: Inventory::new(),
            config,
        }
    }

    /// Runs until option 5 is chosen or input ends.
    pub fn run(&mut self) -> ShellResult<()> {
        info!("inventory session started");
        loop {
            writeln!(self.out, "{MENU}")?;
            self.prompt(PROMPT)?;

            let Some(token) = self.input.next_token()? else {
                warn!("input closed before exit was chosen");
                break;
            };

            let flow = match MenuChoice::parse(&token) {
                Some(choice) => self.dispatch(choice)?,
                None => {
                    debug!(token = %token, "invalid menu choice");
                    writeln!(self.out, "Invalid option. Please try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Stop {
                break;
            }
        }
        self.out.flush()?;
        info!(remaining = self.inventory.len(), "inventory session ended");
        Ok(())
    }

    /// Executes one menu action.
    pub fn dispatch(&mut self, choice: MenuChoice) -> ShellResult<Flow> {
        match choice {
            MenuChoice::Add => self.add_component(),
            MenuChoice::Display => self.display_components().map(|()| Flow::Continue),
            MenuChoice::RemoveLast => self.remove_last_component().map(|()| Flow::Continue),
            MenuChoice::DisplayOrdered => self.display_in_queue_order().map(|()| Flow::Continue),
            MenuChoice::Exit => {
                writeln!(self.out, "Exiting the program. Goodbye!")?;
                Ok(Flow::Stop)
            }
        }
    }

    /// Prompts for the five fields and inserts the component.
    ///
    /// The id is checked for duplicates before the remaining fields are asked.
    pub fn add_component(&mut self) -> ShellResult<Flow> {
        writeln!(self.out)?;
        writeln!(self.out, "--- Add New Component ---")?;

        let Some(id) = self.prompt_parsed::<ComponentId, _>("Enter component ID: ", "ID", |_| true)?
        else {
            return Ok(Flow::Stop);
        };
        if self.inventory.contains(id) {
            debug!(id, "duplicate id entered");
            writeln!(self.out, "{}", InventoryError::DuplicateId(id))?;
            return Ok(Flow::Continue);
        }

        let Some(name) = self.prompt_text("Enter component name: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(price) =
            self.prompt_parsed::<Decimal, _>("Enter component price: ", "price", |p| !p.is_sign_negative())?
        else {
            return Ok(Flow::Stop);
        };
        let Some(quantity) =
            self.prompt_parsed::<Quantity, _>("Enter component quantity: ", "quantity", |_| true)?
        else {
            return Ok(Flow::Stop);
        };
        let Some(description) = self.prompt_text("Enter component description: ")? else {
            return Ok(Flow::Stop);
        };

        let draft = ComponentDraft {
            id,
            name,
            price,
            quantity,
            description,
        }
        .bounded(self.config.name_max_len, self.config.description_max_len);
        let name = draft.name.clone();

        match self.inventory.add(draft) {
            Ok(()) => writeln!(self.out, "Component '{name}' added successfully!")?,
            Err(err) => writeln!(self.out, "{err}")?,
        }
        Ok(Flow::Continue)
    }

    /// Prints the inventory newest first.
    pub fn display_components(&mut self) -> ShellResult<()> {
        render::write_table(&mut self.out, self.inventory.records(), &self.config)?;
        Ok(())
    }

    /// Pops the recency stack and removes that component from the store.
    pub fn remove_last_component(&mut self) -> ShellResult<()> {
        match self.inventory.remove_last() {
            Ok(rec) => writeln!(self.out, "Removed Component: ID: {}, Name: {}", rec.id, rec.name)?,
            Err(err) => writeln!(self.out, "{err}")?,
        }
        Ok(())
    }

    /// Prints the inventory oldest first through a fresh traversal queue.
    pub fn display_in_queue_order(&mut self) -> ShellResult<()> {
        let queue = self.inventory.ordered_queue();
        render::write_queue(&mut self.out, queue, &self.config)?;
        Ok(())
    }

    /// Inventory owned by this session.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Consumes the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    fn prompt_text(&mut self, text: &str) -> ShellResult<Option<String>> {
        self.prompt(text)?;
        Ok(self.input.rest_of_line()?)
    }

    fn prompt_parsed<T, F>(&mut self, text: &str, field: &str, accept: F) -> ShellResult<Option<T>>
    where
        T: FromStr,
        F: Fn(&T) -> bool,
    {
        loop {
            self.prompt(text)?;
            let Some(token) = self.input.next_token()? else {
                return Ok(None);
            };
            match token.parse::<T>() {
                Ok(value) if accept(&value) => return Ok(Some(value)),
                _ => {
                    debug!(field, token = %token, "rejected numeric input");
                    writeln!(self.out, "Invalid input. Please enter a valid {field}.")?;
                }
            }
        }
    }
}

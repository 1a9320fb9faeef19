//! Interactive address book session.
//!
//! Reads one command per line from stdin. The address book only lives for the
//! duration of the session.
//!
//! ```text
//! > find 1234 5
//! [5] Damrak 5, 1234 Amsterdam
//! > select 5
//! > name Ada Lovelace
//! > add
//! Added 5-Ada-Lovelace
//! ```

use address_book_client::{AddressBookApp, LookupClient, SearchStatus};
use address_book_core::{AddressBook, AddressField, EntryId};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

/// One line of user input, parsed as if its first word were a program name.
#[derive(Debug, Parser)]
#[command(multicall = true, subcommand_value_name = "COMMAND", subcommand_help_heading = "Commands")]
struct Line {
    #[command(subcommand)]
    command: Command,
}

/// A session command.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Look up candidate addresses
    Find {
        postcode: String,
        house_number: String,
    },
    /// Select a candidate by id
    Select { id: String },
    /// Set the person's name
    Name { first: String, last: String },
    /// Set a form field (postCode, houseNumber, firstName, lastName, selectedAddress)
    Set {
        field: String,
        #[arg(required = true, num_args = 1..)]
        value: Vec<String>,
    },
    /// Add the selected address to the book
    Add,
    /// Show the address book
    List,
    /// Remove entries from the book
    Remove { entry_id: String },
    /// Clear all fields, results and errors
    Clear,
    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

impl Command {
    /// Parse one input line.
    ///
    /// # Errors
    ///
    /// Returns clap's error for unknown commands and bad arguments. `help`
    /// also comes back as an error carrying the rendered help text.
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        Line::try_parse_from(line.split_whitespace()).map(|parsed| parsed.command)
    }
}

/// Run a command against the application and return the lines to show.
pub async fn execute<C: LookupClient>(app: &mut AddressBookApp<C>, command: Command) -> Vec<String> {
    match command {
        Command::Find {
            postcode,
            house_number,
        } => {
            app.set_field(AddressField::PostCode, postcode);
            app.set_field(AddressField::HouseNumber, house_number);
            app.submit_address().await;

            let state = app.search().state().await;
            match state.status() {
                SearchStatus::Success => state
                    .addresses()
                    .iter()
                    .map(|address| format!("[{}] {address}", address.id))
                    .collect(),
                SearchStatus::Fault => vec!["Lookup failed, is the server running?".to_owned()],
                _ => vec![app.visible_error().await],
            }
        }
        Command::Select { id } => {
            app.select_address(id);
            Vec::new()
        }
        Command::Name { first, last } => {
            app.set_field(AddressField::FirstName, first);
            app.set_field(AddressField::LastName, last);
            Vec::new()
        }
        Command::Set { field, value } => match app.set_named_field(&field, value.join(" ")) {
            Ok(()) => Vec::new(),
            Err(err) => vec![err.to_string()],
        },
        Command::Add => match app.submit_person().await {
            Ok(true) => {
                let added = app.book().select_all().last().map(|entry| entry.id());
                vec![format!(
                    "Added {}",
                    added.map(EntryId::into_inner).unwrap_or_default()
                )]
            }
            Ok(false) => vec!["Already in the address book".to_owned()],
            Err(err) => vec![err.to_string()],
        },
        Command::List => {
            let entries = app.book().select_all();
            if entries.is_empty() {
                return vec!["The address book is empty".to_owned()];
            }
            entries
                .iter()
                .map(|entry| format!("[{}] {entry}", entry.id()))
                .collect()
        }
        Command::Remove { entry_id } => {
            let removed = app.remove_entry(&EntryId::from(entry_id));
            vec![format!("Removed {removed} entries")]
        }
        Command::Clear => {
            app.clear_all().await;
            Vec::new()
        }
        Command::Quit => Vec::new(),
    }
}

/// Run the session until `quit` or end of input.
///
/// # Errors
///
/// Returns an error if stdin cannot be read.
pub async fn run(client: impl LookupClient) -> std::io::Result<()> {
    let mut app = AddressBookApp::new(client, AddressBook::new());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    #[allow(clippy::print_stdout)]
    {
        println!("Address book - type 'help' for commands");
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            match Command::parse_line(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => {
                    for output in execute(&mut app, command).await {
                        println!("{output}");
                    }
                }
                Err(err) => print!("{err}"),
            }
        }
    }

    tracing::debug!(entries = app.book().len(), "Session ended");
    Ok(())
}

//! Address Book CLI - Look up addresses and build an address book.
//!
//! # Usage
//!
//! ```bash
//! # One-shot lookup
//! ab-cli lookup 1234 5
//!
//! # Interactive session (the address book lives until you quit)
//! ab-cli interactive
//!
//! # Point at another server
//! ab-cli --server-url http://lookup.internal:3000 lookup 1234 5
//! ```
//!
//! # Commands
//!
//! - `lookup` - Look up candidates for a postcode and house number
//! - `interactive` - Find, select and add addresses from a prompt

#![cfg_attr(not(test), forbid(unsafe_code))]

use address_book_client::{ClientConfig, HttpLookupClient};
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ab-cli")]
#[command(author, version, about = "Address book CLI tools")]
struct Cli {
    /// Lookup server URL (defaults to `ADDRESS_BOOK_SERVER_URL`)
    #[arg(long, global = true)]
    server_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up candidate addresses
    Lookup {
        /// Postcode (at least 4 digits)
        postcode: String,

        /// House number
        house_number: String,
    },
    /// Start an interactive address book session
    Interactive,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so command output stays clean
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match cli.server_url.as_deref() {
        Some(url) => ClientConfig::parse(url)?,
        None => ClientConfig::from_env()?,
    };
    let client = HttpLookupClient::new(&config)?;

    match cli.command {
        Commands::Lookup {
            postcode,
            house_number,
        } => commands::lookup::run(client, &postcode, &house_number).await?,
        Commands::Interactive => commands::interactive::run(client).await?,
    }
    Ok(())
}

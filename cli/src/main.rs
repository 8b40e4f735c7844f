//! Command-line interface for the Noteful API.
//!
//! This CLI tool provides commands for all note operations:
//! - list: List notes, optionally filtered by a search term
//! - get: Show one note
//! - create: Create a new note
//! - update: Change a note's title and/or content
//! - delete: Delete a note
//!
//! Configuration via environment:
//! - NOTEFUL_URL: Base URL of the Noteful server (default: http://localhost:8080)

mod commands;

use clap::{Parser, Subcommand};

use commands::{
    create::CreateArgs, delete::DeleteArgs, get::GetArgs, list::ListArgs, update::UpdateArgs,
};

/// Noteful CLI
///
/// Manage notes from the command line. Prints JSON by default; pass --human
/// for formatted output.
#[derive(Parser)]
#[command(name = "noteful")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Noteful server URL
    #[arg(
        long,
        env = "NOTEFUL_URL",
        default_value = "http://localhost:8080",
        global = true
    )]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List notes
    List(ListArgs),

    /// Show a note
    Get(GetArgs),

    /// Create a new note
    Create(CreateArgs),

    /// Update an existing note
    Update(UpdateArgs),

    /// Delete a note
    Delete(DeleteArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = reqwest::Client::new();
    let base_url = commands::api_base(&cli.url);

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(&client, &base_url, cli.human, args).await,
        Commands::Get(args) => commands::get::execute(&client, &base_url, cli.human, args).await,
        Commands::Create(args) => {
            commands::create::execute(&client, &base_url, cli.human, args).await
        }
        Commands::Update(args) => {
            commands::update::execute(&client, &base_url, cli.human, args).await
        }
        Commands::Delete(args) => {
            commands::delete::execute(&client, &base_url, cli.human, args).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

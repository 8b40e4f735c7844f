//! CREATE command - Create a new note.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use noteful_core::{NewNote, Note};

use super::{HumanReadable, make_request, output};

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// Title for the new note
    #[arg(long, short = 't')]
    pub title: String,

    /// Body text
    #[arg(long, short = 'c')]
    pub content: Option<String>,
}

/// A note the server just stored.
#[derive(Debug, serde::Serialize)]
#[serde(transparent)]
pub struct CreatedNote(pub Note);

impl HumanReadable for CreatedNote {
    fn print_human(&self) {
        println!("{}", "Note created successfully!".green().bold());
        println!();
        self.0.print_human();
    }
}

/// Execute the create command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: CreateArgs,
) -> Result<()> {
    let request_body = NewNote::new(args.title, args.content);

    let note: Note = make_request(client.post(base_url).json(&request_body)).await?;

    output(&CreatedNote(note), human)
}

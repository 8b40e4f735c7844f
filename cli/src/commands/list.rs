//! LIST command - List notes.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use noteful_core::Note;
use serde::Serialize;

use super::{HumanReadable, make_request, output, truncate};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Only show notes whose title or content contains this text
    #[arg(long, short = 's')]
    pub search: Option<String>,
}

/// Notes returned by the server.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct NoteList(pub Vec<Note>);

impl HumanReadable for NoteList {
    fn print_human(&self) {
        println!("{}", "Notes".green().bold());
        println!("{}", "=".repeat(60));

        if self.0.is_empty() {
            println!("  {}", "(No notes)".dimmed());
            return;
        }

        for note in &self.0 {
            println!(
                "{:>5}  {}  {}",
                note.id.to_string().yellow(),
                truncate(&note.title, 24).bold(),
                truncate(&note.content, 40).dimmed()
            );
        }
    }
}

/// Execute the list command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: ListArgs,
) -> Result<()> {
    let mut request = client.get(base_url);
    if let Some(term) = &args.search {
        request = request.query(&[("searchTerm", term)]);
    }

    let notes: Vec<Note> = make_request(request).await?;
    output(&NoteList(notes), human)
}

//! GET command - Show one note.

use anyhow::Result;
use clap::Args;
use noteful_core::Note;

use super::{make_request, output};

/// Arguments for the get command.
#[derive(Args)]
pub struct GetArgs {
    /// Note ID
    pub id: u64,
}

/// Execute the get command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: GetArgs,
) -> Result<()> {
    let url = format!("{}/{}", base_url, args.id);
    let note: Note = make_request(client.get(&url)).await?;
    output(&note, human)
}

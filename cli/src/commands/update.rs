//! UPDATE command - Change a note's title and/or content.

use anyhow::{Result, bail};
use clap::Args;
use noteful_core::{Note, NotePatch};

use super::{make_request, output};

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// Note ID to update
    pub id: u64,

    /// New title
    #[arg(long, short = 't')]
    pub title: Option<String>,

    /// New body text
    #[arg(long, short = 'c')]
    pub content: Option<String>,
}

/// Execute the update command.
///
/// Only the fields given on the command line are sent, so the others keep
/// their stored values.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: UpdateArgs,
) -> Result<()> {
    let patch = NotePatch {
        title: args.title,
        content: args.content,
    };
    if patch.is_empty() {
        bail!("nothing to update: pass --title and/or --content");
    }

    let url = format!("{}/{}", base_url, args.id);
    let note: Note = make_request(client.put(&url).json(&patch)).await?;

    output(&note, human)
}

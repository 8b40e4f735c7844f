//! Command implementations for the noteful CLI.
//!
//! Each command module provides:
//! - Args struct for clap argument parsing
//! - execute() function that performs the command
//! - Human-readable and JSON output formatting

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use anyhow::Result;
use colored::Colorize;
use noteful_core::Note;
use serde::Serialize;

/// Common error type for HTTP requests.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
}

/// Base URL of the notes collection for a server URL.
pub fn api_base(server_url: &str) -> String {
    format!("{}/api/notes", server_url.trim_end_matches('/'))
}

/// Print output in JSON or human-readable format.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Trait for types that can be printed in human-readable format.
pub trait HumanReadable {
    fn print_human(&self);
}

impl HumanReadable for Note {
    fn print_human(&self) {
        println!("{} {}", format!("#{}", self.id).yellow(), self.title.bold());
        if self.content.is_empty() {
            println!("  {}", "(no content)".dimmed());
        } else {
            for line in self.content.lines() {
                println!("  {}", line);
            }
        }
    }
}

/// Make an HTTP request and decode a JSON response body.
pub async fn make_request<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, CliError> {
    let response = check_status(request.send().await?).await?;
    Ok(response.json::<T>().await?)
}

/// Make an HTTP request that answers without a body.
pub async fn send_request(request: reqwest::RequestBuilder) -> Result<(), CliError> {
    check_status(request.send().await?).await?;
    Ok(())
}

/// Turn a non-success response into a [`CliError::Server`].
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, CliError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(CliError::Server {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Pull the `message` field out of an error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json.get("message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

/// Truncate a string for display, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

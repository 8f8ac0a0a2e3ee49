// github-activity entry point.
// Fetches a user's public GitHub events (cached for a minute per user) and
// prints a one-line summary per event.

mod cache;
mod cli;
mod display;
mod error;
mod fetcher;
mod github;

use std::process;

use chrono::Utc;

use crate::cli::Cli;
use crate::error::Result;
use crate::github::GitHubClient;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_or_exit();

    if let Err(err) = run(cli).await {
        eprintln!("{err}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let client = GitHubClient::new()?;

    let cache_path = cache::cache_path();
    let mut cache = cache::load(&cache_path);
    let now_ms = Utc::now().timestamp_millis();

    let activity = fetcher::user_activity(&client, &mut cache, &cli.username, now_ms).await?;

    if activity.from_cache {
        eprintln!("Using cached data");
    } else {
        // Persist before printing anything, so a write failure produces no
        // partial output.
        cache::save(&cache_path, &cache)?;
    }

    let events = fetcher::filter_events(activity.events, cli.types.as_deref());

    if events.is_empty() {
        println!("No events found");
        return Ok(());
    }

    for event in &events {
        println!("{}", display::format_event(event));
    }

    Ok(())
}

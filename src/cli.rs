// CLI argument definitions.

use clap::Parser;
use clap::error::ErrorKind;

use crate::github::KNOWN_KINDS;

#[derive(Parser, Debug)]
#[command(name = "github-activity")]
#[command(about = "Summarize a GitHub user's recent public activity")]
#[command(after_help = known_kinds_help())]
pub struct Cli {
    /// GitHub username whose public events to fetch
    pub username: String,

    /// Comma-separated list of event types to show (e.g. PushEvent,WatchEvent)
    #[arg(long = "type", value_name = "TYPES", value_delimiter = ',')]
    pub types: Option<Vec<String>>,
}

impl Cli {
    /// Parse arguments, exiting 0 for `--help` and 1 for usage errors.
    /// This is part of the top-level process boundary; nothing below it
    /// terminates the process.
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(err) => {
                let code = match err.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                    _ => 1,
                };
                // clap routes help to stdout and usage errors to stderr.
                let _ = err.print();
                std::process::exit(code);
            }
        }
    }
}

fn known_kinds_help() -> String {
    let mut help = String::from("Known event types:\n");
    for kind in KNOWN_KINDS {
        help.push_str("  ");
        help.push_str(kind.name());
        help.push('\n');
    }
    help
}

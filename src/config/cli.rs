use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_RESULTS_URL: &str =
    "https://www.espncricinfo.com/records/season/team-match-results/2024-2024?trophy=89";
pub const DEFAULT_BASE_URL: &str = "https://www.espncricinfo.com";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the JSON inputs and outputs
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Season results listing that seeds the match list
    #[arg(long, default_value = DEFAULT_RESULTS_URL)]
    pub results_url: String,

    /// Site root used to resolve relative scorecard links and squad pages
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// User-Agent header sent with every page request
    #[arg(long, env = "CRICSCRAPE_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Scrape the season results listing into matchResults.json
    Matches,
    /// Scrape batting tables for every match in matchResults.json
    Batting,
    /// Scrape bowling tables for every match in matchResults.json
    Bowling,
    /// Scrape the tournament squads
    Squads,
    /// Run matches, batting, bowling and squads in order
    All,
}

impl Args {
    /// Arguments for running `command` with every option at its default.
    pub fn with_defaults(command: Command, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            command,
            data_dir: data_dir.into(),
            results_url: DEFAULT_RESULTS_URL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: "info".to_string(),
        }
    }
}

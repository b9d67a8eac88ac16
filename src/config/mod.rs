use crate::config::cli::Args;
use crate::error::{Result, ScrapeError};
use clap::Parser;
use reqwest::Client;
use std::str::FromStr;
use tracing::{info, Level};

pub mod cli;
pub mod teams;

pub struct Config {
    pub args: Args,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Pages are fetched without a request timeout.
    pub fn from_args(args: Args) -> Result<Self> {
        let http_client = Client::builder().user_agent(args.user_agent.as_str()).build()?;

        Ok(Self { args, http_client })
    }

    pub fn log_level(&self) -> Result<Level> {
        Level::from_str(&self.args.log_level)
            .map_err(|_| ScrapeError::Parse(format!("unknown log level {}", self.args.log_level)))
    }

    pub fn ensure_directories(&self) -> Result<()> {
        if !self.args.data_dir.exists() {
            std::fs::create_dir_all(&self.args.data_dir)?;
        }

        info!("Data dir {:?} exists", self.args.data_dir);
        Ok(())
    }
}

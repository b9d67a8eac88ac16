use crate::config::cli::Command;
use crate::config::{teams, Config};
use crate::domain::{MatchRecord, Storage};
use crate::error::Result;
use crate::services::scraping::{BatchOutcome, ScrapingService};
use std::sync::Arc;
use tracing::{info, warn};

pub struct ScorecardService {
    config: Config,
    store: Arc<dyn Storage>,
    scraping: ScrapingService,
}

impl ScorecardService {
    pub fn new(
        config: Config,
        store: Arc<dyn Storage + 'static>,
        scraping: ScrapingService,
    ) -> Self {
        Self {
            config,
            store,
            scraping,
        }
    }

    pub async fn process(&self) -> Result<()> {
        match self.config.args.command {
            Command::Matches => self.scrape_matches().await.map(|_| ()),
            Command::Batting => self.scrape_batting().await,
            Command::Bowling => self.scrape_bowling().await,
            Command::Squads => self.scrape_squads().await,
            Command::All => {
                info!("Starting full scrape");
                self.scrape_matches().await?;
                self.scrape_batting().await?;
                self.scrape_bowling().await?;
                self.scrape_squads().await
            }
        }
    }

    /// The results listing seeds every scorecard flow, so a failure here is
    /// returned instead of being skipped.
    pub async fn scrape_matches(&self) -> Result<Vec<MatchRecord>> {
        let matches = self
            .scraping
            .scrape_matches(&self.config.args.results_url, &self.config.args.base_url)
            .await?;

        self.store.save_match_results(&matches)?;
        info!("Scraped {} matches with scorecard links", matches.len());
        Ok(matches)
    }

    pub async fn scrape_batting(&self) -> Result<()> {
        let matches = self.store.load_match_results()?;
        let outcome = self.scraping.scrape_batting(&matches).await?;

        self.store.save_batting(&outcome.records)?;
        report("Batting summary", &outcome);
        Ok(())
    }

    pub async fn scrape_bowling(&self) -> Result<()> {
        let matches = self.store.load_match_results()?;
        let outcome = self.scraping.scrape_bowling(&matches).await?;

        self.store.save_bowling(&outcome.records)?;
        report("Bowling summary", &outcome);
        Ok(())
    }

    pub async fn scrape_squads(&self) -> Result<()> {
        let outcome = self
            .scraping
            .scrape_squads(&teams::t20_world_cup_2024(), &self.config.args.base_url)
            .await?;

        self.store.save_squads(&outcome.records)?;
        report("Squads", &outcome);
        Ok(())
    }
}

fn report<R>(label: &str, outcome: &BatchOutcome<R>) {
    info!("{} saved with {} records", label, outcome.records.len());
    if !outcome.failures.is_empty() {
        warn!(
            "{} skipped {} pages: {}",
            label,
            outcome.failures.len(),
            outcome.failures.join(", ")
        );
    }
}

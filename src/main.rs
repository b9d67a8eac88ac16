use cricscrape::config::Config;
use cricscrape::error::Result;
use cricscrape::infrastructure::{FileSystemStore, HttpPageFetcher};
use cricscrape::services::{ScorecardService, ScrapingService};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::new()?;
    tracing_subscriber::fmt()
        .with_max_level(config.log_level()?)
        .init();

    config.ensure_directories()?;

    let store = Arc::new(FileSystemStore::new(&config.args.data_dir));
    let scraping = ScrapingService::new(Arc::new(HttpPageFetcher::new(
        config.http_client.clone(),
    )));

    let service = ScorecardService::new(config, store, scraping);
    service.process().await?;

    info!("Scraping completed successfully!");
    Ok(())
}

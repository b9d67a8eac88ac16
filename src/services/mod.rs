pub mod scorecard_service;
pub mod scraping;

pub use scorecard_service::ScorecardService;
pub use scraping::{BatchOutcome, PageJob, ScrapingService};

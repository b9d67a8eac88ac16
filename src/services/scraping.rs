use crate::config::teams::SQUAD_SERIES;
use crate::domain::{BattingRecord, BowlingRecord, MatchRecord, SquadRecord, SquadTeam};
use crate::error::{Result, ScrapeError};
use crate::infrastructure::{
    BattingExtractor, BowlingExtractor, MatchResultsExtractor, PageExtractor, PageFetcher,
    SquadExtractor,
};
use indicatif::{ProgressBar, ProgressStyle};
use scraper::Html;
use std::sync::Arc;
use tracing::{error, info};

/// One page to visit. `key` identifies the page in logs and failure lists.
pub struct PageJob<E> {
    pub key: String,
    pub url: String,
    pub extractor: E,
}

/// Records collected across a batch, in job order, plus the keys of the
/// pages that could not be processed.
#[derive(Debug)]
pub struct BatchOutcome<R> {
    pub records: Vec<R>,
    pub failures: Vec<String>,
}

pub struct ScrapingService {
    fetcher: Arc<dyn PageFetcher>,
}

impl ScrapingService {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        info!("Created new Scraping service");
        Self { fetcher }
    }

    pub async fn scrape_page<E: PageExtractor>(
        &self,
        url: &str,
        extractor: &E,
    ) -> Result<Vec<E::Record>> {
        let body = self.fetcher.fetch(url).await?;
        let document = Html::parse_document(&body);
        Ok(extractor.extract(&document))
    }

    /// Visits every job in order. A failing page is logged and skipped; it
    /// never stops the batch.
    pub async fn scrape_all<E: PageExtractor>(
        &self,
        jobs: Vec<PageJob<E>>,
    ) -> Result<BatchOutcome<E::Record>> {
        let pb = progress_bar(jobs.len())?;
        let mut outcome = BatchOutcome {
            records: Vec::new(),
            failures: Vec::new(),
        };

        for job in jobs {
            pb.set_message(job.key.clone());
            match self.scrape_page(&job.url, &job.extractor).await {
                Ok(records) => {
                    info!("Processed {} records for {}", records.len(), job.key);
                    outcome.records.extend(records);
                }
                Err(e) => {
                    error!("Failed to process {}: {}", job.key, e);
                    outcome.failures.push(job.key);
                }
            }
            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(outcome)
    }

    pub async fn scrape_matches(
        &self,
        results_url: &str,
        base_url: &str,
    ) -> Result<Vec<MatchRecord>> {
        info!("Scraping {}", results_url);
        self.scrape_page(results_url, &MatchResultsExtractor::new(base_url))
            .await
    }

    pub async fn scrape_batting(
        &self,
        matches: &[MatchRecord],
    ) -> Result<BatchOutcome<BattingRecord>> {
        let jobs = scorecard_jobs(matches, |m| BattingExtractor::new(m.title()));
        self.scrape_all(jobs).await
    }

    pub async fn scrape_bowling(
        &self,
        matches: &[MatchRecord],
    ) -> Result<BatchOutcome<BowlingRecord>> {
        let jobs = scorecard_jobs(matches, |m| BowlingExtractor::new(m.title()));
        self.scrape_all(jobs).await
    }

    pub async fn scrape_squads(
        &self,
        teams: &[SquadTeam],
        base_url: &str,
    ) -> Result<BatchOutcome<SquadRecord>> {
        let jobs = teams
            .iter()
            .map(|team| PageJob {
                key: team.name.clone(),
                url: team.squad_url(base_url, SQUAD_SERIES),
                extractor: SquadExtractor,
            })
            .collect();
        self.scrape_all(jobs).await
    }
}

/// Matches without a scorecard link have nothing to visit and are dropped.
fn scorecard_jobs<E>(
    matches: &[MatchRecord],
    extractor: impl Fn(&MatchRecord) -> E,
) -> Vec<PageJob<E>> {
    matches
        .iter()
        .filter(|m| !m.scorecard.is_empty())
        .map(|m| PageJob {
            key: m.scorecard.clone(),
            url: m.scorecard.clone(),
            extractor: extractor(m),
        })
        .collect()
}

fn progress_bar(len: usize) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .map_err(|e| ScrapeError::Other(e.to_string()))?,
    );
    Ok(pb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Serves canned pages and records every URL it was asked for.
    struct CannedFetcher {
        pages: HashMap<String, String>,
        requested: Mutex<Vec<String>>,
    }

    impl CannedFetcher {
        fn new(pages: &[(&str, &str)]) -> Self {
            Self {
                pages: pages
                    .iter()
                    .map(|(url, body)| (url.to_string(), body.to_string()))
                    .collect(),
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PageFetcher for CannedFetcher {
        async fn fetch(&self, url: &str) -> Result<String> {
            self.requested.lock().unwrap().push(url.to_string());
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| ScrapeError::Other(format!("unreachable: {url}")))
        }
    }

    fn batting_page(team: &str, players: &[(&str, &str)]) -> String {
        let rows: String = players
            .iter()
            .map(|(name, runs)| {
                format!(
                    "<tr><td>{name}</td><td>not out</td><td>{runs}</td><td>10</td><td>2</td><td>1</td><td>0</td><td>100.00</td></tr>"
                )
            })
            .collect();
        format!(
            r#"<div><span class="ds-text-title-xs">{team}</span>
            <table class="ci-scorecard-table"><tbody>{rows}<tr><td>Total</td><td></td><td>40</td><td></td><td></td><td></td></tr></tbody></table></div>"#
        )
    }

    fn fixture(team1: &str, team2: &str, scorecard: &str) -> MatchRecord {
        MatchRecord {
            team1: team1.to_string(),
            team2: team2.to_string(),
            scorecard: scorecard.to_string(),
            ..MatchRecord::default()
        }
    }

    #[tokio::test]
    async fn failing_page_is_skipped_and_reported() {
        let fetcher = Arc::new(CannedFetcher::new(&[(
            "https://cricket.test/1",
            batting_page("Oman", &[("Aqib Ilyas", "8"), ("Kashyap Prajapati", "9")]).as_str(),
        )]));
        let service = ScrapingService::new(fetcher.clone());
        let matches = vec![
            fixture("Namibia", "Oman", "https://cricket.test/1"),
            fixture("Uganda", "Guyana", "https://cricket.test/missing"),
        ];

        let outcome = service.scrape_batting(&matches).await.unwrap();

        assert_eq!(outcome.failures, vec!["https://cricket.test/missing".to_string()]);
        let names: Vec<&str> = outcome.records.iter().map(|r| r.batsman_name.as_str()).collect();
        assert_eq!(names, vec!["Aqib Ilyas", "Kashyap Prajapati"]);
        assert!(outcome.records.iter().all(|r| r.match_title == "Namibia Vs Oman"));
    }

    #[tokio::test]
    async fn records_keep_input_order_then_row_order() {
        let fetcher = Arc::new(CannedFetcher::new(&[
            (
                "https://cricket.test/a",
                batting_page("Nepal", &[("Kushal Bhurtel", "4"), ("Aasif Sheikh", "0")]).as_str(),
            ),
            (
                "https://cricket.test/b",
                batting_page("Italy", &[("Emilio Gay", "12")]).as_str(),
            ),
        ]));
        let service = ScrapingService::new(fetcher.clone());
        let matches = vec![
            fixture("Sri Lanka", "Nepal", "https://cricket.test/a"),
            fixture("Scotland", "", ""),
            fixture("Italy", "Jersey", "https://cricket.test/b"),
        ];

        let first = service.scrape_batting(&matches).await.unwrap();
        let second = service.scrape_batting(&matches).await.unwrap();

        let order: Vec<(String, u32)> = first
            .records
            .iter()
            .map(|r| (r.batsman_name.clone(), r.batting_pos))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Kushal Bhurtel".to_string(), 1),
                ("Aasif Sheikh".to_string(), 2),
                ("Emilio Gay".to_string(), 1),
            ]
        );
        assert_eq!(first.records, second.records);
        assert!(first.failures.is_empty());

        // the match without a scorecard is never requested
        let requested = fetcher.requested.lock().unwrap().clone();
        assert_eq!(requested.len(), 4);
        assert!(requested.iter().all(|url| !url.is_empty()));
    }

    #[tokio::test]
    async fn squads_are_keyed_by_team_slug() {
        let fetcher = Arc::new(CannedFetcher::new(&[(
            "https://cricket.test/series/icc-men-s-t20-world-cup-2024-1411166/oman-squad-1431930/series-squads",
            r#"<div class="ds-p-0"><h1>Oman Squad</h1></div>
            <div class="ds-mb-4"><div class="ds-px-4 ds-py-3"><a>Aqib Ilyas</a><div class="ds-text-tight-s">Batter</div></div></div>"#,
        )]));
        let service = ScrapingService::new(fetcher);
        let teams = vec![
            SquadTeam {
                name: "uganda".to_string(),
                id: "1431926".to_string(),
            },
            SquadTeam {
                name: "oman".to_string(),
                id: "1431930".to_string(),
            },
        ];

        let outcome = service
            .scrape_squads(&teams, "https://cricket.test")
            .await
            .unwrap();

        assert_eq!(outcome.failures, vec!["uganda".to_string()]);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].team, "Oman Squad");
    }

    #[tokio::test]
    async fn results_page_failure_is_returned() {
        let service = ScrapingService::new(Arc::new(CannedFetcher::new(&[])));

        let result = service
            .scrape_matches("https://cricket.test/results", "https://cricket.test")
            .await;
        assert!(result.is_err());
    }
}

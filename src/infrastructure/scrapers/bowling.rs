use super::rows::{Cells, RowRule};
use super::tables::{body_rows, select_tables, team_name, BOWLING_PROBES};
use super::PageExtractor;
use crate::domain::BowlingRecord;
use scraper::Html;
use tracing::debug;

pub struct BowlingExtractor {
    pub match_title: String,
}

impl BowlingExtractor {
    pub fn new(match_title: impl Into<String>) -> Self {
        Self {
            match_title: match_title.into(),
        }
    }

    fn record(&self, bowling_against: &str, pos: u32, cells: Cells) -> BowlingRecord {
        BowlingRecord {
            match_title: self.match_title.clone(),
            bowling_against: bowling_against.to_string(),
            bowling_pos: pos,
            bowler_name: cells.raw(0),
            overs: cells.raw(1),
            maidens: cells.raw(2),
            runs_conceded: cells.raw(3),
            wickets: cells.raw(4),
            economy: cells.or(5, "0.00"),
            dots: cells.or(6, "0"),
            fours: cells.or(7, "0"),
            sixes: cells.or(8, "0"),
            wides: cells.or(9, "0"),
            no_balls: cells.or(10, "0"),
        }
    }
}

impl PageExtractor for BowlingExtractor {
    type Record = BowlingRecord;

    fn extract(&self, document: &Html) -> Vec<BowlingRecord> {
        let tables = select_tables(document, BOWLING_PROBES);
        debug!("Found {} bowling tables for {}", tables.len(), self.match_title);

        tables
            .into_iter()
            .enumerate()
            .flat_map(|(index, table)| {
                let against = team_name(table, index);
                RowRule::BOWLING
                    .number_players(body_rows(table))
                    .into_iter()
                    .map(move |(pos, cells)| self.record(&against, pos, cells))
            })
            .collect()
    }
}

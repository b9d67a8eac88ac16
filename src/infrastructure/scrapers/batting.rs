use super::rows::{Cells, RowRule};
use super::tables::{body_rows, select_tables, team_name, BATTING_PROBES};
use super::PageExtractor;
use crate::domain::BattingRecord;
use scraper::Html;
use tracing::debug;

pub struct BattingExtractor {
    pub match_title: String,
}

impl BattingExtractor {
    pub fn new(match_title: impl Into<String>) -> Self {
        Self {
            match_title: match_title.into(),
        }
    }

    fn record(&self, team_innings: &str, pos: u32, cells: Cells) -> BattingRecord {
        let strike_rate = match cells.raw(7) {
            sr if sr.is_empty() => cells.last(),
            sr => sr,
        };

        BattingRecord {
            match_title: self.match_title.clone(),
            team_innings: team_innings.to_string(),
            batting_pos: pos,
            batsman_name: cells.raw(0),
            dismissal: cells.raw(1),
            runs: cells.raw(2),
            balls: cells.or(3, "0"),
            fours: cells.or(5, "0"),
            sixes: cells.or(6, "0"),
            strike_rate,
        }
    }
}

impl PageExtractor for BattingExtractor {
    type Record = BattingRecord;

    fn extract(&self, document: &Html) -> Vec<BattingRecord> {
        let tables = select_tables(document, BATTING_PROBES);
        debug!("Found {} batting tables for {}", tables.len(), self.match_title);

        tables
            .into_iter()
            .enumerate()
            .flat_map(|(index, table)| {
                let team = team_name(table, index);
                RowRule::BATTING
                    .number_players(body_rows(table))
                    .into_iter()
                    .map(move |(pos, cells)| self.record(&team, pos, cells))
            })
            .collect()
    }
}

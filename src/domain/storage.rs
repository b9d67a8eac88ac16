use super::{BattingRecord, BowlingRecord, MatchRecord, SquadRecord};
use crate::error::Result;

pub trait Storage: Send + Sync {
    fn load_match_results(&self) -> Result<Vec<MatchRecord>>;
    fn save_match_results(&self, matches: &[MatchRecord]) -> Result<()>;
    fn save_batting(&self, records: &[BattingRecord]) -> Result<()>;
    fn save_bowling(&self, records: &[BowlingRecord]) -> Result<()>;
    fn save_squads(&self, records: &[SquadRecord]) -> Result<()>;
}

pub struct StorageKeys;

impl StorageKeys {
    pub const MATCH_RESULTS: &'static str = "matchResults";
    pub const BATTING_SUMMARY: &'static str = "battingSummary";
    pub const BOWLING_SUMMARY: &'static str = "bowlingSummary";
    pub const SQUADS: &'static str = "t20wc2024-squads";
}

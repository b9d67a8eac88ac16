mod records;
pub(crate) mod storage;

pub use records::{BattingRecord, BowlingRecord, MatchRecord, SquadRecord, SquadTeam};
pub use storage::{Storage, StorageKeys};

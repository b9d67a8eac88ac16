mod clients;
mod scrapers;
mod storage;

pub use clients::page::{HttpPageFetcher, PageFetcher};
pub use scrapers::{
    batting::BattingExtractor, bowling::BowlingExtractor, match_results::MatchResultsExtractor,
    squads::SquadExtractor, PageExtractor,
};
pub use storage::fs_store::FileSystemStore;

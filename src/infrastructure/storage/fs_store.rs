use crate::domain::{BattingRecord, BowlingRecord, MatchRecord, SquadRecord, Storage, StorageKeys};
use crate::error::Result;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Clone)]
pub struct FileSystemStore {
    data_dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn path_for_key(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir)?;
        }
        Ok(())
    }

    fn write_json_file<T: serde::Serialize + ?Sized>(&self, key: &str, data: &T) -> Result<()> {
        self.ensure_dir()?;

        let path = self.path_for_key(key);
        let content = serde_json::to_string_pretty(data)?;
        fs::write(&path, content)?;
        info!("Wrote {:?}", path);
        Ok(())
    }

    fn read_json_file<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<T> {
        let content = fs::read_to_string(self.path_for_key(key))?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl Storage for FileSystemStore {
    fn load_match_results(&self) -> Result<Vec<MatchRecord>> {
        self.read_json_file(StorageKeys::MATCH_RESULTS)
    }

    fn save_match_results(&self, matches: &[MatchRecord]) -> Result<()> {
        self.write_json_file(StorageKeys::MATCH_RESULTS, matches)
    }

    fn save_batting(&self, records: &[BattingRecord]) -> Result<()> {
        self.write_json_file(StorageKeys::BATTING_SUMMARY, records)
    }

    fn save_bowling(&self, records: &[BowlingRecord]) -> Result<()> {
        self.write_json_file(StorageKeys::BOWLING_SUMMARY, records)
    }

    fn save_squads(&self, records: &[SquadRecord]) -> Result<()> {
        self.write_json_file(StorageKeys::SQUADS, records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScrapeError;

    #[test]
    fn match_results_survive_a_round_trip() {
        let temp = tempfile::tempdir().unwrap();
        let store = FileSystemStore::new(temp.path());
        let matches = vec![MatchRecord {
            team1: "India".to_string(),
            team2: "Pakistan".to_string(),
            winner: "India".to_string(),
            margin: "6 runs".to_string(),
            ground: "New York".to_string(),
            date: "Jun 9, 2024".to_string(),
            scorecard: "https://www.espncricinfo.com/x/full-scorecard".to_string(),
        }];

        store.save_match_results(&matches).unwrap();

        assert!(temp.path().join("matchResults.json").exists());
        assert_eq!(store.load_match_results().unwrap(), matches);
    }

    #[test]
    fn writes_pretty_printed_arrays() {
        let temp = tempfile::tempdir().unwrap();
        let store = FileSystemStore::new(temp.path().join("out"));

        store
            .save_squads(&[SquadRecord {
                team: "Oman".to_string(),
                name: "Aqib Ilyas".to_string(),
                role: "Batter".to_string(),
            }])
            .unwrap();

        let written = fs::read_to_string(temp.path().join("out").join("t20wc2024-squads.json")).unwrap();
        assert!(written.starts_with("[\n  {"));
        assert!(written.contains("\"role\": \"Batter\""));
    }

    #[test]
    fn empty_results_are_still_written() {
        let temp = tempfile::tempdir().unwrap();
        let store = FileSystemStore::new(temp.path());

        store.save_batting(&[]).unwrap();

        let written = fs::read_to_string(store.path_for_key(StorageKeys::BATTING_SUMMARY)).unwrap();
        assert_eq!(written, "[]");
    }

    #[test]
    fn missing_match_list_is_an_io_error() {
        let temp = tempfile::tempdir().unwrap();
        let store = FileSystemStore::new(temp.path());

        assert!(matches!(store.load_match_results(), Err(ScrapeError::Io(_))));
    }
}

//! File-backed history repository.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;
use worthai_core::constants::HISTORY_STORAGE_KEY;
use worthai_core::errors::Result;
use worthai_core::history::{EstimateRecord, HistoryRepositoryTrait};

use crate::errors::{corrupt, unavailable};

/// History repository persisting the whole collection as one JSON file.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// reader never observes a partially written collection.
pub struct FileHistoryRepository {
    path: PathBuf,
}

impl FileHistoryRepository {
    /// Create a repository storing its slot inside `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        FileHistoryRepository {
            path: data_dir.as_ref().join(format!("{}.json", HISTORY_STORAGE_KEY)),
        }
    }

    /// Path of the underlying slot file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl HistoryRepositoryTrait for FileHistoryRepository {
    fn load_all(&self) -> Result<Vec<EstimateRecord>> {
        let blob = match fs::read_to_string(&self.path) {
            Ok(blob) => blob,
            // An absent slot means nothing has been persisted yet.
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(unavailable(err)),
        };
        serde_json::from_str(&blob).map_err(corrupt)
    }

    async fn save_all(&self, records: &[EstimateRecord]) -> Result<()> {
        let blob = serde_json::to_string(records).map_err(corrupt)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(unavailable)?;
        }
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, blob).map_err(unavailable)?;
        fs::rename(&tmp_path, &self.path).map_err(unavailable)?;
        debug!("persisted {} history records", records.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::tempdir;
    use worthai_core::history::{EstimateRecord, NewEstimate, TransactionType};
    use worthai_core::Error;

    fn sample_record(name: &str) -> EstimateRecord {
        EstimateRecord::from_analysis(
            NewEstimate {
                item_name: name.to_string(),
                input_price: "2,500".to_string(),
                range_min: 2_000,
                range_max: 4_000,
                confidence: 65,
                condition: "Like New".to_string(),
                reasoning: "Recent model, boxed.".to_string(),
                category: "Electronics".to_string(),
                transaction_type: TransactionType::Buy,
                image_uri: Some("file:///photos/7.jpg".to_string()),
            },
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn absent_slot_loads_empty() {
        let dir = tempdir().unwrap();
        let repository = FileHistoryRepository::new(dir.path());
        assert!(repository.load_all().unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let repository = FileHistoryRepository::new(dir.path());
        let records = vec![sample_record("camera"), sample_record("lens")];

        repository.save_all(&records).await.unwrap();
        assert_eq!(repository.load_all().unwrap(), records);
    }

    #[tokio::test]
    async fn save_replaces_the_whole_slot() {
        let dir = tempdir().unwrap();
        let repository = FileHistoryRepository::new(dir.path());

        repository.save_all(&[sample_record("old")]).await.unwrap();
        repository.save_all(&[]).await.unwrap();
        assert!(repository.load_all().unwrap().is_empty());
    }

    #[tokio::test]
    async fn corrupt_slot_is_a_storage_error() {
        let dir = tempdir().unwrap();
        let repository = FileHistoryRepository::new(dir.path());
        fs::write(repository.path(), "{not json").unwrap();

        match repository.load_all() {
            Err(Error::Storage(_)) => {}
            other => panic!("expected storage error, got {:?}", other.map(|r| r.len())),
        }
    }
}

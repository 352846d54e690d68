use std::path::Path;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::config::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, YamlConfigSerializer,
};
use crate::log;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
struct BestScoreRecord {
    best_score: u64,
    updated_at: String,
}

/// Durable best score. The engine never touches it; the caller compares its
/// running score against it after each move.
pub struct BestScoreStore<TContentProvider: ConfigContentProvider = FileContentConfigProvider> {
    content_provider: TContentProvider,
    serializer: YamlConfigSerializer,
}

impl BestScoreStore<FileContentConfigProvider> {
    pub fn from_file(file_path: impl AsRef<Path>) -> Self {
        Self::new(FileContentConfigProvider::new(file_path.as_ref()))
    }
}

impl<TContentProvider: ConfigContentProvider> BestScoreStore<TContentProvider> {
    pub fn new(content_provider: TContentProvider) -> Self {
        Self {
            content_provider,
            serializer: YamlConfigSerializer::new(),
        }
    }

    /// `0` when nothing is stored yet or the stored value cannot be read.
    pub fn best_score(&self) -> u64 {
        let content = match self.content_provider.get_config_content() {
            Ok(Some(content)) => content,
            Ok(None) => return 0,
            Err(e) => {
                log!("Failed to load best score: {}", e);
                return 0;
            }
        };

        let parsed: Result<BestScoreRecord, String> = self.serializer.deserialize(&content);
        match parsed {
            Ok(record) => record.best_score,
            Err(e) => {
                log!("Ignoring unreadable best score: {}", e);
                0
            }
        }
    }

    pub fn set_best_score(&self, score: u64) -> Result<(), String> {
        let record = BestScoreRecord {
            best_score: score,
            updated_at: Local::now().to_rfc3339(),
        };
        let content = self.serializer.serialize(&record)?;
        self.content_provider.set_config_content(&content)
    }

    /// Stores `score` if it beats the stored best; returns whether it did.
    pub fn record(&self, score: u64) -> Result<bool, String> {
        let best = self.best_score();
        if score <= best {
            return Ok(false);
        }
        self.set_best_score(score)?;
        log!("New best score {} (was {})", score, best);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryContentProvider;

    #[test]
    fn test_nothing_stored_is_zero() {
        let store = BestScoreStore::new(MemoryContentProvider::new());
        assert_eq!(store.best_score(), 0);
    }

    #[test]
    fn test_set_then_get() {
        let store = BestScoreStore::new(MemoryContentProvider::new());
        store.set_best_score(1024).unwrap();
        assert_eq!(store.best_score(), 1024);
    }

    #[test]
    fn test_zero_score_is_stored() {
        let store = BestScoreStore::new(MemoryContentProvider::new());
        store.set_best_score(0).unwrap();
        assert_eq!(store.best_score(), 0);
    }

    #[test]
    fn test_score_above_u32_is_stored() {
        let store = BestScoreStore::new(MemoryContentProvider::new());
        store.set_best_score(1 << 33).unwrap();
        assert_eq!(store.best_score(), 1 << 33);
    }

    #[test]
    fn test_unreadable_content_is_zero() {
        let store = BestScoreStore::new(MemoryContentProvider::with_content("invalid"));
        assert_eq!(store.best_score(), 0);
    }

    #[test]
    fn test_record_only_raises() {
        let store = BestScoreStore::new(MemoryContentProvider::new());
        assert_eq!(store.record(500), Ok(true));
        assert_eq!(store.record(200), Ok(false));
        assert_eq!(store.record(500), Ok(false));
        assert_eq!(store.best_score(), 500);
        assert_eq!(store.record(800), Ok(true));
        assert_eq!(store.best_score(), 800);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let random_number: u32 = rand::random();
        let path = std::env::temp_dir().join(format!("puzzle2048_best_{}.yaml", random_number));
        BestScoreStore::from_file(&path).set_best_score(4096).unwrap();
        assert_eq!(BestScoreStore::from_file(&path).best_score(), 4096);
        std::fs::remove_file(path).unwrap();
    }
}

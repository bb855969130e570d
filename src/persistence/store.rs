//! The high-score store abstraction and its in-memory implementation.

use crate::error::StoreError;

/// Somewhere a single best score outlives the session.
///
/// Sessions call `load` once at construction and `save` at most once per
/// game over. Both may fail; the session recovers from either.
pub trait HighScoreStore {
    /// Read the stored score.
    fn load(&self) -> Result<u32, StoreError>;

    /// Overwrite the stored score.
    fn save(&mut self, score: u32) -> Result<(), StoreError>;
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn load(&self) -> Result<u32, StoreError> {
        (**self).load()
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        (**self).save(score)
    }
}

/// Process-local store. Useful for tests and hosts without a filesystem.
///
/// Can be primed to fail reads or writes to exercise recovery paths.
#[derive(Clone, Debug, Default)]
pub struct MemoryHighScoreStore {
    score: Option<u32>,
    saves: u32,
    fail_load: bool,
    fail_save: bool,
}

impl MemoryHighScoreStore {
    /// An empty store; `load` reports [`StoreError::Unavailable`] until a save.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store already holding `score`.
    #[must_use]
    pub fn with_score(score: u32) -> Self {
        Self {
            score: Some(score),
            ..Self::default()
        }
    }

    /// Make every `load` fail.
    #[must_use]
    pub fn failing_load(mut self) -> Self {
        self.fail_load = true;
        self
    }

    /// Make every `save` fail.
    #[must_use]
    pub fn failing_save(mut self) -> Self {
        self.fail_save = true;
        self
    }

    /// The stored score, if any.
    #[must_use]
    pub fn score(&self) -> Option<u32> {
        self.score
    }

    /// Successful saves so far.
    #[must_use]
    pub fn save_count(&self) -> u32 {
        self.saves
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> Result<u32, StoreError> {
        if self.fail_load {
            return Err(StoreError::Unavailable);
        }
        self.score.ok_or(StoreError::Unavailable)
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        if self.fail_save {
            return Err(StoreError::Unavailable);
        }
        self.score = Some(score);
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryHighScoreStore::new();
        assert!(store.load().is_err());

        store.save(120).unwrap();
        assert_eq!(store.load().unwrap(), 120);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_memory_store_failures() {
        let store = MemoryHighScoreStore::with_score(5).failing_load();
        assert!(matches!(store.load(), Err(StoreError::Unavailable)));

        let mut store = MemoryHighScoreStore::with_score(5).failing_save();
        assert!(store.save(10).is_err());
        assert_eq!(store.score(), Some(5));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_boxed_store() {
        let mut store: Box<dyn HighScoreStore> = Box::new(MemoryHighScoreStore::with_score(3));
        assert_eq!(store.load().unwrap(), 3);
        store.save(4).unwrap();
        assert_eq!(store.load().unwrap(), 4);
    }
}

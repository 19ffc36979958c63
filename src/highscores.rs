//! Best score tracking
//!
//! Persisted as a single decimal integer under one store key.

use crate::error::GameError;
use crate::persistence::KeyValueStore;

/// Best score across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BestScore(pub u32);

impl BestScore {
    /// Store key
    pub const STORAGE_KEY: &'static str = "breakout_best_score";

    /// Load the stored best; absent or malformed values count as 0
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self, GameError> {
        let Some(raw) = store.get(Self::STORAGE_KEY)? else {
            log::info!("No best score found, starting fresh");
            return Ok(Self(0));
        };

        match raw.trim().parse::<u32>() {
            Ok(score) => {
                log::info!("Loaded best score {}", score);
                Ok(Self(score))
            }
            Err(_) => {
                log::warn!("Ignoring malformed best score {:?}", raw);
                Ok(Self(0))
            }
        }
    }

    /// Persist `score` if it beats the stored best. Returns true when written.
    pub fn record<S: KeyValueStore + ?Sized>(store: &mut S, score: u32) -> Result<bool, GameError> {
        let best = Self::load(&*store)?;
        if score <= best.0 {
            return Ok(false);
        }
        store.set(Self::STORAGE_KEY, &score.to_string())?;
        log::info!("New best score {} (was {})", score, best.0);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_missing_is_zero() {
        let store = MemoryStore::new();
        assert_eq!(BestScore::load(&store).unwrap(), BestScore(0));
    }

    #[test]
    fn test_malformed_is_zero() {
        let mut store = MemoryStore::new();
        for raw in ["", "abc", "-4", "1.5"] {
            store.set(BestScore::STORAGE_KEY, raw).unwrap();
            assert_eq!(BestScore::load(&store).unwrap(), BestScore(0), "{raw:?}");
        }
    }

    #[test]
    fn test_record_keeps_the_larger() {
        let mut store = MemoryStore::new();
        store.set(BestScore::STORAGE_KEY, "0").unwrap();

        assert!(BestScore::record(&mut store, 12).unwrap());
        assert_eq!(BestScore::load(&store).unwrap(), BestScore(12));

        assert!(!BestScore::record(&mut store, 5).unwrap());
        assert!(!BestScore::record(&mut store, 12).unwrap());
        assert_eq!(BestScore::load(&store).unwrap(), BestScore(12));
    }
}

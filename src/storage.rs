use crate::error::QuizError;
use crate::scoring::ScoreReport;
use std::collections::HashMap;

/// String key-value store scoped to one browser tab (or one process natively).
pub trait SnapshotStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), QuizError>;
    fn remove(&mut self, key: &str) -> Result<(), QuizError>;
}

#[derive(Default, Debug, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), QuizError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), QuizError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// `window.sessionStorage`.
#[cfg(target_arch = "wasm32")]
pub struct SessionStore {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl SessionStore {
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.session_storage().ok()??;
        Some(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl SnapshotStore for SessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), QuizError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| QuizError::Storage(format!("{e:?}")))
    }

    fn remove(&mut self, key: &str) -> Result<(), QuizError> {
        self.storage
            .remove_item(key)
            .map_err(|e| QuizError::Storage(format!("{e:?}")))
    }
}

/// Store used by the running app: sessionStorage in the browser, memory otherwise.
pub fn default_store() -> Box<dyn SnapshotStore> {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(store) = SessionStore::open() {
            return Box::new(store);
        }
        log::warn!("sessionStorage unavailable, results will not survive a reload");
    }
    Box::new(MemoryStore::new())
}

pub fn save_snapshot(
    store: &mut dyn SnapshotStore,
    key: &str,
    report: &ScoreReport,
) -> Result<(), QuizError> {
    let json = serde_json::to_string(report)?;
    store.set(key, &json)
}

/// A missing key and an unreadable value both mean "no prior result".
pub fn load_snapshot(store: &dyn SnapshotStore, key: &str) -> Option<ScoreReport> {
    let raw = store.get(key)?;
    match serde_json::from_str::<ScoreReport>(&raw) {
        Ok(report) if report.final_score.is_finite() => Some(report),
        Ok(_) => {
            log::warn!("ignoring snapshot under {key:?}: score is not finite");
            None
        }
        Err(e) => {
            log::warn!("ignoring malformed snapshot under {key:?}: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use std::collections::BTreeMap;

    const KEY: &str = "personalBrandScore";

    fn report() -> ScoreReport {
        ScoreReport {
            final_score: 4.8,
            category_scores: BTreeMap::from([(Category::Goals, 0.75), (Category::Presence, 0.4)]),
        }
    }

    #[test]
    fn snapshot_survives_a_round_trip() {
        let mut store = MemoryStore::new();
        save_snapshot(&mut store, KEY, &report()).unwrap();
        assert_eq!(load_snapshot(&store, KEY), Some(report()));
    }

    #[test]
    fn absent_key_means_no_result() {
        let store = MemoryStore::new();
        assert_eq!(load_snapshot(&store, KEY), None);
    }

    #[test]
    fn malformed_json_means_no_result() {
        let mut store = MemoryStore::new();
        store.set(KEY, "{not json").unwrap();
        assert_eq!(load_snapshot(&store, KEY), None);

        store.set(KEY, "{}").unwrap();
        assert_eq!(load_snapshot(&store, KEY), None);

        store
            .set(KEY, r#"{"finalScore": 3, "categoryScores": {"Luck": 1}}"#)
            .unwrap();
        assert_eq!(load_snapshot(&store, KEY), None);
    }

    #[test]
    fn reads_snapshot_written_by_hand() {
        let mut store = MemoryStore::new();
        store
            .set(KEY, r#"{"finalScore":10,"categoryScores":{"Goals":0.75}}"#)
            .unwrap();
        let loaded = load_snapshot(&store, KEY).unwrap();
        assert_eq!(loaded.final_score, 10.0);
        assert_eq!(loaded.category_scores.get(&Category::Goals), Some(&0.75));
    }

    #[test]
    fn remove_clears_the_snapshot() {
        let mut store = MemoryStore::new();
        save_snapshot(&mut store, KEY, &report()).unwrap();
        store.remove(KEY).unwrap();
        assert_eq!(load_snapshot(&store, KEY), None);
    }
}

use super::*;

impl QuizApp {
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn progress(&self) -> &QuizProgress {
        &self.progress
    }

    pub fn current_index(&self) -> usize {
        self.progress.current_index
    }

    pub fn current_question(&self) -> &Question {
        // current_index stays within the catalog, which is never empty
        &self.catalog.questions()[self.progress.current_index]
    }

    pub fn total_questions(&self) -> usize {
        self.catalog.len()
    }

    pub fn responses(&self) -> &[u32] {
        &self.progress.responses
    }

    /// Answer stored for the current question, if any.
    pub fn selected_value(&self) -> Option<u32> {
        match self.progress.responses[self.progress.current_index] {
            0 => None,
            v => Some(v),
        }
    }

    pub fn is_selection_made(&self) -> bool {
        self.progress.is_selection_made
    }

    pub fn is_completed(&self) -> bool {
        self.result.is_some()
    }

    pub fn result(&self) -> Option<&ScoreReport> {
        self.result.as_ref()
    }

    pub fn final_score(&self) -> Option<f64> {
        self.result.as_ref().map(|r| r.final_score)
    }

    pub fn store(&self) -> &dyn SnapshotStore {
        self.store.as_ref()
    }

    pub fn snapshot_key(&self) -> &str {
        &self.snapshot_key
    }
}

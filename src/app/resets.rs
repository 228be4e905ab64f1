use super::*;

impl QuizApp {
    /// Leaves the result view for a fresh session and drops the stored
    /// snapshot. Does nothing while answering.
    pub fn retake(&mut self) {
        if !self.is_completed() {
            return;
        }

        if let Err(e) = self.store.remove(&self.snapshot_key) {
            log::warn!("could not clear result snapshot: {e}");
        }

        self.progress = QuizProgress::new(self.catalog.len());
        self.result = None;
        self.state = AppState::Quiz;
        self.message.clear();
        log::info!("quiz restarted");
    }
}

use super::*;

impl QuizApp {
    /// Scores the response vector and enters the result view. The snapshot
    /// write is best effort: the in-memory result stands even if it fails.
    pub(crate) fn submit(&mut self) -> Result<(), QuizError> {
        let report = score_responses(&self.catalog, &self.progress.responses)?;
        log::info!(
            "quiz scored: {:.2}/10 ({:?})",
            report.final_score,
            report.tier()
        );

        if let Err(e) = save_snapshot(self.store.as_mut(), &self.snapshot_key, &report) {
            log::warn!("could not store result snapshot: {e}");
        }

        self.result = Some(report);
        self.state = AppState::Summary;
        self.message.clear();
        Ok(())
    }

    /// Picks up a result stored earlier in this tab, e.g. after a reload.
    pub(crate) fn restore_snapshot(&mut self) {
        if let Some(report) = load_snapshot(self.store.as_ref(), &self.snapshot_key) {
            log::info!("restored result snapshot ({:.2}/10)", report.final_score);
            self.result = Some(report);
            self.state = AppState::Summary;
        }
    }
}

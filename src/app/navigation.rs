use super::*;

impl QuizApp {
    /// Goes back one question. No-op on the first question or after scoring.
    pub fn retreat(&mut self) {
        if self.is_completed() {
            log::debug!("retreat ignored: quiz already scored");
            return;
        }
        if self.progress.current_index == 0 {
            return;
        }
        self.progress.current_index -= 1;
        self.refresh_selection();
    }

    pub fn can_go_back(&self) -> bool {
        !self.is_completed() && self.progress.current_index > 0
    }

    pub fn can_advance(&self) -> bool {
        !self.is_completed() && self.progress.is_selection_made
    }

    pub fn is_last_question(&self) -> bool {
        self.progress.current_index + 1 == self.catalog.len()
    }

    pub fn next_label(&self) -> &'static str {
        if self.is_last_question() { "Submit" } else { "Next" }
    }

    /// Previously answered questions come back pre-filled and unlocked.
    pub(crate) fn refresh_selection(&mut self) {
        let index = self.progress.current_index;
        self.progress.is_selection_made = self.progress.responses[index] != 0;
    }
}

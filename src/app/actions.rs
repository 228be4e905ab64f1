use super::*;

impl QuizApp {
    /// Records `value` for the current question. Overwriting with the same
    /// value changes nothing. Ignored once the quiz is scored.
    pub fn select_option(&mut self, value: u32) -> Result<(), QuizError> {
        if self.is_completed() {
            log::debug!("select_option({value}) ignored: quiz already scored");
            return Ok(());
        }

        let index = self.progress.current_index;
        if !self.current_question().has_option_value(value) {
            return Err(QuizError::UnknownOption { index, value });
        }

        self.progress.responses[index] = value;
        self.progress.is_selection_made = true;
        Ok(())
    }

    /// Moves to the next question, or scores the quiz on the last one.
    /// Does nothing until the current question has an answer.
    pub fn advance(&mut self) -> Result<(), QuizError> {
        if self.is_completed() {
            log::debug!("advance ignored: quiz already scored");
            return Ok(());
        }
        if !self.progress.is_selection_made {
            log::debug!(
                "advance ignored: question {} has no answer",
                self.progress.current_index
            );
            return Ok(());
        }

        if self.is_last_question() {
            return self.submit();
        }

        self.progress.current_index += 1;
        self.refresh_selection();
        Ok(())
    }

    /// Entry point for the view: select and report failures in `message`.
    pub fn choose(&mut self, value: u32) {
        match self.select_option(value) {
            Ok(()) => self.message.clear(),
            Err(e) => {
                log::error!("{e}");
                self.message = format!("⚠ {e}");
            }
        }
    }

    /// Entry point for the view's next/submit button.
    pub fn next(&mut self) {
        if let Err(e) = self.advance() {
            log::error!("could not score quiz: {e}");
            self.message = format!("⚠ {e}");
        }
    }
}

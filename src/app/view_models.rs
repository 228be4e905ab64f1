use super::*;

impl QuizApp {
    pub fn question_view(&self) -> QuestionView {
        let question = self.current_question();
        let selected = self.selected_value();
        QuestionView {
            number: self.progress.current_index + 1,
            total: self.catalog.len(),
            prompt: question.question.clone(),
            options: question
                .options
                .iter()
                .map(|o| OptionRow {
                    text: o.text.clone(),
                    value: o.value,
                    selected: selected == Some(o.value),
                })
                .collect(),
            can_go_back: self.can_go_back(),
            can_advance: self.can_advance(),
            next_label: self.next_label(),
        }
    }

    /// `None` until the quiz has been scored.
    pub fn result_view(&self) -> Option<ResultView> {
        let report = self.result.as_ref()?;
        Some(ResultView {
            headline: report.headline(),
            tier: report.tier(),
            rows: report.category_rows(&self.catalog),
        })
    }
}

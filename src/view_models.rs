// src/view_models.rs

use crate::scoring::{CategoryRow, Tier};

#[derive(Clone, Debug, PartialEq)]
pub struct OptionRow {
    pub text: String,
    pub value: u32,
    pub selected: bool,
}

/// Everything the quiz view needs for one question.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionView {
    pub number: usize, // 1-based
    pub total: usize,
    pub prompt: String,
    pub options: Vec<OptionRow>,
    pub can_go_back: bool,
    pub can_advance: bool,
    pub next_label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub headline: String,
    pub tier: Tier,
    pub rows: Vec<CategoryRow>,
}

impl QuestionView {
    pub fn progress_label(&self) -> String {
        format!("Question {} of {}", self.number, self.total)
    }
}

impl ResultView {
    pub fn message(&self) -> &'static str {
        self.tier.message()
    }
}

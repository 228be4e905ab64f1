use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::QuizError;

/// Highest option value any question can score; the ceiling used for `max_possible`.
pub const MAX_OPTION_VALUE: u32 = 5;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Category {
    Goals,
    Positioning,
    Presence,
    ContentCreation,
    ProfitPotential,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Goals => "Goals",
            Category::Positioning => "Positioning",
            Category::Presence => "Presence",
            Category::ContentCreation => "Content Creation",
            Category::ProfitPotential => "Profit Potential",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnswerOption {
    pub text: String,
    pub value: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub question: String,
    pub category: Category,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn has_option_value(&self, value: u32) -> bool {
        self.options.iter().any(|o| o.value == value)
    }
}

/// Quiz bank plus category weights. Only constructible through [`Catalog::new`],
/// so every instance has passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    questions: Vec<Question>,
    weights: BTreeMap<Category, f64>,
}

impl Catalog {
    pub fn new(
        questions: Vec<Question>,
        weights: BTreeMap<Category, f64>,
    ) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyCatalog);
        }

        for (&category, &weight) in &weights {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(QuizError::InvalidWeight { category, weight });
            }
        }

        for (index, q) in questions.iter().enumerate() {
            if !weights.contains_key(&q.category) {
                return Err(QuizError::MissingWeight(q.category));
            }
            if q.options.is_empty() {
                return Err(QuizError::NoOptions { index });
            }
            for (i, opt) in q.options.iter().enumerate() {
                // 0 marks an unanswered slot in the response vector
                if opt.value == 0 {
                    return Err(QuizError::ReservedOptionValue { index });
                }
                if q.options[..i].iter().any(|prev| prev.value == opt.value) {
                    return Err(QuizError::DuplicateOptionValue {
                        index,
                        value: opt.value,
                    });
                }
            }
        }

        Ok(Self { questions, weights })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn weight(&self, category: Category) -> Option<f64> {
        self.weights.get(&category).copied()
    }

    pub fn weights(&self) -> &BTreeMap<Category, f64> {
        &self.weights
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Quiz,
    Summary,
}

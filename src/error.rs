use crate::model::Category;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("could not read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("could not encode result snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog has no questions")]
    EmptyCatalog,

    #[error("category {0:?} is used by a question but has no weight")]
    MissingWeight(Category),

    #[error("weight {weight} for {category:?} must be finite and greater than zero")]
    InvalidWeight { category: Category, weight: f64 },

    #[error("question {index} has no options")]
    NoOptions { index: usize },

    #[error("question {index} has an option with value 0, which marks unanswered questions")]
    ReservedOptionValue { index: usize },

    #[error("question {index} lists option value {value} more than once")]
    DuplicateOptionValue { index: usize, value: u32 },

    #[error("value {value} is not an option of question {index}")]
    UnknownOption { index: usize, value: u32 },

    #[error("expected {expected} responses, got {actual}")]
    ResponseCount { expected: usize, actual: usize },

    #[error("snapshot storage unavailable: {0}")]
    Storage(String),
}

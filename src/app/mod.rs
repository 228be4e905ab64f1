use crate::config::AppConfig;
use crate::data::load_catalog;
use crate::error::QuizError;
use crate::model::{AppState, Catalog, Question};
use crate::scoring::{ScoreReport, score_responses};
use crate::storage::{SnapshotStore, default_store, load_snapshot, save_snapshot};

pub mod actions;
pub mod completion;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod view_models;

pub use crate::view_models::{OptionRow, QuestionView, ResultView};

/// Position and answers of the session in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizProgress {
    pub current_index: usize,
    /// One slot per question, `0` while unanswered.
    pub responses: Vec<u32>,
    pub is_selection_made: bool,
}

impl QuizProgress {
    pub fn new(question_count: usize) -> Self {
        Self {
            current_index: 0,
            responses: vec![0; question_count],
            is_selection_made: false,
        }
    }
}

/// Session controller: owns the catalog, the answers and the final result.
pub struct QuizApp {
    catalog: Catalog,
    progress: QuizProgress,
    result: Option<ScoreReport>,
    pub state: AppState,
    pub message: String,
    snapshot_key: String,
    store: Box<dyn SnapshotStore>,
}

impl QuizApp {
    /// Starts at the first question, or straight in the result view when the
    /// store still holds a snapshot from earlier in this tab.
    pub fn new(catalog: Catalog, store: Box<dyn SnapshotStore>, snapshot_key: impl Into<String>) -> Self {
        let progress = QuizProgress::new(catalog.len());
        let mut app = Self {
            catalog,
            progress,
            result: None,
            state: AppState::Quiz,
            message: String::new(),
            snapshot_key: snapshot_key.into(),
            store,
        };
        app.restore_snapshot();
        app
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, QuizError> {
        let catalog = load_catalog(config)?;
        log::info!("catalog loaded with {} questions", catalog.len());
        Ok(Self::new(catalog, default_store(), config.snapshot_key.clone()))
    }
}

mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::top_panel;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        top_panel(ctx);

        match self.state {
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Summary => views::summary::ui_summary_view(self, ctx),
        }
    }
}

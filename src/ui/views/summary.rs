use crate::QuizApp;
use crate::model::AppState;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, Grid, RichText};

pub fn ui_summary_view(app: &mut QuizApp, ctx: &Context) {
    let Some(result) = app.result_view() else {
        // Nothing scored yet, back to the questions
        app.state = AppState::Quiz;
        return;
    };

    centered_panel(ctx, 420.0, 600.0, |ui| {
        ui.label(RichText::new(&result.headline).heading().strong());
        ui.add_space(10.0);
        ui.label(result.message());
        ui.add_space(16.0);

        Grid::new("category_scores_grid")
            .striped(true)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                for row in &result.rows {
                    ui.label(RichText::new(row.label()).strong());
                    ui.end_row();
                }
            });

        ui.add_space(20.0);
        if ui
            .add_sized([200.0, 36.0], Button::new("🔄 Retake quiz"))
            .clicked()
        {
            app.retake();
        }
    });
}

use crate::QuizApp;
use crate::ui::helpers::option_list;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Context, RichText};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let view = app.question_view();

    centered_panel(ctx, 360.0, 650.0, |ui| {
        let panel_width = ui.available_width();

        ui.label(view.progress_label());
        ui.add_space(10.0);
        ui.label(RichText::new(view.prompt.to_uppercase()).heading().strong());
        ui.add_space(18.0);

        if let Some(value) = option_list(ui, &view.options) {
            app.choose(value);
        }

        ui.add_space(18.0);
        let (back, next) = two_button_row(
            ui,
            panel_width,
            ("← Back", view.can_go_back),
            (view.next_label, view.can_advance),
        );
        if back {
            app.retreat();
        }
        if next {
            app.next();
        }

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(&app.message);
        }
    });
}

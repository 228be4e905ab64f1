use egui::{Button, CentralPanel, Context, Frame, RichText, Ui};

pub const PRODUCT_NAME: &str = "AILovesHR";

pub fn top_panel(ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label(RichText::new(PRODUCT_NAME).strong().size(18.0));
        });
    });
}

/// Panel centered vertically and horizontally, content capped at `max_width`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Two equal buttons in a row, each with its own enabled flag.
/// Returns (left clicked, right clicked).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left: (&str, bool),
    right: (&str, bool),
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_enabled(left.1, Button::new(left.0).min_size(egui::vec2(btn_w, 36.0)))
            .clicked();
        clicked_right = ui
            .add_enabled(right.1, Button::new(right.0).min_size(egui::vec2(btn_w, 36.0)))
            .clicked();
    });
    (clicked_left, clicked_right)
}

// src/ui/helpers.rs
use crate::view_models::OptionRow;
use egui::Ui;

/// Radio list of the question's options. Returns the value clicked this frame.
pub fn option_list(ui: &mut Ui, options: &[OptionRow]) -> Option<u32> {
    let mut clicked = None;
    ui.vertical(|ui| {
        for opt in options {
            if ui.radio(opt.selected, &opt.text).clicked() {
                clicked = Some(opt.value);
            }
            ui.add_space(6.0);
        }
    });
    clicked
}

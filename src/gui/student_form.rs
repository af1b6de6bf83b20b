use eframe::egui;

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    theme::Theme,
};
use crate::core::RecordManagerView;

pub fn student_form(
    ui: &mut egui::Ui,
    view: &RecordManagerView,
    theme: &Theme,
    submitting: bool,
    actions: &mut ActionQueue,
) {
    let mut state = view.lock();
    let editing = state.editing.id();

    let title = match editing {
        Some(id) => format!("Edit record #{id}"),
        None => "New record".to_string(),
    };
    ui.label(theme.heading(ui.ctx(), &title));
    ui.add_space(4.0);

    let mut enter_pressed = false;
    let form = &mut state.form;
    let fields = [
        ("NIM", &mut form.nim),
        ("Nama", &mut form.nama),
        ("Jurusan", &mut form.jurusan),
        ("Angkatan", &mut form.angkatan),
    ];

    egui::Grid::new("student_form").num_columns(2).spacing([12.0, 6.0]).show(ui, |ui| {
        for (label, value) in fields {
            ui.label(label);
            let response = ui.add(
                egui::TextEdit::singleline(value).hint_text(label).desired_width(f32::INFINITY),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                enter_pressed = true;
            }
            ui.end_row();
        }
    });

    drop(state);

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        let submit_label = if editing.is_some() { "Update" } else { "Add" };
        if ui.button(submit_label).clicked() || enter_pressed {
            actions.push(UiAction::Submit);
        }

        if editing.is_some() && ui.button("Cancel").clicked() {
            actions.push(UiAction::CancelEdit);
        }

        if submitting {
            ui.add(egui::Spinner::new());
            ui.label(egui::RichText::new("Saving...").color(theme.muted(ui.ctx())));
        }
    });
}

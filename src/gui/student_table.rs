use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    theme::Theme,
};
use crate::core::{
    EditingMarker,
    StudentRecord,
};

const HEADERS: [&str; 5] = ["NIM", "Nama", "Jurusan", "Angkatan", "Actions"];

pub fn student_table(
    ui: &mut egui::Ui,
    records: &[StudentRecord],
    editing: EditingMarker,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    if records.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(egui::RichText::new("No records yet").size(20.0).color(theme.muted(ui.ctx())));
        });
        return;
    }

    let row_height = egui::TextStyle::Body
        .resolve(ui.style())
        .size
        .max(ui.spacing().interact_size.y);

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(90.0))
        .column(Column::remainder().at_least(160.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(120.0))
        .header(25.0, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.label(theme.heading(ui.ctx(), title));
                });
            }
        })
        .body(|body| {
            body.rows(row_height, records.len(), |mut row| {
                let record = &records[row.index()];
                let is_target = editing.id() == Some(record.id);
                row.set_selected(is_target);

                row.col(|ui| {
                    ui.label(&record.nim);
                });
                row.col(|ui| {
                    ui.label(&record.nama);
                });
                row.col(|ui| {
                    ui.label(record.jurusan.as_deref().unwrap_or(""));
                });
                row.col(|ui| {
                    ui.label(record.angkatan.map(|y| y.to_string()).unwrap_or_default());
                });
                row.col(|ui| {
                    if ui.small_button("Edit").clicked() {
                        actions.push(UiAction::StartEdit(record.clone()));
                    }
                    let delete = egui::Button::new(
                        egui::RichText::new("Delete").color(theme.danger(ui.ctx())),
                    )
                    .small();
                    if ui.add(delete).clicked() {
                        actions.push(UiAction::Delete(record.id));
                    }
                });
            });
        });
}

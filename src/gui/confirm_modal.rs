use eframe::egui;

use super::prompt::PendingConfirmation;

pub struct ConfirmModal {
    pending: Option<PendingConfirmation>,
}

impl ConfirmModal {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn ask(&mut self, pending: PendingConfirmation) {
        // An unanswered question is treated as declined.
        if let Some(previous) = self.pending.replace(pending) {
            previous.answer(false);
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let Some(pending) = &self.pending else {
            return;
        };

        let mut answer: Option<bool> = None;

        let modal = egui::Modal::new(egui::Id::new("confirm_modal")).show(ctx, |ui| {
            ui.set_width(360.0);
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("?").size(22.0).color(ui.visuals().warn_fg_color));
                ui.label(egui::RichText::new(&pending.message).size(14.0));
            });

            ui.add_space(15.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Yes").clicked() {
                    answer = Some(true);
                    ui.close();
                }
                if ui.button("No").clicked() {
                    answer = Some(false);
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            if let Some(pending) = self.pending.take() {
                pending.answer(answer.unwrap_or(false));
            }
        }
    }
}

impl Default for ConfirmModal {
    fn default() -> Self {
        Self::new()
    }
}

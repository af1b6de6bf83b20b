use eframe::egui;

use crate::core::Notification;

/// Shows one notification at a time until the user dismisses it.
pub struct ErrorModal {
    current: Option<Notification>,
}

impl ErrorModal {
    pub fn new() -> Self {
        Self { current: None }
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn show_notification(&mut self, notification: Notification) {
        self.current = Some(notification);
    }

    /// Returns true on the frame the notification is dismissed.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let Some(data) = &self.current else {
            return false;
        };

        let modal = egui::Modal::new(egui::Id::new("error_modal")).show(ctx, |ui| {
            ui.set_width(420.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(22.0).color(ui.visuals().error_fg_color));
                ui.label(egui::RichText::new(&data.title).size(18.0).strong());
            });

            ui.add_space(10.0);
            ui.label(egui::RichText::new(&data.message).size(14.0));

            if let Some(details) = &data.details {
                ui.add_space(8.0);
                ui.collapsing("Technical Details", |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut details.as_str())
                            .desired_width(f32::INFINITY)
                            .desired_rows(2)
                            .code_editor(),
                    );
                });
            }

            ui.add_space(15.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.current = None;
            return true;
        }

        false
    }
}

impl Default for ErrorModal {
    fn default() -> Self {
        Self::new()
    }
}

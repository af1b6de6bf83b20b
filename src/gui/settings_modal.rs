use eframe::egui;

use crate::core::{
    config::{
        API_URL_ENV,
        DEFAULT_API_URL,
    },
    SettingsData,
};

pub struct SettingsModal {
    open: bool,
    original: SettingsData,
    url_input: String,
    env_override: Option<String>,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self {
            open: false,
            original: SettingsData::default(),
            url_input: String::new(),
            env_override: None,
        }
    }

    pub fn open_settings(&mut self, current: SettingsData) {
        self.url_input = current.api_url.clone().unwrap_or_default();
        self.original = current;
        self.env_override = std::env::var(API_URL_ENV).ok().filter(|v| !v.trim().is_empty());
        self.open = true;
    }

    fn edited(&self) -> SettingsData {
        let trimmed = self.url_input.trim();
        SettingsData {
            api_url: if trimmed.is_empty() { None } else { Some(trimmed.to_string()) },
            ..self.original.clone()
        }
    }

    fn is_dirty(&self) -> bool {
        self.edited() != self.original
    }

    /// Returns the new settings when the user saves.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut result: Option<SettingsData> = None;

        let modal = egui::Modal::new(egui::Id::new("settings_modal")).show(ctx, |ui| {
            ui.set_width(440.0);
            ui.heading("API Settings");
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label("API address:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.url_input)
                        .hint_text(DEFAULT_API_URL)
                        .desired_width(280.0),
                );
            });

            let valid = is_valid_url(self.url_input.trim());
            if !valid {
                ui.colored_label(
                    ui.visuals().error_fg_color,
                    "⚠ Address must start with http:// or https://",
                );
            }

            if let Some(env_url) = &self.env_override {
                ui.add_space(5.0);
                ui.horizontal(|ui| {
                    ui.colored_label(ui.visuals().warn_fg_color, "ℹ");
                    ui.label(format!("{} is set to {} and takes precedence.", API_URL_ENV, env_url));
                });
            }

            ui.add_space(10.0);
            ui.separator();

            let is_dirty = self.is_dirty();

            ui.horizontal(|ui| {
                let save_clicked =
                    ui.add_enabled(is_dirty && valid, egui::Button::new("Save")).clicked();
                let cancel_clicked = ui.button("Cancel").clicked();

                let mut reset_clicked = false;
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    reset_clicked = ui.button("Restore Default").clicked();
                });

                if save_clicked {
                    let settings = self.edited();
                    self.original = settings.clone();
                    result = Some(settings);
                    ui.close();
                } else if cancel_clicked {
                    ui.close();
                } else if reset_clicked {
                    self.url_input.clear();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}

fn is_valid_url(input: &str) -> bool {
    input.is_empty() || input.starts_with("http://") || input.starts_with("https://")
}

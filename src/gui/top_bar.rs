use eframe::egui::{
    self,
    containers,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    theme::Theme,
};

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        theme: &Theme,
        base_url: &str,
        loading: bool,
        status: Option<&str>,
        actions: &mut ActionQueue,
    ) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.menu_button("File", |ui| {
                    if ui.button("Reload").clicked() {
                        actions.push(UiAction::Reload);
                    }
                    if ui.button("Export CSV...").clicked() {
                        actions.push(UiAction::ExportCsv);
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Settings", |ui| {
                    if ui.button("API Settings").clicked() {
                        actions.push(UiAction::OpenSettings);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status(ui, theme, base_url, loading, status);
                });
            });
        });
    }

    fn show_status(
        ui: &mut egui::Ui,
        theme: &Theme,
        base_url: &str,
        loading: bool,
        status: Option<&str>,
    ) {
        ui.small(egui::RichText::new(base_url).color(theme.muted(ui.ctx())))
            .on_hover_text("Record API address");

        if loading {
            ui.add_space(6.0);
            ui.add(egui::Spinner::new().size(12.0));
            ui.small("Loading...");
        }

        if let Some(status) = status {
            ui.add_space(6.0);
            ui.small(egui::RichText::new(status).color(theme.success(ui.ctx())));
        }
    }
}

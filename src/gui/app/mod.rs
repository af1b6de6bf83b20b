mod modals;

use std::sync::Arc;

use eframe::egui;
use modals::Modals;
use tracing::{
    info,
    warn,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    prompt::GuiPrompt,
    student_form::student_form,
    student_table::student_table,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::TopBar,
};
use crate::{
    core::{
        config::SETTINGS_FILE,
        records::notification_for,
        report,
        tasks::{
            TaskKind,
            TaskManager,
            TaskResult,
        },
        ApiConfig,
        MahasiswaError,
        Notification,
        RecordManagerView,
        SettingsData,
    },
    persistence::save_json,
};

pub struct MahasiswaApp {
    // Records
    view: RecordManagerView,
    prompt: Arc<GuiPrompt>,

    // Configuration
    settings_data: SettingsData,
    api_config: ApiConfig,

    // UI State
    theme: Theme,
    status: Option<String>,
    modals: Modals,

    task_manager: TaskManager,
}

impl MahasiswaApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings_data: SettingsData,
        api_config: ApiConfig,
    ) -> Result<Self, MahasiswaError> {
        let mut task_manager = TaskManager::new()?;
        let repaint_ctx = cc.egui_ctx.clone();
        task_manager.set_repaint_hook(move || repaint_ctx.request_repaint());

        let prompt = Arc::new(GuiPrompt::new(cc.egui_ctx.clone()));
        let view = RecordManagerView::with_config(api_config.clone(), prompt.clone())?;

        let theme = Theme::campus();
        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_theme(if settings_data.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        task_manager.load_all(&view);

        Ok(Self {
            view,
            prompt,
            settings_data,
            api_config,
            theme,
            status: None,
            modals: Modals::default(),
            task_manager,
        })
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::Finished { kind: TaskKind::Submit, ok: true } => {
                self.status = Some("Record saved".to_string());
            }
            TaskResult::Finished { kind: TaskKind::Remove, ok: true } => {
                self.status = Some("Record deleted".to_string());
            }
            TaskResult::Finished { .. } => {}
            TaskResult::Exported(Ok(path)) => {
                self.status = Some(format!("Exported to {}", path.display()));
            }
            TaskResult::Exported(Err(e)) => {
                self.prompt_error(Notification::new("Export Error", "Failed to export records").with_details(e));
            }
        }
    }

    fn apply_action(&mut self, action: UiAction) {
        match action {
            UiAction::Submit => {
                self.status = None;
                self.task_manager.submit(&self.view);
            }
            UiAction::CancelEdit => self.view.cancel_edit(),
            UiAction::StartEdit(record) => self.view.start_edit(&record),
            UiAction::Delete(id) => {
                self.status = None;
                self.task_manager.remove(&self.view, id);
            }
            UiAction::Reload => self.task_manager.load_all(&self.view),
            UiAction::ExportCsv => self.export_csv(),
            UiAction::OpenSettings => {
                self.modals.settings.open_settings(self.settings_data.clone());
            }
        }
    }

    fn export_csv(&mut self) {
        let picked = rfd::FileDialog::new()
            .set_title("Export records")
            .set_file_name(report::default_file_name())
            .add_filter("CSV", &["csv"])
            .save_file();

        if let Some(path) = picked {
            self.task_manager.export(self.view.records(), path);
        }
    }

    fn apply_settings(&mut self, settings: SettingsData) {
        self.settings_data = settings;
        self.save_settings();

        let api_config = ApiConfig::from_env(&self.settings_data);
        if api_config == self.api_config {
            return;
        }

        match RecordManagerView::with_config(api_config.clone(), self.prompt.clone()) {
            Ok(view) => {
                info!(base_url = %api_config.base_url, "switched record API");
                self.view = view;
                self.api_config = api_config;
                self.task_manager.load_all(&self.view);
            }
            Err(e) => {
                self.prompt_error(notification_for("Settings Error", "Could not use new address", &e));
            }
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            warn!("Failed to save settings: {}", e);
        }
    }

    fn prompt_error(&mut self, notification: Notification) {
        if self.modals.error.is_open() {
            self.view.notify(notification);
        } else {
            self.modals.error.show_notification(notification);
        }
    }

    fn sync_theme_preference(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.theme() == egui::Theme::Dark;
        if dark_mode != self.settings_data.dark_mode {
            self.settings_data.dark_mode = dark_mode;
            self.save_settings();
        }
    }

    fn show_prompts(&mut self, ctx: &egui::Context) {
        if !self.modals.confirm.is_open() {
            if let Some(pending) = self.prompt.next_confirmation() {
                self.modals.confirm.ask(pending);
            }
        }
        self.modals.confirm.show(ctx);

        if !self.modals.error.is_open() {
            if let Some(notification) = self.prompt.next_notification() {
                self.modals.error.show_notification(notification);
            }
        }
        if self.modals.error.show(ctx) {
            ctx.request_repaint();
        }
    }
}

impl eframe::App for MahasiswaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        let mut actions = ActionQueue::new();
        let snapshot = self.view.snapshot();

        TopBar::show(
            ctx,
            &self.theme,
            &self.api_config.base_url,
            snapshot.loading,
            self.status.as_deref(),
            &mut actions,
        );

        let submitting = self.task_manager.is_running(TaskKind::Submit);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("CRUD Mahasiswa");
            ui.add_space(8.0);

            student_form(ui, &self.view, &self.theme, submitting, &mut actions);

            ui.add_space(8.0);
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                student_table(ui, &snapshot.records, snapshot.editing, &self.theme, &mut actions);
            });
        });

        let had_actions = !actions.is_empty();
        for action in actions.drain() {
            self.apply_action(action);
        }
        if had_actions {
            ctx.request_repaint();
        }

        self.show_prompts(ctx);

        if let Some(settings) = self.modals.settings.show(ctx) {
            self.apply_settings(settings);
        }

        self.sync_theme_preference(ctx);
    }
}

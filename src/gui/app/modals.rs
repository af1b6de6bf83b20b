use crate::gui::{
    confirm_modal::ConfirmModal,
    error_modal::ErrorModal,
    settings_modal::SettingsModal,
};

pub struct Modals {
    pub error: ErrorModal,
    pub confirm: ConfirmModal,
    pub settings: SettingsModal,
}

impl Default for Modals {
    fn default() -> Self {
        Self { error: ErrorModal::new(), confirm: ConfirmModal::new(), settings: SettingsModal::new() }
    }
}

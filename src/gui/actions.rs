use crate::core::{
    RecordId,
    StudentRecord,
};

// Widgets push actions here instead of mutating the app mid-frame.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    // Form
    Submit,
    CancelEdit,

    // Table rows
    StartEdit(StudentRecord),
    Delete(RecordId),

    // Top bar
    Reload,
    ExportCsv,
    OpenSettings,
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}

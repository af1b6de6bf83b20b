pub mod config;
pub mod errors;
pub mod http;
pub mod models;
pub mod prompt;
pub mod records;
pub mod report;
pub mod tasks;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{
    ApiConfig,
    SettingsData,
};
pub use errors::MahasiswaError;
pub use models::{
    Cohort,
    EditingMarker,
    FormState,
    RecordId,
    StudentPayload,
    StudentRecord,
};
pub use prompt::{
    Notification,
    UserPrompt,
};
pub use records::{
    RecordManagerView,
    ViewState,
};

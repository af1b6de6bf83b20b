pub mod actions;
pub mod app;
pub mod confirm_modal;
pub mod error_modal;
pub mod prompt;
pub mod settings_modal;
pub mod student_form;
pub mod student_table;
pub mod theme;
pub mod top_bar;

pub use app::MahasiswaApp;

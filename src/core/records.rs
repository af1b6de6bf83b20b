use std::sync::{
    Arc,
    Mutex,
    MutexGuard,
    PoisonError,
};

use tracing::{
    debug,
    info,
};

use super::{
    prompt::{
        Notification,
        UserPrompt,
    },
    ApiConfig,
    EditingMarker,
    FormState,
    MahasiswaError,
    RecordId,
    StudentRecord,
};
use crate::api::{
    HttpStudentApi,
    StudentApi,
};

pub const DELETE_CONFIRMATION: &str = "Delete this record?";

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub records: Vec<StudentRecord>,
    pub form: FormState,
    pub editing: EditingMarker,
    pub loading: bool,
    load_issued: u64,
}

/// Record list plus the form that edits it, kept in sync with the API.
///
/// Every mutation is followed by a full reload; the list is never patched locally.
/// Clones share the same state, so async operations can run on a background
/// runtime while the UI reads the latest values.
#[derive(Clone)]
pub struct RecordManagerView {
    api: Arc<dyn StudentApi>,
    prompt: Arc<dyn UserPrompt>,
    state: Arc<Mutex<ViewState>>,
}

impl RecordManagerView {
    pub fn new(api: Arc<dyn StudentApi>, prompt: Arc<dyn UserPrompt>) -> Self {
        Self { api, prompt, state: Arc::new(Mutex::new(ViewState::default())) }
    }

    pub fn with_config(
        config: ApiConfig,
        prompt: Arc<dyn UserPrompt>,
    ) -> Result<Self, MahasiswaError> {
        info!(base_url = %config.base_url, "using record API");
        Ok(Self::new(Arc::new(HttpStudentApi::new(config)?), prompt))
    }

    /// Locks the shared state. Never hold the guard across an `.await`.
    pub fn lock(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> ViewState {
        self.lock().clone()
    }

    pub fn records(&self) -> Vec<StudentRecord> {
        self.lock().records.clone()
    }

    pub fn form(&self) -> FormState {
        self.lock().form.clone()
    }

    pub fn editing(&self) -> EditingMarker {
        self.lock().editing
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    pub async fn load_all(&self) -> Result<(), MahasiswaError> {
        let seq = {
            let mut state = self.lock();
            state.load_issued += 1;
            state.loading = true;
            state.load_issued
        };

        let result = self.api.list().await;

        let mut state = self.lock();
        let latest = state.load_issued == seq;
        if latest {
            state.loading = false;
        }

        match result {
            Ok(records) => {
                if latest {
                    info!(count = records.len(), "records loaded");
                    state.records = records;
                } else {
                    debug!(seq, "dropping superseded load");
                }
                Ok(())
            }
            Err(e) => {
                drop(state);
                let notification =
                    Notification::new("Load Error", format!("Failed to load records: {}", e));
                self.prompt.notify(notification);
                Err(e)
            }
        }
    }

    /// Submits whatever the form currently holds.
    pub async fn submit_current(&self) -> Result<Option<StudentRecord>, MahasiswaError> {
        let (draft, editing) = {
            let state = self.lock();
            (state.form.clone(), state.editing)
        };
        self.submit(draft, editing).await
    }

    /// The returned record is `None` when the server saved but did not echo the
    /// record back; the resync picks it up either way.
    pub async fn submit(
        &self,
        draft: FormState,
        editing: EditingMarker,
    ) -> Result<Option<StudentRecord>, MahasiswaError> {
        let payload = draft.to_payload();

        let result = match editing {
            EditingMarker::None => self.api.create(&payload).await,
            EditingMarker::Editing(id) => self.api.update(id, &payload).await,
        };

        let saved = match result {
            Ok(saved) => saved,
            Err(e) => {
                self.report("Save Error", "Server error", &e);
                return Err(e);
            }
        };

        match &saved {
            Some(record) => info!(id = record.id, nim = %record.nim, "record saved"),
            None => info!(nim = %draft.nim, "record saved"),
        }

        // A failed resync is reported by load_all itself; the save still stands.
        let _ = self.load_all().await;

        let mut state = self.lock();
        state.form.clear();
        state.editing = EditingMarker::None;

        Ok(saved)
    }

    /// Returns `Ok(false)` when the user declines.
    pub async fn remove(&self, id: RecordId) -> Result<bool, MahasiswaError> {
        if !self.prompt.confirm(DELETE_CONFIRMATION).await {
            debug!(id, "delete declined");
            return Ok(false);
        }

        if let Err(e) = self.api.delete(id).await {
            self.report("Delete Error", "Delete failed", &e);
            return Err(e);
        }

        info!(id, "record deleted");
        let _ = self.load_all().await;
        Ok(true)
    }

    pub fn start_edit(&self, record: &StudentRecord) {
        let mut state = self.lock();
        state.editing = EditingMarker::Editing(record.id);
        state.form = FormState::from_record(record);
    }

    pub fn cancel_edit(&self) {
        let mut state = self.lock();
        state.editing = EditingMarker::None;
        state.form.clear();
    }

    pub fn notify(&self, notification: Notification) {
        self.prompt.notify(notification);
    }

    fn report(&self, title: &str, context: &str, error: &MahasiswaError) {
        self.prompt.notify(notification_for(title, context, error));
    }
}

pub fn notification_for(title: &str, context: &str, error: &MahasiswaError) -> Notification {
    let message = match error {
        MahasiswaError::HttpStatus { .. } => format!("{}: {}", context, error.detail()),
        MahasiswaError::MalformedResponse => format!("{}.", error),
        MahasiswaError::Transport(_) => error.to_string(),
        other => format!("{}: {}", context, other),
    };

    let notification = Notification::new(title, message);
    match error.status() {
        Some(status) => notification.with_details(format!("HTTP status {}", status)),
        None => notification,
    }
}

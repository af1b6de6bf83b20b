use std::{
    collections::VecDeque,
    sync::{
        atomic::{
            AtomicBool,
            Ordering,
        },
        Mutex,
    },
};

use async_trait::async_trait;
use reqwest::StatusCode;
use tokio::sync::oneshot;

use crate::{
    api::StudentApi,
    core::{
        http::error_detail,
        Cohort,
        MahasiswaError,
        Notification,
        RecordId,
        StudentPayload,
        StudentRecord,
        UserPrompt,
    },
};

pub fn record(id: RecordId, nim: &str, nama: &str) -> StudentRecord {
    StudentRecord { id, nim: nim.to_string(), nama: nama.to_string(), jurusan: None, angkatan: None }
}

pub fn sample_records() -> Vec<StudentRecord> {
    vec![
        StudentRecord {
            jurusan: Some("Informatika".to_string()),
            angkatan: Some(2020),
            ..record(1, "50420001", "Andi")
        },
        record(2, "50420002", "Budi"),
    ]
}

/// In-memory stand-in for the record API. Update only touches fields present in
/// the payload, like the real server.
#[derive(Default)]
pub struct FakeApi {
    records: Mutex<Vec<StudentRecord>>,
    calls: Mutex<Vec<String>>,
    payloads: Mutex<Vec<serde_json::Value>>,
    failure: Mutex<Option<(StatusCode, String)>>,
    malformed_next: AtomicBool,
    partial_next: AtomicBool,
    list_gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
}

impl FakeApi {
    pub fn with_records(records: Vec<StudentRecord>) -> Self {
        Self { records: Mutex::new(records), ..Default::default() }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn payloads(&self) -> Vec<serde_json::Value> {
        self.payloads.lock().unwrap().clone()
    }

    pub fn stored(&self) -> Vec<StudentRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn set_stored(&self, records: Vec<StudentRecord>) {
        *self.records.lock().unwrap() = records;
    }

    /// The next call of any kind answers with this status and body.
    pub fn fail_next_with(&self, status: StatusCode, body: &str) {
        *self.failure.lock().unwrap() = Some((status, body.to_string()));
    }

    /// The next create/update succeeds server-side but returns no usable body.
    pub fn malformed_next(&self) {
        self.malformed_next.store(true, Ordering::SeqCst);
    }

    /// The next create/update succeeds and answers with JSON that is not a full record.
    pub fn partial_reply_next(&self) {
        self.partial_next.store(true, Ordering::SeqCst);
    }

    /// The next list call snapshots the data, then waits until the sender fires.
    pub fn gate_next_list(&self) -> oneshot::Sender<()> {
        let (sender, receiver) = oneshot::channel();
        self.list_gates.lock().unwrap().push_back(receiver);
        sender
    }

    fn begin(&self, call: String) -> Result<(), MahasiswaError> {
        self.calls.lock().unwrap().push(call);
        match self.failure.lock().unwrap().take() {
            Some((status, body)) => {
                Err(MahasiswaError::HttpStatus { status, detail: error_detail(&body) })
            }
            None => Ok(()),
        }
    }

    fn not_found() -> MahasiswaError {
        MahasiswaError::HttpStatus {
            status: StatusCode::NOT_FOUND,
            detail: "Mahasiswa tidak ditemukan".to_string(),
        }
    }

    fn reply(&self, saved: StudentRecord) -> Result<Option<StudentRecord>, MahasiswaError> {
        if self.malformed_next.swap(false, Ordering::SeqCst) {
            return Err(MahasiswaError::MalformedResponse);
        }
        if self.partial_next.swap(false, Ordering::SeqCst) {
            return Ok(None);
        }
        Ok(Some(saved))
    }

    fn cohort(cohort: Cohort) -> Result<Option<i64>, MahasiswaError> {
        match cohort {
            Cohort::Year(year) => Ok(Some(year)),
            Cohort::Invalid => Ok(None),
            Cohort::Fractional(_) => Err(MahasiswaError::HttpStatus {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                detail: "angkatan must be an integer".to_string(),
            }),
        }
    }
}

#[async_trait]
impl StudentApi for FakeApi {
    async fn list(&self) -> Result<Vec<StudentRecord>, MahasiswaError> {
        self.begin("GET /mahasiswa/".to_string())?;
        let snapshot = self.stored();

        let gate = self.list_gates.lock().unwrap().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        Ok(snapshot)
    }

    async fn get(&self, id: RecordId) -> Result<StudentRecord, MahasiswaError> {
        self.begin(format!("GET /mahasiswa/{id}"))?;
        self.stored().into_iter().find(|r| r.id == id).ok_or_else(Self::not_found)
    }

    async fn create(
        &self,
        payload: &StudentPayload,
    ) -> Result<Option<StudentRecord>, MahasiswaError> {
        self.begin("POST /mahasiswa/".to_string())?;
        self.payloads.lock().unwrap().push(serde_json::to_value(payload)?);

        let angkatan = match payload.angkatan {
            Some(cohort) => Self::cohort(cohort)?,
            None => None,
        };

        let mut records = self.records.lock().unwrap();
        let id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let created = StudentRecord {
            id,
            nim: payload.nim.clone(),
            nama: payload.nama.clone(),
            jurusan: payload.jurusan.clone(),
            angkatan,
        };
        records.push(created.clone());
        drop(records);

        self.reply(created)
    }

    async fn update(
        &self,
        id: RecordId,
        payload: &StudentPayload,
    ) -> Result<Option<StudentRecord>, MahasiswaError> {
        self.begin(format!("PUT /mahasiswa/{id}"))?;
        self.payloads.lock().unwrap().push(serde_json::to_value(payload)?);

        let angkatan = payload.angkatan.map(Self::cohort).transpose()?;

        let mut records = self.records.lock().unwrap();
        let existing = records.iter_mut().find(|r| r.id == id).ok_or_else(Self::not_found)?;
        existing.nim = payload.nim.clone();
        existing.nama = payload.nama.clone();
        if let Some(jurusan) = &payload.jurusan {
            existing.jurusan = Some(jurusan.clone());
        }
        if let Some(angkatan) = angkatan {
            existing.angkatan = angkatan;
        }
        let updated = existing.clone();
        drop(records);

        self.reply(updated)
    }

    async fn delete(&self, id: RecordId) -> Result<(), MahasiswaError> {
        self.begin(format!("DELETE /mahasiswa/{id}"))?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }
}

/// Answers every confirmation the same way and keeps every notification.
pub struct RecordingPrompt {
    answer: bool,
    confirmations: Mutex<Vec<String>>,
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingPrompt {
    pub fn answering(answer: bool) -> Self {
        Self { answer, confirmations: Mutex::new(Vec::new()), notifications: Mutex::new(Vec::new()) }
    }

    pub fn accepting() -> Self {
        Self::answering(true)
    }

    pub fn declining() -> Self {
        Self::answering(false)
    }

    pub fn confirmations(&self) -> Vec<String> {
        self.confirmations.lock().unwrap().clone()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserPrompt for RecordingPrompt {
    async fn confirm(&self, message: &str) -> bool {
        self.confirmations.lock().unwrap().push(message.to_string());
        self.answer
    }

    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

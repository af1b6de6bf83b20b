pub mod client;

#[cfg(test)]
mod client_tests;

use async_trait::async_trait;

pub use client::HttpStudentApi;

use crate::core::{
    MahasiswaError,
    RecordId,
    StudentPayload,
    StudentRecord,
};

/// The record endpoints the view talks to.
#[async_trait]
pub trait StudentApi: Send + Sync {
    async fn list(&self) -> Result<Vec<StudentRecord>, MahasiswaError>;

    async fn get(&self, id: RecordId) -> Result<StudentRecord, MahasiswaError>;

    /// `None` when the server accepted the record but did not echo it back whole.
    async fn create(
        &self,
        payload: &StudentPayload,
    ) -> Result<Option<StudentRecord>, MahasiswaError>;

    async fn update(
        &self,
        id: RecordId,
        payload: &StudentPayload,
    ) -> Result<Option<StudentRecord>, MahasiswaError>;

    async fn delete(&self, id: RecordId) -> Result<(), MahasiswaError>;
}

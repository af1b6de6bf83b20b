use async_trait::async_trait;
use reqwest::{
    Client,
    Method,
    RequestBuilder,
    Response,
};
use serde_json::Value;
use tracing::{
    debug,
    warn,
};

use super::StudentApi;
use crate::core::{
    http::{
        ensure_success,
        http_client,
        required_json,
    },
    ApiConfig,
    MahasiswaError,
    RecordId,
    StudentPayload,
    StudentRecord,
};

#[derive(Debug, Clone)]
pub struct HttpStudentApi {
    client: Client,
    config: ApiConfig,
}

impl HttpStudentApi {
    pub fn new(config: ApiConfig) -> Result<Self, MahasiswaError> {
        Ok(Self { client: http_client()?, config })
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        debug!(%method, %url, "request");
        self.client.request(method, url)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, MahasiswaError> {
        let resp = builder.send().await.map_err(|e| {
            warn!("transport failure: {e}");
            MahasiswaError::from(e)
        })?;

        ensure_success(resp).await.inspect_err(|e| warn!("request rejected: {e}"))
    }
}

/// `None` when the reply is JSON but not a full record.
fn saved_record(body: Value) -> Option<StudentRecord> {
    match serde_json::from_value(body) {
        Ok(record) => Some(record),
        Err(e) => {
            debug!("save reply is not a full record: {e}");
            None
        }
    }
}

#[async_trait]
impl StudentApi for HttpStudentApi {
    async fn list(&self) -> Result<Vec<StudentRecord>, MahasiswaError> {
        let resp = self.send(self.request(Method::GET, self.config.collection_url())).await?;
        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn get(&self, id: RecordId) -> Result<StudentRecord, MahasiswaError> {
        let resp = self.send(self.request(Method::GET, self.config.item_url(id))).await?;
        let body = required_json(resp).await?;
        serde_json::from_value(body).map_err(|_| MahasiswaError::MalformedResponse)
    }

    async fn create(
        &self,
        payload: &StudentPayload,
    ) -> Result<Option<StudentRecord>, MahasiswaError> {
        let builder = self.request(Method::POST, self.config.collection_url()).json(payload);
        let body = required_json(self.send(builder).await?).await?;
        Ok(saved_record(body))
    }

    async fn update(
        &self,
        id: RecordId,
        payload: &StudentPayload,
    ) -> Result<Option<StudentRecord>, MahasiswaError> {
        let builder = self.request(Method::PUT, self.config.item_url(id)).json(payload);
        let body = required_json(self.send(builder).await?).await?;
        Ok(saved_record(body))
    }

    async fn delete(&self, id: RecordId) -> Result<(), MahasiswaError> {
        self.send(self.request(Method::DELETE, self.config.item_url(id))).await?;
        Ok(())
    }
}

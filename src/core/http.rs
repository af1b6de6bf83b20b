use reqwest::{
    Client,
    Response,
};
use serde_json::Value;

use crate::core::MahasiswaError;

const NO_JSON_DETAIL: &str = "No JSON response";

pub fn http_client() -> Result<Client, MahasiswaError> {
    Client::builder()
        .user_agent("mahasiswa/0.1 (+reqwest)")
        .build()
        .map_err(|e| MahasiswaError::Custom(format!("HTTP client build failed: {e}")))
}

/// Passes successful responses through, turns the rest into `HttpStatus`.
pub async fn ensure_success(resp: Response) -> Result<Response, MahasiswaError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(MahasiswaError::HttpStatus { status, detail: error_detail(&body) })
}

/// Reads the `detail` field of an error body, falling back to the serialized body.
pub fn error_detail(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => match map.get("detail") {
            Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
            Some(detail) if is_truthy(detail) => detail.to_string(),
            _ => Value::Object(map).to_string(),
        },
        Ok(other) => other.to_string(),
        Err(_) => NO_JSON_DETAIL.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().map_or(true, |v| v != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Success bodies that must carry data. Empty, unparseable or falsy JSON
/// (`null`, `false`, `0`, `""`) is rejected; any other value is accepted as is.
pub async fn required_json(resp: Response) -> Result<Value, MahasiswaError> {
    let bytes = resp.bytes().await?;
    required_value(&bytes)
}

fn required_value(bytes: &[u8]) -> Result<Value, MahasiswaError> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(value) if is_truthy(&value) => Ok(value),
        _ => Err(MahasiswaError::MalformedResponse),
    }
}

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MahasiswaError {
    #[error("Request failed: {0}")]
    Transport(Box<reqwest::Error>),

    #[error("HTTP {status}: {detail}")]
    HttpStatus { status: StatusCode, detail: String },

    #[error("Server returned no valid data")]
    MalformedResponse,

    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(Box<csv::Error>),

    #[error("MahasiswaError: {0}")]
    Custom(String),
}

impl MahasiswaError {
    /// Server-supplied detail for status errors, the display text otherwise.
    pub fn detail(&self) -> String {
        match self {
            MahasiswaError::HttpStatus { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            MahasiswaError::HttpStatus { status, .. } => Some(*status),
            MahasiswaError::Transport(e) => e.status(),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MahasiswaError {
    fn from(error: std::io::Error) -> Self {
        MahasiswaError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for MahasiswaError {
    fn from(error: reqwest::Error) -> Self {
        MahasiswaError::Transport(Box::new(error))
    }
}

impl From<csv::Error> for MahasiswaError {
    fn from(error: csv::Error) -> Self {
        MahasiswaError::Csv(Box::new(error))
    }
}

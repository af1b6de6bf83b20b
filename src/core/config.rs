use serde::{
    Deserialize,
    Serialize,
};

pub const API_URL_ENV: &str = "MAHASISWA_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const SETTINGS_FILE: &str = "settings.json";

/// Where the record API lives. Built once and handed to the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self { base_url: base_url.as_ref().trim().trim_end_matches('/').to_string() }
    }

    /// Environment first, then the saved override, then localhost:8000.
    pub fn resolve(env_value: Option<String>, settings: &SettingsData) -> Self {
        let chosen = env_value
            .filter(|url| !url.trim().is_empty())
            .or_else(|| settings.api_url.clone().filter(|url| !url.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(chosen)
    }

    pub fn from_env(settings: &SettingsData) -> Self {
        Self::resolve(std::env::var(API_URL_ENV).ok(), settings)
    }

    pub fn collection_url(&self) -> String {
        format!("{}/mahasiswa/", self.base_url)
    }

    pub fn item_url(&self, id: i64) -> String {
        format!("{}/mahasiswa/{}", self.base_url, id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub api_url: Option<String>,
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { api_url: None, dark_mode: true }
    }
}

use std::{
    fs,
    io::ErrorKind,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    de::DeserializeOwned,
    Serialize,
};
use tracing::{
    debug,
    warn,
};

use crate::core::MahasiswaError;

const APP_DIR_NAME: &str = "mahasiswa";

/// `<local data dir>/mahasiswa/<filename>`, or the working directory when the
/// platform has no data directory.
pub fn settings_path(filename: &str) -> PathBuf {
    let dir = dirs::data_local_dir().map_or_else(|| PathBuf::from("."), |d| d.join(APP_DIR_NAME));
    dir.join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), MahasiswaError> {
    write_json(data, &settings_path(filename))
}

/// A missing file reads as `T::default()`.
pub fn load_json<T: DeserializeOwned + Default>(filename: &str) -> Result<T, MahasiswaError> {
    read_json(&settings_path(filename))
}

pub fn load_json_or_default<T: DeserializeOwned + Default>(filename: &str) -> T {
    load_json(filename).unwrap_or_else(|e| {
        warn!("Failed to load {}: {}. Using defaults.", filename, e);
        T::default()
    })
}

fn write_json<T: Serialize>(data: &T, path: &Path) -> Result<(), MahasiswaError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(data)?)?;
    debug!(path = %path.display(), "saved");
    Ok(())
}

fn read_json<T: DeserializeOwned + Default>(path: &Path) -> Result<T, MahasiswaError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(e.into()),
    };
    let data = serde_json::from_str(&text)?;
    debug!(path = %path.display(), "loaded");
    Ok(data)
}

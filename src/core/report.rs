use std::{
    fs::File,
    io::Write,
    path::Path,
};

use tracing::info;

use super::{
    MahasiswaError,
    StudentRecord,
};

pub const REPORT_HEADER: [&str; 4] = ["NIM", "Nama", "Jurusan", "Angkatan"];

/// Roster rows ordered by name, then NIM.
pub fn roster_order(records: &[StudentRecord]) -> Vec<&StudentRecord> {
    let mut ordered: Vec<&StudentRecord> = records.iter().collect();
    ordered.sort_by(|a, b| {
        a.nama.to_lowercase().cmp(&b.nama.to_lowercase()).then_with(|| a.nim.cmp(&b.nim))
    });
    ordered
}

pub fn write_csv<W: Write>(records: &[StudentRecord], writer: W) -> Result<(), MahasiswaError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(REPORT_HEADER)?;

    for record in roster_order(records) {
        let angkatan = record.angkatan.map(|year| year.to_string()).unwrap_or_default();
        csv_writer.write_record([
            record.nim.as_str(),
            record.nama.as_str(),
            record.jurusan.as_deref().unwrap_or(""),
            angkatan.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn export_csv(records: &[StudentRecord], path: &Path) -> Result<(), MahasiswaError> {
    let file = File::create(path)?;
    write_csv(records, file)?;
    info!(path = %path.display(), count = records.len(), "roster exported");
    Ok(())
}

pub fn default_file_name() -> String {
    format!("mahasiswa_{}.csv", chrono::Local::now().format("%Y%m%d_%H%M"))
}

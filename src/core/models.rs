use serde::{
    Deserialize,
    Serialize,
    Serializer,
};

pub type RecordId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: RecordId,
    pub nim: String,
    pub nama: String,
    #[serde(default)]
    pub jurusan: Option<String>,
    #[serde(default)]
    pub angkatan: Option<i64>,
}

/// In-progress edit of a record. Optional fields are empty strings when absent
/// and `angkatan` stays text until submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub nim: String,
    pub nama: String,
    pub jurusan: String,
    pub angkatan: String,
}

impl FormState {
    pub fn from_record(record: &StudentRecord) -> Self {
        Self {
            nim: record.nim.clone(),
            nama: record.nama.clone(),
            jurusan: record.jurusan.clone().unwrap_or_default(),
            angkatan: record.angkatan.map(|year| year.to_string()).unwrap_or_default(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn to_payload(&self) -> StudentPayload {
        StudentPayload {
            nim: self.nim.clone(),
            nama: self.nama.clone(),
            jurusan: if self.jurusan.is_empty() { None } else { Some(self.jurusan.clone()) },
            angkatan: if self.angkatan.is_empty() {
                None
            } else {
                Some(Cohort::parse(&self.angkatan))
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditingMarker {
    #[default]
    None,
    Editing(RecordId),
}

impl EditingMarker {
    pub fn id(&self) -> Option<RecordId> {
        match self {
            EditingMarker::None => None,
            EditingMarker::Editing(id) => Some(*id),
        }
    }

}

/// Numeric coercion of the cohort text. Blank input counts as `0` and `0x`, `0o`
/// and `0b` literals are read in their radix. Anything else that is not a number
/// is kept as `Invalid` and goes out as JSON `null`; the server decides what to
/// do with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cohort {
    Year(i64),
    Fractional(f64),
    Invalid,
}

impl Cohort {
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Cohort::Year(0);
        }
        if let Some(year) = Self::radix_literal(trimmed) {
            return Cohort::Year(year);
        }
        if let Ok(year) = trimmed.parse::<i64>() {
            return Cohort::Year(year);
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.0e15 => {
                Cohort::Year(value as i64)
            }
            Ok(value) if value.is_finite() => Cohort::Fractional(value),
            _ => Cohort::Invalid,
        }
    }

    fn radix_literal(text: &str) -> Option<i64> {
        let radix = match text.get(..2)? {
            "0x" | "0X" => 16,
            "0o" | "0O" => 8,
            "0b" | "0B" => 2,
            _ => return None,
        };
        let digits = &text[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        i64::from_str_radix(digits, radix).ok()
    }
}

impl Serialize for Cohort {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cohort::Year(year) => serializer.serialize_i64(*year),
            Cohort::Fractional(value) => serializer.serialize_f64(*value),
            Cohort::Invalid => serializer.serialize_none(),
        }
    }
}

/// Body of create and update requests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentPayload {
    pub nim: String,
    pub nama: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurusan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angkatan: Option<Cohort>,
}

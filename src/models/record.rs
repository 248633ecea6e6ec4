use super::status::AttendanceStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Placeholder shown when a record has no recorded time yet.
pub const NO_TIME: &str = "—";

/// Placeholder time for a status set by hand from the teacher journal.
pub const MANUAL_TIME: &str = "Manual";

/// Subject label for a gate-level check-in that is not tied to a lesson.
pub const GATE_SUBJECT: &str = "-";

/// One observed or manually-set attendance event.
///
/// `id` is stable across re-fetches and unique within one loaded snapshot.
/// `date` is filled on history rows and absent on today-only journal rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub class_label: String,
    #[serde(default = "default_subject")]
    pub subject_label: String,
    pub status: AttendanceStatus,
    #[serde(default = "default_time", deserialize_with = "de_time")]
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

fn default_subject() -> String {
    GATE_SUBJECT.to_string()
}

fn default_time() -> String {
    NO_TIME.to_string()
}

/// The backend sends "-" for "no time yet"; canonicalize to NO_TIME so the
/// rest of the crate only ever sees one sentinel.
fn de_time<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw == "-" || raw.is_empty() {
        Ok(NO_TIME.to_string())
    } else {
        Ok(raw)
    }
}

impl AttendanceRecord {
    /// True when no scan or manual edit has produced a time yet.
    pub fn has_time(&self) -> bool {
        self.time != NO_TIME
    }

    pub fn date_str(&self) -> String {
        self.date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    /// Applies a teacher edit locally: Present gets the "Manual" time
    /// marker, everything else clears the time back to the sentinel.
    pub fn apply_manual_status(&mut self, status: AttendanceStatus) {
        self.status = status;
        self.time = if status.is_present() {
            MANUAL_TIME.to_string()
        } else {
            NO_TIME.to_string()
        };
    }
}

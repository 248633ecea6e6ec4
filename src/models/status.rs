use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Attendance state of one record, as stored by the backend.
///
/// `Unmarked` is the roster placeholder the server returns for students
/// with no event yet on the queried class/subject/date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AttendanceStatus {
    Present,
    Excused,
    Sick,
    Absent,
    Unmarked,
}

impl AttendanceStatus {
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "Present" => Some(Self::Present),
            "Excused" => Some(Self::Excused),
            "Sick" => Some(Self::Sick),
            "Absent" => Some(Self::Absent),
            "Unmarked" => Some(Self::Unmarked),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Excused => "Excused",
            AttendanceStatus::Sick => "Sick",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Unmarked => "Unmarked",
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, AttendanceStatus::Present)
    }

    pub fn is_unmarked(&self) -> bool {
        matches!(self, AttendanceStatus::Unmarked)
    }

    /// The statuses a teacher can assign from the manual journal.
    /// `Unmarked` is server-assigned only.
    pub fn manual_choices() -> [AttendanceStatus; 4] {
        [
            AttendanceStatus::Present,
            AttendanceStatus::Excused,
            AttendanceStatus::Sick,
            AttendanceStatus::Absent,
        ]
    }
}

impl FromStr for AttendanceStatus {
    type Err = AppError;

    /// Strict parse for values coming from the shell (status buttons,
    /// query strings).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| AppError::InvalidStatus(s.to_string()))
    }
}

pub mod record;
pub mod roster;
pub mod status;

pub use record::{AttendanceRecord, GATE_SUBJECT, MANUAL_TIME, NO_TIME};
pub use roster::ClassRoster;
pub use status::AttendanceStatus;

//! absensi-portal library root.
//!
//! Core data layer of a school face-recognition attendance portal. The
//! page shells (camera kiosk, dashboard, history report, teacher journal)
//! all sit on the same pieces: a filter state model, a typed client for
//! the attendance backend, one dataset controller handling fetch /
//! optimistic edits / aggregates, and a spreadsheet export. Camera
//! capture and navigation are external collaborators reached through the
//! seams in `capture` and `api::transport`.

pub mod api;
pub mod capture;
pub mod config;
pub mod controller;
pub mod errors;
pub mod export;
pub mod filter;
pub mod kiosk;
pub mod models;
pub mod ui;

pub use api::{AttendanceApi, CheckInOutcome, ManualStatusUpdate, RegistrationForm, RestClient};
pub use capture::{CaptureSource, ImageCapture};
pub use config::Config;
pub use controller::{AttendanceController, DashboardSummary, LoadPhase};
pub use errors::{AppError, AppResult};
pub use filter::{FilterCriteria, QueryPayload};
pub use models::{AttendanceRecord, AttendanceStatus, ClassRoster};
pub use ui::{Notice, NoticeLevel};

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use absensi_portal::api::{
    AttendanceApi, CheckInOutcome, ManualStatusUpdate, RegistrationForm,
};
use absensi_portal::capture::{CaptureSource, ImageCapture};
use absensi_portal::errors::{AppError, AppResult};
use absensi_portal::models::{AttendanceRecord, AttendanceStatus, NO_TIME};
use chrono::NaiveDate;
use tokio::sync::Notify;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

pub fn record(id: i64, name: &str, status: AttendanceStatus, time: &str) -> AttendanceRecord {
    AttendanceRecord {
        id,
        student_id: 100 + id,
        student_name: name.to_string(),
        class_label: "12 RPL".to_string(),
        subject_label: "Matematika".to_string(),
        status,
        time: time.to_string(),
        date: Some(date("2026-01-10")),
    }
}

pub fn unmarked(id: i64, name: &str) -> AttendanceRecord {
    record(id, name, AttendanceStatus::Unmarked, NO_TIME)
}

/// One scripted reply for a fetch. When `gate` is set the mock awaits it
/// before answering, which lets a test decide completion order.
pub struct ScriptedFetch {
    pub result: AppResult<Vec<AttendanceRecord>>,
    pub gate: Option<Arc<Notify>>,
}

impl ScriptedFetch {
    pub fn ok(records: Vec<AttendanceRecord>) -> Self {
        Self {
            result: Ok(records),
            gate: None,
        }
    }

    pub fn err(err: AppError) -> Self {
        Self {
            result: Err(err),
            gate: None,
        }
    }

    pub fn gated(records: Vec<AttendanceRecord>, gate: Arc<Notify>) -> Self {
        Self {
            result: Ok(records),
            gate: Some(gate),
        }
    }
}

/// Scripted in-memory backend. Replies are consumed front to back; every
/// issued call is logged so tests can assert what reached the "network".
#[derive(Default)]
pub struct MockApi {
    pub fetch_script: Mutex<VecDeque<ScriptedFetch>>,
    pub fetch_log: Mutex<Vec<String>>,
    pub manual_script: Mutex<VecDeque<AppResult<()>>>,
    pub manual_log: Mutex<Vec<ManualStatusUpdate>>,
    pub checkin_script: Mutex<VecDeque<AppResult<CheckInOutcome>>>,
    pub checkin_log: Mutex<Vec<String>>,
    pub register_script: Mutex<VecDeque<AppResult<()>>>,
    pub register_log: Mutex<Vec<RegistrationForm>>,
    pub roster: Mutex<Vec<String>>,
}

impl MockApi {
    pub fn push_fetch(&self, scripted: ScriptedFetch) {
        self.fetch_script.lock().unwrap().push_back(scripted);
    }

    pub fn push_manual(&self, result: AppResult<()>) {
        self.manual_script.lock().unwrap().push_back(result);
    }

    pub fn push_checkin(&self, result: AppResult<CheckInOutcome>) {
        self.checkin_script.lock().unwrap().push_back(result);
    }

    pub fn push_register(&self, result: AppResult<()>) {
        self.register_script.lock().unwrap().push_back(result);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_log.lock().unwrap().len()
    }

    async fn next_fetch(&self, description: String) -> AppResult<Vec<AttendanceRecord>> {
        self.fetch_log.lock().unwrap().push(description);
        let scripted = self
            .fetch_script
            .lock()
            .unwrap()
            .pop_front()
            .expect("fetch script exhausted");
        if let Some(gate) = scripted.gate {
            gate.notified().await;
        }
        scripted.result
    }
}

impl AttendanceApi for MockApi {
    async fn fetch_by_date_range(
        &self,
        start: &str,
        end: &str,
        class_label: Option<&str>,
    ) -> AppResult<Vec<AttendanceRecord>> {
        self.next_fetch(format!(
            "history {start}..{end} class={}",
            class_label.unwrap_or("*")
        ))
        .await
    }

    async fn fetch_by_class_and_subject(
        &self,
        class_label: &str,
        subject_label: &str,
        date: &str,
    ) -> AppResult<Vec<AttendanceRecord>> {
        self.next_fetch(format!("by-class {class_label}/{subject_label}@{date}"))
            .await
    }

    async fn fetch_roster(&self) -> AppResult<Vec<String>> {
        Ok(self.roster.lock().unwrap().clone())
    }

    async fn create_class(&self, label: &str) -> AppResult<()> {
        self.roster.lock().unwrap().push(label.to_string());
        Ok(())
    }

    async fn submit_manual_status(&self, update: &ManualStatusUpdate) -> AppResult<()> {
        self.manual_log.lock().unwrap().push(update.clone());
        self.manual_script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }

    async fn submit_check_in(
        &self,
        _image: &ImageCapture,
        subject_label: &str,
    ) -> AppResult<CheckInOutcome> {
        self.checkin_log
            .lock()
            .unwrap()
            .push(subject_label.to_string());
        self.checkin_script
            .lock()
            .unwrap()
            .pop_front()
            .expect("check-in script exhausted")
    }

    async fn register_student(
        &self,
        _image: &ImageCapture,
        form: &RegistrationForm,
    ) -> AppResult<()> {
        self.register_log.lock().unwrap().push(form.clone());
        self.register_script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }
}

/// Camera stub: `Some(image)` answers every capture, `None` reports the
/// camera as unavailable. Captures are counted.
pub struct MockCamera {
    pub image: Option<ImageCapture>,
    pub captures: Mutex<usize>,
}

impl MockCamera {
    pub fn ready() -> Self {
        Self {
            image: Some(ImageCapture::jpeg(vec![0xFF, 0xD8, 0xFF, 0xE0])),
            captures: Mutex::new(0),
        }
    }

    pub fn offline() -> Self {
        Self {
            image: None,
            captures: Mutex::new(0),
        }
    }

    pub fn capture_count(&self) -> usize {
        *self.captures.lock().unwrap()
    }
}

impl CaptureSource for MockCamera {
    fn capture_still(&self) -> AppResult<ImageCapture> {
        *self.captures.lock().unwrap() += 1;
        self.image
            .clone()
            .ok_or_else(|| AppError::CaptureUnavailable("Camera is offline".to_string()))
    }
}

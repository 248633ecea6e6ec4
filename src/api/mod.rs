pub mod client;
pub mod transport;

pub use client::RestClient;
pub use transport::{ApiRequest, ApiResponse, ImagePart, Method, RequestBody, Transport};

use crate::capture::ImageCapture;
use crate::errors::{AppError, AppResult};
use crate::filter::QueryPayload;
use crate::models::{AttendanceRecord, AttendanceStatus, ClassRoster};

/// A manual override submitted from the teacher journal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualStatusUpdate {
    pub student_id: i64,
    pub status: AttendanceStatus,
    pub subject_label: String,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
}

/// New-student registration form, validated before it reaches the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    /// External student number (NIS); owned by the school system.
    pub external_id: String,
    pub class_label: String,
}

/// Result of a face-scan check-in. `AlreadyCheckedIn` is the benign
/// duplicate the server reports with a 2xx; it is information for the
/// user, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckInOutcome {
    Recognized { student_name: String },
    AlreadyCheckedIn { message: String },
}

/// The backend contract consumed by the controller and the kiosk flows.
///
/// Every operation resolves to a success payload or a tagged `AppError`;
/// nothing opaque reaches the view layer.
#[allow(async_fn_in_trait)]
pub trait AttendanceApi {
    async fn fetch_by_date_range(
        &self,
        start: &str,
        end: &str,
        class_label: Option<&str>,
    ) -> AppResult<Vec<AttendanceRecord>>;

    /// Also returns roster entries with `status = Unmarked` for students
    /// without an event yet; that left join is the server's job.
    async fn fetch_by_class_and_subject(
        &self,
        class_label: &str,
        subject_label: &str,
        date: &str,
    ) -> AppResult<Vec<AttendanceRecord>>;

    async fn fetch_roster(&self) -> AppResult<Vec<String>>;

    async fn create_class(&self, label: &str) -> AppResult<()>;

    async fn submit_manual_status(&self, update: &ManualStatusUpdate) -> AppResult<()>;

    async fn submit_check_in(
        &self,
        image: &ImageCapture,
        subject_label: &str,
    ) -> AppResult<CheckInOutcome>;

    async fn register_student(
        &self,
        image: &ImageCapture,
        form: &RegistrationForm,
    ) -> AppResult<()>;

    /// Dispatch on the canonical filter payload. Both attendance queries
    /// funnel through here from the controller.
    async fn fetch(&self, payload: &QueryPayload) -> AppResult<Vec<AttendanceRecord>> {
        match payload {
            QueryPayload::History {
                start,
                end,
                class_label,
            } => {
                self.fetch_by_date_range(start, end, class_label.as_deref())
                    .await
            }
            QueryPayload::ByClass {
                class_label,
                subject_label,
                date,
            } => {
                self.fetch_by_class_and_subject(class_label, subject_label, date)
                    .await
            }
        }
    }

    /// Roster as the selectable-classes model for the journal dropdown.
    async fn load_roster(&self) -> AppResult<ClassRoster> {
        Ok(ClassRoster::from_labels(self.fetch_roster().await?))
    }

    /// Creates a class and returns the re-fetched roster, the way the
    /// journal page refreshes its dropdown after adding one. A blank
    /// label is rejected locally.
    async fn add_class(&self, label: &str) -> AppResult<ClassRoster> {
        let label = label.trim();
        if label.is_empty() {
            return Err(AppError::Validation(
                "Class name must not be empty".to_string(),
            ));
        }
        self.create_class(label).await?;
        self.load_roster().await
    }
}

/// One client is shared by several page controllers; forwarding through
/// `Arc` keeps that ergonomic.
impl<A: AttendanceApi> AttendanceApi for std::sync::Arc<A> {
    async fn fetch_by_date_range(
        &self,
        start: &str,
        end: &str,
        class_label: Option<&str>,
    ) -> AppResult<Vec<AttendanceRecord>> {
        (**self).fetch_by_date_range(start, end, class_label).await
    }

    async fn fetch_by_class_and_subject(
        &self,
        class_label: &str,
        subject_label: &str,
        date: &str,
    ) -> AppResult<Vec<AttendanceRecord>> {
        (**self)
            .fetch_by_class_and_subject(class_label, subject_label, date)
            .await
    }

    async fn fetch_roster(&self) -> AppResult<Vec<String>> {
        (**self).fetch_roster().await
    }

    async fn create_class(&self, label: &str) -> AppResult<()> {
        (**self).create_class(label).await
    }

    async fn submit_manual_status(&self, update: &ManualStatusUpdate) -> AppResult<()> {
        (**self).submit_manual_status(update).await
    }

    async fn submit_check_in(
        &self,
        image: &ImageCapture,
        subject_label: &str,
    ) -> AppResult<CheckInOutcome> {
        (**self).submit_check_in(image, subject_label).await
    }

    async fn register_student(
        &self,
        image: &ImageCapture,
        form: &RegistrationForm,
    ) -> AppResult<()> {
        (**self).register_student(image, form).await
    }
}

//! Check-in / registration flows for the camera kiosk page.
//!
//! Both flows follow the same ladder: validate locally, capture a still,
//! submit, translate the outcome into a [`Notice`] banner. Client-side
//! validation failures and an unavailable camera never reach the network.

use log::{info, warn};

use crate::api::{AttendanceApi, CheckInOutcome, RegistrationForm};
use crate::capture::CaptureSource;
use crate::errors::{AppError, AppResult};
use crate::models::GATE_SUBJECT;
use crate::ui::notice::Notice;

/// Scans a face and records a gate or per-subject check-in.
///
/// A recognized face yields a success banner greeting the student; the
/// benign "already checked in" reply yields an informational banner with
/// the server's exact message, styled as neither success nor error.
pub async fn check_in<C, A>(camera: &C, api: &A, subject_label: &str) -> AppResult<Notice>
where
    C: CaptureSource,
    A: AttendanceApi,
{
    let image = camera.capture_still()?;
    let subject = if subject_label.trim().is_empty() {
        GATE_SUBJECT
    } else {
        subject_label.trim()
    };

    match api.submit_check_in(&image, subject).await? {
        CheckInOutcome::Recognized { student_name } => {
            info!("check-in accepted for {student_name}");
            Ok(Notice::success(format!(
                "Hallo {student_name}! Attendance recorded."
            )))
        }
        CheckInOutcome::AlreadyCheckedIn { message } => {
            info!("duplicate check-in: {message}");
            Ok(Notice::info(message))
        }
    }
}

/// Registers a new student from the kiosk form plus a camera still.
///
/// All three fields are required; the check happens here, without a
/// network round-trip. Returns the cleared form alongside the banner so
/// the view can reset its inputs, mirroring the portal behavior.
pub async fn register<C, A>(
    camera: &C,
    api: &A,
    form: &RegistrationForm,
) -> AppResult<(Notice, RegistrationForm)>
where
    C: CaptureSource,
    A: AttendanceApi,
{
    validate_registration(form)?;
    let image = camera.capture_still()?;

    match api.register_student(&image, form).await {
        Ok(()) => Ok((
            Notice::success("Student registered successfully."),
            RegistrationForm::default(),
        )),
        Err(err) => {
            warn!("registration rejected: {err}");
            Err(err)
        }
    }
}

fn validate_registration(form: &RegistrationForm) -> AppResult<()> {
    if form.name.trim().is_empty()
        || form.external_id.trim().is_empty()
        || form.class_label.trim().is_empty()
    {
        return Err(AppError::Validation(
            "All fields (name, NIS, class) are required".to_string(),
        ));
    }
    Ok(())
}

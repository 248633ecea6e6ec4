//! Typed REST client for the attendance backend.
//!
//! Thin by design: each method builds one request shape, sends it through
//! the [`Transport`] seam and maps the reply. Responses use a
//! `{ "data": ... }` envelope; error bodies carry `detail` or `message`
//! and that text is surfaced verbatim when present.

use log::debug;
use serde::Deserialize;
use serde_json::json;

use crate::api::transport::{ApiRequest, ApiResponse, ImagePart, Transport};
use crate::api::{AttendanceApi, CheckInOutcome, ManualStatusUpdate, RegistrationForm};
use crate::capture::ImageCapture;
use crate::errors::{AppError, AppResult};
use crate::models::AttendanceRecord;

pub struct RestClient<T: Transport> {
    transport: T,
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct CheckInReply {
    status: String,
    #[serde(default)]
    student: Option<CheckInStudent>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct CheckInStudent {
    name: String,
}

impl<T: Transport> RestClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    async fn send(&self, request: ApiRequest) -> AppResult<ApiResponse> {
        debug!("-> {:?} {}", request.method, request.path);
        let response = self.transport.send(request).await?;
        debug!("<- {}", response.status);
        Ok(response)
    }

    /// Expects a 2xx `{ "data": ... }` reply.
    async fn send_enveloped<D: for<'de> Deserialize<'de>>(
        &self,
        request: ApiRequest,
    ) -> AppResult<D> {
        let response = self.send(request).await?;
        if !response.is_success() {
            return Err(server_error(&response));
        }
        let envelope: Envelope<D> = serde_json::from_str(&response.body)
            .map_err(|e| AppError::Server {
                message: format!("Malformed server reply: {e}"),
            })?;
        Ok(envelope.data)
    }

    /// Expects a 2xx with no payload of interest (204-style).
    async fn send_expect_ok(&self, request: ApiRequest) -> AppResult<()> {
        let response = self.send(request).await?;
        if !response.is_success() {
            return Err(server_error(&response));
        }
        Ok(())
    }

    fn image_part(image: &ImageCapture) -> ImagePart {
        ImagePart {
            field: "image".to_string(),
            filename: "face_capture.jpg".to_string(),
            mime: image.mime.clone(),
            bytes: image.bytes.clone(),
        }
    }
}

/// Pulls the server-provided message out of an error body, falling back
/// to a generic text when there is none.
fn error_message(response: &ApiResponse) -> String {
    if let Ok(body) = serde_json::from_str::<serde_json::Value>(&response.body) {
        for key in ["detail", "message"] {
            if let Some(text) = body.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    format!("Request failed with status {}", response.status)
}

fn server_error(response: &ApiResponse) -> AppError {
    AppError::Server {
        message: error_message(response),
    }
}

impl<T: Transport> AttendanceApi for RestClient<T> {
    async fn fetch_by_date_range(
        &self,
        start: &str,
        end: &str,
        class_label: Option<&str>,
    ) -> AppResult<Vec<AttendanceRecord>> {
        let mut body = json!({ "start": start, "end": end });
        if let Some(label) = class_label {
            body["classLabel"] = json!(label);
        }
        self.send_enveloped(ApiRequest::post_json("/attendance/history", body))
            .await
    }

    async fn fetch_by_class_and_subject(
        &self,
        class_label: &str,
        subject_label: &str,
        date: &str,
    ) -> AppResult<Vec<AttendanceRecord>> {
        let request = ApiRequest::get("/attendance/by-class")
            .with_query("classLabel", class_label)
            .with_query("subjectLabel", subject_label)
            .with_query("date", date);
        self.send_enveloped(request).await
    }

    async fn fetch_roster(&self) -> AppResult<Vec<String>> {
        self.send_enveloped(ApiRequest::get("/roster-classes")).await
    }

    async fn create_class(&self, label: &str) -> AppResult<()> {
        let request = ApiRequest::post_json("/roster-classes", json!({ "label": label }));
        self.send_expect_ok(request).await
    }

    async fn submit_manual_status(&self, update: &ManualStatusUpdate) -> AppResult<()> {
        let request = ApiRequest::post_json(
            "/attendance/manual-status",
            json!({
                "studentId": update.student_id,
                "status": update.status.as_str(),
                "subjectLabel": update.subject_label,
                "date": update.date,
            }),
        );
        self.send_expect_ok(request).await
    }

    async fn submit_check_in(
        &self,
        image: &ImageCapture,
        subject_label: &str,
    ) -> AppResult<CheckInOutcome> {
        let request = ApiRequest::post_multipart(
            "/attendance/check-in",
            vec![("subjectLabel".to_string(), subject_label.to_string())],
            Self::image_part(image),
        );
        let response = self.send(request).await?;
        if !response.is_success() {
            return Err(server_error(&response));
        }

        let reply: CheckInReply =
            serde_json::from_str(&response.body).map_err(|e| AppError::Server {
                message: format!("Malformed server reply: {e}"),
            })?;

        match reply.status.as_str() {
            "info" => Ok(CheckInOutcome::AlreadyCheckedIn {
                message: reply
                    .message
                    .unwrap_or_else(|| "Already checked in.".to_string()),
            }),
            _ => {
                let student = reply.student.ok_or_else(|| AppError::Server {
                    message: "Check-in reply is missing the student".to_string(),
                })?;
                Ok(CheckInOutcome::Recognized {
                    student_name: student.name,
                })
            }
        }
    }

    async fn register_student(
        &self,
        image: &ImageCapture,
        form: &RegistrationForm,
    ) -> AppResult<()> {
        let request = ApiRequest::post_multipart(
            "/students/register",
            vec![
                ("name".to_string(), form.name.clone()),
                ("externalId".to_string(), form.external_id.clone()),
                ("classLabel".to_string(), form.class_label.clone()),
            ],
            Self::image_part(image),
        );
        let response = self.send(request).await?;
        match response.status {
            // the backend could not detect exactly one face
            400 => Err(AppError::Validation(error_message(&response))),
            // the identity is already registered
            409 => Err(AppError::Conflict(error_message(&response))),
            _ if !response.is_success() => Err(server_error(&response)),
            _ => Ok(()),
        }
    }
}

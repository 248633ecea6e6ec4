//! Unified application error type.
//! All modules (api, controller, kiosk, export, config) return AppError to
//! keep the error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Remote API
    // ---------------------------
    /// No response reached the client (DNS, timeout, connection refused).
    #[error("Network error: {0}")]
    Transport(String),

    /// Non-2xx reply; `message` is the server-provided text when present.
    #[error("Server error: {message}")]
    Server { message: String },

    // ---------------------------
    // Submission errors
    // ---------------------------
    /// Rejected before or by the backend (missing fields, no face found).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The identity already exists on the backend.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The camera collaborator could not produce a still.
    #[error("Camera not ready: {0}")]
    CaptureUnavailable(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid status value: {0}")]
    InvalidStatus(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Text shown to the user in a banner. Server-provided messages pass
    /// through verbatim; everything else falls back to the Display form.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Server { message } => message.clone(),
            AppError::Validation(msg) | AppError::Conflict(msg) => msg.clone(),
            other => other.to_string(),
        }
    }

    /// True for failures of the network round-trip itself, as opposed to
    /// client-side validation that never reached the wire.
    pub fn is_remote(&self) -> bool {
        matches!(self, AppError::Transport(_) | AppError::Server { .. })
    }
}

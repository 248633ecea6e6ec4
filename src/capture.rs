//! Seam for the camera collaborator.
//!
//! The capture component lives outside this crate; it hands the flows a
//! single still image or reports that none is available. The core never
//! retries a capture itself.

use crate::errors::{AppError, AppResult};

/// A camera still ready to be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCapture {
    pub bytes: Vec<u8>,
    pub mime: String,
}

impl ImageCapture {
    pub fn jpeg(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            mime: "image/jpeg".to_string(),
        }
    }
}

/// Produces a still image on demand.
///
/// An `Err` means the camera was not ready; submitting flows fail fast on
/// it with a user-facing "camera not ready" condition, before any network
/// call is made.
pub trait CaptureSource {
    fn capture_still(&self) -> AppResult<ImageCapture>;
}

/// Convenience for shells that have no camera wired up yet.
pub struct NoCamera;

impl CaptureSource for NoCamera {
    fn capture_still(&self) -> AppResult<ImageCapture> {
        Err(AppError::CaptureUnavailable(
            "No camera is attached".to_string(),
        ))
    }
}

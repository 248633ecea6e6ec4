//! Wire-level seam between the typed client and the embedding shell.
//!
//! The backend is an external collaborator reached over HTTP; the shell
//! supplies the actual socket layer by implementing [`Transport`]. The
//! crate only builds requests and interprets responses, which keeps every
//! piece of client logic testable against an in-memory transport.

use crate::errors::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One image part of a multipart submission (camera still).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePart {
    pub field: String,
    pub filename: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart {
        fields: Vec<(String, String)>,
        image: ImagePart,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn get(path: &str) -> Self {
        Self {
            method: Method::Get,
            path: path.to_string(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn post_json(path: &str, body: serde_json::Value) -> Self {
        Self {
            method: Method::Post,
            path: path.to_string(),
            query: Vec::new(),
            body: RequestBody::Json(body),
        }
    }

    pub fn post_multipart(
        path: &str,
        fields: Vec<(String, String)>,
        image: ImagePart,
    ) -> Self {
        Self {
            method: Method::Post,
            path: path.to_string(),
            query: Vec::new(),
            body: RequestBody::Multipart { fields, image },
        }
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns the raw response. Timeouts and connection
/// handling live behind this trait; failures to get any response at all
/// surface as [`crate::errors::AppError::Transport`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> AppResult<ApiResponse>;
}

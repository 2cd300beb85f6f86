/// Error responses for the HTTP adapter
///
/// Every failure leaves the server as a JSON body of the form
/// `{"error": <message>, "code": <code>, "details": {...}}`, where `code`
/// and `details` are omitted when the error carries none.
use serde::{Deserialize, Serialize};
use std::fmt;
use warp::http::StatusCode;
use warp::reply::{self, Response};
use warp::Reply;

/// Standard error body for all endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Machine-readable error code (e.g. "invalid_card")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Optional structured data about the failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: None,
            details: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convert to HTTP response with specified status code
    pub fn into_response(self, status: StatusCode) -> Response {
        reply::with_status(reply::json(&self), status).into_response()
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{}: {}", code, self.error),
            None => write!(f, "{}", self.error),
        }
    }
}

/// Error classification for logging levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Client errors (4xx), expected during normal operation
    Client,
    /// Server errors (5xx)
    Server,
}

/// Converts an error into an HTTP response and logs it
pub trait IntoErrorResponse {
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error code, if the error has one
    fn error_code(&self) -> Option<&'static str> {
        None
    }

    fn error_message(&self) -> String;

    fn error_details(&self) -> Option<serde_json::Value> {
        None
    }

    fn severity(&self) -> ErrorSeverity {
        if self.status_code().is_server_error() {
            ErrorSeverity::Server
        } else {
            ErrorSeverity::Client
        }
    }

    fn to_error_response(&self) -> ErrorResponse {
        let mut response = ErrorResponse::new(self.error_message());
        if let Some(code) = self.error_code() {
            response = response.with_code(code);
        }
        if let Some(details) = self.error_details() {
            response = response.with_details(details);
        }
        response
    }

    fn into_http_response(self) -> Response
    where
        Self: Sized,
    {
        let status = self.status_code();
        let error_response = self.to_error_response();

        match self.severity() {
            ErrorSeverity::Client => tracing::info!(
                status = status.as_u16(),
                code = error_response.code.as_deref().unwrap_or("-"),
                "client error: {}",
                error_response.error
            ),
            ErrorSeverity::Server => tracing::error!(
                status = status.as_u16(),
                "server error: {}",
                error_response.error
            ),
        }

        error_response.into_response(status)
    }
}

use std::fmt;

use gc_core::envelope::DecodeError;
use miette::Diagnostic;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = miette::Result<T, ClientError>;

#[derive(Error, Diagnostic, Debug)]
pub enum ClientError {
    #[error("invalid GoCardless configuration: {0}")]
    #[diagnostic(code(gocardless::config::invalid))]
    Configuration(#[source] gc_core::Error),
    #[error("failed to create HTTP client: {0}")]
    ClientBuildError(reqwest::Error),
    #[error("failed to create HTTP request: {0}")]
    RequestBuildError(reqwest::Error),
    #[error("failed to serialize request body: {0}")]
    RequestSerializeError(gc_core::Error),
    #[error("base URL {0} cannot have resource paths appended to it")]
    #[diagnostic(code(gocardless::config::invalid))]
    InvalidEndpoint(String),
    #[error("'{0}' is not a valid resource ID")]
    #[diagnostic(code(gocardless::bad_argument))]
    InvalidId(String),
    #[error("failed to execute HTTP request: {0}")]
    #[diagnostic(code(gocardless::transport))]
    RequestError(reqwest::Error),
    #[error("failed to parse API response: {0}")]
    #[diagnostic(code(gocardless::response::invalid))]
    ResponseParseError(serde_json::Error),
    #[error("API response has no {0} envelope")]
    #[diagnostic(code(gocardless::response::invalid))]
    MissingEnvelope(&'static str),
    #[error("GoCardless API error ({status}): {error}")]
    #[diagnostic(code(gocardless::api))]
    Api {
        status: StatusCode,
        error: ApiErrorDetails,
    },
    #[error("HTTP error calling GoCardless: {1} ({0})")]
    #[diagnostic(code(gocardless::api))]
    ApiHttp(StatusCode, String),
}

impl ClientError {
    /// HTTP status of the response, for errors the API returned.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } | ClientError::ApiHttp(status, _) => Some(*status),
            ClientError::RequestError(e) => e.status(),
            _ => None,
        }
    }

}

impl From<DecodeError> for ClientError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Json(e) => ClientError::ResponseParseError(e),
            DecodeError::MissingEnvelope(key) => ClientError::MissingEnvelope(key),
        }
    }
}

/// Body of a non-2xx response: `{"error": {...}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub error: ApiErrorDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorDetails {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: Option<ApiErrorType>,
    pub code: Option<u16>,
    pub request_id: Option<String>,
    pub documentation_url: Option<String>,
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

impl fmt::Display for ApiErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for error in &self.errors {
            match &error.field {
                Some(field) => write!(f, "; {} {}", field, error.message)?,
                None => write!(f, "; {}", error.message)?,
            }
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " [request {}]", request_id)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Option<String>,
    pub message: String,
    pub reason: Option<String>,
    pub request_pointer: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    #[serde(rename = "gocardless")]
    GoCardless,
    InvalidApiUsage,
    InvalidState,
    ValidationFailed,
    #[serde(other)]
    Unknown,
}

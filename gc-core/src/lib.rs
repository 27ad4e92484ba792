pub mod config;
pub mod envelope;
pub mod mask;
pub mod model;

pub use config::Config;

pub const GOCARDLESS_BASE_URL_ENV: &str = "GOCARDLESS_BASE_URL";
pub const GOCARDLESS_VERSION_ENV: &str = "GOCARDLESS_VERSION";
pub const GOCARDLESS_TOKEN_ENV: &str = "GOCARDLESS_TOKEN";
pub const GOCARDLESS_CREDITOR_ID_ENV: &str = "GOCARDLESS_CREDITOR_ID";
pub const GOCARDLESS_WEBHOOK_SECRET_ENV: &str = "GOCARDLESS_WEBHOOK_SECRET";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("base URL must use http or https, got {0}")]
    UnsupportedScheme(String),
    #[error("base URL {0} must not have a query string or fragment")]
    BaseUrlHasQueryOrFragment(String),
    #[error("configuration setting {0} must not be empty")]
    MissingSetting(&'static str),
    #[error("required environment variable {0} is not set")]
    MissingEnvironmentVariable(&'static str),
    #[error("JSON serialization error: {0}")]
    JSONSerializationError(#[from] serde_json::Error),
}

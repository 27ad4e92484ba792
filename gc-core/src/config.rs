use std::fmt;

use url::Url;

use crate::{
    mask, Error, GOCARDLESS_BASE_URL_ENV, GOCARDLESS_CREDITOR_ID_ENV, GOCARDLESS_TOKEN_ENV,
    GOCARDLESS_VERSION_ENV, GOCARDLESS_WEBHOOK_SECRET_ENV,
};

pub const SANDBOX_BASE_URL: &str = "https://api-sandbox.gocardless.com/";
pub const LIVE_BASE_URL: &str = "https://api.gocardless.com/";
pub const DEFAULT_VERSION: &str = "2015-07-06";

/// Connection settings shared by every request a client makes.
///
/// Validated once at construction and immutable afterwards; the base URL
/// always ends in `/` so that resource paths can be appended to it.
#[derive(Clone)]
pub struct Config {
    base_url: Url,
    version: String,
    token: String,
    creditor_id: Option<String>,
    webhook_secret: Option<String>,
}

impl Config {
    pub fn new(base_url: &str, version: &str, token: &str) -> Result<Self, Error> {
        let mut base_url: Url = base_url.trim().parse()?;
        match base_url.scheme() {
            "http" | "https" => {}
            other => return Err(Error::UnsupportedScheme(other.to_string())),
        }
        if base_url.query().is_some() || base_url.fragment().is_some() {
            return Err(Error::BaseUrlHasQueryOrFragment(base_url.to_string()));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let version = version.trim();
        if version.is_empty() {
            return Err(Error::MissingSetting("version"));
        }
        let token = token.trim();
        if token.is_empty() {
            return Err(Error::MissingSetting("token"));
        }

        Ok(Self {
            base_url,
            version: version.to_string(),
            token: token.to_string(),
            creditor_id: None,
            webhook_secret: None,
        })
    }

    /// Loads configuration from `GOCARDLESS_*` environment variables.
    ///
    /// Only the token is mandatory; the base URL defaults to the sandbox
    /// and the version to [`DEFAULT_VERSION`].
    pub fn from_env() -> Result<Self, Error> {
        let base_url = env_or_default(GOCARDLESS_BASE_URL_ENV, SANDBOX_BASE_URL);
        let version = env_or_default(GOCARDLESS_VERSION_ENV, DEFAULT_VERSION);
        let token = std::env::var(GOCARDLESS_TOKEN_ENV)
            .map_err(|_| Error::MissingEnvironmentVariable(GOCARDLESS_TOKEN_ENV))?;

        let mut config = Self::new(&base_url, &version, &token)?;
        if let Some(creditor_id) = env_non_empty(GOCARDLESS_CREDITOR_ID_ENV) {
            config = config.with_creditor_id(creditor_id);
        }
        if let Some(secret) = env_non_empty(GOCARDLESS_WEBHOOK_SECRET_ENV) {
            config = config.with_webhook_secret(secret);
        }

        if config.base_url.as_str() == SANDBOX_BASE_URL {
            tracing::debug!("using the GoCardless sandbox environment");
        }

        Ok(config)
    }

    pub fn with_creditor_id(mut self, creditor_id: impl Into<String>) -> Self {
        self.creditor_id = Some(creditor_id.into());
        self
    }

    pub fn with_webhook_secret(mut self, secret: impl Into<String>) -> Self {
        self.webhook_secret = Some(secret.into());
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn creditor_id(&self) -> Option<&str> {
        self.creditor_id.as_deref()
    }

    pub fn webhook_secret(&self) -> Option<&str> {
        self.webhook_secret.as_deref()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url.as_str())
            .field("version", &self.version)
            .field("token", &mask::secret(&self.token))
            .field("creditor_id", &self.creditor_id)
            .field(
                "webhook_secret",
                &self.webhook_secret.as_deref().map(mask::secret),
            )
            .finish()
    }
}

fn env_or_default(name: &str, default: &str) -> String {
    env_non_empty(name).unwrap_or_else(|| default.to_string())
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

use gc_core::model::{CreateRequest, Links, Resource};
use gc_core::{envelope, mask, Config};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use url::Url;

use crate::error::{ApiErrorResponse, ClientError, Result};

const GOCARDLESS_VERSION_HEADER: &str = "GoCardless-Version";
const GOCARDLESS_CONTENT_TYPE: &str = "application/vnd.api+json";

/// Client for the GoCardless API.
///
/// Every operation issues exactly one HTTP request; nothing is retried or
/// cached. The client only holds read-only state, so clones can be shared
/// freely between tasks.
#[derive(Clone, Debug)]
pub struct Client {
    config: Config,
    http: reqwest::Client,
}

impl Client {
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(ClientError::ClientBuildError)?;
        Ok(Self::with_http_client(http, config))
    }

    /// Uses a preconfigured HTTP client, e.g. one with timeouts or a proxy.
    pub fn with_http_client(http: reqwest::Client, config: Config) -> Self {
        tracing::debug!(
            base_url = config.base_url().as_str(),
            version = config.version(),
            token = mask::secret(config.token()).as_str(),
            "GoCardless client created"
        );
        Self { config, http }
    }

    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env().map_err(ClientError::Configuration)?)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) async fn create<RQ: CreateRequest>(&self, request: &RQ) -> Result<RQ::Resource> {
        let body = envelope::encode(request).map_err(ClientError::RequestSerializeError)?;
        let url = self.endpoint(&[<RQ::Resource as Resource>::ENVELOPE])?;
        self.execute(Method::POST, url, Some(body)).await
    }

    pub(crate) async fn get<R: Resource>(&self, id: &str) -> Result<R> {
        let url = self.resource_endpoint(R::ENVELOPE, id, None)?;
        self.execute(Method::GET, url, None).await
    }

    pub(crate) async fn action<R: Resource>(&self, id: &str, action: &str) -> Result<R> {
        let url = self.resource_endpoint(R::ENVELOPE, id, Some(action))?;
        self.execute(Method::POST, url, None).await
    }

    /// Returns `links` with `creditor` set to the configured creditor, or
    /// `None` if the links already name one or no creditor is configured.
    pub(crate) fn links_with_default_creditor(&self, links: &Links) -> Option<Links> {
        if links.contains_key("creditor") {
            return None;
        }
        self.config.creditor_id().map(|creditor_id| {
            let mut links = links.clone();
            links.insert("creditor".to_string(), creditor_id.to_string());
            links
        })
    }

    /// URL of a single resource, or of one of its actions. IDs the URL
    /// parser would collapse into another path (`""`, `.`, `..`) are
    /// rejected.
    fn resource_endpoint(&self, collection: &str, id: &str, action: Option<&str>) -> Result<Url> {
        if matches!(id.trim(), "" | "." | "..") {
            return Err(ClientError::InvalidId(id.to_string()));
        }
        match action {
            Some(action) => self.endpoint(&[collection, id, "actions", action]),
            None => self.endpoint(&[collection, id]),
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.config.base_url().clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidEndpoint(self.config.base_url().to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn execute<R: Resource>(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<R> {
        let mut builder = self
            .http
            .request(method.clone(), url.clone())
            .header(GOCARDLESS_VERSION_HEADER, self.config.version())
            .header(AUTHORIZATION, format!("Bearer {}", self.config.token()))
            .header(CONTENT_TYPE, GOCARDLESS_CONTENT_TYPE);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        let req = builder.build().map_err(ClientError::RequestBuildError)?;

        tracing::debug!(
            method = method.as_str(),
            url = url.as_str(),
            "sending GoCardless request"
        );

        let resp = self
            .http
            .execute(req)
            .await
            .map_err(ClientError::RequestError)?;

        let status = resp.status();

        let response_body_bytes = resp.bytes().await.map_err(ClientError::RequestError)?;

        if !status.is_success() {
            return Err(api_error(status, &response_body_bytes));
        }

        let resource: R = envelope::decode(&response_body_bytes)?;

        tracing::debug!(
            method = method.as_str(),
            status = status.as_u16(),
            resource = R::ENVELOPE,
            id = resource.id(),
            "GoCardless request completed"
        );

        Ok(resource)
    }
}

fn api_error(status: StatusCode, body: &[u8]) -> ClientError {
    match serde_json::from_slice::<ApiErrorResponse>(body) {
        Ok(response) => {
            tracing::warn!(
                status = status.as_u16(),
                request_id = response.error.request_id.as_deref().unwrap_or(""),
                "GoCardless API error: {}",
                response.error.message
            );
            ClientError::Api {
                status,
                error: response.error,
            }
        }
        Err(_) => {
            tracing::warn!(status = status.as_u16(), "GoCardless HTTP error");
            ClientError::ApiHttp(status, String::from_utf8_lossy(body).to_string())
        }
    }
}

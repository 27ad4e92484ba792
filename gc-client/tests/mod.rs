use gc_client::{Client, Config};
use serde_json::Value;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

pub const VERSION: &str = "2015-07-06";
pub const CREDITOR_ID: &str = "AAAAAAAAAAAA";
pub const WEBHOOK_SECRET: &str = "BBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBB";
pub const TOKEN: &str = "CCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCC";


/// A mock GoCardless API and a client pointed at it.
pub struct TestApi {
    server: MockServer,
    client: Client,
}

impl TestApi {
    pub async fn start() -> Self {
        Self::start_with(|config| {
            config
                .with_creditor_id(CREDITOR_ID)
                .with_webhook_secret(WEBHOOK_SECRET)
        })
        .await
    }

    pub async fn start_without_creditor() -> Self {
        Self::start_with(|config| config).await
    }

    async fn start_with(configure: impl FnOnce(Config) -> Config) -> Self {
        let server = MockServer::start().await;
        let config = Config::new(&format!("{}/", server.uri()), VERSION, TOKEN)
            .expect("failed to create test configuration");
        let client = Client::new(configure(config)).expect("failed to create client");
        Self { server, client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// Expects exactly one request with the standard GoCardless headers.
    pub async fn expect(&self, http_method: &str, request_path: &str, response: ResponseTemplate) {
        given(http_method, request_path)
            .respond_with(response)
            .expect(1)
            .mount(&self.server)
            .await;
    }

    pub async fn received_bodies(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .expect("request recording is disabled")
            .into_iter()
            .map(|r| String::from_utf8(r.body).expect("request body is not UTF-8"))
            .collect()
    }
}

pub fn given(http_method: &str, request_path: &str) -> MockBuilder {
    Mock::given(method(http_method))
        .and(path(request_path))
        .and(header("GoCardless-Version", VERSION))
        .and(header("Authorization", format!("Bearer {}", TOKEN).as_str()))
        .and(header("Content-Type", "application/vnd.api+json"))
}

pub fn envelope(status: u16, key: &str, resource: Value) -> ResponseTemplate {
    let mut body = serde_json::Map::new();
    body.insert(key.to_string(), resource);
    ResponseTemplate::new(status).set_body_json(Value::Object(body))
}

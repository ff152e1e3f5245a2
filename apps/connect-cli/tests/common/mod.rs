//! Common test utilities for connect-cli integration tests.

#![allow(dead_code)]

use connect_cli::api::ApiClient;
use connect_cli::commands::Context;
use connect_cli::config::Config;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SPLUNK_SINK: &str = "io.confluent.kafka.connect.splunk.SplunkHttpSinkConnector";
pub const FILE_SINK: &str = "org.apache.kafka.connect.file.FileStreamSinkConnector";

/// Connector document as returned by the control plane after creation.
pub fn connector_info_fixture(name: &str, class: &str) -> Value {
    json!({
        "name": name,
        "config": {
            "connector.class": class,
            "tasks.max": "1",
            "name": name
        },
        "tasks": [],
        "type": "sink"
    })
}

/// Status document with one task in the same state as the connector.
pub fn status_fixture(name: &str, state: &str) -> Value {
    json!({
        "name": name,
        "connector": { "state": state, "worker_id": "10.0.0.5:8083" },
        "tasks": [
            { "id": 0, "state": state, "worker_id": "10.0.0.5:8083" }
        ],
        "type": "sink"
    })
}

/// Complete, valid Splunk sink document.
pub fn splunk_sink_document(name: &str) -> Value {
    json!({
        "name": name,
        "config": {
            "connector.class": SPLUNK_SINK,
            "tasks.max": "5",
            "topics": "logs",
            "splunk.remote.host": "localhost",
            "splunk.remote.port": "8088",
            "splunk.auth.token": "00000000-0000-0000-0000-000000000000",
            "splunk.ssl.enabled": "true",
            "splunk.ssl.validate.certs": "true"
        }
    })
}

/// A mock Connect REST worker and a client pointed at it.
pub struct TestContext {
    pub server: MockServer,
}

impl TestContext {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    /// Client settings pointing at the mock server
    pub fn config(&self) -> Config {
        let address = self.server.address();
        Config {
            host: address.ip().to_string(),
            port: address.port(),
            ..Config::default()
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.config()).expect("client builds")
    }

    pub fn client_with(&self, adjust: impl FnOnce(&mut Config)) -> ApiClient {
        let mut config = self.config();
        adjust(&mut config);
        ApiClient::new(config).expect("client builds")
    }

    pub fn context(&self) -> Context {
        Context::new(self.client())
    }

    /// Number of requests the mock server has seen so far.
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }

    pub async fn mock_connectors_list(&self, names: &[&str]) {
        Mock::given(method("GET"))
            .and(path("/connectors"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(names)))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_exists(&self, name: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/connectors/{name}")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(connector_info_fixture(name, FILE_SINK)),
            )
            .mount(&self.server)
            .await;
    }

    pub async fn mock_missing(&self, name: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/connectors/{name}")))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error_code": 404,
                "message": format!("Connector {name} not found")
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_plugins(&self, classes: &[&str]) {
        let plugins: Vec<Value> = classes
            .iter()
            .map(|class| json!({ "class": class, "type": "sink", "version": "1.0.0" }))
            .collect();
        Mock::given(method("GET"))
            .and(path("/connector-plugins"))
            .respond_with(ResponseTemplate::new(200).set_body_json(plugins))
            .mount(&self.server)
            .await;
    }
}

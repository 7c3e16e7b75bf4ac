use reqwest::Response;
use serde_json::{
    json,
    Value,
};
use uuid::Uuid;
use wiremock::MockServer;

use welcome_notifier::app::{
    load_configuration_for,
    setup_tracing,
    HttpRelaySettings,
    NotifierApp,
    RelayKind,
};

// ensure the `tracing` is instantiated only once
lazy_static::lazy_static! {
 static ref TRACING: () = setup_tracing("test".into(),"debug".into());
}

pub const ADMIN_CREATED: &str = "providers/cloud.firestore/eventTypes/document.create";
pub const ADMIN_UPDATED: &str = "providers/cloud.firestore/eventTypes/document.update";

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
}

/// When a `tokio` runtime is shut down all tasks spawned on it are dropped.
///
/// `actix_rt::test` spins up a new runtime at the beginning of each test case
/// and they shut down at the end of each test case.
pub async fn spawn_app() -> TestApp {
    lazy_static::initialize(&TRACING);
    let email_server = MockServer::start().await;

    let configuration = {
        let mut c = load_configuration_for("local").unwrap();
        c.application.port = 0;
        c.email_client.timeout_secs = 2;
        c.email_client.relay.kind = RelayKind::Http;
        c.email_client.relay.http = Some(HttpRelaySettings {
            base_url: email_server.uri(),
            token: "test-token".to_string(),
        });
        c
    };

    let app = NotifierApp::build(configuration).expect("error building app");
    tokio::spawn(app.server);

    TestApp {
        // the request is done with the protocol:ip:port
        address: format!("http://127.0.0.1:{}", app.port),
        email_server,
    }
}

impl TestApp {
    pub async fn post_document_event(&self, body: &Value) -> Response {
        send_json_post_request(&format!("{}/triggers/document-created", self.address), body)
            .await
    }

    /// The JSON bodies the mail API received so far.
    pub async fn sent_emails(&self) -> Vec<Value> {
        self.email_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|request| serde_json::from_slice::<Value>(&request.body).unwrap())
            .collect()
    }
}

/// A document event the way the store pushes it, for the document at
/// `path` (relative to the database root) with string fields.
pub fn document_event(event_type: &str, path: &str, fields: &[(&str, &str)]) -> Value {
    let fields = fields
        .iter()
        .map(|(key, value)| (key.to_string(), json!({ "stringValue": value })))
        .collect::<serde_json::Map<_, _>>();
    json!({
        "context": {
            "eventId": Uuid::new_v4().to_string(),
            "eventType": event_type,
            "timestamp": "2024-03-01T10:15:00.123Z"
        },
        "data": {
            "oldValue": {},
            "value": {
                "name": format!("projects/baskubn/databases/(default)/documents/{}", path),
                "fields": fields,
                "createTime": "2024-03-01T10:15:00.100Z",
                "updateTime": "2024-03-01T10:15:00.100Z"
            }
        }
    })
}

pub async fn send_json_post_request(endpoint: &str, body: &Value) -> Response {
    reqwest::Client::new()
        .post(endpoint)
        .json(&body)
        .send()
        .await
        .expect("Fail to execute post request")
}

pub async fn send_get_request(endpoint: &str) -> Response {
    reqwest::Client::new()
        .get(endpoint)
        .send()
        .await
        .expect("Fail to execute get request")
}

#![allow(dead_code)]
use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use http_body_util::BodyExt;
use rrda_api::{create_api_routes, AppState};
use rrda_application::ports::DnsResolver;
use rrda_application::use_cases::LookupUseCase;
use rrda_domain::{DnsMessage, DnsQuery, DnsQuestion, DnsRecord, DomainError, ResponseCode};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Answers every query with the same reply and records what it was asked.
#[derive(Clone)]
pub struct StubResolver {
    reply: Result<DnsMessage, DomainError>,
    seen: Arc<Mutex<Vec<DnsQuery>>>,
}

impl StubResolver {
    pub fn replying(message: DnsMessage) -> Self {
        Self {
            reply: Ok(message),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            reply: Err(error),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn queries(&self) -> Vec<DnsQuery> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsResolver for StubResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsMessage, DomainError> {
        self.seen.lock().unwrap().push(query.clone());
        self.reply.clone()
    }
}

pub fn app(resolver: &StubResolver) -> Router {
    let lookup = LookupUseCase::new(Arc::new(resolver.clone()));
    create_api_routes(AppState::new(Arc::new(lookup)))
}

pub struct TestResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub allow_origin: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let header = |name: &str| {
        response
            .headers()
            .get(name)
            .map(|v| v.to_str().unwrap().to_string())
    };
    let status = response.status().as_u16();
    let content_type = header("content-type");
    let allow_origin = header("access-control-allow-origin");

    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        content_type,
        allow_origin,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub fn record(name: &str, record_type: u16, ttl: u32, rdlength: u16, rdata: &str) -> DnsRecord {
    DnsRecord {
        name: name.to_string(),
        record_type,
        class: 1,
        ttl,
        rdlength,
        rdata: rdata.to_string(),
    }
}

pub fn reply(question: Option<(&str, u16)>, rcode: u16) -> DnsMessage {
    let mut message = DnsMessage::empty(ResponseCode::from_u16(rcode));
    if let Some((name, record_type)) = question {
        message.questions.push(DnsQuestion::new(name, record_type, 1));
    }
    message
}

/// `example.com. 300 IN A 93.184.216.34`
pub fn example_a_reply() -> DnsMessage {
    let mut message = reply(Some(("example.com.", 1)), 0);
    message
        .answers
        .push(record("example.com.", 1, 300, 4, "93.184.216.34"));
    message
}

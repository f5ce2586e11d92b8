use async_trait::async_trait;
use rrda_application::ports::DnsResolver;
use rrda_domain::{DnsMessage, DnsQuery, DnsQuestion, DnsRecord, DomainError, ResponseCode};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockDnsResolver {
    reply: Arc<Mutex<Result<DnsMessage, DomainError>>>,
    seen: Arc<Mutex<Vec<DnsQuery>>>,
}

impl MockDnsResolver {
    pub fn replying(message: DnsMessage) -> Self {
        Self {
            reply: Arc::new(Mutex::new(Ok(message))),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            reply: Arc::new(Mutex::new(Err(error))),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn queries(&self) -> Vec<DnsQuery> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsMessage, DomainError> {
        self.seen.lock().unwrap().push(query.clone());
        self.reply.lock().unwrap().clone()
    }
}

pub fn answer(name: &str, record_type: u16, ttl: u32, rdlength: u16, rdata: &str) -> DnsRecord {
    DnsRecord {
        name: name.to_string(),
        record_type,
        class: 1,
        ttl,
        rdlength,
        rdata: rdata.to_string(),
    }
}

/// A reply echoing `question` with the given code and answers.
pub fn message(question: Option<(&str, u16)>, rcode: u16, answers: Vec<DnsRecord>) -> DnsMessage {
    let mut message = DnsMessage::empty(ResponseCode::from_u16(rcode));
    if let Some((name, record_type)) = question {
        message.questions.push(DnsQuestion::new(name, record_type, 1));
    }
    message.answers = answers;
    message
}

use rrda_domain::{DnsMessage, DnsQuestion, DnsRecord};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct QuestionDto {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub class: String,
}

#[derive(Debug, Serialize)]
pub struct RecordDto {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub class: String,
    pub ttl: u32,
    pub rdlength: u16,
    pub rdata: String,
}

/// Public shape of a resolved message. `answer` is always present, the
/// other record sections only when non-empty.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub question: Vec<QuestionDto>,
    pub answer: Vec<RecordDto>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub authority: Vec<RecordDto>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional: Vec<RecordDto>,
}

impl QuestionDto {
    pub fn from_question(question: &DnsQuestion) -> Self {
        Self {
            name: question.name.clone(),
            record_type: question.type_mnemonic(),
            class: question.class_mnemonic(),
        }
    }
}

impl RecordDto {
    pub fn from_record(record: &DnsRecord) -> Self {
        Self {
            name: record.name.clone(),
            record_type: record.type_mnemonic(),
            class: record.class_mnemonic(),
            ttl: record.ttl,
            rdlength: record.rdlength,
            rdata: record.rdata.clone(),
        }
    }
}

impl MessageResponse {
    pub fn from_message(message: &DnsMessage) -> Self {
        let records = |section: &[DnsRecord]| -> Vec<RecordDto> {
            section.iter().map(RecordDto::from_record).collect()
        };

        Self {
            question: message
                .questions
                .iter()
                .map(QuestionDto::from_question)
                .collect(),
            answer: records(&message.answers),
            authority: records(&message.authority),
            additional: records(&message.additional),
        }
    }
}

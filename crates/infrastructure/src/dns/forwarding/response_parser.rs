use super::wire_lengths::SectionLengths;
use hickory_proto::op::Message;
use hickory_proto::rr::Record;
use rrda_domain::{DnsMessage, DnsQuestion, DnsRecord, DomainError, ResponseCode};
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes a raw reply into a [`DnsMessage`].
    ///
    /// An undecodable reply counts as an exchange failure.
    pub fn parse(response_bytes: &[u8]) -> Result<DnsMessage, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::unreachable(format!("Failed to parse DNS response: {}", e))
        })?;
        let lengths = SectionLengths::from_wire(response_bytes).unwrap_or_default();

        let questions = message
            .queries()
            .iter()
            .map(|query| {
                DnsQuestion::new(
                    query.name().to_ascii(),
                    u16::from(query.query_type()),
                    u16::from(query.query_class()),
                )
            })
            .collect();

        let response_code = ResponseCode::from_u16(u16::from(message.response_code()));
        let truncated = message.truncated();

        let parsed = DnsMessage {
            questions,
            answers: Self::convert_section(message.answers(), &lengths.answers),
            authority: Self::convert_section(message.name_servers(), &lengths.authority),
            additional: Self::convert_section(message.additionals(), &lengths.additional),
            response_code,
            truncated,
        };

        debug!(
            rcode = response_code.as_str(),
            answers = parsed.answers.len(),
            authority = parsed.authority.len(),
            additional = parsed.additional.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(parsed)
    }

    fn convert_section(records: &[Record], rdlengths: &[u16]) -> Vec<DnsRecord> {
        records
            .iter()
            .enumerate()
            .map(|(i, record)| Self::convert_record(record, rdlengths.get(i).copied()))
            .collect()
    }

    fn convert_record(record: &Record, rdlength: Option<u16>) -> DnsRecord {
        DnsRecord {
            name: record.name().to_ascii(),
            record_type: u16::from(record.record_type()),
            class: u16::from(record.dns_class()),
            ttl: record.ttl(),
            rdlength: rdlength.unwrap_or_default(),
            rdata: record.data().to_string(),
        }
    }
}

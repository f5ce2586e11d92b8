use super::{RecordClass, RecordType};

/// A question section entry as echoed back by the upstream server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuestion {
    pub name: String,
    pub record_type: u16,
    pub class: u16,
}

impl DnsQuestion {
    pub fn new(name: impl Into<String>, record_type: u16, class: u16) -> Self {
        Self {
            name: name.into(),
            record_type,
            class,
        }
    }

    pub fn type_mnemonic(&self) -> String {
        RecordType::mnemonic(self.record_type)
    }

    pub fn class_mnemonic(&self) -> String {
        RecordClass::mnemonic(self.class)
    }
}

/// A resource record from the answer, authority or additional section.
///
/// `rdlength` is the RDLENGTH declared on the wire, `rdata` the canonical
/// text form of the RDATA alone (no owner/type/class/ttl prefix).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub name: String,
    pub record_type: u16,
    pub class: u16,
    pub ttl: u32,
    pub rdlength: u16,
    pub rdata: String,
}

impl DnsRecord {
    pub fn type_mnemonic(&self) -> String {
        RecordType::mnemonic(self.record_type)
    }

    pub fn class_mnemonic(&self) -> String {
        RecordClass::mnemonic(self.class)
    }
}

/// DNS classes (RFC 1035 §3.2.4, RFC 2136 §2.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordClass {
    IN,
    CH,
    HS,
    NONE,
    ANY,
}

impl RecordClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordClass::IN => "IN",
            RecordClass::CH => "CH",
            RecordClass::HS => "HS",
            RecordClass::NONE => "NONE",
            RecordClass::ANY => "ANY",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordClass::IN => 1,
            RecordClass::CH => 3,
            RecordClass::HS => 4,
            RecordClass::NONE => 254,
            RecordClass::ANY => 255,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1 => Some(RecordClass::IN),
            3 => Some(RecordClass::CH),
            4 => Some(RecordClass::HS),
            254 => Some(RecordClass::NONE),
            255 => Some(RecordClass::ANY),
            _ => None,
        }
    }

    /// Mnemonic for a wire class code, `CLASS<n>` (RFC 3597) when unknown.
    pub fn mnemonic(code: u16) -> String {
        match Self::from_u16(code) {
            Some(class) => class.as_str().to_string(),
            None => format!("CLASS{}", code),
        }
    }
}

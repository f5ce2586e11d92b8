use std::fmt;
use std::str::FromStr;

/// Declares the mnemonic table once; the enum, `ALL` and the code/name
/// lookups are all generated from it.
macro_rules! record_types {
    ($($variant:ident => ($name:literal, $code:literal)),+ $(,)?) => {
        /// Resource record types by IANA code (RFC 1035 §3.2.2 and later).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum RecordType {
            $($variant),+
        }

        const RECORD_TYPE_COUNT: usize = [$($code),+].len();

        impl RecordType {
            pub const ALL: [RecordType; RECORD_TYPE_COUNT] = [$(RecordType::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(RecordType::$variant => $name),+
                }
            }

            pub fn to_u16(&self) -> u16 {
                match self {
                    $(RecordType::$variant => $code),+
                }
            }

            pub fn from_u16(code: u16) -> Option<Self> {
                match code {
                    $($code => Some(RecordType::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

record_types! {
    A => ("A", 1),
    NS => ("NS", 2),
    MD => ("MD", 3),
    MF => ("MF", 4),
    CNAME => ("CNAME", 5),
    SOA => ("SOA", 6),
    MB => ("MB", 7),
    MG => ("MG", 8),
    MR => ("MR", 9),
    NULL => ("NULL", 10),
    WKS => ("WKS", 11),
    PTR => ("PTR", 12),
    HINFO => ("HINFO", 13),
    MINFO => ("MINFO", 14),
    MX => ("MX", 15),
    TXT => ("TXT", 16),
    RP => ("RP", 17),
    AFSDB => ("AFSDB", 18),
    X25 => ("X25", 19),
    ISDN => ("ISDN", 20),
    RT => ("RT", 21),
    NSAP => ("NSAP", 22),
    NSAPPTR => ("NSAP-PTR", 23),
    SIG => ("SIG", 24),
    KEY => ("KEY", 25),
    PX => ("PX", 26),
    GPOS => ("GPOS", 27),
    AAAA => ("AAAA", 28),
    LOC => ("LOC", 29),
    NXT => ("NXT", 30),
    EID => ("EID", 31),
    NIMLOC => ("NIMLOC", 32),
    SRV => ("SRV", 33),
    ATMA => ("ATMA", 34),
    NAPTR => ("NAPTR", 35),
    KX => ("KX", 36),
    CERT => ("CERT", 37),
    A6 => ("A6", 38),
    DNAME => ("DNAME", 39),
    OPT => ("OPT", 41),
    APL => ("APL", 42),
    DS => ("DS", 43),
    SSHFP => ("SSHFP", 44),
    IPSECKEY => ("IPSECKEY", 45),
    RRSIG => ("RRSIG", 46),
    NSEC => ("NSEC", 47),
    DNSKEY => ("DNSKEY", 48),
    DHCID => ("DHCID", 49),
    NSEC3 => ("NSEC3", 50),
    NSEC3PARAM => ("NSEC3PARAM", 51),
    TLSA => ("TLSA", 52),
    SMIMEA => ("SMIMEA", 53),
    HIP => ("HIP", 55),
    NINFO => ("NINFO", 56),
    RKEY => ("RKEY", 57),
    TALINK => ("TALINK", 58),
    CDS => ("CDS", 59),
    CDNSKEY => ("CDNSKEY", 60),
    OPENPGPKEY => ("OPENPGPKEY", 61),
    CSYNC => ("CSYNC", 62),
    ZONEMD => ("ZONEMD", 63),
    SVCB => ("SVCB", 64),
    HTTPS => ("HTTPS", 65),
    SPF => ("SPF", 99),
    UINFO => ("UINFO", 100),
    UID => ("UID", 101),
    GID => ("GID", 102),
    UNSPEC => ("UNSPEC", 103),
    NID => ("NID", 104),
    L32 => ("L32", 105),
    L64 => ("L64", 106),
    LP => ("LP", 107),
    EUI48 => ("EUI48", 108),
    EUI64 => ("EUI64", 109),
    TKEY => ("TKEY", 249),
    TSIG => ("TSIG", 250),
    IXFR => ("IXFR", 251),
    AXFR => ("AXFR", 252),
    MAILB => ("MAILB", 253),
    MAILA => ("MAILA", 254),
    ANY => ("ANY", 255),
    URI => ("URI", 256),
    CAA => ("CAA", 257),
    AVC => ("AVC", 258),
    AMTRELAY => ("AMTRELAY", 260),
    TA => ("TA", 32768),
    DLV => ("DLV", 32769),
    ANAME => ("ANAME", 65305),
}

impl RecordType {
    /// Mnemonic for a wire type code, `TYPE<n>` (RFC 3597) when unknown.
    pub fn mnemonic(code: u16) -> String {
        match Self::from_u16(code) {
            Some(rt) => rt.as_str().to_string(),
            None => format!("TYPE{}", code),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();

        if let Some(rt) = Self::ALL.into_iter().find(|rt| rt.as_str() == upper) {
            return Ok(rt);
        }

        upper
            .strip_prefix("TYPE")
            .and_then(|code| code.parse::<u16>().ok())
            .and_then(Self::from_u16)
            .ok_or_else(|| format!("Unknown record type: {}", s))
    }
}

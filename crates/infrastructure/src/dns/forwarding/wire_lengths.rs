//! RDLENGTH extraction straight from a raw reply.
//!
//! `hickory-proto` does not keep the declared RDLENGTH of parsed records, so
//! the reply is walked once more at the byte level. Only record headers are
//! read; names are skipped, never decoded.

const HEADER_LEN: usize = 12;
const TYPE_SIG: u16 = 24;
const TYPE_OPT: u16 = 41;
const TYPE_TSIG: u16 = 250;

/// Declared RDLENGTH of each record, per section, in wire order.
///
/// OPT, SIG and TSIG entries are dropped from `additional` so the indices line
/// up with the additional records `hickory_proto::op::Message` exposes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionLengths {
    pub answers: Vec<u16>,
    pub authority: Vec<u16>,
    pub additional: Vec<u16>,
}

impl SectionLengths {
    /// Returns `None` if the buffer is too short for the counts it declares.
    pub fn from_wire(buf: &[u8]) -> Option<Self> {
        if buf.len() < HEADER_LEN {
            return None;
        }

        let qdcount = u16::from_be_bytes([buf[4], buf[5]]);
        let ancount = u16::from_be_bytes([buf[6], buf[7]]);
        let nscount = u16::from_be_bytes([buf[8], buf[9]]);
        let arcount = u16::from_be_bytes([buf[10], buf[11]]);

        let mut pos = HEADER_LEN;
        for _ in 0..qdcount {
            pos = skip_name(buf, pos)?;
            pos += 4;
        }

        let mut lengths = SectionLengths::default();

        for _ in 0..ancount {
            let (_, rdlength, next) = read_record(buf, pos)?;
            lengths.answers.push(rdlength);
            pos = next;
        }

        for _ in 0..nscount {
            let (_, rdlength, next) = read_record(buf, pos)?;
            lengths.authority.push(rdlength);
            pos = next;
        }

        for _ in 0..arcount {
            let (rr_type, rdlength, next) = read_record(buf, pos)?;
            if !matches!(rr_type, TYPE_OPT | TYPE_SIG | TYPE_TSIG) {
                lengths.additional.push(rdlength);
            }
            pos = next;
        }

        Some(lengths)
    }
}

/// Returns the offset just past the name starting at `pos`.
fn skip_name(buf: &[u8], mut pos: usize) -> Option<usize> {
    loop {
        let label_len = *buf.get(pos)? as usize;
        match label_len & 0xC0 {
            0x00 if label_len == 0 => return Some(pos + 1),
            0x00 => pos += 1 + label_len,
            // A compression pointer always terminates the name.
            0xC0 => {
                buf.get(pos + 1)?;
                return Some(pos + 2);
            }
            _ => return None,
        }
    }
}

/// Reads one resource record header; returns (TYPE, RDLENGTH, next offset).
fn read_record(buf: &[u8], pos: usize) -> Option<(u16, u16, usize)> {
    let pos = skip_name(buf, pos)?;
    let fixed = buf.get(pos..pos + 10)?;

    let rr_type = u16::from_be_bytes([fixed[0], fixed[1]]);
    let rdlength = u16::from_be_bytes([fixed[8], fixed[9]]);
    let next = pos + 10 + rdlength as usize;

    if next > buf.len() {
        return None;
    }
    Some((rr_type, rdlength, next))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(an: u16, ns: u16, ar: u16) -> Vec<u8> {
        let mut buf = vec![0x12, 0x34, 0x81, 0x80, 0x00, 0x01];
        buf.extend_from_slice(&an.to_be_bytes());
        buf.extend_from_slice(&ns.to_be_bytes());
        buf.extend_from_slice(&ar.to_be_bytes());
        // example.com. A IN
        buf.extend_from_slice(&[
            7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm', 0, 0x00, 0x01, 0x00,
            0x01,
        ]);
        buf
    }

    #[test]
    fn test_compressed_answers() {
        let mut buf = header(2, 0, 0);
        for last in [34u8, 35] {
            buf.extend_from_slice(&[
                0xc0, 0x0c, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x01, 0x2c, 0x00, 0x04, 93, 184,
                216, last,
            ]);
        }

        let lengths = SectionLengths::from_wire(&buf).unwrap();
        assert_eq!(lengths.answers, vec![4, 4]);
        assert!(lengths.authority.is_empty());
    }

    #[test]
    fn test_opt_is_dropped_from_additional() {
        let mut buf = header(0, 0, 2);
        // root OPT, udp size 1232, no options
        buf.extend_from_slice(&[0x00, 0x00, 0x29, 0x04, 0xd0, 0, 0, 0, 0, 0x00, 0x00]);
        // ns1.example.com. A
        buf.extend_from_slice(&[
            3, b'n', b's', b'1', 0xc0, 0x0c, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x0e, 0x10,
            0x00, 0x04, 192, 0, 2, 1,
        ]);

        let lengths = SectionLengths::from_wire(&buf).unwrap();
        assert_eq!(lengths.additional, vec![4]);
    }

    #[test]
    fn test_truncated_buffer() {
        let mut buf = header(1, 0, 0);
        buf.extend_from_slice(&[
            0xc0, 0x0c, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x01, 0x2c, 0x00, 0x04, 93,
        ]);
        assert_eq!(SectionLengths::from_wire(&buf), None);
        assert_eq!(SectionLengths::from_wire(&buf[..5]), None);
    }
}

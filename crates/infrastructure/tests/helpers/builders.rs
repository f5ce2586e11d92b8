/// Hand-assembled DNS replies. Owner names of records are compression
/// pointers to the question name at offset 12.
#[derive(Debug, Clone)]
pub struct ReplyBuilder {
    rcode: u8,
    truncated: bool,
    echo_question: bool,
    mismatched_id: bool,
    answers: Vec<Vec<u8>>,
    authority: Vec<Vec<u8>>,
    additional: Vec<Vec<u8>>,
}

impl Default for ReplyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplyBuilder {
    pub fn new() -> Self {
        Self {
            rcode: 0,
            truncated: false,
            echo_question: true,
            mismatched_id: false,
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
        }
    }

    pub fn rcode(mut self, rcode: u8) -> Self {
        self.rcode = rcode;
        self
    }

    pub fn truncated(mut self) -> Self {
        self.truncated = true;
        self
    }

    pub fn without_question(mut self) -> Self {
        self.echo_question = false;
        self
    }

    pub fn mismatched_id(mut self) -> Self {
        self.mismatched_id = true;
        self
    }

    pub fn answer_a(mut self, ttl: u32, ip: [u8; 4]) -> Self {
        self.answers.push(record(&[0xc0, 0x0c], 1, ttl, &ip));
        self
    }

    /// MX whose exchange `mail.<qname>` is compressed against the question.
    pub fn answer_mx(mut self, ttl: u32, preference: u16) -> Self {
        let mut rdata = preference.to_be_bytes().to_vec();
        rdata.extend_from_slice(&[4, b'm', b'a', b'i', b'l', 0xc0, 0x0c]);
        self.answers.push(record(&[0xc0, 0x0c], 15, ttl, &rdata));
        self
    }

    pub fn authority_ns(mut self, ttl: u32) -> Self {
        self.authority
            .push(record(&[0xc0, 0x0c], 2, ttl, &[3, b'n', b's', b'1', 0xc0, 0x0c]));
        self
    }

    pub fn additional_opt(mut self) -> Self {
        self.additional
            .push(vec![0x00, 0x00, 0x29, 0x04, 0xd0, 0, 0, 0, 0, 0x00, 0x00]);
        self
    }

    pub fn additional_a(mut self, ttl: u32, ip: [u8; 4]) -> Self {
        self.additional.push(record(&[0xc0, 0x0c], 1, ttl, &ip));
        self
    }

    /// Builds the reply to `query`, which must hold exactly one question and
    /// nothing after it.
    pub fn build(&self, query: &[u8]) -> Vec<u8> {
        let mut reply = Vec::with_capacity(512);

        if self.mismatched_id {
            reply.extend_from_slice(&[query[0] ^ 0xff, query[1]]);
        } else {
            reply.extend_from_slice(&query[0..2]);
        }

        let mut flags_hi = 0x81;
        if self.truncated {
            flags_hi |= 0x02;
        }
        reply.push(flags_hi);
        reply.push(0x80 | (self.rcode & 0x0f));

        let qdcount: u16 = if self.echo_question { 1 } else { 0 };
        reply.extend_from_slice(&qdcount.to_be_bytes());
        reply.extend_from_slice(&(self.answers.len() as u16).to_be_bytes());
        reply.extend_from_slice(&(self.authority.len() as u16).to_be_bytes());
        reply.extend_from_slice(&(self.additional.len() as u16).to_be_bytes());

        // Records point at offset 12, so a reply without a question must
        // carry no records.
        if self.echo_question {
            reply.extend_from_slice(&query[12..]);
        }

        for rr in self.answers.iter().chain(&self.authority).chain(&self.additional) {
            reply.extend_from_slice(rr);
        }

        reply
    }
}

fn record(owner: &[u8], rr_type: u16, ttl: u32, rdata: &[u8]) -> Vec<u8> {
    let mut rr = owner.to_vec();
    rr.extend_from_slice(&rr_type.to_be_bytes());
    rr.extend_from_slice(&1u16.to_be_bytes());
    rr.extend_from_slice(&ttl.to_be_bytes());
    rr.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    rr.extend_from_slice(rdata);
    rr
}

/// `example.com. A IN` query with ID 0x1234 and RD set.
pub fn example_com_query() -> Vec<u8> {
    let mut query = vec![0x12, 0x34, 0x01, 0x00, 0x00, 0x01, 0, 0, 0, 0, 0, 0];
    query.extend_from_slice(&[
        7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm', 0, 0x00, 0x01, 0x00,
        0x01,
    ]);
    query
}

#![allow(dead_code)]
use rrda_domain::{DnsQuery, DomainError};

pub const SERVER: &str = "8.8.8.8";

pub fn assert_code(result: Result<DnsQuery, DomainError>, code: u16) {
    match result {
        Ok(query) => panic!("expected error {}, got {:?}", code, query),
        Err(err) => assert_eq!(err.code(), code, "{}", err),
    }
}

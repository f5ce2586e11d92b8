#![allow(dead_code)]
mod builders;
mod dns_server_mock;

pub use builders::{example_com_query, ReplyBuilder};
pub use dns_server_mock::{MockUpstream, SilentUpstream};

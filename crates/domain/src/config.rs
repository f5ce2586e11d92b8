//! Configuration for the RRDA server
//!
//! - `root`: main configuration and CLI overrides
//! - `server`: HTTP bind address and port
//! - `dns`: upstream query settings
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod dns;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;

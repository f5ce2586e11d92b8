pub mod config;
pub mod upstream;

pub use config::ResolverConfig;
pub use upstream::{Attempt, UpstreamResolver};

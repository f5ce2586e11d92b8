//! RRDA Infrastructure Layer
pub mod dns;

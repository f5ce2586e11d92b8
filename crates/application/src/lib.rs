//! RRDA Application Layer
pub mod ports;
pub mod use_cases;

//! Shared response helpers

pub mod response;

pub use response::Created;

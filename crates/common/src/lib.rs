//! Common types, protocol definitions, and errors shared across `card-svc` crates.

pub mod error;
pub mod protocol;

pub use error::ApiError;

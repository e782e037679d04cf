//! hipis-core
//!
//! Pure domain types, the response envelope, and S3 key conventions.
//! No AWS or HTTP dependency — this is the shared vocabulary of the HIPIS
//! platform.

pub mod doc_keys;
pub mod envelope;
pub mod error;
pub mod models;

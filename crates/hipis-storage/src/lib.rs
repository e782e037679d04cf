//! hipis-storage
//!
//! The document store: JSON documents in S3, one key prefix per collection.
//! Thin wrapper around the AWS S3 SDK plus typed load/save helpers.

pub mod client;
pub mod docs;
pub mod error;
pub mod objects;

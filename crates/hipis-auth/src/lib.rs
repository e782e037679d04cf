//! hipis-auth
//!
//! Credential and token service: HS256 JWT issue/verify, Argon2id password
//! hashing, and the ownership policy predicate.

pub mod error;
pub mod password;
pub mod policy;
pub mod token;

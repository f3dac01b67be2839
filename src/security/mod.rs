//! Security Module
//!
//! Provides security features for the Vitwise API:
//! - Security headers middleware
//! - Redaction of secrets in outgoing error messages

pub mod middleware;
pub mod redaction;

pub use redaction::redact_secrets;

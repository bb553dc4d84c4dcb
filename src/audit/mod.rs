//! Scan audit trail
//!
//! Every completed scan is recorded with a SHA-256 hash of the original
//! document; plaintext never reaches the audit log.

pub mod logger;

pub use logger::AuditLogger;

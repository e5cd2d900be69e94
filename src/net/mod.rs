//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` owns credential injection and failure classification,
//! `transport` is the raw browser HTTP seam, `auth` wraps the account
//! endpoints, and `types` defines the wire schema.

pub mod auth;
pub mod error;
pub mod gateway;
pub mod transport;
pub mod types;

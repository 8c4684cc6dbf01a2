//! Networking modules for talking to the ranking service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `transport` performs the HTTP POST, and
//! `submitter` turns a vote into a logged, fire-and-forget submission.

pub mod submitter;
pub mod transport;
pub mod types;

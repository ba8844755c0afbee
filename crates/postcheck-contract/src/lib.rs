// crates/postcheck-contract/src/lib.rs
// ============================================================================
// Module: Postcheck Contract Library
// Description: Canonical shapes of the remote posts/comments REST contract.
// Purpose: Provide record types, envelopes, schemas, and status expectations.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This crate owns the behavior contract of the external posts/comments
//! resource that the verification suites exercise: the record shapes the
//! service returns, the response envelopes it wraps them in, the status and
//! header expectations, and draft 2020-12 JSON Schemas for conformance
//! validation. Nothing here performs I/O; the crate is pure data.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod envelope;
pub mod schemas;
pub mod types;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use envelope::EnvelopeError;
pub use envelope::ResponseEnvelope;
pub use types::Comment;
pub use types::ExpectedStatus;
pub use types::JSON_UTF8_CONTENT_TYPE;
pub use types::KNOWN_BODY;
pub use types::KNOWN_TITLE;
pub use types::Post;
pub use types::REQUIRED_COMMENT_KEYS;
pub use types::REQUIRED_POST_KEYS;

// crates/postcheck-core/src/lib.rs
// ============================================================================
// Module: Postcheck Core Library
// Description: Fixtures, request building, and checks for the suites.
// Purpose: Provide the reusable verification vocabulary of the harness.
// Dependencies: postcheck-contract, serde_json, thiserror, url
// ============================================================================

//! ## Overview
//! This crate hosts the pieces every scenario is assembled from: the typed
//! fixture tables (positive and negative parameter sets), the request builder
//! that turns fixtures into target URLs, and the check library whose helpers
//! fail with descriptive expected-vs-actual messages. Scenarios themselves
//! live in the `system-tests` member.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod checks;
pub mod fixtures;
pub mod request;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use checks::CheckError;
pub use request::PostsEndpoint;
pub use request::RequestError;

// system-tests/src/lib.rs
// ============================================================================
// Module: Postcheck System Tests Library
// Description: Shared configuration and stub data for scenario binaries.
// Purpose: Provide common utilities for the system-test binaries.
// Dependencies: postcheck-contract, url
// ============================================================================

//! ## Overview
//! This crate hosts the pieces the scenario binaries in `system-tests/tests`
//! share: environment-backed configuration (target override, timeout floor,
//! artifact root) and the deterministic dataset served by the hermetic stub.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod dataset;

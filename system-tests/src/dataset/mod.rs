// system-tests/src/dataset/mod.rs
// ============================================================================
// Module: Stub Dataset
// Description: Deterministic posts/comments data for the hermetic stub.
// Purpose: Mirror the remote resource's fixed points without RNG or clock.
// Dependencies: postcheck-contract
// ============================================================================

//! ## Overview
//! The hermetic stub serves this dataset in place of the remote resource. It
//! reproduces every fixed point the scenarios rely on: one hundred posts, ten
//! per author, the pinned known title and known body on exactly one post
//! each, and five comments per post. Everything derives from a constant word
//! bank so repeated runs serve identical bytes.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod seed;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use seed::PINNED_BODY_POST_ID;
pub use seed::PINNED_TITLE_POST_ID;
pub use seed::comments;
pub use seed::posts;

// crates/postcheck-contract/src/schemas.rs
// ============================================================================
// Module: Contract Schemas
// Description: JSON Schemas for remote record shapes.
// Purpose: Provide draft 2020-12 schemas for conformance validation.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Draft 2020-12 JSON Schemas for the post and comment record shapes. The
//! system-test contract suite compiles these and validates every record the
//! target returns, so schema drift in the remote surface fails loudly.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;

use crate::types::POST_ID_RANGE;
use crate::types::USER_ID_RANGE;

// ============================================================================
// SECTION: Schemas
// ============================================================================

/// Returns the schema for a single post record.
#[must_use]
pub fn post_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "https://postcheck.invalid/schemas/post.json",
        "title": "Post",
        "type": "object",
        "additionalProperties": false,
        "required": ["userId", "id", "title", "body"],
        "properties": {
            "userId": {
                "type": "integer",
                "minimum": USER_ID_RANGE.start(),
                "maximum": USER_ID_RANGE.end(),
            },
            "id": {
                "type": "integer",
                "minimum": POST_ID_RANGE.start(),
                "maximum": POST_ID_RANGE.end(),
            },
            "title": { "type": "string" },
            "body": { "type": "string" },
        },
    })
}

/// Returns the schema for a single comment record.
#[must_use]
pub fn comment_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "https://postcheck.invalid/schemas/comment.json",
        "title": "Comment",
        "type": "object",
        "additionalProperties": false,
        "required": ["postId", "id", "name", "email", "body"],
        "properties": {
            "postId": {
                "type": "integer",
                "minimum": POST_ID_RANGE.start(),
                "maximum": POST_ID_RANGE.end(),
            },
            "id": { "type": "integer", "minimum": 1 },
            "name": { "type": "string" },
            "email": { "type": "string" },
            "body": { "type": "string" },
        },
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================

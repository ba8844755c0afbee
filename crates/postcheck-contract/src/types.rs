// crates/postcheck-contract/src/types.rs
// ============================================================================
// Module: Contract Types
// Description: Record shapes and fixed points of the remote resource.
// Purpose: Provide canonical post/comment models and status expectations.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Typed models for the records the remote service returns, together with the
//! contract's fixed points: required keys, value ranges, record counts, the
//! expected content type, and the two pinned records (the unique known title
//! and the unique known body) that positive filter scenarios rely on.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::ops::RangeInclusive;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Contract Constants
// ============================================================================

/// Content type the service attaches to every response, including errors.
pub const JSON_UTF8_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Keys every post record must carry.
pub const REQUIRED_POST_KEYS: [&str; 4] = ["userId", "id", "title", "body"];

/// Keys every comment record must carry.
pub const REQUIRED_COMMENT_KEYS: [&str; 5] = ["postId", "id", "name", "email", "body"];

/// Valid author ids on the remote resource.
pub const USER_ID_RANGE: RangeInclusive<i64> = 1..=10;

/// Valid post ids on the remote resource.
pub const POST_ID_RANGE: RangeInclusive<i64> = 1..=100;

/// Total number of posts the list endpoint returns.
pub const POSTS_TOTAL: usize = 100;

/// Number of posts each author owns.
pub const POSTS_PER_USER: usize = 10;

/// Number of comments attached to each post.
pub const COMMENTS_PER_POST: usize = 5;

/// Title carried by exactly one post on the remote resource.
pub const KNOWN_TITLE: &str = "qui est esse";

/// Body carried by exactly one post on the remote resource.
pub const KNOWN_BODY: &str = "eveniet quo quis\nlaborum totam consequatur non dolor\nut et est repudiandae\nest voluptatem vel debitis et magnam";

// ============================================================================
// SECTION: Record Types
// ============================================================================

/// A single post record as the service serializes it.
///
/// # Invariants
/// - `user_id` lies in [`USER_ID_RANGE`] and `id` in [`POST_ID_RANGE`].
/// - The wire form carries exactly the four [`REQUIRED_POST_KEYS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Post {
    /// Author id of the post.
    pub user_id: i64,
    /// Unique post id.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Post body; may contain newlines.
    pub body: String,
}

/// A single comment record as the service serializes it.
///
/// # Invariants
/// - `post_id` references an existing post id in [`POST_ID_RANGE`].
/// - The wire form carries exactly the five [`REQUIRED_COMMENT_KEYS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Comment {
    /// Id of the post the comment belongs to.
    pub post_id: i64,
    /// Unique comment id.
    pub id: i64,
    /// Display name of the commenter.
    pub name: String,
    /// Email address of the commenter.
    pub email: String,
    /// Comment body.
    pub body: String,
}

// ============================================================================
// SECTION: Status Expectations
// ============================================================================

/// Response statuses the contract commits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedStatus {
    /// Successful list or lookup responses.
    Ok,
    /// Unmatched direct-id lookups.
    NotFound,
    /// The service failed to decode a malformed path parameter.
    InternalServerError,
}

impl ExpectedStatus {
    /// Returns the numeric status code.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::NotFound => 404,
            Self::InternalServerError => 500,
        }
    }

    /// Returns the canonical reason phrase.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::NotFound => "Not Found",
            Self::InternalServerError => "Internal Server Error",
        }
    }
}

impl fmt::Display for ExpectedStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} {}", self.code(), self.reason())
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

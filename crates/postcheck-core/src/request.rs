// crates/postcheck-core/src/request.rs
// ============================================================================
// Module: Request Builder
// Description: URL construction for the posts endpoint.
// Purpose: Turn fixtures into target URLs without reshaping their text.
// Dependencies: thiserror, url
// ============================================================================

//! ## Overview
//! The builder concatenates fixture text onto a validated base URL exactly as
//! supplied. Negative fixtures carry special characters (`\`, `//`, `%`) that
//! must reach the service unchanged for it to exhibit the contract's empty,
//! not-found, and decode-failure outcomes. The single exception is body
//! filter text, whose newlines are rewritten to the encoded token `%0a`
//! before transmission; a literal newline cannot travel inside a URL.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Path segment of the posts collection under the service root.
const POSTS_SEGMENT: &str = "posts/";

/// Encoded newline token substituted into body filter values.
const ENCODED_NEWLINE: &str = "%0a";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Error raised when an endpoint base URL is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The base URL failed to parse or cannot carry path segments.
    #[error("invalid base url `{url}`: {reason}")]
    InvalidBaseUrl {
        /// The offending base URL text.
        url: String,
        /// Why the URL was rejected.
        reason: String,
    },
}

impl From<RequestError> for String {
    fn from(err: RequestError) -> Self {
        err.to_string()
    }
}

// ============================================================================
// SECTION: Endpoint Builder
// ============================================================================

/// URL builder rooted at a posts collection endpoint.
///
/// # Invariants
/// - The stored base parses as an HTTP(S) URL and ends with a single `/`,
///   so suffixes concatenate without separator bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostsEndpoint {
    /// Normalized base URL text, trailing slash included.
    base: String,
}

impl PostsEndpoint {
    /// Creates a builder from a posts collection URL.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidBaseUrl`] when the URL does not parse,
    /// is not `http`/`https`, or cannot carry path segments.
    pub fn new(base: &str) -> Result<Self, RequestError> {
        let parsed = Url::parse(base).map_err(|err| RequestError::InvalidBaseUrl {
            url: base.to_string(),
            reason: err.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(RequestError::InvalidBaseUrl {
                url: base.to_string(),
                reason: "url cannot carry path segments".to_string(),
            });
        }
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(RequestError::InvalidBaseUrl {
                url: base.to_string(),
                reason: format!("unsupported scheme `{}`", parsed.scheme()),
            });
        }
        let mut base = base.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Self {
            base,
        })
    }

    /// Creates a builder for the posts collection under a service root.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidBaseUrl`] when the root is unusable.
    pub fn from_service_root(root: &str) -> Result<Self, RequestError> {
        let trimmed = root.strip_suffix('/').unwrap_or(root);
        Self::new(&format!("{trimmed}/{POSTS_SEGMENT}"))
    }

    /// Returns the list endpoint URL.
    #[must_use]
    pub fn list(&self) -> String {
        self.base.clone()
    }

    /// Returns a filter URL for the `userId` query parameter.
    #[must_use]
    pub fn by_user_id(&self, value: &str) -> String {
        format!("{}?userId={value}", self.base)
    }

    /// Returns a filter URL for the `id` query parameter.
    #[must_use]
    pub fn by_id_query(&self, value: &str) -> String {
        format!("{}?id={value}", self.base)
    }

    /// Returns a direct lookup URL with the id as a path segment.
    #[must_use]
    pub fn by_id_path(&self, value: &str) -> String {
        format!("{}{value}", self.base)
    }

    /// Returns a filter URL for the `title` query parameter.
    #[must_use]
    pub fn by_title(&self, value: &str) -> String {
        format!("{}?title={value}", self.base)
    }

    /// Returns a filter URL for the `body` query parameter.
    ///
    /// Newlines in the value are rewritten to the encoded token; everything
    /// else passes through untouched.
    #[must_use]
    pub fn by_body(&self, value: &str) -> String {
        format!("{}?body={}", self.base, encode_newlines(value))
    }

    /// Returns the comments join URL for a post id.
    #[must_use]
    pub fn comments_for(&self, id: &str) -> String {
        format!("{}{id}/comments", self.base)
    }
}

/// Rewrites newline characters to the encoded newline token.
fn encode_newlines(value: &str) -> String {
    value.replace('\n', ENCODED_NEWLINE)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

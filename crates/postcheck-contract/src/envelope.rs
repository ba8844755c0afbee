// crates/postcheck-contract/src/envelope.rs
// ============================================================================
// Module: Response Envelope
// Description: Classification of remote response bodies.
// Purpose: Normalize array and object envelopes into record lists.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! The remote service answers list and filter queries with a JSON array and
//! direct-id lookups with a bare JSON object. Scenarios assert on record
//! lists, so both envelopes normalize to `Vec<Value>`: an object becomes a
//! single-record list. Anything else (string, number, null) is a contract
//! violation and fails closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Error raised when a response body has an unexpected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    /// The body was neither a JSON array nor a JSON object.
    #[error("response body should be a JSON array or object, but was {actual}")]
    UnexpectedShape {
        /// Compact rendering of the offending body.
        actual: String,
    },
}

impl From<EnvelopeError> for String {
    fn from(err: EnvelopeError) -> Self {
        err.to_string()
    }
}

// ============================================================================
// SECTION: Envelope
// ============================================================================

/// Classified response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseEnvelope {
    /// Array envelope returned by list and filter queries.
    RecordList(Vec<Value>),
    /// Bare object envelope returned by direct-id lookups.
    SingleRecord(Value),
}

impl ResponseEnvelope {
    /// Classifies a parsed response body.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError::UnexpectedShape`] when the body is neither an
    /// array nor an object.
    pub fn classify(body: Value) -> Result<Self, EnvelopeError> {
        match body {
            Value::Array(records) => Ok(Self::RecordList(records)),
            record @ Value::Object(_) => Ok(Self::SingleRecord(record)),
            other => Err(EnvelopeError::UnexpectedShape {
                actual: other.to_string(),
            }),
        }
    }

    /// Flattens the envelope into a record list.
    ///
    /// A single-record object becomes a one-element list, matching how the
    /// direct-id lookup scenarios compare against filter scenarios.
    #[must_use]
    pub fn into_records(self) -> Vec<Value> {
        match self {
            Self::RecordList(records) => records,
            Self::SingleRecord(record) => vec![record],
        }
    }
}

// ============================================================================
// SECTION: Shape Predicates
// ============================================================================

/// Returns true when the body is an empty JSON array.
#[must_use]
pub fn is_empty_list(body: &Value) -> bool {
    body.as_array().is_some_and(Vec::is_empty)
}

/// Returns true when the body is an empty JSON object.
#[must_use]
pub fn is_empty_object(body: &Value) -> bool {
    body.as_object().is_some_and(serde_json::Map::is_empty)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

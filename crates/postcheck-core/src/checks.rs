// crates/postcheck-core/src/checks.rs
// ============================================================================
// Module: Check Library
// Description: Typed response checks with expected-vs-actual messages.
// Purpose: Provide the assertion vocabulary scenarios compose.
// Dependencies: postcheck-contract, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Every check returns `Result<(), CheckError>` so scenarios propagate the
//! first violation with `?` and the failure message names both the expected
//! and the observed value. Field counting is structural: records are parsed
//! JSON values and a match means the named field equals the expected value,
//! not that some serialized substring appears in the body text.

// ============================================================================
// SECTION: Imports
// ============================================================================

use postcheck_contract::ExpectedStatus;
use postcheck_contract::JSON_UTF8_CONTENT_TYPE;
use postcheck_contract::envelope;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// A failed check, carrying the expected and observed values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// Status code mismatch.
    #[error("status code should be {expected}, but was {actual}")]
    StatusCode {
        /// Expected status code.
        expected: u16,
        /// Observed status code.
        actual: u16,
    },
    /// Content type mismatch or absence.
    #[error("content type should be `{expected}`, but was `{actual}`")]
    ContentType {
        /// Expected content type.
        expected: String,
        /// Observed content type, or a placeholder when absent.
        actual: String,
    },
    /// Record count mismatch.
    #[error("body should contain {expected} elements, but contains {actual}")]
    ElementCount {
        /// Expected record count.
        expected: usize,
        /// Observed record count.
        actual: usize,
    },
    /// Field-match count mismatch.
    #[error("body should contain {expected} elements with {field}={value}, but contains {actual}")]
    FieldCount {
        /// Field name counted over.
        field: String,
        /// Expected field value.
        value: String,
        /// Expected match count.
        expected: usize,
        /// Observed match count.
        actual: usize,
    },
    /// A required key is absent from a record.
    #[error("required key `{key}` is missing in {record}")]
    MissingKey {
        /// The absent key.
        key: String,
        /// Compact rendering of the record.
        record: String,
    },
    /// A record field holds an unexpected value.
    #[error("value {actual} for key `{key}` is not valid, value should be {expected}")]
    FieldValue {
        /// The inspected key.
        key: String,
        /// Expected value rendering.
        expected: String,
        /// Observed value rendering.
        actual: String,
    },
    /// The body should have been an empty array.
    #[error("body should be an empty list, but was {actual}")]
    NotEmptyList {
        /// Compact rendering of the body.
        actual: String,
    },
    /// The body should have been an empty object.
    #[error("body should be an empty object, but was {actual}")]
    NotEmptyObject {
        /// Compact rendering of the body.
        actual: String,
    },
}

impl From<CheckError> for String {
    fn from(err: CheckError) -> Self {
        err.to_string()
    }
}

// ============================================================================
// SECTION: Header Checks
// ============================================================================

/// Checks the response status against a contract expectation.
///
/// # Errors
///
/// Returns [`CheckError::StatusCode`] on mismatch.
pub fn status_code_equals(actual: u16, expected: ExpectedStatus) -> Result<(), CheckError> {
    if actual == expected.code() {
        Ok(())
    } else {
        Err(CheckError::StatusCode {
            expected: expected.code(),
            actual,
        })
    }
}

/// Checks that the content type is JSON with UTF-8 charset.
///
/// # Errors
///
/// Returns [`CheckError::ContentType`] when the header is absent or differs.
pub fn content_type_is_json_utf8(actual: Option<&str>) -> Result<(), CheckError> {
    match actual {
        Some(value) if value == JSON_UTF8_CONTENT_TYPE => Ok(()),
        Some(value) => Err(CheckError::ContentType {
            expected: JSON_UTF8_CONTENT_TYPE.to_string(),
            actual: value.to_string(),
        }),
        None => Err(CheckError::ContentType {
            expected: JSON_UTF8_CONTENT_TYPE.to_string(),
            actual: "<missing>".to_string(),
        }),
    }
}

// ============================================================================
// SECTION: Body Checks
// ============================================================================

/// Checks the number of records in a response.
///
/// # Errors
///
/// Returns [`CheckError::ElementCount`] on mismatch.
pub fn element_count_equals(records: &[Value], expected: usize) -> Result<(), CheckError> {
    if records.len() == expected {
        Ok(())
    } else {
        Err(CheckError::ElementCount {
            expected,
            actual: records.len(),
        })
    }
}

/// Checks how many records carry `field` equal to `value`.
///
/// The count is structural over parsed records rather than a substring scan
/// of the serialized body, so formatting of the wire text cannot skew it.
///
/// # Errors
///
/// Returns [`CheckError::FieldCount`] on mismatch.
pub fn count_matching_field_equals(
    records: &[Value],
    field: &str,
    value: &Value,
    expected: usize,
) -> Result<(), CheckError> {
    let actual = records.iter().filter(|record| record.get(field) == Some(value)).count();
    if actual == expected {
        Ok(())
    } else {
        Err(CheckError::FieldCount {
            field: field.to_string(),
            value: value.to_string(),
            expected,
            actual,
        })
    }
}

/// Checks that a record carries every required key.
///
/// # Errors
///
/// Returns [`CheckError::MissingKey`] naming the first absent key.
pub fn all_required_keys_present(
    record: &Value,
    required_keys: &[&str],
) -> Result<(), CheckError> {
    for key in required_keys {
        if record.get(key).is_none() {
            return Err(CheckError::MissingKey {
                key: (*key).to_string(),
                record: record.to_string(),
            });
        }
    }
    Ok(())
}

/// Checks that a record field equals an expected value.
///
/// # Errors
///
/// Returns [`CheckError::MissingKey`] when the key is absent and
/// [`CheckError::FieldValue`] when the value differs.
pub fn field_value_equals(
    record: &Value,
    key: &str,
    expected: &Value,
) -> Result<(), CheckError> {
    let Some(actual) = record.get(key) else {
        return Err(CheckError::MissingKey {
            key: key.to_string(),
            record: record.to_string(),
        });
    };
    if actual == expected {
        Ok(())
    } else {
        Err(CheckError::FieldValue {
            key: key.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}

// ============================================================================
// SECTION: Negative Envelope Checks
// ============================================================================

/// Checks that the body is an empty JSON array.
///
/// # Errors
///
/// Returns [`CheckError::NotEmptyList`] when it is anything else.
pub fn body_is_empty_list(body: &Value) -> Result<(), CheckError> {
    if envelope::is_empty_list(body) {
        Ok(())
    } else {
        Err(CheckError::NotEmptyList {
            actual: body.to_string(),
        })
    }
}

/// Checks that the body is an empty JSON object.
///
/// # Errors
///
/// Returns [`CheckError::NotEmptyObject`] when it is anything else.
pub fn body_is_empty_object(body: &Value) -> Result<(), CheckError> {
    if envelope::is_empty_object(body) {
        Ok(())
    } else {
        Err(CheckError::NotEmptyObject {
            actual: body.to_string(),
        })
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

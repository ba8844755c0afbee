// crates/postcheck-core/src/fixtures.rs
// ============================================================================
// Module: Scenario Fixtures
// Description: Constant parameter tables driving the scenarios.
// Purpose: Centralize positive and negative inputs as typed constants.
// Dependencies: postcheck-contract
// ============================================================================

//! ## Overview
//! Every scenario input lives here as a typed constant table: the ids and
//! strings expected to match real records, and the out-of-range, malformed,
//! and special-character values expected to yield empty or error responses.
//! Negative values are kept as strings because they travel as raw query or
//! path text; several (`0.1`, `//`, `№`) are not representable as ids at all.

// ============================================================================
// SECTION: Imports
// ============================================================================

use postcheck_contract::KNOWN_BODY;
use postcheck_contract::KNOWN_TITLE;

// ============================================================================
// SECTION: Positive Fixtures
// ============================================================================

/// Author ids probed by the user filter scenario.
pub const USER_IDS: [i64; 2] = [1, 10];

/// Post ids probed by the unique-id lookup scenario (path and query forms).
pub const UNIQUE_IDS: [i64; 3] = [1, 10, 100];

/// Post ids probed by the comments join scenario.
pub const POST_IDS: [i64; 3] = [1, 10, 100];

// ============================================================================
// SECTION: Negative Fixtures
// ============================================================================

/// Author id values outside the contract range.
pub const NEGATIVE_USER_IDS: [&str; 4] = ["-1", "0", "11", "0.1"];

/// Post id values outside the contract range.
pub const NEGATIVE_UNIQUE_IDS: [&str; 4] = ["0", "-1", "101", "100.1"];

/// Special-character values no record field matches.
pub const COMMON_NEGATIVE_PARAMETERS: [&str; 14] =
    ["!", "@", "*", "(", "-", "=", "+", "\\", "//", "`", "&", "№", ";", "^"];

/// Path parameters the service fails to percent-decode.
pub const MALFORMED_PATH_PARAMETERS: [&str; 1] = ["%"];

/// Repetition factor used to build overlong title and body values.
pub const NEGATIVE_REPEAT_FACTOR: usize = 50;

// ============================================================================
// SECTION: Fixture Builders
// ============================================================================

/// Returns every negative author id value, specials included.
#[must_use]
pub fn negative_user_id_values() -> Vec<&'static str> {
    let mut values = NEGATIVE_USER_IDS.to_vec();
    values.extend_from_slice(&COMMON_NEGATIVE_PARAMETERS);
    values
}

/// Returns every negative post id value, specials included.
#[must_use]
pub fn negative_unique_id_values() -> Vec<&'static str> {
    let mut values = NEGATIVE_UNIQUE_IDS.to_vec();
    values.extend_from_slice(&COMMON_NEGATIVE_PARAMETERS);
    values
}

/// Returns every negative title filter value: empty, overlong, and specials.
#[must_use]
pub fn negative_title_values() -> Vec<String> {
    let mut values = vec![String::new(), KNOWN_TITLE.repeat(NEGATIVE_REPEAT_FACTOR)];
    values.extend(COMMON_NEGATIVE_PARAMETERS.iter().map(ToString::to_string));
    values
}

/// Returns every negative body filter value: empty and overlong.
#[must_use]
pub fn negative_body_values() -> Vec<String> {
    vec![String::new(), KNOWN_BODY.repeat(NEGATIVE_REPEAT_FACTOR)]
}

// ============================================================================
// SECTION: Tests
// ============================================================================

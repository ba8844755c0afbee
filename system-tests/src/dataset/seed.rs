// system-tests/src/dataset/seed.rs
// ============================================================================
// Module: Dataset Seed
// Description: Deterministic generation of stub posts and comments.
// Purpose: Derive contract-conforming records from a constant word bank.
// Dependencies: postcheck-contract
// ============================================================================

//! ## Overview
//! Records are generated from id-derived indexes into a constant word bank.
//! The bank deliberately contains none of the words in the pinned title or
//! body, so the pinned records stay unique in the dataset and exact-match
//! filters for them return exactly one post.

// ============================================================================
// SECTION: Imports
// ============================================================================

use postcheck_contract::Comment;
use postcheck_contract::KNOWN_BODY;
use postcheck_contract::KNOWN_TITLE;
use postcheck_contract::Post;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Highest post id in the dataset.
const LAST_POST_ID: i64 = 100;

/// Posts owned by each author.
const POSTS_PER_AUTHOR: i64 = 10;

/// Comments attached to each post.
const COMMENTS_PER_POST_ID: i64 = 5;

/// Post carrying the pinned known title.
pub const PINNED_TITLE_POST_ID: i64 = 2;

/// Post carrying the pinned known body.
pub const PINNED_BODY_POST_ID: i64 = 5;

/// Word bank for generated text; shares no word with the pinned fixtures.
const WORD_BANK: [&str; 24] = [
    "sunt",
    "aut",
    "facere",
    "occaecati",
    "excepturi",
    "optio",
    "reprehenderit",
    "molestias",
    "exercitationem",
    "repellendus",
    "rerum",
    "expedita",
    "dolorem",
    "nesciunt",
    "neque",
    "dicta",
    "nemo",
    "autem",
    "impedit",
    "maiores",
    "veritatis",
    "porro",
    "tempora",
    "soluta",
];

// ============================================================================
// SECTION: Generation
// ============================================================================

/// Returns the full post table, ordered by id.
#[must_use]
pub fn posts() -> Vec<Post> {
    (1..=LAST_POST_ID)
        .map(|id| Post {
            user_id: (id - 1) / POSTS_PER_AUTHOR + 1,
            id,
            title: post_title(id),
            body: post_body(id),
        })
        .collect()
}

/// Returns the full comment table, ordered by id.
#[must_use]
pub fn comments() -> Vec<Comment> {
    (1..=LAST_POST_ID)
        .flat_map(|post_id| {
            (0..COMMENTS_PER_POST_ID).map(move |slot| {
                let id = (post_id - 1) * COMMENTS_PER_POST_ID + slot + 1;
                Comment {
                    post_id,
                    id,
                    name: words(id * 13 + 1, 3),
                    email: comment_email(id),
                    body: words(id * 17 + 3, 8),
                }
            })
        })
        .collect()
}

/// Returns the title for a post id.
fn post_title(id: i64) -> String {
    if id == PINNED_TITLE_POST_ID {
        KNOWN_TITLE.to_string()
    } else {
        words(id, 4)
    }
}

/// Returns the body for a post id.
fn post_body(id: i64) -> String {
    if id == PINNED_BODY_POST_ID {
        KNOWN_BODY.to_string()
    } else {
        (0..3)
            .map(|line| words(id * 31 + line * 11, 5))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Returns a generated commenter email for a comment id.
fn comment_email(id: i64) -> String {
    format!("{}.{}@example.org", bank_word(id * 5), bank_word(id * 5 + 9))
}

/// Joins `count` bank words derived from a seed.
fn words(seed: i64, count: i64) -> String {
    (0..count).map(|offset| bank_word(seed * 7 + offset * 3)).collect::<Vec<_>>().join(" ")
}

/// Returns the bank word at a wrapped index.
fn bank_word(index: i64) -> &'static str {
    #[allow(
        clippy::cast_possible_wrap,
        reason = "The bank length is a small constant that fits any integer width."
    )]
    let len = WORD_BANK.len() as i64;
    let wrapped = usize::try_from(index.rem_euclid(len)).unwrap_or(0);
    WORD_BANK[wrapped % WORD_BANK.len()]
}

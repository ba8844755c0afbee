// system-tests/tests/helpers/stub.rs
// ============================================================================
// Module: Posts Stub
// Description: In-process replica of the remote posts/comments contract.
// Purpose: Give scenarios a hermetic target with the documented behavior.
// Dependencies: axum, system-tests, postcheck-contract
// ============================================================================

//! ## Overview
//! The stub serves the deterministic dataset with the remote's observable
//! behavior: stringly exact-match filters, object-or-404 direct lookups, a
//! decode failure on malformed percent escapes, and the JSON UTF-8 content
//! type on every response including errors. Scenarios that run against the
//! live service instead see the same outcomes; the stub exists so the default
//! `cargo test` run needs no network.

use std::net::TcpListener as StdTcpListener;
use std::sync::Arc;
use std::thread;

use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::Uri;
use axum::http::header;
use axum::response::IntoResponse;
use axum::response::Response;
use postcheck_contract::Comment;
use postcheck_contract::JSON_UTF8_CONTENT_TYPE;
use postcheck_contract::Post;
use serde::Serialize;
use system_tests::dataset;
use tokio::runtime::Builder;
use tokio::sync::oneshot;
use url::form_urlencoded;

/// Query keys the remote filters on; everything else is ignored.
const FILTER_KEYS: [&str; 4] = ["userId", "id", "title", "body"];

/// Body served for not-found and decode-failure outcomes.
const EMPTY_OBJECT: &str = "{}";

/// Shared stub state: the dataset tables.
#[derive(Clone)]
struct StubState {
    /// Post table, ordered by id.
    posts: Arc<Vec<Post>>,
    /// Comment table, ordered by id.
    comments: Arc<Vec<Comment>>,
}

/// Handle for the spawned stub server.
pub struct PostsStubHandle {
    /// Service root URL (scheme and authority, no path).
    service_root: String,
    /// Graceful shutdown trigger.
    shutdown: Option<oneshot::Sender<()>>,
    /// Server thread join handle.
    join: Option<thread::JoinHandle<()>>,
}

impl PostsStubHandle {
    /// Returns the service root URL.
    pub fn service_root(&self) -> &str {
        &self.service_root
    }
}

impl Drop for PostsStubHandle {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

/// Spawns the stub on an ephemeral loopback port.
///
/// # Errors
///
/// Returns an error when the listener cannot be bound or inspected.
pub async fn spawn_posts_stub() -> Result<PostsStubHandle, String> {
    let listener = StdTcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("posts stub bind failed: {err}"))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("posts stub listener nonblocking failed: {err}"))?;
    let addr =
        listener.local_addr().map_err(|err| format!("posts stub local addr failed: {err}"))?;
    let service_root = format!("http://{addr}");

    let state = StubState {
        posts: Arc::new(dataset::posts()),
        comments: Arc::new(dataset::comments()),
    };
    let app = Router::new().fallback(handle_request).with_state(state);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let join = thread::spawn(move || {
        let runtime = match Builder::new_current_thread().enable_all().build() {
            Ok(runtime) => runtime,
            Err(error) => {
                let _ = error;
                return;
            }
        };
        runtime.block_on(async move {
            let listener = match tokio::net::TcpListener::from_std(listener) {
                Ok(listener) => listener,
                Err(error) => {
                    let _ = error;
                    return;
                }
            };
            let server = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            });
            let _ = server.await;
        });
    });
    Ok(PostsStubHandle {
        service_root,
        shutdown: Some(shutdown_tx),
        join: Some(join),
    })
}

/// Routes every request through the contract behavior.
async fn handle_request(State(state): State<StubState>, uri: Uri) -> Response {
    let (status, payload) = respond(&state, uri.path(), uri.query());
    json_response(status, payload)
}

/// Computes the contract outcome for a path and query.
fn respond(state: &StubState, path: &str, query: Option<&str>) -> (StatusCode, String) {
    let segments = path_segments(path);
    match *segments.as_slice() {
        ["posts"] => list_response(state, query),
        ["posts", raw_id] => post_response(state, raw_id),
        ["posts", raw_id, "comments"] => comments_response(state, raw_id),
        _ => (StatusCode::NOT_FOUND, EMPTY_OBJECT.to_string()),
    }
}

/// Splits a path into segments, tolerating one trailing slash.
fn path_segments(path: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
    if segments.last() == Some(&"") {
        segments.pop();
    }
    segments
}

/// Serves the collection route, applying known-key filters.
fn list_response(state: &StubState, query: Option<&str>) -> (StatusCode, String) {
    let pairs = query_pairs(query);
    let mut filters: Vec<(&str, &str)> = Vec::new();
    for key in FILTER_KEYS {
        if let Some((_, value)) = pairs.iter().find(|(name, _)| name.as_str() == key) {
            filters.push((key, value.as_str()));
        }
    }
    let matched: Vec<&Post> = state
        .posts
        .iter()
        .filter(|post| {
            filters.iter().all(|&(key, value)| post_field(post, key).as_deref() == Some(value))
        })
        .collect();
    (StatusCode::OK, render(&matched))
}

/// Serves the direct-lookup route.
fn post_response(state: &StubState, raw_id: &str) -> (StatusCode, String) {
    let Ok(id) = decode_path_segment(raw_id) else {
        return (StatusCode::INTERNAL_SERVER_ERROR, EMPTY_OBJECT.to_string());
    };
    state.posts.iter().find(|post| post.id.to_string() == id).map_or_else(
        || (StatusCode::NOT_FOUND, EMPTY_OBJECT.to_string()),
        |post| (StatusCode::OK, render(post)),
    )
}

/// Serves the comments join route.
fn comments_response(state: &StubState, raw_id: &str) -> (StatusCode, String) {
    let Ok(id) = decode_path_segment(raw_id) else {
        return (StatusCode::INTERNAL_SERVER_ERROR, EMPTY_OBJECT.to_string());
    };
    let matched: Vec<&Comment> =
        state.comments.iter().filter(|comment| comment.post_id.to_string() == id).collect();
    (StatusCode::OK, render(&matched))
}

/// Decodes query pairs the way the remote's query parser does.
fn query_pairs(query: Option<&str>) -> Vec<(String, String)> {
    query.map_or_else(Vec::new, |raw| {
        form_urlencoded::parse(raw.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    })
}

/// Returns the serialized form of a filterable post field.
fn post_field(post: &Post, key: &str) -> Option<String> {
    match key {
        "userId" => Some(post.user_id.to_string()),
        "id" => Some(post.id.to_string()),
        "title" => Some(post.title.clone()),
        "body" => Some(post.body.clone()),
        _ => None,
    }
}

/// Strictly percent-decodes a path segment.
///
/// # Errors
///
/// Returns an error on a malformed escape or non-UTF-8 decoded bytes, the
/// condition the remote answers with a 500.
fn decode_path_segment(raw: &str) -> Result<String, String> {
    let bytes = raw.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut index = 0;
    while index < bytes.len() {
        if bytes[index] == b'%' {
            let (Some(high), Some(low)) = (
                bytes.get(index + 1).copied().and_then(hex_value),
                bytes.get(index + 2).copied().and_then(hex_value),
            ) else {
                return Err(format!("malformed percent escape in path segment `{raw}`"));
            };
            decoded.push(high * 16 + low);
            index += 3;
        } else {
            decoded.push(bytes[index]);
            index += 1;
        }
    }
    String::from_utf8(decoded)
        .map_err(|_| format!("path segment `{raw}` is not valid utf-8 after decoding"))
}

/// Returns the numeric value of a hex digit byte.
const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Serializes a payload, falling back to JSON null on failure.
fn render<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

/// Builds a response with the contract content type.
fn json_response(status: StatusCode, payload: String) -> Response {
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, JSON_UTF8_CONTENT_TYPE)
        .body(Body::from(payload))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

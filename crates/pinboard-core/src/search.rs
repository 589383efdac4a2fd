//! Search Dispatch
//!
//! Moves the raw query text into the results URL and back out again.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves alone
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub(crate) fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

fn decode_component(encoded: &str) -> String {
    let spaced = encoded.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Results path for a submitted query
pub fn search_path(raw: &str) -> String {
    format!("/search?q={}", encode_component(raw))
}

/// Extract the `q` parameter from a query string (with or without the leading `?`).
///
/// Missing or empty queries yield `None`: nothing should be fetched for them.
pub fn query_from_search(query_string: &str) -> Option<String> {
    query_string
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key) == "q").then(|| decode_component(value))
        })
        .next()
        .filter(|q| !q.is_empty())
}

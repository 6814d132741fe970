// Copyright 2025 the Rill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Query-string parameter extraction.
//!
//! This reproduces the page's parameter contract exactly: split the query
//! string on `&` and `=`, first key match wins, and values are returned
//! as-is, with no percent-decoding. Malformed input never errors; the worst
//! cases are `None` or an empty-string match.

/// Returns the raw value of a named query parameter.
///
/// `url` may be a full URL or a bare query string (with or without the
/// leading `?`). A matching key with no `=` yields `None`, matching the
/// page behavior of stopping at the first key hit.
pub fn param_value<'a>(url: &'a str, name: &str) -> Option<&'a str> {
    let query = url.split_once('?').map_or(url, |(_, q)| q);
    if query.is_empty() {
        return None;
    }
    for pair in query.split('&') {
        match pair.split_once('=') {
            Some((key, value)) if key == name => return Some(value),
            Some(_) => {}
            None if pair == name => return None,
            None => {}
        }
    }
    None
}

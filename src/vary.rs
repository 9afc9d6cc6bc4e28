//! Token union for the `Vary` response header.

use crate::constants::WILDCARD;
use crate::util::{is_http_token, normalize_lower, split_list};

/// Merges the comma-separated `tokens` into an existing `Vary` value.
///
/// Tokens already present (compared case-insensitively) are not repeated and
/// the existing text is kept as-is. A `*` on either side absorbs everything.
/// Entries that are not valid HTTP field names are dropped. Returns `None`
/// when the merged value would be empty.
pub fn append(existing: Option<&str>, tokens: &str) -> Option<String> {
    let existing = existing.map(str::trim).filter(|value| !value.is_empty());
    let fields = split_list(tokens)
        .filter(|field| {
            let valid = is_http_token(field);
            if !valid {
                tracing::trace!(field, "dropping invalid Vary field name");
            }
            valid
        })
        .collect::<Vec<_>>();

    if existing == Some(WILDCARD) {
        return Some(WILDCARD.to_string());
    }

    let mut seen = existing
        .map(|value| split_list(value).map(normalize_lower).collect::<Vec<_>>())
        .unwrap_or_default();

    if fields.contains(&WILDCARD) || seen.iter().any(|entry| entry == WILDCARD) {
        return Some(WILDCARD.to_string());
    }

    let mut value = existing.map(str::to_owned).unwrap_or_default();
    for field in fields {
        let lowered = normalize_lower(field);
        if seen.contains(&lowered) {
            continue;
        }
        seen.push(lowered);
        if !value.is_empty() {
            value.push_str(", ");
        }
        value.push_str(field);
    }

    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
#[path = "vary_test.rs"]
mod vary_test;

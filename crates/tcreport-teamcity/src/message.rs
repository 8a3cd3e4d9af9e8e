//! Service-message line construction.
//!
//! Neither form appends a trailing newline; callers terminate lines.

use crate::escape::escape;
use std::collections::BTreeMap;

/// Format a single-value service message: `##teamcity[<name> '<value>']`.
pub fn format_service_message_value(name: &str, value: &str) -> String {
    format!("##teamcity[{} '{}']", name, escape(value))
}

/// Format a multi-attribute service message:
/// `##teamcity[<name> k1='v1' k2='v2' ...]`.
///
/// `BTreeMap` iteration gives lexicographic key order, so output is
/// deterministic across calls.
pub fn format_service_message(name: &str, values: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    out.push_str("##teamcity[");
    out.push_str(name);
    for (key, value) in values {
        out.push(' ');
        out.push_str(key);
        out.push_str("='");
        out.push_str(&escape(value));
        out.push('\'');
    }
    out.push(']');
    out
}

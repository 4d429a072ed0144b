//! Shared helpers for the integration tests

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;
use vault_babel::{Callout, CalloutRecord};

static TOKEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{CALLOUT:(\d+)\}\}").expect("valid regex for placeholder tokens"));

/// Read a file from `tests/fixtures`
pub fn load_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

/// Indices of every placeholder token in `content`, in order of appearance
pub fn placeholder_indices(content: &str) -> Vec<usize> {
    TOKEN_REGEX
        .captures_iter(content)
        .map(|caps| caps[1].parse().expect("token index is numeric"))
        .collect()
}

/// The fields that must survive a round trip whatever the prose converter does
pub type Shape = (String, bool, bool, bool);

pub fn callout_shape(callout: &Callout) -> Shape {
    (
        callout.kind().to_string(),
        callout.is_foldable(),
        callout.is_default_open(),
        callout.has_custom_title(),
    )
}

pub fn record_shape(record: &CalloutRecord) -> Shape {
    (
        record.kind.clone(),
        record.foldable,
        record.default_open,
        record.custom_title,
    )
}

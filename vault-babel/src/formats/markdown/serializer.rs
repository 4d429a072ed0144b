//! Callout serialization (placeholders → Markdown)
//!
//! Rebuilds Obsidian callout syntax from records recovered out of HTML.
//! Pipeline: Markdown with placeholders + records → header/body lines → Markdown string

use crate::callout::placeholder;
use crate::callout::CalloutRecord;

/// Replace each placeholder with the Obsidian syntax of its record
pub fn serialize_callouts(content: &str, callouts: &[CalloutRecord]) -> String {
    if content.is_empty() {
        return String::new();
    }

    tracing::debug!(count = callouts.len(), "serializing callouts to markdown");
    placeholder::substitute(content, callouts, serialize_callout)
}

/// Serialize a single record
///
/// The body gains one level of quoting, so a body line that already starts
/// with `>` comes out as `> >`.
pub fn serialize_callout(record: &CalloutRecord) -> String {
    let mut header = format!("> [!{}]", record.kind);
    if let Some(fold) = record.fold() {
        header.push(fold.marker());
    }
    if record.custom_title && !record.title.is_empty() {
        header.push(' ');
        header.push_str(&record.title);
    }

    if record.body.is_empty() {
        return header;
    }

    let mut lines = vec![header];
    lines.extend(record.body.split('\n').map(|line| format!("> {line}")));
    lines.join("\n")
}

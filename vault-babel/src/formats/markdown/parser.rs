//! Callout extraction (Markdown → placeholders)
//!
//! Scans Markdown line by line, recognizes Obsidian callout blocks and cuts
//! them out of the text.
//! Pipeline: Markdown string → lines → header scan → body collection → Callout + placeholder

use crate::callout::placeholder;
use crate::callout::{Callout, CalloutOptions, Extraction, Fold};

/// A recognized callout header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Type as written (not yet lowercased)
    pub kind: String,
    pub fold: Option<Fold>,
    /// Trimmed title text, empty when none was written
    pub title: String,
}

/// Extract every callout block from a Markdown document
///
/// Each block (header line plus its body lines) is replaced by a single
/// `{{CALLOUT:<n>}}` line. Lines that are not callout headers pass through
/// untouched, including `>` lines following a malformed header.
pub fn extract_callouts(markdown: &str) -> Extraction<Callout> {
    if markdown.is_empty() {
        return Extraction::unchanged("");
    }

    let lines: Vec<&str> = markdown.split('\n').collect();
    let mut output: Vec<String> = Vec::with_capacity(lines.len());
    let mut callouts = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        let line = lines[index];
        index += 1;

        let Some(header) = parse_header(line) else {
            output.push(line.to_string());
            continue;
        };

        // Body runs until a non-quote line or the next header
        let body_start = index;
        while index < lines.len() && is_body_line(lines[index]) {
            index += 1;
        }
        let body_lines = &lines[body_start..index];
        let body = body_lines
            .iter()
            .map(|line| strip_quote(line))
            .collect::<Vec<_>>()
            .join("\n");

        let options = CalloutOptions::new(header.kind.to_lowercase())
            .with_title(header.title)
            .with_fold(header.fold)
            .with_body(body);

        match Callout::new(options) {
            Ok(callout) => {
                output.push(placeholder::token(callouts.len()));
                callouts.push(callout);
            }
            Err(err) => {
                tracing::warn!(error = %err, line, "callout header rejected, keeping source");
                output.push(line.to_string());
                output.extend(body_lines.iter().map(|line| line.to_string()));
            }
        }
    }

    tracing::debug!(count = callouts.len(), "extracted callouts from markdown");

    Extraction {
        content: output.join("\n"),
        callouts,
    }
}

/// Recognize a callout header line
///
/// Grammar: `>` WS* `[!` TYPE `]` MODIFIER? (END | WS+ TITLE)
///
/// The fold modifier only counts when it touches the closing bracket:
/// `> [!warning] - Title` is a static callout titled `- Title`, while
/// `> [!warning]- Title` is a collapsed one titled `Title`.
pub fn parse_header(line: &str) -> Option<Header> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    let rest = line.strip_prefix('>')?.trim_start();
    let rest = rest.strip_prefix("[!")?;

    let close = rest.find(']')?;
    let kind = &rest[..close];
    if kind.is_empty() || !kind.chars().all(is_type_char) {
        return None;
    }

    let mut tail = &rest[close + 1..];

    let fold = tail.chars().next().and_then(Fold::from_marker);
    if fold.is_some() {
        tail = &tail[1..];
    }

    let title = match tail.chars().next() {
        None => "",
        Some(c) if c.is_whitespace() => tail.trim(),
        Some(_) => return None,
    };

    Some(Header {
        kind: kind.to_string(),
        fold,
        title: title.to_string(),
    })
}

fn is_type_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn is_body_line(line: &str) -> bool {
    line.starts_with('>') && parse_header(line).is_none()
}

/// Remove one level of quoting: the `>` and at most one following space
fn strip_quote(line: &str) -> &str {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let rest = line.strip_prefix('>').unwrap_or(line);
    rest.strip_prefix(' ').unwrap_or(rest)
}

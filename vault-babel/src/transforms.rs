//! Conversion pipelines between Obsidian Markdown and journal HTML
//!
//! Both directions cut callouts out first, run the rest of the document
//! through the prose converter and splice the callouts back in:
//!
//! ```text
//! import: Markdown → extract → isolate placeholders → prose_to_html → unwrap placeholders → render → HTML
//! export: HTML → extract → html_to_prose → serialize → Markdown
//! ```
//!
//! # Example
//!
//! ```
//! use vault_babel::prose::ComrakProse;
//! use vault_babel::transforms::import_markdown;
//!
//! let html = import_markdown("> [!tip] Hint\n> Look up.", &ComrakProse::default());
//! assert!(html.contains(r#"data-callout="tip""#));
//! ```

use crate::callout::placeholder;
use crate::formats::{html, markdown};
use crate::prose::ProseConverter;

/// Convert an Obsidian Markdown document to journal HTML
pub fn import_markdown(source: &str, prose: &dyn ProseConverter) -> String {
    let extraction = markdown::extract_callouts(source);
    let count = extraction.callouts.len();

    let isolated = isolate_placeholders(&extraction.content, count);
    let converted = prose.prose_to_html(&isolated);
    let unwrapped = unwrap_placeholders(&converted, count);
    let output = html::render_callouts(&unwrapped, &extraction.callouts, prose);

    tracing::debug!(callouts = count, "imported markdown document");
    output
}

/// Convert a journal HTML document to Obsidian Markdown
pub fn export_html(source: &str, prose: &dyn ProseConverter) -> String {
    let extraction = html::extract_callouts(source, prose);
    let count = extraction.callouts.len();

    let converted = prose.html_to_prose(&extraction.content);
    let output = markdown::serialize_callouts(&converted, &extraction.callouts);

    tracing::debug!(callouts = count, "exported html document");
    output
}

/// Surround each placeholder with blank lines
///
/// Two callouts written back to back leave two placeholder lines with no
/// blank line between them, which a Markdown renderer joins into one paragraph.
fn isolate_placeholders(markdown: &str, count: usize) -> String {
    let mut output = markdown.to_string();
    for index in 0..count {
        let token = placeholder::token(index);
        output = output.replacen(&token, &format!("\n\n{token}\n\n"), 1);
    }
    output
}

/// Drop the `<p>` a Markdown renderer puts around a standalone placeholder
///
/// The rendered callout is a block element and may not sit inside a paragraph.
fn unwrap_placeholders(html: &str, count: usize) -> String {
    let mut output = html.to_string();
    for index in 0..count {
        let token = placeholder::token(index);
        let wrapped = format!("<p>{token}</p>");
        output = output.replacen(&wrapped, &token, 1);
    }
    output
}

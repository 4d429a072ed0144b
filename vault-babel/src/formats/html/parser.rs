//! Callout extraction (HTML → placeholders)
//!
//! Finds rendered callout containers in journal HTML, reads their fields back
//! and swaps each container for a placeholder paragraph.
//! Pipeline: HTML string → RcDom → container selection → CalloutRecord + `<p>` placeholder → HTML string

use super::dom::{MarkupDocument, RcDocument};
use super::{
    CONTAINER_CLASS, CONTENT_CLASS, CUSTOM_TITLE_ATTR, DISCLOSURE_TAG, OPEN_ATTR, TITLE_CLASS,
    TYPE_ATTR,
};
use crate::callout::placeholder;
use crate::callout::{CalloutRecord, Extraction};
use crate::prose::ProseConverter;

/// Extract every callout container from an HTML document
///
/// Each container is replaced by `<p>{{CALLOUT:<n>}}</p>`. When the document
/// holds no container the input is returned as is, without a parse and
/// re-serialize pass.
pub fn extract_callouts(html: &str, prose: &dyn ProseConverter) -> Extraction<CalloutRecord> {
    if html.is_empty() {
        return Extraction::unchanged("");
    }

    let mut document = RcDocument::parse(html);
    let callouts = extract_from_document(&mut document, prose);

    if callouts.is_empty() {
        return Extraction::unchanged(html);
    }

    Extraction {
        content: document.to_html(),
        callouts,
    }
}

/// Read and replace the callout containers of an already parsed document
///
/// Containers nested inside a selected container are left in place; they end
/// up in the outer callout's body.
pub fn extract_from_document<D: MarkupDocument>(
    document: &mut D,
    prose: &dyn ProseConverter,
) -> Vec<CalloutRecord> {
    let containers = document.select_by_class(CONTAINER_CLASS);
    let mut callouts = Vec::with_capacity(containers.len());

    for (index, container) in containers.iter().enumerate() {
        let record = read_record(document, container, prose);
        document.replace_with_block(container, &placeholder::token(index));
        callouts.push(record);
    }

    tracing::debug!(count = callouts.len(), "extracted callouts from html");
    callouts
}

fn read_record<D: MarkupDocument>(
    document: &D,
    container: &D::Node,
    prose: &dyn ProseConverter,
) -> CalloutRecord {
    let defaults = CalloutRecord::default();

    // A blank type would serialize as `> [!]`, which no longer reads as a callout
    let kind = document
        .attribute(container, TYPE_ATTR)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or(defaults.kind);

    let custom_title = document
        .attribute(container, CUSTOM_TITLE_ATTR)
        .map(|value| value.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(defaults.custom_title);

    let foldable = document.tag_name(container).as_deref() == Some(DISCLOSURE_TAG);
    let default_open = !foldable || document.has_attribute(container, OPEN_ATTR);

    CalloutRecord {
        kind,
        title: section_text(document, container, TITLE_CLASS, prose),
        custom_title,
        foldable,
        default_open,
        body: section_text(document, container, CONTENT_CLASS, prose),
    }
}

/// Converted, trimmed inner markup of the first descendant with `class`
fn section_text<D: MarkupDocument>(
    document: &D,
    container: &D::Node,
    class: &str,
    prose: &dyn ProseConverter,
) -> String {
    document
        .first_by_class(container, class)
        .map(|node| prose.html_to_prose(&document.inner_html(&node)).trim().to_string())
        .unwrap_or_default()
}

//! Callout rendering (placeholders → HTML)
//!
//! Turns callout values into journal HTML and splices them into a document
//! that has already been through the prose converter.
//! Pipeline: placeholder document + callouts → title/body through prose converter → container markup

use super::{
    CONTAINER_CLASS, CONTENT_CLASS, CUSTOM_TITLE_ATTR, DISCLOSURE_TAG, OPEN_ATTR, STATIC_TAG,
    SUMMARY_TAG, TITLE_CLASS, TYPE_ATTR,
};
use crate::callout::placeholder;
use crate::callout::Callout;
use crate::prose::ProseConverter;

/// Block tags the renderer strips from a rendered title
const WRAPPER_TAGS: &[&str] = &["p", "div", "h1", "h2", "h3", "h4", "h5", "h6"];

/// Replace each placeholder in `content` with the HTML of its callout
pub fn render_callouts(content: &str, callouts: &[Callout], prose: &dyn ProseConverter) -> String {
    if content.is_empty() {
        return String::new();
    }

    tracing::debug!(count = callouts.len(), "rendering callouts to html");
    placeholder::substitute(content, callouts, |callout| render_callout(callout, prose))
}

/// Render one callout as a `<details>` or `<div>` container
pub fn render_callout(callout: &Callout, prose: &dyn ProseConverter) -> String {
    let title = display_title(callout, prose);
    let body = if callout.body().is_empty() {
        String::new()
    } else {
        prose.prose_to_html(callout.body()).trim().to_string()
    };

    let kind = html_escape(callout.kind());
    let custom_title = callout.has_custom_title();

    let mut html = String::new();
    if callout.is_foldable() {
        let open = if callout.is_default_open() {
            format!(" {OPEN_ATTR}")
        } else {
            String::new()
        };
        html.push_str(&format!(
            "<{DISCLOSURE_TAG} class=\"{CONTAINER_CLASS}\" {TYPE_ATTR}=\"{kind}\" {CUSTOM_TITLE_ATTR}=\"{custom_title}\"{open}>\n"
        ));
        html.push_str(&format!(
            "<{SUMMARY_TAG} class=\"{TITLE_CLASS}\">{title}</{SUMMARY_TAG}>\n"
        ));
    } else {
        html.push_str(&format!(
            "<{STATIC_TAG} class=\"{CONTAINER_CLASS}\" {TYPE_ATTR}=\"{kind}\" {CUSTOM_TITLE_ATTR}=\"{custom_title}\">\n"
        ));
        html.push_str(&format!("<div class=\"{TITLE_CLASS}\">{title}</div>\n"));
    }

    html.push_str(&format!("<div class=\"{CONTENT_CLASS}\">\n"));
    if !body.is_empty() {
        html.push_str(&body);
        html.push('\n');
    }
    html.push_str("</div>\n");

    let close = if callout.is_foldable() {
        DISCLOSURE_TAG
    } else {
        STATIC_TAG
    };
    html.push_str(&format!("</{close}>"));
    html
}

/// Title markup shown in the container's title element
///
/// An authored title goes through the prose converter with its single block
/// wrapper removed; otherwise the title is derived from the type.
pub fn display_title(callout: &Callout, prose: &dyn ProseConverter) -> String {
    if callout.has_custom_title() && !callout.title().is_empty() {
        let rendered = prose.prose_to_html(callout.title());
        strip_block_wrapper(rendered.trim()).trim().to_string()
    } else {
        html_escape(&title_from_type(callout.kind()))
    }
}

/// Human title for a type: `my-custom_type` → `My Custom Type`
pub fn title_from_type(kind: &str) -> String {
    kind.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Remove one block tag wrapping the whole of `html`
///
/// `<p>Title</p>` gives `Title`. Markup with several sibling blocks, such as
/// `<p>a</p><p>b</p>`, is returned unchanged.
fn strip_block_wrapper(html: &str) -> &str {
    for tag in WRAPPER_TAGS {
        let Some(rest) = html.strip_prefix('<').and_then(|s| s.strip_prefix(*tag)) else {
            continue;
        };
        // `<pre>` must not match `p`
        if !rest.starts_with(|c: char| c == '>' || c.is_ascii_whitespace()) {
            continue;
        }
        let Some(open_end) = rest.find('>') else {
            continue;
        };
        let closing = format!("</{tag}>");
        let Some(inner) = rest[open_end + 1..].strip_suffix(closing.as_str()) else {
            continue;
        };
        if inner.contains(closing.as_str()) {
            continue;
        }
        return inner;
    }
    html
}

/// Escape text for use in attribute values and element content
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

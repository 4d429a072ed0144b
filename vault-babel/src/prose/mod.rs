//! Prose conversion between Markdown and HTML
//!
//! The callout pipelines cut callouts out of a document and hand everything
//! else to a general-purpose converter. That converter is injected through
//! [`ProseConverter`], so callers can plug in whatever Markdown flavour their
//! vault uses.
//!
//! Two converters ship with the crate:
//!
//! - [`Passthrough`]: returns its input untouched in both directions
//! - [`ComrakProse`]: CommonMark (plus GFM extensions) via `comrak`, with an
//!   HTML reader built on `html5ever` for the way back

mod from_html;

use comrak::{markdown_to_html, ComrakOptions};
use serde::{Deserialize, Serialize};

/// Converts prose between Markdown-like text and HTML
///
/// Both directions are synchronous and cannot fail from the caller's view.
/// Short inputs are expected to come back wrapped in a single block tag
/// (`Title` → `<p>Title</p>`); the callout renderer strips that wrapper.
pub trait ProseConverter: Send + Sync {
    fn prose_to_html(&self, prose: &str) -> String;

    fn html_to_prose(&self, html: &str) -> String;
}

/// Identity converter
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl ProseConverter for Passthrough {
    fn prose_to_html(&self, prose: &str) -> String {
        prose.to_string()
    }

    fn html_to_prose(&self, html: &str) -> String {
        html.to_string()
    }
}

/// Extension switches for [`ComrakProse`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProseOptions {
    pub table: bool,
    pub strikethrough: bool,
    pub autolink: bool,
    pub tasklist: bool,
    pub superscript: bool,
    /// Front matter fence, `None` to treat a leading `---` block as content
    pub front_matter_delimiter: Option<String>,
    /// Pass raw HTML through when rendering
    pub unsafe_html: bool,
}

impl Default for ProseOptions {
    fn default() -> Self {
        Self {
            table: true,
            strikethrough: true,
            autolink: true,
            tasklist: true,
            superscript: true,
            front_matter_delimiter: None,
            unsafe_html: true,
        }
    }
}

impl ProseOptions {
    pub fn comrak_options(&self) -> ComrakOptions<'static> {
        let mut options = ComrakOptions::default();
        options.extension.table = self.table;
        options.extension.strikethrough = self.strikethrough;
        options.extension.autolink = self.autolink;
        options.extension.tasklist = self.tasklist;
        options.extension.superscript = self.superscript;
        options.extension.front_matter_delimiter = self.front_matter_delimiter.clone();
        // Journal HTML embeds raw markup (iframes, styled spans) that must survive
        options.render.unsafe_ = self.unsafe_html;
        options
    }
}

/// CommonMark converter backed by `comrak`
#[derive(Debug, Clone, Default)]
pub struct ComrakProse {
    options: ProseOptions,
}

impl ComrakProse {
    pub fn new(options: ProseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ProseOptions {
        &self.options
    }
}

impl ProseConverter for ComrakProse {
    fn prose_to_html(&self, prose: &str) -> String {
        markdown_to_html(prose, &self.options.comrak_options())
    }

    fn html_to_prose(&self, html: &str) -> String {
        from_html::html_to_markdown(html, &self.options.comrak_options())
    }
}

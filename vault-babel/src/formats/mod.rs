//! Format implementations
//!
//! Each side of the callout round trip lives in its own module:
//!
//! - [`markdown`]: Obsidian callout syntax (extract and serialize)
//! - [`html`]: journal HTML containers (render and extract)

pub mod html;
pub mod markdown;

use std::path::Path;

/// Document formats the pipelines read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Markdown,
    Html,
}

impl SourceFormat {
    pub const ALL: [SourceFormat; 2] = [SourceFormat::Markdown, SourceFormat::Html];

    pub fn name(self) -> &'static str {
        match self {
            SourceFormat::Markdown => "markdown",
            SourceFormat::Html => "html",
        }
    }

    pub fn file_extensions(self) -> &'static [&'static str] {
        match self {
            SourceFormat::Markdown => &["md", "markdown"],
            SourceFormat::Html => &["html", "htm"],
        }
    }

    /// Look a format up by name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.name() == name)
    }

    /// Detect format from filename based on file extension
    ///
    /// Extensions are case-sensitive, as returned by `Path::extension`.
    pub fn detect_from_filename(filename: &str) -> Option<Self> {
        let extension = Path::new(filename).extension()?.to_str()?;
        Self::ALL
            .into_iter()
            .find(|format| format.file_extensions().contains(&extension))
    }
}

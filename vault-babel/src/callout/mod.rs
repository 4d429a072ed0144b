//! Callout values shared by every conversion direction
//!
//! Obsidian writes admonitions as blockquotes whose first line carries a bracketed type:
//!
//! ```text
//! > [!warning]- Mind the trap
//! > The floor is lava.
//! ```
//!
//! Two shapes carry the same six fields through the crate:
//!
//! - [`Callout`]: the validated, immutable value produced by the Markdown extractor. It can
//!   only be built through [`Callout::new`], which rejects an empty type.
//! - [`CalloutRecord`]: a plain record produced by the HTML extractor. It originates from
//!   already-rendered HTML, so it is not validated and its fields are public.
//!
//! | Field          | Markdown source                   | HTML carrier                          |
//! |----------------|-----------------------------------|---------------------------------------|
//! | `type`         | `[!type]`, lowercased             | `data-callout` attribute              |
//! | `title`        | text after the bracket            | `.callout-title` inner markup         |
//! | `custom_title` | title text present                | `data-custom-title` attribute         |
//! | `foldable`     | `+` or `-` right after `]`        | `<details>` instead of `<div>`        |
//! | `default_open` | anything but `-`                  | `open` attribute                      |
//! | `body`         | following `>` lines, one level off | `.callout-content` inner markup      |
//!
//! Extractors hand back an [`Extraction`]: the surrounding text with every callout replaced
//! by a placeholder token (see [`placeholder`]) and the callouts in document order.

pub mod placeholder;

use crate::error::CalloutError;
use serde::{Deserialize, Serialize};

/// Fold state of a collapsible callout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fold {
    /// `+`: collapsible, expanded initially
    Open,
    /// `-`: collapsible, collapsed initially
    Closed,
}

impl Fold {
    /// Map a modifier character to a fold state
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            '+' => Some(Fold::Open),
            '-' => Some(Fold::Closed),
            _ => None,
        }
    }

    /// Fold state for a `(foldable, default_open)` pair, `None` when not foldable
    pub fn from_flags(foldable: bool, default_open: bool) -> Option<Self> {
        match (foldable, default_open) {
            (false, _) => None,
            (true, true) => Some(Fold::Open),
            (true, false) => Some(Fold::Closed),
        }
    }

    pub fn marker(self) -> char {
        match self {
            Fold::Open => '+',
            Fold::Closed => '-',
        }
    }
}

/// Construction options for a [`Callout`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalloutOptions {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub custom_title: bool,
    pub foldable: bool,
    pub default_open: bool,
    pub body: String,
}

impl Default for CalloutOptions {
    fn default() -> Self {
        Self {
            kind: String::new(),
            title: String::new(),
            custom_title: false,
            foldable: false,
            default_open: true,
            body: String::new(),
        }
    }
}

impl CalloutOptions {
    /// Start options for the given type with every other field at its default
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Set an authored title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self.custom_title = !self.title.is_empty();
        self
    }

    pub fn with_fold(mut self, fold: Option<Fold>) -> Self {
        self.foldable = fold.is_some();
        self.default_open = fold != Some(Fold::Closed);
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

/// A validated callout block
///
/// Fields are private: once built, a callout cannot be altered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CalloutOptions", rename_all = "camelCase")]
pub struct Callout {
    #[serde(rename = "type")]
    kind: String,
    title: String,
    custom_title: bool,
    foldable: bool,
    default_open: bool,
    body: String,
}

impl Callout {
    /// Build a callout, failing when the type is empty
    pub fn new(options: CalloutOptions) -> Result<Self, CalloutError> {
        if options.kind.is_empty() {
            return Err(CalloutError::MissingType);
        }

        Ok(Self {
            kind: options.kind,
            title: options.title,
            custom_title: options.custom_title,
            foldable: options.foldable,
            default_open: options.default_open,
            body: options.body,
        })
    }

    /// The callout type (`note`, `warning`, ...)
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the title was written by the author rather than derived from the type
    pub fn has_custom_title(&self) -> bool {
        self.custom_title
    }

    pub fn is_foldable(&self) -> bool {
        self.foldable
    }

    /// Initial open state; only meaningful for foldable callouts
    pub fn is_default_open(&self) -> bool {
        self.default_open
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn fold(&self) -> Option<Fold> {
        Fold::from_flags(self.foldable, self.default_open)
    }
}

impl TryFrom<CalloutOptions> for Callout {
    type Error = CalloutError;

    fn try_from(options: CalloutOptions) -> Result<Self, Self::Error> {
        Callout::new(options)
    }
}

/// Unvalidated callout fields recovered from rendered HTML
///
/// Missing fields fall back to the HTML extractor's defaults: type `note`,
/// authored title, static and open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalloutRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub custom_title: bool,
    pub foldable: bool,
    pub default_open: bool,
    pub body: String,
}

impl Default for CalloutRecord {
    fn default() -> Self {
        Self {
            kind: "note".to_string(),
            title: String::new(),
            custom_title: true,
            foldable: false,
            default_open: true,
            body: String::new(),
        }
    }
}

impl CalloutRecord {
    pub fn fold(&self) -> Option<Fold> {
        Fold::from_flags(self.foldable, self.default_open)
    }
}

impl From<&Callout> for CalloutRecord {
    fn from(callout: &Callout) -> Self {
        Self {
            kind: callout.kind.clone(),
            title: callout.title.clone(),
            custom_title: callout.custom_title,
            foldable: callout.foldable,
            default_open: callout.default_open,
            body: callout.body.clone(),
        }
    }
}

impl From<Callout> for CalloutRecord {
    fn from(callout: Callout) -> Self {
        Self {
            kind: callout.kind,
            title: callout.title,
            custom_title: callout.custom_title,
            foldable: callout.foldable,
            default_open: callout.default_open,
            body: callout.body,
        }
    }
}

/// Result of an extraction pass
///
/// `content` holds the source with each callout replaced by
/// `{{CALLOUT:<index>}}`; `callouts[index]` is the matching value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction<T> {
    pub content: String,
    pub callouts: Vec<T>,
}

impl<T> Extraction<T> {
    /// An extraction that found nothing
    pub fn unchanged(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            callouts: Vec::new(),
        }
    }
}

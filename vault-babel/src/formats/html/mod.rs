//! HTML side of the callout round trip
//!
//! This module renders callouts into journal HTML and recovers them from it.
//!
//! # Library Choice
//!
//! Parsing and serialization go through the `html5ever` + `markup5ever_rcdom` pair:
//! - `html5ever`: Browser-grade HTML5 parser from the Servo project
//! - `markup5ever_rcdom`: Reference-counted DOM tree implementation
//!
//! Journal HTML is edited by hand and by rich-text widgets, so it is often
//! malformed. `html5ever` recovers from that the way a browser does.
//!
//! The extractor only sees the parsed tree through [`dom::MarkupDocument`], so the
//! parser can be swapped without touching the extraction logic.
//!
//! # Marker Contract
//!
//! | Marker                  | Meaning                                                   |
//! |-------------------------|-----------------------------------------------------------|
//! | `class="callout"`       | Container element of one callout                          |
//! | `<details>`             | Foldable container; `open` attribute = initially expanded |
//! | `<div>`                 | Static container                                          |
//! | `data-callout`          | Callout type                                              |
//! | `data-custom-title`     | `true` when the title was authored, `false` when derived  |
//! | `class="callout-title"` | Title element (`<summary>` or `<div>`)                    |
//! | `class="callout-content"` | Body element (`<div>`)                                  |
//!
//! Rendered shape of a foldable callout:
//!
//! ```html
//! <details class="callout" data-callout="tip" data-custom-title="true" open>
//! <summary class="callout-title">Title</summary>
//! <div class="callout-content">
//! <p>Body</p>
//! </div>
//! </details>
//! ```
//!
//! # Lossy Conversions
//!
//! - A derived title (`data-custom-title="false"`) is dropped on export and derived again on import
//! - Containers missing `data-custom-title` are read as having an authored title
//! - Callouts nested inside another callout's content stay in the outer body as HTML
//!   converted by the prose converter, they are not extracted separately
//!
//! # Architecture Notes
//!
//! Rendering builds markup strings directly, since the output is spliced into a
//! document that the prose converter already produced as text. Extraction parses the
//! whole document once, swaps every container for a `<p>{{CALLOUT:n}}</p>` block and
//! serializes the tree again.

pub mod dom;
pub mod parser;
pub mod serializer;

pub use dom::{MarkupDocument, RcDocument};
pub use parser::{extract_callouts, extract_from_document};
pub use serializer::{display_title, render_callout, render_callouts, title_from_type};

/// Class on every callout container
pub const CONTAINER_CLASS: &str = "callout";
/// Class on the title element inside a container
pub const TITLE_CLASS: &str = "callout-title";
/// Class on the content element inside a container
pub const CONTENT_CLASS: &str = "callout-content";
/// Attribute carrying the callout type
pub const TYPE_ATTR: &str = "data-callout";
/// Attribute recording whether the title was authored
pub const CUSTOM_TITLE_ATTR: &str = "data-custom-title";
/// Attribute marking a foldable container as initially expanded
pub const OPEN_ATTR: &str = "open";
/// Tag of a foldable container
pub const DISCLOSURE_TAG: &str = "details";
/// Tag of a static container
pub const STATIC_TAG: &str = "div";
/// Tag of the title element of a foldable container
pub const SUMMARY_TAG: &str = "summary";

//! Markdown side tests
//!
//! Extraction of Obsidian callouts and serialization back to callout syntax.

mod extract;

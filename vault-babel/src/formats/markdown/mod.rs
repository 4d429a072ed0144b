//! Markdown side of the callout round trip
//!
//! This module reads Obsidian callouts out of Markdown and writes them back.
//!
//! # Syntax
//!
//! A callout is a blockquote whose first line is a header:
//!
//! ```text
//! > [!type]<modifier> <title>
//! > body line
//! >
//! > another paragraph
//! ```
//!
//! | Part       | Rule                                                                      |
//! |------------|---------------------------------------------------------------------------|
//! | `>`        | Must start the line; whitespace may follow                                |
//! | `type`     | One or more ASCII letters, digits, `-` or `_`; lowercased on import       |
//! | modifier   | `+` (collapsible, open) or `-` (collapsible, closed), touching the `]`    |
//! | title      | Anything after whitespace, trimmed; absent means derived from the type    |
//! | body       | Following lines starting with `>`, up to the next header or other line   |
//!
//! # Lossy Conversions
//!
//! - The amount of whitespace between `>` and `[!` is not kept
//! - Title padding is trimmed
//! - A body line `>  x` keeps only its second space (`" x"`); serializing gives `>  x` again,
//!   but `>x` comes back as `> x`
//! - Type case is lost (`[!WARNING]` comes back as `[!warning]`)
//!
//! # Architecture Notes
//!
//! Recognition is an explicit character scan (see [`parser::parse_header`]) rather than a
//! regular expression: the modifier adjacency rule is easy to break silently with a pattern.
//! Serialization is the exact inverse of the body de-quoting: one `> ` prefix per line.

pub mod parser;
pub mod serializer;

pub use parser::{extract_callouts, parse_header, Header};
pub use serializer::{serialize_callout, serialize_callouts};

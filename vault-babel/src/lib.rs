//! Callout round trip between Obsidian Markdown and journal HTML
//!
//!     This crate moves journal content between a VTT's journal HTML and Obsidian-style Markdown
//!     vaults. Plain prose is handed to a general-purpose converter; what this crate owns is the
//!     one construct such converters know nothing about: Obsidian callouts.
//!
//!         > [!warning]- Mind the trap
//!         > The floor is lava.
//!
//!     This is a pure lib, that is, it powers vault-cli but is shell agnostic: no code should be
//!     written that supposes a shell environment, be it std printing, env vars etc.
//!
//! Architecture
//!
//!     Callouts are cut out of a document before it reaches the prose converter and put back
//!     afterwards. Each one is replaced by a positional placeholder token, `{{CALLOUT:<n>}}`,
//!     that passes through any Markdown or HTML converter untouched (see ./callout/placeholder.rs).
//!
//!     Five pieces make up the round trip:
//!         - Callout entity (./callout/mod.rs): the validated value and its unvalidated twin
//!         - Markdown extractor (./formats/markdown/parser.rs): Markdown → placeholders + callouts
//!         - HTML renderer (./formats/html/serializer.rs): placeholders + callouts → HTML
//!         - HTML extractor (./formats/html/parser.rs): HTML → placeholders + records
//!         - Markdown serializer (./formats/markdown/serializer.rs): placeholders + records → Markdown
//!
//!     The pipelines in ./transforms.rs chain them with a [`prose::ProseConverter`].
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── callout
//!     │   ├── mod.rs              # Callout, CalloutRecord, Extraction
//!     │   └── placeholder.rs      # Token format and substitution
//!     ├── formats
//!     │   ├── <format>
//!     │   │   ├── parser.rs       # Extraction
//!     │   │   ├── serializer.rs   # Rendering / serialization
//!     │   │   └── mod.rs
//!     │   └── html/dom.rs         # Queryable document seam over html5ever
//!     ├── prose                   # Prose converters (identity, comrak)
//!     ├── transforms.rs           # Import / export pipelines
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── <area>
//!     │   └── <testname>.rs
//!     └── fixtures
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Library Choices
//!
//!     We never write a Markdown or HTML engine here. Markdown goes through comrak, HTML through
//!     html5ever and its rcdom tree. The scope of this crate is recognizing callouts and
//!     adapting between those libraries' trees.

pub mod callout;
pub mod error;
pub mod formats;
pub mod prose;
pub mod transforms;

pub use callout::{Callout, CalloutOptions, CalloutRecord, Extraction, Fold};
pub use error::CalloutError;
pub use formats::SourceFormat;
pub use prose::{ComrakProse, Passthrough, ProseConverter, ProseOptions};

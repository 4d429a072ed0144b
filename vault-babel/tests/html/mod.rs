//! HTML side tests
//!
//! Rendering of callout containers and their recovery from journal HTML.

mod extract;
mod render;

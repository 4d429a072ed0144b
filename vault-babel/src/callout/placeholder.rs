//! Placeholder tokens binding callouts to their position in a document
//!
//! A token is the literal text `{{CALLOUT:<n>}}`. It survives a trip through
//! a general-purpose Markdown/HTML converter untouched, which lets callout
//! blocks be cut out before conversion and spliced back afterwards.
//!
//! Substitution is plain text replacement. A document that already contains
//! a token verbatim will have that occurrence consumed instead.

/// Text that opens every token
pub const TOKEN_PREFIX: &str = "{{CALLOUT:";
/// Text that closes every token
pub const TOKEN_SUFFIX: &str = "}}";

/// Token for the callout at `index`
pub fn token(index: usize) -> String {
    format!("{TOKEN_PREFIX}{index}{TOKEN_SUFFIX}")
}

/// Replace the first occurrence of each index's token with its rendering
///
/// Items are visited in index order. `render` is only called for items whose
/// token is still present in the output.
pub fn substitute<T, F>(content: &str, items: &[T], mut render: F) -> String
where
    F: FnMut(&T) -> String,
{
    let mut output = content.to_string();

    for (index, item) in items.iter().enumerate() {
        let token = token(index);
        match output.find(&token) {
            Some(start) => {
                let rendered = render(item);
                output.replace_range(start..start + token.len(), &rendered);
            }
            None => {
                tracing::debug!(index, "placeholder not found in content");
            }
        }
    }

    output
}

/// Parse a line consisting only of a token, returning its index
pub fn parse_token(text: &str) -> Option<usize> {
    text.trim()
        .strip_prefix(TOKEN_PREFIX)?
        .strip_suffix(TOKEN_SUFFIX)?
        .parse()
        .ok()
}

//! Property tests for placeholder numbering

use crate::common::placeholder_indices;
use proptest::prelude::*;
use vault_babel::formats::markdown::extract_callouts;

#[derive(Debug, Clone)]
enum Block {
    Paragraph(String),
    Callout {
        kind: String,
        modifier: &'static str,
        title: String,
        body: Vec<String>,
    },
}

impl Block {
    fn to_markdown(&self) -> String {
        match self {
            Block::Paragraph(text) => text.clone(),
            Block::Callout {
                kind,
                modifier,
                title,
                body,
            } => {
                let mut lines = vec![if title.is_empty() {
                    format!("> [!{kind}]{modifier}")
                } else {
                    format!("> [!{kind}]{modifier} {title}")
                }];
                lines.extend(body.iter().map(|line| format!("> {line}")));
                lines.join("\n")
            }
        }
    }
}

fn block() -> impl Strategy<Value = Block> {
    prop_oneof![
        "[a-z][a-z ]{0,20}".prop_map(Block::Paragraph),
        (
            "[A-Za-z][A-Za-z0-9_-]{0,8}",
            prop_oneof![Just(""), Just("+"), Just("-")],
            "[A-Za-z ]{0,12}",
            prop::collection::vec("[a-z ]{0,10}", 0..3),
        )
            .prop_map(|(kind, modifier, title, body)| Block::Callout {
                kind,
                modifier,
                title,
                body,
            }),
    ]
}

proptest! {
    #[test]
    fn placeholders_cover_every_callout_in_order(
        blocks in prop::collection::vec(block(), 0..12),
        tight in any::<bool>(),
    ) {
        let separator = if tight { "\n" } else { "\n\n" };
        let markdown = blocks
            .iter()
            .map(Block::to_markdown)
            .collect::<Vec<_>>()
            .join(separator);

        let expected_kinds: Vec<String> = blocks
            .iter()
            .filter_map(|block| match block {
                Block::Callout { kind, .. } => Some(kind.to_lowercase()),
                Block::Paragraph(_) => None,
            })
            .collect();

        let extraction = extract_callouts(&markdown);

        // Paragraph lines directly under a callout are not quoted, so they
        // never join its body and the count is stable in both layouts.
        let kinds: Vec<String> = extraction
            .callouts
            .iter()
            .map(|callout| callout.kind().to_string())
            .collect();
        prop_assert_eq!(kinds, expected_kinds.clone());

        let indices = placeholder_indices(&extraction.content);
        let expected: Vec<usize> = (0..expected_kinds.len()).collect();
        prop_assert_eq!(indices, expected);
    }
}

//! Extraction tests (Markdown → placeholders)
//!
//! These tests drive `formats::markdown::extract_callouts` over whole documents
//! and check both the placeholder content and the extracted callouts.

use crate::common::{callout_shape, load_fixture, placeholder_indices};
use insta::assert_snapshot;
use vault_babel::formats::markdown::extract_callouts;

#[test]
fn test_fixture_content() {
    let extraction = extract_callouts(&load_fixture("session.md"));

    assert_snapshot!(extraction.content.trim_end(), @r"
# Session 12: The Sunken Temple

The party reached the temple at dusk.

{{CALLOUT:0}}

{{CALLOUT:1}}
{{CALLOUT:2}}

> Ordinary quote, not a callout.

> [!] not a callout either
> still plain

{{CALLOUT:3}}
");
}

#[test]
fn test_fixture_callouts() {
    let extraction = extract_callouts(&load_fixture("session.md"));
    let callouts = &extraction.callouts;
    assert_eq!(callouts.len(), 4);

    assert_eq!(callouts[0].kind(), "note");
    assert_eq!(callouts[0].title(), "Loot");
    assert_eq!(callouts[0].body(), "- 40 gp\n- A rusted key");

    assert_eq!(callouts[1].kind(), "warning");
    assert_eq!(callouts[1].title(), "Trap on the stairs");
    assert_eq!(
        callouts[1].body(),
        "DC 15 Perception to notice.\n\n> The third step clicks."
    );

    assert_eq!(callouts[2].kind(), "tip");
    assert_eq!(callouts[2].body(), "Short rest available in the crypt.");

    assert_eq!(callouts[3].kind(), "read-aloud");
    assert_eq!(callouts[3].body(), "The air grows cold.");

    let shapes: Vec<_> = callouts.iter().map(callout_shape).collect();
    assert_eq!(
        shapes,
        vec![
            ("note".to_string(), false, true, true),
            ("warning".to_string(), true, false, true),
            ("tip".to_string(), true, true, false),
            ("read-aloud".to_string(), false, true, false),
        ]
    );
}

#[test]
fn test_placeholders_are_unique_and_ordered() {
    let extraction = extract_callouts(&load_fixture("session.md"));
    assert_eq!(placeholder_indices(&extraction.content), vec![0, 1, 2, 3]);
}

#[test]
fn test_example_simple_note() {
    let extraction = extract_callouts("> [!note]\n> Body.");
    assert_eq!(extraction.content, "{{CALLOUT:0}}");

    let callout = &extraction.callouts[0];
    assert_eq!(callout.kind(), "note");
    assert_eq!(callout.body(), "Body.");
    assert!(!callout.is_foldable());
    assert!(callout.is_default_open());
    assert!(!callout.has_custom_title());
}

#[test]
fn test_example_open_with_title() {
    let callout = &extract_callouts("> [!tip]+ Title\n> x").callouts[0];
    assert!(callout.is_foldable());
    assert!(callout.is_default_open());
    assert_eq!(callout.title(), "Title");
    assert!(callout.has_custom_title());
}

#[test]
fn test_example_empty_type() {
    let input = "> [!]\n> x";
    let extraction = extract_callouts(input);
    assert!(extraction.callouts.is_empty());
    assert_eq!(extraction.content, input);
}

#[test]
fn test_spaced_modifier_is_part_of_title() {
    let callout = &extract_callouts("> [!warning] - Title").callouts[0];
    assert!(!callout.is_foldable());
    assert_eq!(callout.title(), "- Title");
    assert!(callout.has_custom_title());
}

#[test]
fn test_adjacent_modifier_folds() {
    let callout = &extract_callouts("> [!danger]-").callouts[0];
    assert!(callout.is_foldable());
    assert!(!callout.is_default_open());
}

#[test]
fn test_type_is_lowercased() {
    let extraction = extract_callouts("> [!NOTE]\n\n> [!Side_Quest-Hook]\n\n> [!faq]");
    let kinds: Vec<_> = extraction.callouts.iter().map(|c| c.kind()).collect();
    assert_eq!(kinds, vec!["note", "side_quest-hook", "faq"]);
}

#[test]
fn test_back_to_back_callouts_do_not_merge() {
    let extraction = extract_callouts("> [!note]\n> first\n> [!tip]\n> second");
    assert_eq!(extraction.callouts.len(), 2);
    assert_eq!(extraction.callouts[0].body(), "first");
    assert_eq!(extraction.callouts[1].body(), "second");
    assert_eq!(extraction.content, "{{CALLOUT:0}}\n{{CALLOUT:1}}");
}

#[test]
fn test_double_quoted_line_keeps_one_level() {
    let callout = &extract_callouts("> [!quote]\n> > Said the sage.").callouts[0];
    assert_eq!(callout.body(), "> Said the sage.");
}

#[test]
fn test_crlf_line_endings() {
    let extraction = extract_callouts("> [!note] Title\r\n> body\r\nafter\r\n");
    assert_eq!(extraction.callouts[0].title(), "Title");
    assert_eq!(extraction.callouts[0].body(), "body");
    assert_eq!(extraction.content, "{{CALLOUT:0}}\nafter\r\n");
}

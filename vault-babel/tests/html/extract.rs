//! Extraction tests (journal HTML → placeholders)

use crate::common::{load_fixture, placeholder_indices, record_shape};
use vault_babel::formats::html::extract_callouts;
use vault_babel::prose::{ComrakProse, Passthrough};
use vault_babel::transforms::export_html;

#[test]
fn test_fixture_records() {
    let extraction = extract_callouts(&load_fixture("journal.html"), &ComrakProse::default());
    let callouts = &extraction.callouts;

    let shapes: Vec<_> = callouts.iter().map(record_shape).collect();
    assert_eq!(
        shapes,
        vec![
            ("note".to_string(), false, true, true),
            ("warning".to_string(), true, false, true),
            ("tip".to_string(), true, true, false),
            // No data-custom-title: read as authored
            ("info".to_string(), false, true, true),
        ]
    );

    assert_eq!(callouts[0].title, "Loot");
    assert_eq!(callouts[0].body, "- 40 gp\n- A rusted key");
    assert_eq!(
        callouts[1].body,
        "DC 15 Perception to notice.\n\n> The third step clicks."
    );
    assert_eq!(callouts[2].title, "Tip");
    assert_eq!(callouts[3].title, "Old *style*");
    assert_eq!(callouts[3].body, "");
}

#[test]
fn test_fixture_placeholders() {
    let extraction = extract_callouts(&load_fixture("journal.html"), &Passthrough);
    assert_eq!(placeholder_indices(&extraction.content), vec![0, 1, 2, 3]);
    assert!(extraction.content.contains("<p>{{CALLOUT:0}}</p>"));
    assert!(!extraction.content.contains("callout-content"));
}

#[test]
fn test_export_fixture() {
    let markdown = export_html(&load_fixture("journal.html"), &ComrakProse::default());
    assert_eq!(
        markdown,
        "# Session 12: The Sunken Temple\n\
         \n\
         The party reached the temple at dusk.\n\
         \n\
         > [!note] Loot\n\
         > - 40 gp\n\
         > - A rusted key\n\
         \n\
         > [!warning]- Trap on the stairs\n\
         > DC 15 Perception to notice.\n\
         > \n\
         > > The third step clicks.\n\
         \n\
         > [!tip]+\n\
         > Short rest available in the crypt.\n\
         \n\
         Hand-written before titles were tracked:\n\
         \n\
         > [!info] Old *style*\n"
    );
}

#[test]
fn test_placeholder_is_block_level() {
    let html = concat!(
        r#"<div class="callout" data-callout="a"></div>"#,
        r#"<div class="callout" data-callout="b"></div>"#,
    );
    let extraction = extract_callouts(html, &Passthrough);
    assert_eq!(extraction.content, "<p>{{CALLOUT:0}}</p><p>{{CALLOUT:1}}</p>");

    let markdown = export_html(html, &ComrakProse::default());
    assert_eq!(markdown, "> [!a]\n\n> [!b]\n");
}

#[test]
fn test_html_without_callouts_is_untouched() {
    let html = "<p>Just <b>prose</b>\n";
    let extraction = extract_callouts(html, &ComrakProse::default());
    assert_eq!(extraction.content, html);
    assert!(extraction.callouts.is_empty());
}

//! Round trip tests: Markdown → HTML → Markdown

use crate::common::{callout_shape, load_fixture, record_shape};
use vault_babel::formats::{html, markdown};
use vault_babel::prose::{ComrakProse, Passthrough};
use vault_babel::transforms::{export_html, import_markdown};
use vault_babel::CalloutRecord;

#[test]
fn test_shapes_survive_identity_converter() {
    let source = load_fixture("session.md");
    let extraction = markdown::extract_callouts(&source);
    let original: Vec<_> = extraction.callouts.iter().map(callout_shape).collect();

    let rendered = html::render_callouts(&extraction.content, &extraction.callouts, &Passthrough);
    let recovered = html::extract_callouts(&rendered, &Passthrough);
    let recovered_shapes: Vec<_> = recovered.callouts.iter().map(record_shape).collect();
    assert_eq!(recovered_shapes, original);

    let serialized = recovered
        .callouts
        .iter()
        .map(markdown::serialize_callout)
        .collect::<Vec<_>>()
        .join("\n\n");
    let reparsed = markdown::extract_callouts(&serialized);
    let reparsed_shapes: Vec<_> = reparsed.callouts.iter().map(callout_shape).collect();
    assert_eq!(reparsed_shapes, original);
}

#[test]
fn test_fixture_survives_comrak_round_trip() {
    let prose = ComrakProse::default();
    let source = load_fixture("session.md");
    let original = markdown::extract_callouts(&source).callouts;

    let html = import_markdown(&source, &prose);
    let exported = export_html(&html, &prose);
    let restored = markdown::extract_callouts(&exported).callouts;

    assert_eq!(restored, original);
}

#[test]
fn test_derived_title_is_not_written_back() {
    let prose = ComrakProse::default();
    let html = import_markdown("> [!side-quest]\n> Find the bell.", &prose);
    assert!(html.contains(r#"<div class="callout-title">Side Quest</div>"#));

    assert_eq!(
        export_html(&html, &prose),
        "> [!side-quest]\n> Find the bell.\n"
    );
}

#[test]
fn test_authored_title_matching_derived_text_is_kept() {
    let prose = ComrakProse::default();
    let html = import_markdown("> [!note] Note", &prose);
    assert_eq!(export_html(&html, &prose), "> [!note] Note\n");
}

/// A document that already contains a token verbatim loses that occurrence
/// to the first callout with the same index.
#[test]
fn test_literal_token_in_prose_is_consumed() {
    let source = "Use {{CALLOUT:0}} in templates.\n\n> [!note]\n> Real.";
    let extraction = markdown::extract_callouts(source);
    assert_eq!(
        extraction.content,
        "Use {{CALLOUT:0}} in templates.\n\n{{CALLOUT:0}}"
    );

    let rendered = html::render_callouts(&extraction.content, &extraction.callouts, &Passthrough);
    assert!(rendered.starts_with("Use <div class=\"callout\""));
    assert!(rendered.ends_with("{{CALLOUT:0}}"));

    let records: Vec<CalloutRecord> = extraction.callouts.iter().map(CalloutRecord::from).collect();
    let serialized = markdown::serialize_callouts(&extraction.content, &records);
    assert_eq!(
        serialized,
        "Use > [!note]\n> Real. in templates.\n\n{{CALLOUT:0}}"
    );

    let imported = import_markdown(source, &ComrakProse::default());
    assert_eq!(imported.matches(r#"class="callout""#).count(), 1);
    assert!(imported.ends_with("<p>{{CALLOUT:0}}</p>\n"));
}

//! Rendering tests (callouts → HTML)
//!
//! Snapshots pin the exact container markup the HTML extractor relies on.

use insta::assert_snapshot;
use vault_babel::formats::html::render_callout;
use vault_babel::prose::{ComrakProse, Passthrough};
use vault_babel::transforms::import_markdown;
use vault_babel::{Callout, CalloutOptions, Fold};

#[test]
fn test_render_foldable_with_comrak() {
    let callout = Callout::new(
        CalloutOptions::new("tip")
            .with_title("Heads *up*")
            .with_fold(Some(Fold::Open))
            .with_body("Look **up**.\n\n- one\n- two"),
    )
    .unwrap();

    let html = render_callout(&callout, &ComrakProse::default());
    assert_snapshot!(html, @r#"
<details class="callout" data-callout="tip" data-custom-title="true" open>
<summary class="callout-title">Heads <em>up</em></summary>
<div class="callout-content">
<p>Look <strong>up</strong>.</p>
<ul>
<li>one</li>
<li>two</li>
</ul>
</div>
</details>
"#);
}

#[test]
fn test_render_static_with_derived_title() {
    let callout = Callout::new(CalloutOptions::new("note").with_body("Body.")).unwrap();

    let html = render_callout(&callout, &Passthrough);
    assert_snapshot!(html, @r#"
<div class="callout" data-callout="note" data-custom-title="false">
<div class="callout-title">Note</div>
<div class="callout-content">
Body.
</div>
</div>
"#);
}

#[test]
fn test_render_closed_has_no_open_attribute() {
    let callout = Callout::new(
        CalloutOptions::new("danger")
            .with_title("Danger Zone")
            .with_fold(Some(Fold::Closed)),
    )
    .unwrap();

    let html = render_callout(&callout, &Passthrough);
    assert!(html.starts_with(
        r#"<details class="callout" data-callout="danger" data-custom-title="true">"#
    ));
    assert!(!html.contains(" open"));
}

#[test]
fn test_import_document() {
    let html = import_markdown(
        "Intro\n\n> [!warning]- Trap\n> Step lightly.",
        &ComrakProse::default(),
    );
    assert_snapshot!(html.trim_end(), @r#"
<p>Intro</p>
<details class="callout" data-callout="warning" data-custom-title="true">
<summary class="callout-title">Trap</summary>
<div class="callout-content">
<p>Step lightly.</p>
</div>
</details>
"#);
}

#[test]
fn test_import_fixture_renders_every_callout() {
    let source = crate::common::load_fixture("session.md");
    let html = import_markdown(&source, &ComrakProse::default());

    assert!(!html.contains("{{CALLOUT:"));
    assert_eq!(html.matches(r#"class="callout""#).count(), 4);
    assert!(html.contains(r#"<div class="callout-title">Read Aloud</div>"#));
    assert!(html.contains("<h1>Session 12: The Sunken Temple</h1>"));
}

//! HTML → Markdown for prose
//!
//! Maps an `RcDom` onto a comrak AST and lets comrak print it, so escaping and
//! list layout follow comrak's CommonMark writer.
//! Pipeline: HTML string → RcDom → Comrak AST → Markdown string
//!
//! Elements without a Markdown equivalent (tables, iframes, definition lists,
//! nested callouts) are kept as raw HTML blocks.

use crate::formats::html::dom::{
    attribute, child_handles, serialize_handle, text_content, RcDocument,
};
use crate::formats::html::CONTAINER_CLASS;
use comrak::nodes::{
    Ast, AstNode, ListDelimType, ListType, NodeCode, NodeCodeBlock, NodeHeading, NodeHtmlBlock,
    NodeLink, NodeList, NodeValue,
};
use comrak::{format_commonmark, Arena, ComrakOptions};
use html5ever::serialize::TraversalScope;
use markup5ever_rcdom::{Handle, NodeData};
use std::cell::RefCell;

/// Elements whose children are lifted into the surrounding block flow
const TRANSPARENT_BLOCKS: &[&str] = &[
    "html", "body", "div", "section", "article", "main", "header", "footer", "aside", "nav",
    "center",
];

/// Elements dropped with their content
const SKIPPED: &[&str] = &[
    "head", "title", "meta", "link", "script", "style", "template", "noscript",
];

/// Elements laid out inline; everything else starts a block
const INLINE: &[&str] = &[
    "a", "abbr", "b", "br", "cite", "code", "del", "em", "font", "i", "img", "ins", "kbd", "label",
    "mark", "q", "s", "samp", "small", "span", "strike", "strong", "sub", "sup", "time", "u", "var",
];

/// Convert an HTML fragment to CommonMark
pub(crate) fn html_to_markdown(html: &str, options: &ComrakOptions<'_>) -> String {
    if html.trim().is_empty() {
        return String::new();
    }

    let document = RcDocument::parse(html);
    let arena = Arena::new();
    let root = new_node(&arena, NodeValue::Document);
    append_blocks(&arena, root, &document.root_children());

    let mut output = Vec::new();
    if let Err(e) = format_commonmark(root, options, &mut output) {
        tracing::warn!(error = %e, "commonmark formatting failed");
    }

    // Remove Comrak's "end list" HTML comments which appear between consecutive lists
    String::from_utf8_lossy(&output).replace("<!-- end list -->\n\n", "")
}

fn new_node<'a>(arena: &'a Arena<AstNode<'a>>, value: NodeValue) -> &'a AstNode<'a> {
    arena.alloc(AstNode::new(RefCell::new(Ast::new(value, (0, 0).into()))))
}

fn tag_name(handle: &Handle) -> Option<String> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(name.local.to_ascii_lowercase().to_string()),
        _ => None,
    }
}

fn is_block(handle: &Handle) -> bool {
    tag_name(handle).is_some_and(|tag| !INLINE.contains(&tag.as_str()))
}

fn is_blank_text(handle: &Handle) -> bool {
    match &handle.data {
        NodeData::Text { contents } => contents.borrow().trim().is_empty(),
        _ => false,
    }
}

fn is_callout(handle: &Handle) -> bool {
    attribute(handle, "class")
        .is_some_and(|class| class.split_ascii_whitespace().any(|c| c == CONTAINER_CLASS))
}

/// Append a run of sibling nodes as blocks, wrapping inline runs in paragraphs
fn append_blocks<'a>(arena: &'a Arena<AstNode<'a>>, parent: &'a AstNode<'a>, handles: &[Handle]) {
    let mut paragraph: Option<&'a AstNode<'a>> = None;

    for handle in handles {
        if is_block(handle) {
            if let Some(open) = paragraph.take() {
                finish_paragraph(open);
            }
            append_block(arena, parent, handle);
            continue;
        }

        let renders = matches!(handle.data, NodeData::Text { .. } | NodeData::Element { .. });
        if !renders || (paragraph.is_none() && is_blank_text(handle)) {
            continue;
        }

        let open = *paragraph.get_or_insert_with(|| {
            let node = new_node(arena, NodeValue::Paragraph);
            parent.append(node);
            node
        });
        append_inline(arena, open, handle);
    }

    if let Some(open) = paragraph {
        finish_paragraph(open);
    }
}

fn append_block<'a>(arena: &'a Arena<AstNode<'a>>, parent: &'a AstNode<'a>, handle: &Handle) {
    let Some(tag) = tag_name(handle) else {
        return;
    };

    match tag.as_str() {
        "p" => {
            let paragraph = new_node(arena, NodeValue::Paragraph);
            parent.append(paragraph);
            append_inlines(arena, paragraph, &child_handles(handle));
            finish_paragraph(paragraph);
        }
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            let level = tag.as_bytes()[1] - b'0';
            let heading = new_node(
                arena,
                NodeValue::Heading(NodeHeading {
                    level,
                    setext: false,
                }),
            );
            parent.append(heading);
            append_inlines(arena, heading, &child_handles(handle));
            trim_edges(heading);
        }
        "ul" | "ol" => append_list(arena, parent, handle, tag == "ol"),
        "blockquote" => {
            let quote = new_node(arena, NodeValue::BlockQuote);
            parent.append(quote);
            append_blocks(arena, quote, &child_handles(handle));
        }
        "pre" => append_code_block(arena, parent, handle),
        "hr" => parent.append(new_node(arena, NodeValue::ThematicBreak)),
        t if SKIPPED.contains(&t) => {}
        t if TRANSPARENT_BLOCKS.contains(&t) && !is_callout(handle) => {
            append_blocks(arena, parent, &child_handles(handle));
        }
        _ => {
            let mut literal = serialize_handle(handle, TraversalScope::IncludeNode);
            literal.push('\n');
            parent.append(new_node(
                arena,
                NodeValue::HtmlBlock(NodeHtmlBlock {
                    block_type: 0,
                    literal,
                }),
            ));
        }
    }
}

fn list_meta(list_type: ListType, start: usize) -> NodeList {
    NodeList {
        list_type,
        marker_offset: 0,
        padding: 0,
        start,
        delimiter: ListDelimType::Period,
        bullet_char: b'-',
        tight: true,
    }
}

fn append_list<'a>(
    arena: &'a Arena<AstNode<'a>>,
    parent: &'a AstNode<'a>,
    handle: &Handle,
    ordered: bool,
) {
    let (list_type, start) = if ordered {
        let start = attribute(handle, "start")
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(1);
        (ListType::Ordered, start)
    } else {
        (ListType::Bullet, 1)
    };

    let list = new_node(arena, NodeValue::List(list_meta(list_type, start)));
    parent.append(list);

    for child in child_handles(handle) {
        let renders = matches!(child.data, NodeData::Text { .. } | NodeData::Element { .. });
        if !renders || is_blank_text(&child) {
            continue;
        }

        let item = new_node(arena, NodeValue::Item(list_meta(list_type, start)));
        list.append(item);

        if tag_name(&child).as_deref() == Some("li") {
            append_blocks(arena, item, &child_handles(&child));
        } else {
            append_blocks(arena, item, &[child]);
        }
    }
}

fn append_code_block<'a>(arena: &'a Arena<AstNode<'a>>, parent: &'a AstNode<'a>, handle: &Handle) {
    let info = child_handles(handle)
        .iter()
        .find(|child| tag_name(child).as_deref() == Some("code"))
        .and_then(|code| attribute(code, "class"))
        .and_then(|class| {
            class
                .split_ascii_whitespace()
                .find_map(|c| c.strip_prefix("language-"))
                .map(str::to_string)
        })
        .unwrap_or_default();

    let mut literal = text_content(handle);
    if !literal.ends_with('\n') {
        literal.push('\n');
    }

    parent.append(new_node(
        arena,
        NodeValue::CodeBlock(NodeCodeBlock {
            fenced: true,
            fence_char: b'`',
            fence_length: 3,
            fence_offset: 0,
            info,
            literal,
        }),
    ));
}

fn append_inlines<'a>(arena: &'a Arena<AstNode<'a>>, parent: &'a AstNode<'a>, handles: &[Handle]) {
    for handle in handles {
        append_inline(arena, parent, handle);
    }
}

fn append_inline<'a>(arena: &'a Arena<AstNode<'a>>, parent: &'a AstNode<'a>, handle: &Handle) {
    if let NodeData::Text { contents } = &handle.data {
        let text = collapse_whitespace(&contents.borrow());
        if !text.is_empty() {
            parent.append(new_node(arena, NodeValue::Text(text)));
        }
        return;
    }

    let Some(tag) = tag_name(handle) else {
        return;
    };

    match tag.as_str() {
        "strong" | "b" => wrap_inline(arena, parent, handle, NodeValue::Strong),
        "em" | "i" => wrap_inline(arena, parent, handle, NodeValue::Emph),
        "s" | "del" | "strike" => wrap_inline(arena, parent, handle, NodeValue::Strikethrough),
        "code" | "kbd" | "samp" => {
            let literal = text_content(handle);
            if !literal.is_empty() {
                parent.append(new_node(
                    arena,
                    NodeValue::Code(NodeCode {
                        num_backticks: 1,
                        literal,
                    }),
                ));
            }
        }
        "a" => {
            let link = NodeLink {
                url: attribute(handle, "href").unwrap_or_default(),
                title: attribute(handle, "title").unwrap_or_default(),
            };
            wrap_inline(arena, parent, handle, NodeValue::Link(link));
        }
        "img" => {
            let image = new_node(
                arena,
                NodeValue::Image(NodeLink {
                    url: attribute(handle, "src").unwrap_or_default(),
                    title: attribute(handle, "title").unwrap_or_default(),
                }),
            );
            parent.append(image);
            if let Some(alt) = attribute(handle, "alt").filter(|alt| !alt.is_empty()) {
                image.append(new_node(arena, NodeValue::Text(alt)));
            }
        }
        "br" => parent.append(new_node(arena, NodeValue::LineBreak)),
        t if SKIPPED.contains(&t) => {}
        _ => append_inlines(arena, parent, &child_handles(handle)),
    }
}

/// Append an inline container, keeping edge spaces outside its delimiters
fn wrap_inline<'a>(
    arena: &'a Arena<AstNode<'a>>,
    parent: &'a AstNode<'a>,
    handle: &Handle,
    value: NodeValue,
) {
    let wrapper = new_node(arena, value);
    parent.append(wrapper);
    append_inlines(arena, wrapper, &child_handles(handle));

    // `** bold**` is not emphasis in CommonMark
    if let Some(first) = wrapper.first_child() {
        if edit_text(first, |text| {
            let trimmed = text.trim_start().to_string();
            let moved = trimmed.len() != text.len();
            *text = trimmed;
            moved
        }) {
            wrapper.insert_before(new_node(arena, NodeValue::Text(" ".to_string())));
        }
    }
    if let Some(last) = wrapper.last_child() {
        if edit_text(last, |text| {
            let trimmed = text.trim_end().to_string();
            let moved = trimmed.len() != text.len();
            *text = trimmed;
            moved
        }) {
            wrapper.insert_after(new_node(arena, NodeValue::Text(" ".to_string())));
        }
    }

    drop_empty_text(wrapper);
    let is_link = matches!(wrapper.data.borrow().value, NodeValue::Link(_));
    if wrapper.first_child().is_none() && !is_link {
        wrapper.detach();
    }
}

/// Run `edit` on a text node's content, returning its result; `false` for other nodes
fn edit_text<'a>(node: &'a AstNode<'a>, edit: impl FnOnce(&mut String) -> bool) -> bool {
    let mut ast = node.data.borrow_mut();
    match &mut ast.value {
        NodeValue::Text(text) => edit(text),
        _ => false,
    }
}

fn is_empty_text<'a>(node: &'a AstNode<'a>) -> bool {
    matches!(&node.data.borrow().value, NodeValue::Text(text) if text.is_empty())
}

fn drop_empty_text<'a>(node: &'a AstNode<'a>) {
    let empty: Vec<_> = node.children().filter(|child| is_empty_text(child)).collect();
    for child in empty {
        child.detach();
    }
}

/// Trim whitespace and line breaks at both ends of a block's inline content
fn trim_edges<'a>(node: &'a AstNode<'a>) {
    while let Some(first) = node.first_child() {
        if matches!(first.data.borrow().value, NodeValue::LineBreak) {
            first.detach();
            continue;
        }
        edit_text(first, |text| {
            *text = text.trim_start().to_string();
            true
        });
        if is_empty_text(first) {
            first.detach();
            continue;
        }
        break;
    }

    while let Some(last) = node.last_child() {
        if matches!(last.data.borrow().value, NodeValue::LineBreak) {
            last.detach();
            continue;
        }
        edit_text(last, |text| {
            *text = text.trim_end().to_string();
            true
        });
        if is_empty_text(last) {
            last.detach();
            continue;
        }
        break;
    }
}

fn finish_paragraph<'a>(paragraph: &'a AstNode<'a>) {
    trim_edges(paragraph);
    if paragraph.first_child().is_none() {
        paragraph.detach();
    }
}

/// Collapse runs of whitespace to one space; non-breaking spaces are kept
fn collapse_whitespace(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut in_space = false;

    for c in text.chars() {
        if c.is_whitespace() && c != '\u{a0}' {
            if !in_space {
                output.push(' ');
            }
            in_space = true;
        } else {
            output.push(c);
            in_space = false;
        }
    }

    output
}

//! Minimal queryable document used by the HTML extractor
//!
//! The extractor only needs a handful of operations on parsed HTML. They are
//! gathered in [`MarkupDocument`] so the extraction logic never touches the
//! parser's node types directly. [`RcDocument`] implements the trait on top of
//! `html5ever` + `markup5ever_rcdom`.

use html5ever::serialize::{SerializeOpts, TraversalScope};
use html5ever::tendril::TendrilSink;
use html5ever::{ns, parse_document, serialize, LocalName, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Operations the HTML extractor needs from a parsed document
pub trait MarkupDocument {
    type Node: Clone;

    /// Elements carrying `class`, in document order
    ///
    /// Matches nested inside another match are not returned.
    fn select_by_class(&self, class: &str) -> Vec<Self::Node>;

    /// First descendant of `scope` carrying `class`, in document order
    fn first_by_class(&self, scope: &Self::Node, class: &str) -> Option<Self::Node>;

    /// Lowercase local tag name, `None` for non-element nodes
    fn tag_name(&self, node: &Self::Node) -> Option<String>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn has_attribute(&self, node: &Self::Node, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    /// Serialized markup of the node's children
    fn inner_html(&self, node: &Self::Node) -> String;

    /// Swap `node` for a block-level element containing only `text`
    fn replace_with_block(&mut self, node: &Self::Node, text: &str);

    /// Serialize the document content
    fn to_html(&self) -> String;
}

/// HTML document backed by an `RcDom`
pub struct RcDocument {
    dom: RcDom,
}

impl RcDocument {
    /// Parse an HTML fragment or full document
    pub fn parse(html: &str) -> Self {
        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);
        Self { dom }
    }

    /// The node whose children make up the content: `<body>`, or the
    /// document node when there is none.
    pub(crate) fn root(&self) -> Handle {
        find_element(&self.dom.document, "body").unwrap_or_else(|| self.dom.document.clone())
    }

    pub(crate) fn root_children(&self) -> Vec<Handle> {
        child_handles(&self.root())
    }
}

impl MarkupDocument for RcDocument {
    type Node = Handle;

    fn select_by_class(&self, class: &str) -> Vec<Handle> {
        let mut found = Vec::new();
        collect_by_class(&self.root(), class, &mut found);
        found
    }

    fn first_by_class(&self, scope: &Handle, class: &str) -> Option<Handle> {
        for child in scope.children.borrow().iter() {
            if has_class(child, class) {
                return Some(child.clone());
            }
            if let Some(found) = self.first_by_class(child, class) {
                return Some(found);
            }
        }
        None
    }

    fn tag_name(&self, node: &Handle) -> Option<String> {
        match &node.data {
            NodeData::Element { name, .. } => Some(name.local.to_ascii_lowercase().to_string()),
            _ => None,
        }
    }

    fn attribute(&self, node: &Handle, name: &str) -> Option<String> {
        attribute(node, name)
    }

    fn inner_html(&self, node: &Handle) -> String {
        serialize_handle(node, TraversalScope::ChildrenOnly(None))
    }

    fn replace_with_block(&mut self, node: &Handle, text: &str) {
        let block = create_element("p");
        append_child(&block, create_text(text));
        replace_node(node, block);
    }

    fn to_html(&self) -> String {
        serialize_handle(&self.root(), TraversalScope::ChildrenOnly(None))
    }
}

pub(crate) fn child_handles(handle: &Handle) -> Vec<Handle> {
    handle.children.borrow().clone()
}

pub(crate) fn attribute(handle: &Handle, name: &str) -> Option<String> {
    match &handle.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| attr.name.local.as_ref() == name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

fn has_class(handle: &Handle, class: &str) -> bool {
    attribute(handle, "class")
        .map(|value| value.split_ascii_whitespace().any(|c| c == class))
        .unwrap_or(false)
}

fn collect_by_class(handle: &Handle, class: &str, found: &mut Vec<Handle>) {
    for child in handle.children.borrow().iter() {
        if has_class(child, class) {
            found.push(child.clone());
        } else {
            collect_by_class(child, class, found);
        }
    }
}

fn find_element(handle: &Handle, tag: &str) -> Option<Handle> {
    for child in handle.children.borrow().iter() {
        if let NodeData::Element { name, .. } = &child.data {
            if name.local.as_ref() == tag {
                return Some(child.clone());
            }
        }
        if let Some(found) = find_element(child, tag) {
            return Some(found);
        }
    }
    None
}

/// Concatenated text of a node and its descendants
pub(crate) fn text_content(handle: &Handle) -> String {
    let mut text = String::new();
    collect_text(handle, &mut text);
    text
}

fn collect_text(handle: &Handle, output: &mut String) {
    match &handle.data {
        NodeData::Text { contents } => output.push_str(&contents.borrow()),
        _ => {
            for child in handle.children.borrow().iter() {
                collect_text(child, output);
            }
        }
    }
}

/// Serialize a node with the given scope
pub(crate) fn serialize_handle(handle: &Handle, scope: TraversalScope) -> String {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: scope,
        ..Default::default()
    };

    let serializable = SerializableHandle::from(handle.clone());
    if let Err(e) = serialize(&mut output, &serializable, opts) {
        tracing::warn!(error = %e, "HTML serialization failed");
    }

    String::from_utf8_lossy(&output).into_owned()
}

/// Create an empty HTML element
pub(crate) fn create_element(tag: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: QualName::new(None, ns!(html), LocalName::from(tag)),
            attrs: RefCell::new(Vec::new()),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
pub(crate) fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

fn append_child(parent: &Handle, child: Handle) {
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(child);
}

/// Put `replacement` where `target` sits in its parent
fn replace_node(target: &Handle, replacement: Handle) {
    let Some(parent) = target.parent.take().and_then(|weak| weak.upgrade()) else {
        tracing::debug!("replace target has no parent, skipping");
        return;
    };

    let mut children = parent.children.borrow_mut();
    if let Some(slot) = children.iter_mut().find(|child| Rc::ptr_eq(child, target)) {
        replacement.parent.set(Some(Rc::downgrade(&parent)));
        *slot = replacement;
    }
}

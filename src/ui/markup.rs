//! Typed markup tree.
//!
//! Components build [`Markup`] values; the host [`Document`](super::host::Document)
//! mounts them, dispatches events, and serializes them to HTML.

use std::fmt::{self, Write as _};
use std::sync::Arc;

use uuid::Uuid;

use super::form::SubmitEvent;

/// Handler invoked by the host when a form element receives a submit event.
pub type SubmitHandler = Arc<dyn Fn(&mut SubmitEvent) + Send + Sync>;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Opaque handle to a rendered element.
///
/// Components attach it to an element; only the host resolves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef(Uuid);

impl NodeRef {
    /// Create a fresh, unattached reference.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeRef {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrValue {
    Text(String),
    Flag(bool),
}

/// A single element node.
#[derive(Clone)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, AttrValue)>,
    children: Vec<Markup>,
    node_ref: Option<NodeRef>,
    on_submit: Option<SubmitHandler>,
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("attrs", &self.attrs)
            .field("children", &self.children)
            .field("node_ref", &self.node_ref)
            .field("on_submit", &self.on_submit.is_some())
            .finish()
    }
}

impl Element {
    /// Create an empty element.
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
            node_ref: None,
            on_submit: None,
        }
    }

    /// Set a string attribute, replacing any previous value.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set a boolean attribute (rendered bare when true, omitted when false).
    #[must_use]
    pub fn flag(mut self, name: &'static str, on: bool) -> Self {
        self.upsert(name, AttrValue::Flag(on));
        self
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, child: impl Into<Markup>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Markup>) -> Self {
        self.children.extend(children);
        self
    }

    /// Attach a node reference.
    #[must_use]
    pub fn node_ref(mut self, node_ref: Option<NodeRef>) -> Self {
        self.node_ref = node_ref;
        self
    }

    /// Attach a submit handler.
    #[must_use]
    pub fn on_submit(mut self, handler: SubmitHandler) -> Self {
        self.on_submit = Some(handler);
        self
    }

    /// Set a string attribute in place.
    pub fn set_attr(&mut self, name: &'static str, value: impl Into<String>) {
        self.upsert(name, AttrValue::Text(value.into()));
    }

    /// Replace all children with a single text node.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![Markup::Text(text.into())];
    }

    fn upsert(&mut self, name: &'static str, value: AttrValue) {
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Tag name.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Value of a string attribute.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find_map(|(n, v)| match v {
            AttrValue::Text(s) if *n == name => Some(s.as_str()),
            _ => None,
        })
    }

    /// Whether a boolean attribute is set.
    #[must_use]
    pub fn has_flag(&self, name: &str) -> bool {
        self.attrs
            .iter()
            .any(|(n, v)| *n == name && *v == AttrValue::Flag(true))
    }

    /// Child nodes.
    #[must_use]
    pub fn child_nodes(&self) -> &[Markup] {
        &self.children
    }

    /// Attached node reference, if any.
    #[must_use]
    pub fn attached_ref(&self) -> Option<NodeRef> {
        self.node_ref
    }

    /// Attached submit handler, if any.
    #[must_use]
    pub fn submit_handler(&self) -> Option<&SubmitHandler> {
        self.on_submit.as_ref()
    }

    /// Concatenated text of all descendant text nodes.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

/// A node in the markup tree.
#[derive(Debug, Clone)]
pub enum Markup {
    /// Element node.
    Element(Element),
    /// Text node (escaped on output).
    Text(String),
    /// Sequence of sibling nodes with no enclosing element.
    Fragment(Vec<Markup>),
}

impl From<Element> for Markup {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

impl From<&str> for Markup {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Markup {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl Markup {
    /// First element (depth-first, document order) matching `pred`.
    pub fn find<P>(&self, pred: &P) -> Option<&Element>
    where
        P: Fn(&Element) -> bool,
    {
        match self {
            Self::Element(el) => {
                if pred(el) {
                    return Some(el);
                }
                el.children.iter().find_map(|c| c.find(pred))
            }
            Self::Fragment(items) => items.iter().find_map(|c| c.find(pred)),
            Self::Text(_) => None,
        }
    }

    /// Mutable variant of [`Markup::find`].
    pub fn find_mut<P>(&mut self, pred: &P) -> Option<&mut Element>
    where
        P: Fn(&Element) -> bool,
    {
        match self {
            Self::Element(el) => {
                if pred(el) {
                    return Some(el);
                }
                el.children.iter_mut().find_map(|c| c.find_mut(pred))
            }
            Self::Fragment(items) => items.iter_mut().find_map(|c| c.find_mut(pred)),
            Self::Text(_) => None,
        }
    }

    /// All elements in document order, including `self`.
    #[must_use]
    pub fn elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_elements(&mut out);
        out
    }

    fn collect_elements<'a>(&'a self, out: &mut Vec<&'a Element>) {
        match self {
            Self::Element(el) => {
                out.push(el);
                for child in &el.children {
                    child.collect_elements(out);
                }
            }
            Self::Fragment(items) => {
                for item in items {
                    item.collect_elements(out);
                }
            }
            Self::Text(_) => {}
        }
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
            Self::Fragment(items) => {
                for item in items {
                    item.collect_text(out);
                }
            }
        }
    }

    /// Serialize to an HTML string.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(&escape(text)),
            Self::Fragment(items) => items.iter().try_for_each(|item| fmt::Display::fmt(item, f)),
            Self::Element(el) => {
                write!(f, "<{}", el.tag)?;
                for (name, value) in &el.attrs {
                    match value {
                        AttrValue::Text(v) => write!(f, " {name}=\"{}\"", escape(v))?,
                        AttrValue::Flag(true) => write!(f, " {name}")?,
                        AttrValue::Flag(false) => {}
                    }
                }
                f.write_char('>')?;
                if VOID_ELEMENTS.contains(&el.tag) {
                    return Ok(());
                }
                for child in &el.children {
                    fmt::Display::fmt(child, f)?;
                }
                write!(f, "</{}>", el.tag)
            }
        }
    }
}

/// Escape text for use in HTML content and quoted attribute values.
#[must_use]
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

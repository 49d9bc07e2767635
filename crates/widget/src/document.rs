//! In-memory host page.
//!
//! A flat document: a head holding id-keyed style blocks and a body of
//! elements. Element handles are shared, so content the controller writes
//! through a handle shows up when the document is serialized.

use std::cell::RefCell;
use std::rc::Rc;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::host::{HostPage, MarkerElement};

#[derive(Debug, Default)]
struct Node {
    tag: String,
    attributes: Vec<(String, String)>,
    inner_html: String,
}

/// Shared handle to a document element.
#[derive(Debug, Clone)]
pub struct Element(Rc<RefCell<Node>>);

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element(Rc::new(RefCell::new(Node {
            tag: tag.into(),
            ..Node::default()
        })))
    }

    /// Builder form of [`set_attribute`](Self::set_attribute).
    pub fn with_attribute(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Set or replace an attribute, keeping first-insertion order.
    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        let (name, value) = (name.into(), value.into());
        let mut node = self.0.borrow_mut();
        match node.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => node.attributes.push((name, value)),
        }
    }

    pub fn inner_html(&self) -> String {
        self.0.borrow().inner_html.clone()
    }

    /// Whether two handles point at the same element.
    pub fn same_node(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn to_html(&self) -> String {
        let node = self.0.borrow();
        let mut out = format!("<{}", node.tag);
        for (name, value) in &node.attributes {
            out.push_str(&format!(" {}=\"{}\"", name, encode_double_quoted_attribute(value)));
        }
        out.push('>');
        out.push_str(&node.inner_html);
        out.push_str(&format!("</{}>", node.tag));
        out
    }
}

impl MarkerElement for Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0
            .borrow()
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    fn set_inner_html(&mut self, html: String) {
        self.0.borrow_mut().inner_html = html;
    }
}

/// A standalone HTML page.
#[derive(Debug, Default)]
pub struct Document {
    title: String,
    styles: Vec<(String, String)>,
    body: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Append an element to the body and return a handle to it.
    pub fn append(&mut self, element: Element) -> Element {
        self.body.push(element.clone());
        element
    }

    /// Number of style blocks carrying `id`.
    pub fn style_count(&self, id: &str) -> usize {
        self.styles.iter().filter(|(sid, _)| sid == id).count()
    }

    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        if !self.title.is_empty() {
            out.push_str(&format!("<title>{}</title>\n", encode_text(&self.title)));
        }
        for (id, css) in &self.styles {
            out.push_str(&format!(
                "<style id=\"{}\">{}</style>\n",
                encode_double_quoted_attribute(id),
                css
            ));
        }
        out.push_str("</head>\n<body>\n");
        for element in &self.body {
            out.push_str(&element.to_html());
            out.push('\n');
        }
        out.push_str("</body>\n</html>\n");
        out
    }
}

impl HostPage for Document {
    type Element = Element;

    fn elements(&self) -> Vec<Element> {
        self.body.clone()
    }

    fn has_style(&self, id: &str) -> bool {
        self.styles.iter().any(|(sid, _)| sid == id)
    }

    fn inject_style(&mut self, id: &str, css: &str) {
        self.styles.push((id.to_string(), css.to_string()));
    }
}

//! Navigable XML element tree.
//!
//! Package parts are small enough to be materialized as a tree, which keeps the
//! sheet decoders declarative (find a child, read an attribute) instead of
//! threading state through a streaming reader. The tree is built from
//! `quick-xml` events and is namespace-agnostic: element and attribute names
//! are stored by their local name, namespace declarations are dropped.

use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use thiserror::Error;

/// Errors raised while building an element tree.
#[derive(Error, Debug)]
pub enum XmlError {
    #[error("XML syntax error: {0}")]
    Syntax(String),

    #[error("Invalid UTF-8 in XML: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Invalid attribute: {0}")]
    Attribute(String),

    #[error("Unresolvable entity reference: {0}")]
    Entity(String),

    #[error("No root element found")]
    NoRoot,
}

/// A child node: either an element or a run of character data.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// An XML element with its attributes and children in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    /// Parse a whole document and return its root element.
    pub fn parse(bytes: &[u8]) -> Result<Self, XmlError> {
        let mut reader = Reader::from_reader(bytes);
        let mut buf = Vec::new();
        let mut stack: Vec<XmlElement> = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    stack.push(Self::from_start(e)?);
                },
                Ok(Event::Empty(ref e)) => {
                    let element = Self::from_start(e)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(XmlNode::Element(element)),
                        None => return Ok(element),
                    }
                },
                Ok(Event::End(_)) => {
                    if let Some(mut element) = stack.pop() {
                        element.drop_blank_text();
                        match stack.last_mut() {
                            Some(parent) => parent.children.push(XmlNode::Element(element)),
                            None => return Ok(element),
                        }
                    }
                },
                Ok(Event::Text(ref t)) => {
                    if let Some(current) = stack.last_mut() {
                        let raw = std::str::from_utf8(t)?;
                        let text = unescape(raw).map_err(|e| XmlError::Entity(e.to_string()))?;
                        current.push_text(&text);
                    }
                },
                Ok(Event::CData(ref c)) => {
                    if let Some(current) = stack.last_mut() {
                        current.push_text(std::str::from_utf8(c)?);
                    }
                },
                Ok(Event::GeneralRef(ref r)) => {
                    if let Some(current) = stack.last_mut() {
                        let entity = format!("&{};", std::str::from_utf8(r)?);
                        let text = unescape(&entity).map_err(|_| XmlError::Entity(entity.clone()))?;
                        current.push_text(&text);
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(XmlError::Syntax(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Err(XmlError::NoRoot)
    }

    fn from_start(e: &BytesStart<'_>) -> Result<Self, XmlError> {
        let name = std::str::from_utf8(e.local_name().as_ref())?.to_string();
        let mut attributes = Vec::new();

        for attr in e.attributes() {
            let attr = attr.map_err(|err| XmlError::Attribute(err.to_string()))?;
            let key = attr.key.as_ref();
            if key == b"xmlns" || key.starts_with(b"xmlns:") {
                continue;
            }
            let local = std::str::from_utf8(attr.key.local_name().as_ref())?.to_string();
            let value = attr
                .unescape_value()
                .map_err(|err| XmlError::Attribute(err.to_string()))?
                .into_owned();
            attributes.push((local, value));
        }

        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
        })
    }

    /// Append character data, merging with a preceding text run.
    fn push_text(&mut self, text: &str) {
        match self.children.last_mut() {
            Some(XmlNode::Text(last)) => last.push_str(text),
            _ => self.children.push(XmlNode::Text(text.to_string())),
        }
    }

    /// Whitespace-only runs between elements are formatting, not content.
    fn drop_blank_text(&mut self) {
        self.children
            .retain(|node| !matches!(node, XmlNode::Text(t) if t.trim().is_empty()));
    }

    /// Local name of the element.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value by local name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Child elements in document order.
    pub fn children(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    /// Child elements with the given local name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children().filter(move |child| child.name == name)
    }

    /// First child element with the given local name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children().find(|child| child.name == name)
    }

    /// All descendant character data, concatenated in document order.
    pub fn text(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                XmlNode::Text(t) => out.push_str(t),
                XmlNode::Element(element) => element.collect_text(out),
            }
        }
    }
}

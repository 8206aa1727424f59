//! A host that keeps nodes in memory.
//!
//! Useful wherever there is no browser: tests, and rendering wrappers to markup on the
//! server. Behaviour follows the DOM where this crate can observe it (live `value` and
//! `checked`, `className` reflecting `class`, appending moves a node, an element can't
//! be appended into itself).

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::fmt::Write;
use std::rc::{Rc, Weak};

use rustc_hash::FxHashMap;

use crate::host::{Document, NativeElement};
use crate::{AttributeValue, Error, Result};

/// Creates [`MemoryElement`]s.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    next_id: Rc<Cell<usize>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an element without going through a wrapper.
    pub fn element(&self, tag: &str) -> Result<MemoryElement> {
        validate_tag(tag)?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        Ok(MemoryElement::new(id, tag.to_ascii_lowercase()))
    }
}

impl Document for MemoryDocument {
    fn create_element(&self, tag: &str) -> Result<Box<dyn NativeElement>> {
        Ok(Box::new(self.element(tag)?))
    }
}

// Same constraint as the DOM's `createElement`, which throws `InvalidCharacterError`.
fn validate_tag(tag: &str) -> Result<()> {
    let mut chars = tag.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'));

    if valid {
        Ok(())
    } else {
        Err(Error::CreateElement {
            tag: tag.to_string(),
            reason: "the tag name is not a valid XML name".to_string(),
        })
    }
}

#[derive(Debug)]
struct MemoryNode {
    id: usize,
    tag: String,
    attributes: Vec<(String, String)>,
    properties: FxHashMap<String, AttributeValue>,
    style: Vec<(String, String)>,
    children: Vec<Child>,
    parent: Weak<RefCell<MemoryNode>>,
}

#[derive(Debug, Clone)]
enum Child {
    Element(MemoryElement),
    Html(String),
}

/// A shared handle to one in-memory node. Clones refer to the same node.
#[derive(Debug, Clone)]
pub struct MemoryElement {
    node: Rc<RefCell<MemoryNode>>,
}

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

impl Eq for MemoryElement {}

impl MemoryElement {
    fn new(id: usize, tag: String) -> Self {
        Self {
            node: Rc::new(RefCell::new(MemoryNode {
                id,
                tag,
                attributes: Vec::new(),
                properties: FxHashMap::default(),
                style: Vec::new(),
                children: Vec::new(),
                parent: Weak::new(),
            })),
        }
    }

    /// Recovers the in-memory handle behind a native element, if it is one.
    pub fn downcast(node: &dyn NativeElement) -> Option<&MemoryElement> {
        node.as_any().downcast_ref::<MemoryElement>()
    }

    /// The creation order of this node within its document.
    pub fn id(&self) -> usize {
        self.node.borrow().id
    }

    pub fn attributes(&self) -> Vec<(String, String)> {
        self.node.borrow().attributes.clone()
    }

    /// The element children, in order. Markup set through `set_inner_html` is not
    /// parsed, so it contributes no children here.
    pub fn children(&self) -> Vec<MemoryElement> {
        self.node
            .borrow()
            .children
            .iter()
            .filter_map(|child| match child {
                Child::Element(element) => Some(element.clone()),
                Child::Html(_) => None,
            })
            .collect()
    }

    pub fn parent(&self) -> Option<MemoryElement> {
        self.node
            .borrow()
            .parent
            .upgrade()
            .map(|node| MemoryElement { node })
    }

    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        self.write_children(&mut out);
        out
    }

    /// Serializes the element and its subtree.
    ///
    /// Attribute values are escaped; markup content is written back verbatim.
    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let node = self.node.borrow();
        let _ = write!(out, "<{}", node.tag);
        for (name, value) in &node.attributes {
            if value.is_empty() {
                let _ = write!(out, " {name}");
            } else {
                let _ = write!(
                    out,
                    " {name}=\"{}\"",
                    askama_escape::escape(value, askama_escape::Html)
                );
            }
        }
        if !node.style.is_empty() {
            let style = node
                .style
                .iter()
                .map(|(key, value)| format!("{key}: {value};"))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = write!(
                out,
                " style=\"{}\"",
                askama_escape::escape(&style, askama_escape::Html)
            );
        }
        out.push('>');

        if node.children.is_empty() && tag_is_self_closing(&node.tag) {
            return;
        }
        drop(node);

        self.write_children(out);
        let _ = write!(out, "</{}>", self.node.borrow().tag);
    }

    fn write_children(&self, out: &mut String) {
        for child in &self.node.borrow().children {
            match child {
                Child::Element(element) => element.write_html(out),
                Child::Html(markup) => out.push_str(markup),
            }
        }
    }

    fn contains(&self, other: &MemoryElement) -> bool {
        self == other || self.children().iter().any(|child| child.contains(other))
    }

    fn detach(&self) {
        let parent = self.node.borrow().parent.upgrade();
        if let Some(parent) = parent {
            parent.borrow_mut().children.retain(|child| match child {
                Child::Element(element) => element != self,
                Child::Html(_) => true,
            });
        }
        self.node.borrow_mut().parent = Weak::new();
    }

    // The DOM keeps `value` live only for form controls; elsewhere it reflects the attribute.
    fn has_live_value(&self) -> bool {
        matches!(
            self.node.borrow().tag.as_str(),
            "input" | "textarea" | "select"
        )
    }
}

impl NativeElement for MemoryElement {
    fn tag_name(&self) -> String {
        self.node.borrow().tag.clone()
    }

    fn get_attribute(&self, name: &str) -> Option<String> {
        self.node
            .borrow()
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
        if name.is_empty() || name.contains(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | '>' | '/' | '=')) {
            return Err(Error::Host(format!("`{name}` is not a valid attribute name")));
        }

        let mut node = self.node.borrow_mut();
        match node.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => node.attributes.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn remove_attribute(&self, name: &str) -> Result<()> {
        self.node
            .borrow_mut()
            .attributes
            .retain(|(key, _)| key != name);
        Ok(())
    }

    fn get_property(&self, name: &str) -> Option<AttributeValue> {
        match name {
            "className" => Some(AttributeValue::Text(
                self.get_attribute("class").unwrap_or_default(),
            )),
            "value" if !self.has_live_value() => self.get_attribute("value").map(AttributeValue::Text),
            _ => {
                if let Some(value) = self.node.borrow().properties.get(name) {
                    return Some(value.clone());
                }
                match name {
                    "value" => Some(AttributeValue::Text(
                        self.get_attribute("value").unwrap_or_default(),
                    )),
                    "checked" | "selected" => Some(AttributeValue::Bool(self.has_attribute(name))),
                    _ => None,
                }
            }
        }
    }

    fn set_property(&self, name: &str, value: &AttributeValue) -> Result<()> {
        match name {
            "className" => self.set_attribute("class", &value.to_string()),
            "value" if !self.has_live_value() => self.set_attribute("value", &value.to_string()),
            _ => {
                let value = match name {
                    "checked" | "selected" | "indeterminate" => AttributeValue::Bool(value.is_truthy()),
                    "value" => AttributeValue::Text(value.to_string()),
                    _ => value.clone(),
                };
                self.node
                    .borrow_mut()
                    .properties
                    .insert(name.to_string(), value);
                Ok(())
            }
        }
    }

    fn style_property(&self, key: &str) -> Option<String> {
        self.node
            .borrow()
            .style
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.clone())
    }

    fn set_style_property(&self, key: &str, value: &str) -> Result<()> {
        if value.is_empty() {
            return self.remove_style_property(key);
        }
        let mut node = self.node.borrow_mut();
        match node.style.iter_mut().find(|(name, _)| name == key) {
            Some((_, existing)) => *existing = value.to_string(),
            None => node.style.push((key.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn remove_style_property(&self, key: &str) -> Result<()> {
        self.node.borrow_mut().style.retain(|(name, _)| name != key);
        Ok(())
    }

    fn append(&self, child: &dyn NativeElement) -> Result<()> {
        let child = MemoryElement::downcast(child).ok_or(Error::ForeignNode)?;
        if child.contains(self) {
            return Err(Error::Host(
                "HierarchyRequestError: the new child is an ancestor of the parent".to_string(),
            ));
        }

        child.detach();
        child.node.borrow_mut().parent = Rc::downgrade(&self.node);
        self.node
            .borrow_mut()
            .children
            .push(Child::Element(child.clone()));
        Ok(())
    }

    fn set_inner_html(&self, html: &str) -> Result<()> {
        let previous = std::mem::take(&mut self.node.borrow_mut().children);
        for child in previous {
            if let Child::Element(element) = child {
                element.node.borrow_mut().parent = Weak::new();
            }
        }
        if !html.is_empty() {
            self.node
                .borrow_mut()
                .children
                .push(Child::Html(html.to_string()));
        }
        Ok(())
    }

    fn clone_handle(&self) -> Box<dyn NativeElement> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn tag_is_self_closing(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}

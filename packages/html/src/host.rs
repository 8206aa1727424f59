//! The capability surface this crate needs from whatever actually owns the nodes.
//!
//! Implementations live outside the element layer: [`crate::memory`] keeps nodes in
//! memory, `tagweave-web` drives the browser DOM through `web-sys`.

use std::any::Any;

use crate::{AttributeValue, Result};

/// Creates native elements.
pub trait Document {
    fn create_element(&self, tag: &str) -> Result<Box<dyn NativeElement>>;
}

/// A handle to one native element.
///
/// Handles behave like JavaScript object references: cloning one with
/// [`NativeElement::clone_handle`] yields a second reference to the same node, and every
/// mutation goes through `&self`.
pub trait NativeElement: Any {
    /// The tag the node was created with.
    fn tag_name(&self) -> String;

    fn get_attribute(&self, name: &str) -> Option<String>;

    fn has_attribute(&self, name: &str) -> bool {
        self.get_attribute(name).is_some()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<()>;

    fn remove_attribute(&self, name: &str) -> Result<()>;

    /// Reads a live property (`value`, `checked`, `className`, ...).
    fn get_property(&self, name: &str) -> Option<AttributeValue>;

    /// Writes a live property, coercing the value the way the host does.
    fn set_property(&self, name: &str, value: &AttributeValue) -> Result<()>;

    /// Reads one key of the inline style map.
    fn style_property(&self, key: &str) -> Option<String>;

    fn set_style_property(&self, key: &str, value: &str) -> Result<()>;

    fn remove_style_property(&self, key: &str) -> Result<()>;

    /// Appends `child` as the last child of this node.
    ///
    /// Fails with [`crate::Error::ForeignNode`] if `child` came from another host.
    fn append(&self, child: &dyn NativeElement) -> Result<()>;

    /// Replaces all content with the given markup, verbatim.
    fn set_inner_html(&self, html: &str) -> Result<()>;

    fn clone_handle(&self) -> Box<dyn NativeElement>;

    fn as_any(&self) -> &dyn Any;
}

impl std::fmt::Debug for dyn NativeElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeElement")
            .field("tag", &self.tag_name())
            .finish_non_exhaustive()
    }
}

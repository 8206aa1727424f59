//! # Declarative HTML element wrappers
//!
//! Every wrapper owns exactly one native element, created through a [`Document`].
//! Each element class pairs a fixed tag with a table of declared properties (the
//! [global attributes](GLOBAL_ATTRIBUTES) plus the tag's own), and the constructor
//! copies every matching entry of its [`Props`] onto the element.
//!
//! ```rust
//! use tagweave_html::prelude::*;
//! use tagweave_html::memory::{MemoryDocument, MemoryElement};
//!
//! let document = MemoryDocument::new();
//! let link = A::new(&document, "docs", Props::new().with("href", "/docs")).unwrap();
//! let nav = Div::new(&document, &link, Props::new().with("id", "nav")).unwrap();
//!
//! assert_eq!(link.href().as_deref(), Some("/docs"));
//! assert_eq!(nav.id().as_deref(), Some("nav"));
//! assert_eq!(
//!     MemoryElement::downcast(nav.node()).unwrap().outer_html(),
//!     r#"<div id="nav"><a href="/docs">docs</a></div>"#
//! );
//! ```

#![warn(missing_debug_implementations)]

#[macro_use]
mod property;

mod content;
mod element;
mod elements;
mod error;
mod global_attributes;
mod grid;
mod props;
mod styles;
mod value;

pub mod host;
pub mod memory;

pub use content::{Content, TextElementBase};
pub use element::{ElementBase, HtmlElement, TagElement};
pub use elements::*;
pub use error::{Error, Result};
pub use global_attributes::{GLOBAL_ATTRIBUTES, GlobalAttributes};
pub use grid::Grid;
pub use host::{Document, NativeElement};
pub use property::{PropertyDescriptor, PropertyKind, PropertyTable};
pub use props::Props;
pub use styles::StyleMap;
pub use value::AttributeValue;

pub mod prelude {
    pub use crate::elements::{
        A, Br, Button, Code, Div, H1, H2, H3, H4, H5, H6, Img, Input, Link, P, Pre, Script,
        Small, Strong, Style,
    };
    pub use crate::{
        AttributeValue, Content, Document, GlobalAttributes, Grid, HtmlElement, Props,
        TagElement,
    };
}

//! # tagweave on the browser DOM
//!
//! [`WebDocument`] implements [`tagweave_html::Document`] on top of `web-sys`, so the
//! typed wrappers from `tagweave-html` create and drive real DOM nodes.
//!
//! ```rust, ignore
//! use tagweave_html::prelude::*;
//! use tagweave_web::WebDocument;
//!
//! let document = WebDocument::new()?;
//! let title = H1::new(&document, "Hello", Props::new().with("id", "title"))?;
//! document.mount(&title)?;
//! ```
//!
//! Mounting appends to the element whose id is [`WebConfig`]'s root name (`"main"` by
//! default), or to `<body>` when the page has no such element.

#![warn(missing_debug_implementations)]

mod cfg;
mod dom;

pub use crate::cfg::WebConfig;
pub use crate::dom::{WebDocument, WebElement};

//! The browser implementation of the host traits.
//!
//! Every wrapper built from a [`WebDocument`] owns a real `web_sys::Element`, so
//! reading a property always asks the DOM.

use std::any::Any;

use js_sys::Reflect;
use tagweave_html::{AttributeValue, Document, Error, HtmlElement, NativeElement, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, Element, HtmlInputElement};

use crate::WebConfig;

/// Creates elements in the page's `document`.
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: web_sys::Document,
    cfg: WebConfig,
}

impl WebDocument {
    /// Binds to the current window's document with the default [`WebConfig`].
    pub fn new() -> Result<Self> {
        Self::with_config(WebConfig::default())
    }

    pub fn with_config(cfg: WebConfig) -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| Error::Host("no window with a document is available".to_string()))?;

        Ok(Self { document, cfg })
    }

    pub fn config(&self) -> &WebConfig {
        &self.cfg
    }

    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }

    /// The element mounted wrappers are appended to.
    ///
    /// This is the element whose id is the configured root name, or `<body>` if there
    /// is none.
    pub fn root(&self) -> Result<WebElement> {
        if let Some(root) = self.document.get_element_by_id(&self.cfg.rootname) {
            return Ok(WebElement::new(root));
        }

        tracing::warn!(
            rootname = %self.cfg.rootname,
            "no element with the root id, mounting into <body> instead"
        );
        self.document
            .body()
            .map(|body| WebElement::new(body.into()))
            .ok_or_else(|| Error::Host("the document has no <body>".to_string()))
    }

    /// Appends `element` to the [root](Self::root).
    pub fn mount(&self, element: &dyn HtmlElement) -> Result<()> {
        self.root()?.append(element.node())
    }
}

impl Document for WebDocument {
    fn create_element(&self, tag: &str) -> Result<Box<dyn NativeElement>> {
        let element = self
            .document
            .create_element(tag)
            .map_err(|err| Error::CreateElement {
                tag: tag.to_string(),
                reason: describe(&err),
            })?;

        tracing::trace!(tag, "created DOM element");
        Ok(Box::new(WebElement::new(element)))
    }
}

/// A handle to one DOM element. Clones refer to the same element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebElement {
    element: Element,
}

impl WebElement {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// Recovers the DOM handle behind a native element, if it is one.
    pub fn downcast(node: &dyn NativeElement) -> Option<&WebElement> {
        node.as_any().downcast_ref::<WebElement>()
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    fn input(&self) -> Option<&HtmlInputElement> {
        self.element.dyn_ref::<HtmlInputElement>()
    }

    fn inline_style(&self) -> Result<CssStyleDeclaration> {
        self.element
            .dyn_ref::<web_sys::HtmlElement>()
            .map(|element| element.style())
            .ok_or_else(|| {
                Error::Host(format!(
                    "<{}> has no inline style declaration",
                    self.element.local_name()
                ))
            })
    }
}

impl NativeElement for WebElement {
    fn tag_name(&self) -> String {
        self.element.local_name()
    }

    fn get_attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.element.has_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
        self.element
            .set_attribute(name, value)
            .map_err(|err| host_error(&err))
    }

    fn remove_attribute(&self, name: &str) -> Result<()> {
        self.element
            .remove_attribute(name)
            .map_err(|err| host_error(&err))
    }

    fn get_property(&self, name: &str) -> Option<AttributeValue> {
        if let Some(input) = self.input() {
            match name {
                "value" => return Some(AttributeValue::Text(input.value())),
                "checked" => return Some(AttributeValue::Bool(input.checked())),
                _ => {}
            }
        }

        let value = Reflect::get(&self.element, &JsValue::from_str(name)).ok()?;
        from_js(&value)
    }

    fn set_property(&self, name: &str, value: &AttributeValue) -> Result<()> {
        // `value` and `checked` don't stay in sync with their attributes, so they go
        // through the typed setters.
        if let Some(input) = self.input() {
            match name {
                "value" => {
                    input.set_value(&value.to_string());
                    return Ok(());
                }
                "checked" => {
                    input.set_checked(value.is_truthy());
                    return Ok(());
                }
                _ => {}
            }
        }

        let written = Reflect::set(&self.element, &JsValue::from_str(name), &to_js(value))
            .map_err(|err| host_error(&err))?;
        if written {
            Ok(())
        } else {
            Err(Error::Host(format!("`{name}` is read-only")))
        }
    }

    fn style_property(&self, key: &str) -> Option<String> {
        self.inline_style()
            .ok()?
            .get_property_value(key)
            .ok()
            .filter(|value| !value.is_empty())
    }

    fn set_style_property(&self, key: &str, value: &str) -> Result<()> {
        self.inline_style()?
            .set_property(key, value)
            .map_err(|err| host_error(&err))
    }

    fn remove_style_property(&self, key: &str) -> Result<()> {
        self.inline_style()?
            .remove_property(key)
            .map(drop)
            .map_err(|err| host_error(&err))
    }

    fn append(&self, child: &dyn NativeElement) -> Result<()> {
        let child = WebElement::downcast(child).ok_or(Error::ForeignNode)?;
        self.element
            .append_child(&child.element)
            .map(drop)
            .map_err(|err| host_error(&err))
    }

    fn set_inner_html(&self, html: &str) -> Result<()> {
        self.element.set_inner_html(html);
        Ok(())
    }

    fn clone_handle(&self) -> Box<dyn NativeElement> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn to_js(value: &AttributeValue) -> JsValue {
    match value {
        AttributeValue::Text(text) => JsValue::from_str(text),
        AttributeValue::Int(int) => JsValue::from_f64(*int as f64),
        AttributeValue::Float(float) => JsValue::from_f64(*float),
        AttributeValue::Bool(b) => JsValue::from_bool(*b),
        AttributeValue::None => JsValue::NULL,
    }
}

// Objects and functions have no `AttributeValue` form.
fn from_js(value: &JsValue) -> Option<AttributeValue> {
    if value.is_undefined() {
        return None;
    }
    if value.is_null() {
        return Some(AttributeValue::None);
    }
    if let Some(b) = value.as_bool() {
        return Some(AttributeValue::Bool(b));
    }
    if let Some(number) = value.as_f64() {
        let int = number as i64;
        return Some(if int as f64 == number {
            AttributeValue::Int(int)
        } else {
            AttributeValue::Float(number)
        });
    }
    value.as_string().map(AttributeValue::Text)
}

fn describe(err: &JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    match err.dyn_ref::<js_sys::Error>() {
        Some(error) => format!("{}: {}", String::from(error.name()), String::from(error.message())),
        None => format!("{err:?}"),
    }
}

fn host_error(err: &JsValue) -> Error {
    Error::Host(describe(err))
}

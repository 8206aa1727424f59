use crate::host::{Document, NativeElement};
use crate::property::PropertyTable;
use crate::styles::StyleMap;
use crate::{AttributeValue, Error, Props, Result};

/// Owns one native element and routes declared properties to it.
///
/// The native element is the only source of truth: the wrapper keeps no copy of any
/// property value.
#[derive(Debug)]
pub struct ElementBase {
    node: Box<dyn NativeElement>,
    tag: &'static str,
    properties: &'static PropertyTable,
}

impl ElementBase {
    /// Creates the native element, applies `props.style` in order, then assigns every
    /// declared property that has a same-named entry in `props`.
    ///
    /// Entries with no matching declaration are skipped without error.
    pub fn new(
        document: &dyn Document,
        tag: &'static str,
        properties: &'static PropertyTable,
        props: &Props,
    ) -> Result<Self> {
        let node = document.create_element(tag)?;
        tracing::trace!(tag, "created element");

        let base = Self {
            node,
            tag,
            properties,
        };

        base.style().extend(props.style_entries())?;

        for descriptor in properties.iter() {
            if let Some(value) = props.get(descriptor.name) {
                descriptor.set(base.node(), value)?;
            }
        }

        for key in props.keys().filter(|key| !properties.contains(key)) {
            tracing::trace!(tag, key, "ignoring undeclared option");
        }

        Ok(base)
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn node(&self) -> &dyn NativeElement {
        self.node.as_ref()
    }

    pub fn properties(&self) -> &'static PropertyTable {
        self.properties
    }

    pub fn style(&self) -> StyleMap<'_> {
        StyleMap::new(self.node())
    }

    /// Reads a declared property. Undeclared names read as `None`.
    pub fn get(&self, name: &str) -> Option<AttributeValue> {
        self.properties
            .get(name)
            .and_then(|descriptor| descriptor.get(self.node()))
    }

    /// Writes a declared property through its descriptor.
    pub fn set(&self, name: &str, value: impl Into<AttributeValue>) -> Result<()> {
        let descriptor = self
            .properties
            .get(name)
            .ok_or_else(|| Error::UnknownProperty {
                tag: self.tag,
                name: name.to_string(),
            })?;
        descriptor.set(self.node(), &value.into())
    }

    /// Appends another wrapper's element as the last child.
    pub fn append(&self, child: &dyn HtmlElement) -> Result<()> {
        self.node.append(child.node())
    }

    /// Replaces the content with `html`.
    ///
    /// The markup is not escaped or sanitized; only pass trusted strings.
    pub fn set_html(&self, html: &str) -> Result<()> {
        self.node.set_inner_html(html)
    }

    /// A second handle to the same native element.
    pub fn clone_node(&self) -> Box<dyn NativeElement> {
        self.node.clone_handle()
    }
}

impl AsRef<ElementBase> for ElementBase {
    fn as_ref(&self) -> &ElementBase {
        self
    }
}

/// Anything that wraps an [`ElementBase`].
pub trait HtmlElement {
    fn base(&self) -> &ElementBase;

    fn tag(&self) -> &'static str {
        self.base().tag()
    }

    fn node(&self) -> &dyn NativeElement {
        self.base().node()
    }

    fn style(&self) -> StyleMap<'_> {
        self.base().style()
    }

    fn set_property(&self, name: &str, value: AttributeValue) -> Result<()> {
        self.base().set(name, value)
    }

    fn append(&self, child: &dyn HtmlElement) -> Result<()> {
        self.base().append(child)
    }

    fn set_html(&self, html: &str) -> Result<()> {
        self.base().set_html(html)
    }
}

/// A concrete element class: a fixed tag plus its registered property table.
pub trait TagElement: HtmlElement {
    /// The tag handed to the host.
    const TAG: &'static str;

    /// The class name, as listed by [`crate::registry`].
    const NAME: &'static str;

    /// The class's declarations, built on first use and read-only afterwards.
    fn properties() -> &'static PropertyTable;
}

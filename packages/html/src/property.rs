//! Property declarations and the per-class tables built from them.

use rustc_hash::FxHashMap;

use crate::global_attributes::GLOBAL_ATTRIBUTES;
use crate::host::NativeElement;
use crate::{AttributeValue, Result};

/// How a declared property reaches the native element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// A plain string attribute (`setAttribute` / `getAttribute`).
    Attribute,
    /// A boolean attribute: present when truthy, removed otherwise.
    Flag,
    /// A live property of the host object that is not kept in sync with its attribute.
    Live,
    /// A live boolean property such as `checked`.
    LiveFlag,
}

/// A named pass-through accessor bound to one backing attribute or property.
///
/// `name` is what constructor options and accessors look up; `backing` is what the
/// host sees. They only differ for aliased names such as `async_` -> `async`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyDescriptor {
    pub name: &'static str,
    pub backing: &'static str,
    pub kind: PropertyKind,
}

impl PropertyDescriptor {
    pub const fn new(name: &'static str, backing: &'static str, kind: PropertyKind) -> Self {
        Self {
            name,
            backing,
            kind,
        }
    }

    pub const fn attribute(name: &'static str) -> Self {
        Self::new(name, name, PropertyKind::Attribute)
    }

    pub const fn flag(name: &'static str) -> Self {
        Self::new(name, name, PropertyKind::Flag)
    }

    pub const fn live(name: &'static str) -> Self {
        Self::new(name, name, PropertyKind::Live)
    }

    pub const fn live_flag(name: &'static str) -> Self {
        Self::new(name, name, PropertyKind::LiveFlag)
    }

    /// Binds the same backing attribute under a different name.
    pub const fn aliased(self, name: &'static str) -> Self {
        Self { name, ..self }
    }

    /// Reads the current value from the native element.
    ///
    /// Flag kinds always produce a `Bool`; the other kinds produce `None` when the
    /// host has nothing set.
    pub fn get(&self, node: &dyn NativeElement) -> Option<AttributeValue> {
        match self.kind {
            PropertyKind::Attribute => node.get_attribute(self.backing).map(AttributeValue::Text),
            PropertyKind::Flag => Some(AttributeValue::Bool(node.has_attribute(self.backing))),
            PropertyKind::Live => node
                .get_property(self.backing)
                .filter(|value| !value.is_none()),
            PropertyKind::LiveFlag => Some(AttributeValue::Bool(
                node.get_property(self.backing)
                    .is_some_and(|value| value.is_truthy()),
            )),
        }
    }

    /// Writes `value` to the native element. The value is not validated.
    pub fn set(&self, node: &dyn NativeElement, value: &AttributeValue) -> Result<()> {
        match self.kind {
            PropertyKind::Attribute if value.is_none() => node.remove_attribute(self.backing),
            PropertyKind::Attribute => node.set_attribute(self.backing, &value.to_string()),
            PropertyKind::Flag if value.is_truthy() => node.set_attribute(self.backing, ""),
            PropertyKind::Flag => node.remove_attribute(self.backing),
            PropertyKind::Live | PropertyKind::LiveFlag => node.set_property(self.backing, value),
        }
    }
}

/// The declared properties of one element class, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct PropertyTable {
    entries: Vec<PropertyDescriptor>,
    index: FxHashMap<&'static str, usize>,
}

impl PropertyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The global attributes followed by `specific`.
    ///
    /// A specific declaration that reuses a global name replaces it in place.
    pub fn register(specific: &[PropertyDescriptor]) -> Self {
        let mut table = Self::new();
        for descriptor in GLOBAL_ATTRIBUTES.iter().chain(specific) {
            table.declare(*descriptor);
        }
        table
    }

    /// Installs `descriptor`, overwriting any earlier declaration with the same name.
    pub fn declare(&mut self, descriptor: PropertyDescriptor) {
        match self.index.get(descriptor.name) {
            Some(&slot) => {
                if self.entries[slot] != descriptor {
                    tracing::debug!(
                        name = descriptor.name,
                        "redeclaring property with a different backing"
                    );
                }
                self.entries[slot] = descriptor;
            }
            None => {
                self.index.insert(descriptor.name, self.entries.len());
                self.entries.push(descriptor);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.index.get(name).map(|&slot| &self.entries[slot])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|descriptor| descriptor.name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A short description of the constructor arguments this table accepts.
    pub fn usage(&self) -> String {
        let names = self.names().collect::<Vec<_>>().join(", ");
        format!(
            "Class constructor.\n\n\
             Args:\n\
             \x20   * content: The content of the element (a string, a list of elements or a single element)\n\
             \x20   * style: The style of the element (a list of key/value pairs)\n\
             \x20   * All the properties of the class: {names}\n"
        )
    }
}

/// Maps an accessor kind token to its [`PropertyKind`].
macro_rules! property_kind {
    (attr) => {
        $crate::property::PropertyKind::Attribute
    };
    (flag) => {
        $crate::property::PropertyKind::Flag
    };
    (live) => {
        $crate::property::PropertyKind::Live
    };
    (live_flag) => {
        $crate::property::PropertyKind::LiveFlag
    };
}

/// Builds a [`PropertyDescriptor`] from an accessor declaration.
macro_rules! descriptor {
    ($kind:ident $name:literal) => {
        $crate::property::PropertyDescriptor::new($name, $name, property_kind!($kind))
    };
    ($kind:ident $name:literal => $backing:literal) => {
        $crate::property::PropertyDescriptor::new($name, $backing, property_kind!($kind))
    };
}

/// Generates the typed getter/setter pair for one declared property.
///
/// String kinds read back as `Option<String>`, flag kinds as `bool`. Setters accept
/// anything convertible into an [`AttributeValue`](crate::AttributeValue).
macro_rules! accessor {
    ($vis:vis attr $get:ident, $set:ident, $name:literal) => {
        accessor!(@text $vis $get, $set, $name);
    };
    ($vis:vis live $get:ident, $set:ident, $name:literal) => {
        accessor!(@text $vis $get, $set, $name);
    };
    ($vis:vis flag $get:ident, $set:ident, $name:literal) => {
        accessor!(@flag $vis $get, $set, $name);
    };
    ($vis:vis live_flag $get:ident, $set:ident, $name:literal) => {
        accessor!(@flag $vis $get, $set, $name);
    };

    (@text $vis:vis $get:ident, $set:ident, $name:literal) => {
        #[doc = concat!("Reads the `", $name, "` property.")]
        $vis fn $get(&self) -> Option<String> {
            $crate::element::HtmlElement::base(self)
                .get($name)
                .map(|value| value.to_string())
        }

        #[doc = concat!("Writes the `", $name, "` property.")]
        $vis fn $set(&self, value: impl Into<$crate::AttributeValue>) -> $crate::Result<()> {
            $crate::element::HtmlElement::base(self).set($name, value)
        }
    };
    (@flag $vis:vis $get:ident, $set:ident, $name:literal) => {
        #[doc = concat!("Reads the `", $name, "` property.")]
        $vis fn $get(&self) -> bool {
            $crate::element::HtmlElement::base(self)
                .get($name)
                .is_some_and(|value| value.is_truthy())
        }

        #[doc = concat!("Writes the `", $name, "` property.")]
        $vis fn $set(&self, value: impl Into<$crate::AttributeValue>) -> $crate::Result<()> {
            $crate::element::HtmlElement::base(self).set($name, value)
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::global_attributes::GLOBAL_ATTRIBUTES;

    #[test]
    fn register_starts_with_globals() {
        let table = PropertyTable::register(&[PropertyDescriptor::attribute("href")]);
        assert_eq!(table.len(), GLOBAL_ATTRIBUTES.len() + 1);
        assert!(table.names().take(GLOBAL_ATTRIBUTES.len()).eq(GLOBAL_ATTRIBUTES.iter().map(|d| d.name)));
        assert_eq!(table.names().last(), Some("href"));
    }

    #[test]
    fn specific_declarations_shadow_globals_in_place() {
        let table = PropertyTable::register(&[PropertyDescriptor::attribute("title")]);
        assert_eq!(table.len(), GLOBAL_ATTRIBUTES.len());
        assert_eq!(table.names().filter(|name| *name == "title").count(), 1);
    }

    #[test]
    fn redeclaring_overwrites() {
        let mut table = PropertyTable::new();
        table.declare(PropertyDescriptor::attribute("async"));
        table.declare(PropertyDescriptor::flag("async"));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("async").map(|d| d.kind), Some(PropertyKind::Flag));
    }

    #[test]
    fn aliases_keep_the_backing_name() {
        let descriptor = PropertyDescriptor::flag("async").aliased("async_");
        assert_eq!(descriptor.name, "async_");
        assert_eq!(descriptor.backing, "async");
        assert_eq!(descriptor.kind, PropertyKind::Flag);
    }

    #[test]
    fn usage_lists_every_property() {
        let table = PropertyTable::register(&[PropertyDescriptor::attribute("src")]);
        let usage = table.usage();
        assert!(usage.contains("content"));
        assert!(usage.contains("accesskey"));
        assert!(usage.ends_with("className, src\n"));
    }
}

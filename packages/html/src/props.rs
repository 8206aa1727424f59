use rustc_hash::FxHashMap;

use crate::AttributeValue;

/// Constructor options for every element wrapper.
///
/// `style` entries are applied in insertion order. Every other entry is matched against
/// the class's declared properties by binding name; entries that match nothing are
/// ignored, which lets composite elements accept extra options of their own.
///
/// ```rust
/// use tagweave_html::Props;
///
/// let props = Props::new()
///     .with("id", "main")
///     .with("hidden", true)
///     .style("color", "red");
/// assert_eq!(props.get("id").and_then(|v| v.as_text()), Some("main"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Props {
    #[cfg_attr(feature = "serialize", serde(default))]
    style: Vec<(String, String)>,
    #[cfg_attr(feature = "serialize", serde(default, flatten))]
    values: FxHashMap<String, AttributeValue>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property value, replacing any earlier value for `name`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds one inline style entry.
    pub fn style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.push((key.into(), value.into()));
        self
    }

    /// Adds several inline style entries, keeping their order.
    pub fn with_style<K, V>(mut self, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.style
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.values.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
        self.values.remove(name)
    }

    pub fn style_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.style.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.style.is_empty() && self.values.is_empty()
    }
}

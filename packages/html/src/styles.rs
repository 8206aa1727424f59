//! Live view over an element's inline style.

use crate::Result;
use crate::host::NativeElement;

/// Key-indexable access to the inline style of one element.
///
/// The view holds no state of its own; every read and write goes straight to the host,
/// so conflicting shorthand/longhand keys resolve however the host cascades them.
#[derive(Clone, Copy)]
pub struct StyleMap<'a> {
    node: &'a dyn NativeElement,
}

impl<'a> StyleMap<'a> {
    pub(crate) fn new(node: &'a dyn NativeElement) -> Self {
        Self { node }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.node.style_property(key)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.node.set_style_property(key, value)
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        self.node.remove_style_property(key)
    }

    /// Applies each pair in order.
    pub fn extend<K, V>(&self, entries: impl IntoIterator<Item = (K, V)>) -> Result<()>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in entries {
            self.set(key.as_ref(), value.as_ref())?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for StyleMap<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleMap")
            .field("tag", &self.node.tag_name())
            .finish()
    }
}

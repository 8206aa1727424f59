/// Configuration for the browser host.
///
/// Decides where [`WebDocument::mount`](crate::WebDocument::mount) puts elements.
///
/// # Example
///
/// ```rust, ignore
/// let mut cfg = WebConfig::new();
/// cfg.rootname("app");
/// let document = WebDocument::with_config(cfg)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    pub(crate) rootname: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            rootname: "main".to_string(),
        }
    }
}

impl WebConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the id of the element that mounted wrappers are appended to.
    ///
    /// When no element with this id exists, mounting falls back to `<body>`.
    pub fn rootname(&mut self, name: impl Into<String>) -> &mut Self {
        self.rootname = name.into();
        self
    }

    /// The id mounted wrappers are appended to.
    pub fn root_id(&self) -> &str {
        &self.rootname
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_main() {
        assert_eq!(WebConfig::default().root_id(), "main");
    }

    #[test]
    fn rootname_is_chainable() {
        let mut cfg = WebConfig::new();
        cfg.rootname("app").rootname("shell");
        assert_eq!(cfg.root_id(), "shell");
    }
}

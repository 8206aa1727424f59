/// A result whose error defaults to the crate [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while building or mutating an element.
///
/// Host failures are passed through as-is; nothing is retried.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The host refused to create a node for this tag name.
    #[error("failed to create <{tag}> element: {reason}")]
    CreateElement { tag: String, reason: String },

    /// Any other operation rejected by the host (bad attribute name, detached node, ...).
    #[error("host error: {0}")]
    Host(String),

    /// A property name that the wrapper's class never declared.
    #[error("<{tag}> has no declared property `{name}`")]
    UnknownProperty { tag: &'static str, name: String },

    /// A child handle created by a different host implementation.
    #[error("cannot append a node that belongs to another host")]
    ForeignNode,
}
